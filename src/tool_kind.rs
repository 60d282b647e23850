//! Tool kind enum identifying the XComponent applications.

use crate::Platform;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The type of XComponent tool.
///
/// This enum identifies the five XComponent executables a build script may
/// need to locate. Each variant maps to a filename template whose
/// platform-dependent suffix is filled in by [`program_name`].
///
/// The set of tools is fixed by the product, so the enum is exhaustive and
/// safe to match on without a wildcard arm.
///
/// # Example
///
/// ```rust
/// use xc_tool_discovery::{Platform, ToolKind};
///
/// // Iterate over all known tools
/// for kind in ToolKind::all() {
///     println!("{}: {}", kind.display_name(), kind.program_name(Platform::X64));
/// }
/// ```
///
/// [`program_name`]: ToolKind::program_name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum ToolKind {
    /// XComponent Studio, the IDE (XCStudio.exe)
    Studio,
    /// The command-line build tool (xcbuild.exe)
    Build,
    /// The microservice runtime host (xcruntime.exe)
    Runtime,
    /// The websocket bridge (XCWebSocketBridge.exe)
    Bridge,
    /// The runtime spy/debugger utility (xcspy.exe)
    Spy,
}

impl ToolKind {
    /// Human-readable display name for the tool.
    ///
    /// This is the label used in log messages and error output.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xc_tool_discovery::ToolKind;
    ///
    /// assert_eq!(ToolKind::Studio.display_name(), "XcStudio");
    /// assert_eq!(ToolKind::Bridge.display_name(), "XcBridge");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Studio => "XcStudio",
            Self::Build => "XcBuild",
            Self::Runtime => "XcRuntime",
            Self::Bridge => "XcBridge",
            Self::Spy => "XcSpy",
        }
    }

    /// The executable filename to search for, with the platform suffix
    /// applied.
    ///
    /// 64-bit executables carry no suffix; 32-bit executables insert `32`
    /// before the extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xc_tool_discovery::{Platform, ToolKind};
    ///
    /// assert_eq!(ToolKind::Studio.program_name(Platform::X64), "XCStudio.exe");
    /// assert_eq!(ToolKind::Studio.program_name(Platform::X86), "XCStudio32.exe");
    /// ```
    pub fn program_name(&self, platform: Platform) -> String {
        let stem = match self {
            Self::Studio => "XCStudio",
            Self::Build => "xcbuild",
            Self::Runtime => "xcruntime",
            Self::Bridge => "XCWebSocketBridge",
            Self::Spy => "xcspy",
        };
        format!("{}{}.exe", stem, platform.suffix())
    }

    /// Iterator over all known tool kinds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xc_tool_discovery::ToolKind;
    ///
    /// let tools: Vec<_> = ToolKind::all().collect();
    /// assert_eq!(tools.len(), 5);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(ToolKind::Studio.display_name(), "XcStudio");
        assert_eq!(ToolKind::Build.display_name(), "XcBuild");
        assert_eq!(ToolKind::Runtime.display_name(), "XcRuntime");
        assert_eq!(ToolKind::Bridge.display_name(), "XcBridge");
        assert_eq!(ToolKind::Spy.display_name(), "XcSpy");
    }

    #[test]
    fn test_program_names_x64() {
        assert_eq!(ToolKind::Studio.program_name(Platform::X64), "XCStudio.exe");
        assert_eq!(ToolKind::Build.program_name(Platform::X64), "xcbuild.exe");
        assert_eq!(
            ToolKind::Runtime.program_name(Platform::X64),
            "xcruntime.exe"
        );
        assert_eq!(
            ToolKind::Bridge.program_name(Platform::X64),
            "XCWebSocketBridge.exe"
        );
        assert_eq!(ToolKind::Spy.program_name(Platform::X64), "xcspy.exe");
    }

    #[test]
    fn test_program_names_x86() {
        assert_eq!(
            ToolKind::Studio.program_name(Platform::X86),
            "XCStudio32.exe"
        );
        assert_eq!(ToolKind::Build.program_name(Platform::X86), "xcbuild32.exe");
        assert_eq!(
            ToolKind::Runtime.program_name(Platform::X86),
            "xcruntime32.exe"
        );
        assert_eq!(
            ToolKind::Bridge.program_name(Platform::X86),
            "XCWebSocketBridge32.exe"
        );
        assert_eq!(ToolKind::Spy.program_name(Platform::X86), "xcspy32.exe");
    }

    #[test]
    fn test_all_iterator() {
        let all: Vec<_> = ToolKind::all().collect();
        assert_eq!(all.len(), 5);
        assert!(all.contains(&ToolKind::Studio));
        assert!(all.contains(&ToolKind::Build));
        assert!(all.contains(&ToolKind::Runtime));
        assert!(all.contains(&ToolKind::Bridge));
        assert!(all.contains(&ToolKind::Spy));
    }

    #[test]
    fn test_derives() {
        let kind = ToolKind::Studio;
        let copied = kind;
        assert_eq!(kind, copied);

        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ToolKind::Studio);
        set.insert(ToolKind::Build);
        assert_eq!(set.len(), 2);

        let json = serde_json::to_string(&ToolKind::Bridge).unwrap();
        let deserialized: ToolKind = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ToolKind::Bridge);
    }
}
