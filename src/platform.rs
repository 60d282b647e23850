//! Target platform enum and filename suffix mapping.

use serde::{Deserialize, Serialize};

/// The target platform of the executable to locate.
///
/// XComponent ships 64-bit and 32-bit builds of each tool side by side; the
/// 32-bit variant inserts a `32` suffix before the `.exe` extension. The
/// suffix substitution is total over these two variants — there is no
/// fallback arm, so adding a platform forces every call site to handle it.
///
/// # Example
///
/// ```rust
/// use xc_tool_discovery::Platform;
///
/// assert_eq!(Platform::X64.suffix(), "");
/// assert_eq!(Platform::X86.suffix(), "32");
/// assert_eq!(Platform::default(), Platform::X64);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// 64-bit executable, no filename suffix.
    #[default]
    X64,
    /// 32-bit executable, `32` filename suffix.
    X86,
}

impl Platform {
    /// The suffix substituted into a tool's filename template.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::X64 => "",
            Self::X86 => "32",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes() {
        assert_eq!(Platform::X64.suffix(), "");
        assert_eq!(Platform::X86.suffix(), "32");
    }

    #[test]
    fn test_default_is_x64() {
        assert_eq!(Platform::default(), Platform::X64);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Platform::X86).unwrap();
        let back: Platform = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Platform::X86);
    }
}
