//! Tool resolution against user overrides and the tools directory.

use crate::discovery::{find_program, read_product_version};
use crate::{LocateError, Platform, Severity, ToolKind, ToolLog, ToolVersion, TracingLog, Verbosity};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Subdirectory of the working directory searched during auto-detection.
const TOOLS_DIRECTORY: &str = "tools";

/// Locates XComponent executables on the local filesystem.
///
/// A `Locator` holds the configuration a resolution depends on — the working
/// directory and the per-tool user overrides — as explicit instance state,
/// and reports every outcome through its [`ToolLog`]. Resolution follows a
/// fixed order:
///
/// 1. If an override is configured for the tool, use it. A missing override
///    file is logged at fatal severity and yields `Ok(None)`; the build
///    script decides whether that breaks the build.
/// 2. Otherwise search `<working_dir>/tools` recursively for the platform's
///    executable name. No match is a hard [`LocateError::ToolNotFound`].
///
/// Either way the discovered product version is read best-effort from the
/// executable's metadata and logged; an unreadable version never fails a
/// lookup.
///
/// Resolution never mutates the locator, so repeated calls against an
/// unchanged filesystem return the same path. The locator is meant for the
/// host runtime's single-threaded, sequential build-script execution; it
/// performs blocking I/O and keeps no caches, so a retry repeats the full
/// search.
///
/// # Example
///
/// ```rust,no_run
/// use xc_tool_discovery::{Locator, Platform, ToolKind};
///
/// let mut locator = Locator::default();
/// locator.set_override(ToolKind::Build, "C:/XComponent/bin/xcbuild.exe");
///
/// match locator.locate(ToolKind::Build, Platform::X64) {
///     Ok(Some(path)) => println!("xcbuild at {}", path.display()),
///     Ok(None) => eprintln!("configured xcbuild path is unusable"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
pub struct Locator {
    working_dir: PathBuf,
    overrides: HashMap<ToolKind, PathBuf>,
    log: Box<dyn ToolLog>,
}

impl Locator {
    /// Create a locator reporting to the given log.
    ///
    /// The working directory defaults to the process's current directory at
    /// construction time; use [`with_working_dir`](Self::with_working_dir)
    /// or [`set_working_dir`](Self::set_working_dir) to override it.
    pub fn new(log: impl ToolLog + 'static) -> Self {
        Self {
            working_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            overrides: HashMap::new(),
            log: Box::new(log),
        }
    }

    /// Replace the working directory, builder style.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xc_tool_discovery::{Locator, TracingLog};
    ///
    /// let locator = Locator::new(TracingLog).with_working_dir("/opt/build");
    /// assert_eq!(locator.working_dir(), std::path::Path::new("/opt/build"));
    /// ```
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    /// Replace the working directory.
    pub fn set_working_dir(&mut self, dir: impl Into<PathBuf>) {
        self.working_dir = dir.into();
    }

    /// The directory whose `tools` subdirectory is searched.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Configure a user-provided path for a tool.
    ///
    /// The path is normalized to absolute form and stored; no existence
    /// check happens until the tool is resolved. Setting an override again
    /// replaces the previous one (last write wins), and a set override
    /// short-circuits every future search for that tool until
    /// [`clear_override`](Self::clear_override) removes it.
    pub fn set_override(&mut self, kind: ToolKind, path: impl AsRef<Path>) {
        self.overrides.insert(kind, absolutize(path.as_ref()));
    }

    /// Remove a tool's override, restoring auto-detection.
    pub fn clear_override(&mut self, kind: ToolKind) {
        self.overrides.remove(&kind);
    }

    /// The currently configured override for a tool, if any.
    pub fn override_path(&self, kind: ToolKind) -> Option<&Path> {
        self.overrides.get(&kind).map(PathBuf::as_path)
    }

    /// Resolve the absolute path of a tool's executable.
    ///
    /// Returns `Ok(Some(path))` on success, `Ok(None)` when a configured
    /// override is not an existing regular file (logged at fatal severity),
    /// and
    /// [`LocateError::ToolNotFound`] when auto-detection finds nothing under
    /// `<working_dir>/tools`. Exactly one information entry is logged per
    /// successful resolution, naming the tool, its version and the path.
    pub fn locate(
        &self,
        kind: ToolKind,
        platform: Platform,
    ) -> Result<Option<PathBuf>, LocateError> {
        if let Some(user_path) = self.overrides.get(&kind) {
            // Must be an existing regular file; a directory is as unusable
            // as a missing path.
            if !user_path.is_file() {
                self.log.write(
                    Verbosity::Normal,
                    Severity::Fatal,
                    &format!(
                        "{} provided by user can't be found at {}",
                        kind.display_name(),
                        user_path.display()
                    ),
                );
                return Ok(None);
            }

            let version = self.read_version(user_path);
            self.log.write(
                Verbosity::Normal,
                Severity::Information,
                &format!(
                    "{name} path provided by user: using {name} version '{version}' from {path}",
                    name = kind.display_name(),
                    path = user_path.display()
                ),
            );
            return Ok(Some(user_path.clone()));
        }

        let program = kind.program_name(platform);
        let tools_dir = self.working_dir.join(TOOLS_DIRECTORY);
        let path =
            find_program(&tools_dir, &program).ok_or(LocateError::ToolNotFound { program })?;

        let version = self.read_version(&path);
        self.log.write(
            Verbosity::Normal,
            Severity::Information,
            &format!(
                "{name} auto-detection: using {name} version '{version}' from {path}",
                name = kind.display_name(),
                path = path.display()
            ),
        );
        Ok(Some(path))
    }

    /// Resolve the directory containing a tool's executable.
    ///
    /// This is a pure path operation over [`locate`](Self::locate)'s result:
    /// an absent path stays absent, errors pass through, and a path with no
    /// parent yields `Ok(None)`. No extra filesystem access happens.
    pub fn locate_dir(
        &self,
        kind: ToolKind,
        platform: Platform,
    ) -> Result<Option<PathBuf>, LocateError> {
        Ok(self
            .locate(kind, platform)?
            .and_then(|path| path.parent().map(Path::to_path_buf)))
    }

    /// Resolve the XcStudio executable path.
    ///
    /// Equivalent to [`locate(ToolKind::Studio, platform)`](Self::locate);
    /// the per-tool methods mirror the operation names the build scripts use.
    pub fn studio_path(&self, platform: Platform) -> Result<Option<PathBuf>, LocateError> {
        self.locate(ToolKind::Studio, platform)
    }

    /// Configure the XcStudio path used by all later resolutions.
    pub fn set_studio_path(&mut self, path: impl AsRef<Path>) {
        self.set_override(ToolKind::Studio, path);
    }

    /// Resolve the directory containing XcStudio.
    pub fn studio_dir(&self, platform: Platform) -> Result<Option<PathBuf>, LocateError> {
        self.locate_dir(ToolKind::Studio, platform)
    }

    /// Resolve the XcBuild executable path.
    pub fn build_path(&self, platform: Platform) -> Result<Option<PathBuf>, LocateError> {
        self.locate(ToolKind::Build, platform)
    }

    /// Configure the XcBuild path used by all later resolutions.
    pub fn set_build_path(&mut self, path: impl AsRef<Path>) {
        self.set_override(ToolKind::Build, path);
    }

    /// Resolve the directory containing XcBuild.
    pub fn build_dir(&self, platform: Platform) -> Result<Option<PathBuf>, LocateError> {
        self.locate_dir(ToolKind::Build, platform)
    }

    /// Resolve the XcRuntime executable path.
    pub fn runtime_path(&self, platform: Platform) -> Result<Option<PathBuf>, LocateError> {
        self.locate(ToolKind::Runtime, platform)
    }

    /// Configure the XcRuntime path used by all later resolutions.
    pub fn set_runtime_path(&mut self, path: impl AsRef<Path>) {
        self.set_override(ToolKind::Runtime, path);
    }

    /// Resolve the directory containing XcRuntime.
    pub fn runtime_dir(&self, platform: Platform) -> Result<Option<PathBuf>, LocateError> {
        self.locate_dir(ToolKind::Runtime, platform)
    }

    /// Resolve the XcBridge executable path.
    pub fn bridge_path(&self, platform: Platform) -> Result<Option<PathBuf>, LocateError> {
        self.locate(ToolKind::Bridge, platform)
    }

    /// Configure the XcBridge path used by all later resolutions.
    pub fn set_bridge_path(&mut self, path: impl AsRef<Path>) {
        self.set_override(ToolKind::Bridge, path);
    }

    /// Resolve the directory containing XcBridge.
    pub fn bridge_dir(&self, platform: Platform) -> Result<Option<PathBuf>, LocateError> {
        self.locate_dir(ToolKind::Bridge, platform)
    }

    /// Resolve the XcSpy executable path.
    pub fn spy_path(&self, platform: Platform) -> Result<Option<PathBuf>, LocateError> {
        self.locate(ToolKind::Spy, platform)
    }

    /// Configure the XcSpy path used by all later resolutions.
    pub fn set_spy_path(&mut self, path: impl AsRef<Path>) {
        self.set_override(ToolKind::Spy, path);
    }

    /// Resolve the directory containing XcSpy.
    pub fn spy_dir(&self, platform: Platform) -> Result<Option<PathBuf>, LocateError> {
        self.locate_dir(ToolKind::Spy, platform)
    }

    /// Best-effort version read; metadata failures become `Unknown` plus a
    /// warning log, never an error.
    fn read_version(&self, path: &Path) -> ToolVersion {
        match read_product_version(path) {
            Ok(raw) => ToolVersion::Detected(raw),
            Err(_) => {
                self.log.write(
                    Verbosity::Normal,
                    Severity::Warning,
                    &format!("Unable to retrieve version from file : {}", path.display()),
                );
                ToolVersion::Unknown
            }
        }
    }
}

impl Default for Locator {
    /// A locator logging through [`TracingLog`] with the process's current
    /// directory as working directory.
    fn default() -> Self {
        Self::new(TracingLog)
    }
}

impl std::fmt::Debug for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Locator")
            .field("working_dir", &self.working_dir)
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}

/// Normalize a path to absolute form without touching the filesystem.
///
/// Relative paths are joined onto the process's current directory; `.` and
/// `..` components are resolved lexically, matching the host runtime's
/// full-path normalization.
fn absolutize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
