//! Error types for tool resolution.

use thiserror::Error;

/// Errors that can occur while locating a tool.
///
/// A missing user override is NOT an error: the locator logs it at fatal
/// severity and returns an absent path, leaving the build script to decide.
/// An error here means auto-detection itself failed — the tool genuinely
/// isn't under the search root and there is no fallback.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error types
/// in future versions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LocateError {
    /// No file matching the expected executable name exists anywhere under
    /// the tools directory.
    #[error("can't find {program}, please make sure {program} exists in the tools directory")]
    ToolNotFound {
        /// The exact filename that was searched for.
        program: String,
    },
}
