//! Tool version type representing a best-effort metadata read.

use semver::Version;
use std::fmt;

/// The product version discovered for a located tool.
///
/// Version discovery is strictly best effort: executables without version
/// metadata, unreadable files, and malformed resources all collapse to
/// [`Unknown`] rather than failing the lookup. `Unknown` is a first-class
/// outcome, not a swallowed error — callers can branch on it, and its
/// `Display` form is the literal placeholder `"Unknown"` used in the
/// diagnostic logs.
///
/// # Example
///
/// ```rust
/// use xc_tool_discovery::ToolVersion;
///
/// let version = ToolVersion::Detected("9.21.1.3".to_string());
/// assert!(version.is_detected());
/// assert_eq!(version.to_string(), "9.21.1.3");
///
/// assert_eq!(ToolVersion::Unknown.to_string(), "Unknown");
/// ```
///
/// [`Unknown`]: ToolVersion::Unknown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolVersion {
    /// The raw product-version string read from the executable's metadata.
    Detected(String),
    /// Version metadata was missing or unreadable.
    Unknown,
}

impl ToolVersion {
    /// Check whether a version string was actually read from the file.
    pub fn is_detected(&self) -> bool {
        matches!(self, Self::Detected(_))
    }

    /// The raw product-version string, if one was detected.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Detected(raw) => Some(raw),
            Self::Unknown => None,
        }
    }

    /// Extract a semantic version from the raw product-version string.
    ///
    /// Windows product versions are typically four-component
    /// (`major.minor.patch.build`); this extracts the leading
    /// `major.minor.patch` and parses it as semver. Returns `None` for
    /// [`Unknown`](Self::Unknown) or when no version pattern is present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use semver::Version;
    /// use xc_tool_discovery::ToolVersion;
    ///
    /// let version = ToolVersion::Detected("9.21.1.3".to_string());
    /// assert_eq!(version.semver(), Some(Version::new(9, 21, 1)));
    /// ```
    pub fn semver(&self) -> Option<Version> {
        self.as_str().and_then(crate::discovery::parse_version)
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detected(raw) => f.write_str(raw),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}
