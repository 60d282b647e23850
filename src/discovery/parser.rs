//! Version string parsing with regex extraction.

use regex::Regex;
use semver::Version;

/// Extract a semantic version from a raw product-version string.
///
/// Windows version resources usually carry four components
/// (`major.minor.patch.build`) and sometimes trailing labels; this picks out
/// the leading `major.minor.patch` and parses it as semver:
///
/// - `9.21.1.3` -> 9.21.1
/// - `4.5.0-beta` -> 4.5.0
/// - `nightly` -> no version
///
/// Returns `None` when no `major.minor.patch` pattern is present. Absence of
/// a parseable version is an ordinary outcome here, not an error — the raw
/// string is still what gets logged.
pub(crate) fn parse_version(raw: &str) -> Option<Version> {
    // Match the leading major.minor.patch, ignoring any fourth component
    // or trailing label
    let re = Regex::new(r"(\d+)\.(\d+)\.(\d+)").expect("Invalid regex pattern");

    let caps = re.captures(raw)?;
    let version_str = caps.get(0).expect("Capture group 0 should exist").as_str();
    Version::parse(version_str).ok()
}
