//! Recursive executable search under the tools directory.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find an executable by exact filename anywhere under `tools_dir`.
///
/// The walk is depth-first in directory-listing order and stops at the first
/// regular file whose name equals `program`. When several copies of the same
/// executable exist under the tree, the choice between them is unordered —
/// any one of them is a valid result. Unreadable subdirectories are skipped
/// rather than failing the search, so a missing `tools_dir` simply yields
/// `None`.
pub(crate) fn find_program(tools_dir: &Path, program: &str) -> Option<PathBuf> {
    WalkDir::new(tools_dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .find(|entry| entry.file_type().is_file() && entry.file_name().to_str() == Some(program))
        .map(|entry| entry.into_path())
}
