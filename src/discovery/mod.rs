//! Discovery implementation submodule.
//!
//! This module contains the internal implementation details for locating
//! XComponent executables on disk. It provides:
//!
//! - `find_program`: recursive filename search under the tools directory
//! - `read_product_version`: best-effort version-resource read
//! - `parse_version`: regex-based semver extraction from a version string

mod metadata;
mod parser;
mod search;

pub(crate) use metadata::read_product_version;
pub(crate) use parser::parse_version;
pub(crate) use search::find_program;
