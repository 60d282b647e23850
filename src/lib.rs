//! # xc-tool-discovery
//!
//! Tool discovery for XComponent applications (XCStudio, XcBuild, XcRuntime,
//! XCWebSocketBridge, XcSpy).
//!
//! This crate locates the XComponent executables a build script needs,
//! honoring user-supplied override paths and otherwise searching the
//! conventional `tools` directory tree. Every resolution reports the
//! discovered product version through a pluggable logging seam for build
//! diagnostics.
//!
//! ## Features
//!
//! - [`ToolKind`] enum identifying the five XComponent tools
//! - [`Platform`] selecting the 64-bit or 32-bit executable variant
//! - [`Locator`] resolving executable paths from overrides or the tools tree
//! - [`ToolVersion`] first-class best-effort version metadata
//! - [`ToolLog`] trait for plugging in the host runtime's logging sink
//!
//! ## Example
//!
//! ```rust,no_run
//! use xc_tool_discovery::{Locator, Platform, ToolKind};
//!
//! let locator = Locator::default();
//!
//! // Auto-detect xcbuild under <working_dir>/tools
//! match locator.locate(ToolKind::Build, Platform::X64) {
//!     Ok(Some(path)) => println!("building with {}", path.display()),
//!     Ok(None) => eprintln!("user-provided path is unusable"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

mod discovery;
mod error;
mod locator;
mod log;
mod platform;
mod tool_kind;
mod tool_version;

pub use error::LocateError;
pub use locator::Locator;
pub use log::{Severity, ToolLog, TracingLog, Verbosity};
pub use platform::Platform;
pub use tool_kind::ToolKind;
pub use tool_version::ToolVersion;
