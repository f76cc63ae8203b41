//! Platform detection utilities.
//!
//! The bundled archive ships one directory of native tools per operating
//! system. This module resolves which of those directories applies to the
//! running build, and provides the file-name and permission helpers both
//! lookup flows share.

pub mod file_ops;

// Internal modules
mod constants;
mod detection;

pub use detection::{PlatformTag, current_platform};

pub use constants::{ToolName, executable_extension, with_executable_extension};
