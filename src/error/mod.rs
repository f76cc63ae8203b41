mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_with_color};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("Unable to extract {tool} from the bundled archive: {message}")]
    Extraction {
        tool: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to locate {tool} inside the bundled archive")]
    ToolMissing { tool: String, searched: PathBuf },

    #[error("Found {} copies of {tool} inside the bundled archive, expected exactly one", candidates.len())]
    AmbiguousTool {
        tool: String,
        candidates: Vec<PathBuf>,
    },

    #[error("Unable to make {} executable", path.display())]
    PermissionFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error while trying to locate adb in SDK dir '{}'", sdk_dir.display())]
    ScanFailure {
        sdk_dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Could not locate {tool}")]
    ToolNotLocated { tool: String, searched: Vec<String> },

    #[error("Override path '{}' is not an executable file", .0.display())]
    InvalidOverride(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LocatorError>;
