use crate::error::{LocatorError, Result};
use crate::platform::{ToolName, file_ops};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// SDK subdirectory holding adb and friends.
pub const PLATFORM_TOOLS_DIR: &str = "platform-tools";

/// Looks for an executable `tool` directly inside `<sdk_root>/platform-tools`.
///
/// Returns `Ok(None)` when the directory does not exist or holds no matching
/// executable. Matching files without the executable bit are ignored.
pub fn find_in_platform_tools(sdk_root: &Path, tool: ToolName) -> Result<Option<PathBuf>> {
    let platform_tools = sdk_root.join(PLATFORM_TOOLS_DIR);
    if !platform_tools.is_dir() {
        log::debug!("{} is not a directory", platform_tools.display());
        return Ok(None);
    }

    for entry in WalkDir::new(&platform_tools)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| LocatorError::ScanFailure {
            sdk_dir: sdk_root.to_path_buf(),
            source,
        })?;

        if !tool.matches(entry.file_name()) {
            continue;
        }
        if file_ops::is_executable_file(entry.path()) {
            log::debug!("Found {tool} at {}", entry.path().display());
            return Ok(Some(entry.into_path()));
        }
        log::debug!("Ignoring non-executable {}", entry.path().display());
    }

    Ok(None)
}
