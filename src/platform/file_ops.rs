//! Platform-specific file operations.

use std::fs;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Make a file executable (Unix only)
#[cfg(unix)]
pub fn make_executable(path: &Path) -> std::io::Result<()> {
    let metadata = fs::metadata(path)?;
    let mut permissions = metadata.permissions();

    // Add execute permission for owner, group, and others (755)
    let mode = permissions.mode() | 0o755;
    permissions.set_mode(mode);

    fs::set_permissions(path, permissions)?;
    Ok(())
}

/// Make a file executable (Windows)
#[cfg(windows)]
pub fn make_executable(path: &Path) -> std::io::Result<()> {
    // Windows determines executability by file extension; still fail on a missing file
    fs::metadata(path).map(|_| ())
}

/// Check if a file is executable
#[cfg(unix)]
pub fn is_executable(path: &Path) -> std::io::Result<bool> {
    let metadata = fs::metadata(path)?;
    let permissions = metadata.permissions();
    Ok(permissions.mode() & 0o111 != 0)
}

#[cfg(windows)]
pub fn is_executable(path: &Path) -> std::io::Result<bool> {
    fs::metadata(path)?;
    // On Windows, check for .exe extension
    Ok(path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("exe")))
}

/// Returns true when `path` is an existing regular file (after following
/// symlinks) that the platform considers executable.
pub fn is_executable_file(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => is_executable(path).unwrap_or(false),
        _ => false,
    }
}
