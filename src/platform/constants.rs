//! Platform-specific constants and file-name matching.

use std::ffi::OsStr;
use std::fmt;

/// Get the executable file extension for the current platform
pub fn executable_extension() -> &'static str {
    #[cfg(windows)]
    return ".exe";
    #[cfg(not(windows))]
    return "";
}

/// Add the platform-specific executable extension to a file name
pub fn with_executable_extension(name: &str) -> String {
    format!("{name}{}", executable_extension())
}

/// Base name of an external tool.
///
/// A file matches when its name is exactly `<name>` or `<name>.exe`. Both
/// spellings are accepted on every platform, since SDK layouts and bundled
/// archives are not always consistent about the suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolName(&'static str);

impl ToolName {
    pub const AAPT2: ToolName = ToolName("aapt2");
    pub const ADB: ToolName = ToolName("adb");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn matches(&self, file_name: &OsStr) -> bool {
        let Some(file_name) = file_name.to_str() else {
            return false;
        };
        match file_name.strip_prefix(self.0) {
            Some("") | Some(".exe") => true,
            _ => false,
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
