// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

/// Operating system family of the running build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformTag {
    Windows,
    MacOS,
    Linux,
    /// Any target the bundled archive has no dedicated directory for.
    Other,
}

impl PlatformTag {
    pub const ALL: [PlatformTag; 4] = [
        PlatformTag::Windows,
        PlatformTag::MacOS,
        PlatformTag::Linux,
        PlatformTag::Other,
    ];

    /// Name of the directory holding this platform's tools in the bundled archive.
    ///
    /// `Other` falls back to the Linux tools. This is a best-effort guess for
    /// unrecognized Unix-like targets, not a verified mapping.
    pub fn archive_dir_name(self) -> &'static str {
        match self {
            PlatformTag::Windows => "windows",
            PlatformTag::MacOS => "macos",
            PlatformTag::Linux | PlatformTag::Other => "linux",
        }
    }

    /// Root-anchored sub-path inside the bundled archive, e.g. `/linux`.
    pub fn archive_sub_path(self) -> String {
        format!("/{}", self.archive_dir_name())
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlatformTag::Windows => "Windows",
            PlatformTag::MacOS => "macOS",
            PlatformTag::Linux => "Linux",
            PlatformTag::Other => "Unknown platform",
        };
        f.write_str(name)
    }
}

/// Detect the current operating system.
///
/// Maps Rust's target OS to a [`PlatformTag`]:
/// - `windows` → `Windows`
/// - `macos` → `MacOS`
/// - `linux` → `Linux`
/// - Others → `Other`
pub fn current_platform() -> PlatformTag {
    #[cfg(target_os = "windows")]
    return PlatformTag::Windows;

    #[cfg(target_os = "macos")]
    return PlatformTag::MacOS;

    #[cfg(target_os = "linux")]
    return PlatformTag::Linux;

    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    return PlatformTag::Other;
}
