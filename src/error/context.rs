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

use crate::error::LocatorError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a LocatorError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a LocatorError) -> Self {
        let (suggestion, details) = match error {
            LocatorError::Extraction { .. } => {
                let suggestion = Some(
                    "Ensure the output directory is writable and empty, or pass the path to \
                     aapt2 using the flag --aapt2."
                        .to_string(),
                );
                (suggestion, None)
            }
            LocatorError::ToolMissing { searched, .. } => {
                let suggestion = Some(
                    "This build does not bundle aapt2 for the current platform. Pass the path \
                     to aapt2 using the flag --aapt2."
                        .to_string(),
                );
                let details = Some(format!("Searched extracted files under {}", searched.display()));
                (suggestion, details)
            }
            LocatorError::AmbiguousTool { candidates, .. } => {
                let suggestion = Some(
                    "Pass the path to the intended binary using the flag --aapt2.".to_string(),
                );
                let details = Some(format!(
                    "Candidates:\n{}",
                    candidates
                        .iter()
                        .map(|p| format!("  - {}", p.display()))
                        .collect::<Vec<_>>()
                        .join("\n")
                ));
                (suggestion, details)
            }
            LocatorError::PermissionFailure { .. } => {
                let suggestion = Some(
                    "This may be a permission issue. If it persists, consider passing the path \
                     to aapt2 using the flag --aapt2."
                        .to_string(),
                );
                (suggestion, None)
            }
            LocatorError::ScanFailure { .. } => {
                let suggestion = Some(
                    "Check that the SDK directory is readable, or point --sdk-dir at another \
                     Android SDK installation."
                        .to_string(),
                );
                (suggestion, None)
            }
            LocatorError::ToolNotLocated { tool, searched } => {
                let suggestion = match tool.as_str() {
                    "adb" => {
                        let set_cmd = if cfg!(windows) {
                            "set ANDROID_HOME=<path to sdk>"
                        } else {
                            "export ANDROID_HOME=<path to sdk>"
                        };
                        Some(format!(
                            "Install the Android SDK platform-tools and pass --sdk-dir, or set \
                             the SDK location: {set_cmd}"
                        ))
                    }
                    _ => Some(format!(
                        "Pass the path to {tool} using the flag --{tool}."
                    )),
                };
                let details = if searched.is_empty() {
                    None
                } else {
                    Some(format!(
                        "Searched in:\n{}",
                        searched
                            .iter()
                            .map(|p| format!("  - {p}"))
                            .collect::<Vec<_>>()
                            .join("\n")
                    ))
                };
                (suggestion, details)
            }
            LocatorError::InvalidOverride(_) => {
                let suggestion = if cfg!(unix) {
                    Some("Ensure the file exists and has the executable bit set (chmod +x).".to_string())
                } else {
                    Some("Ensure the file exists and is an .exe binary.".to_string())
                };
                (suggestion, None)
            }
            LocatorError::ConfigError(_) => {
                let suggestion = Some(
                    "Fix the configuration file or pass a different one with --config.".to_string(),
                );
                (suggestion, None)
            }
            LocatorError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        if cfg!(unix) {
                            Some("Check file permissions.".to_string())
                        } else {
                            Some("Run as Administrator or check file permissions.".to_string())
                        }
                    }
                    std::io::ErrorKind::NotFound => Some(
                        "Ensure the file or directory exists and the path is correct.".to_string(),
                    ),
                    _ => None,
                };
                (suggestion, None)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
