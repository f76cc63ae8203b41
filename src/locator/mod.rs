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

//! Discovery of the Android SDK tools a build pipeline shells out to.
//!
//! Two independent strategies are offered:
//!
//! - [`ToolLocator::extract_aapt2`] unpacks aapt2 for the current platform from
//!   the archive bundled with the running program.
//! - [`ToolLocator::locate_adb`] looks for adb in an SDK's `platform-tools`.
//!
//! Both report "not found" as `Ok(None)` so callers can fall through to their
//! next strategy; every other failure is an error.

pub mod extractor;
pub mod scanner;

use crate::archive::BundleSource;
use crate::error::{LocatorError, Result};
use crate::platform::{PlatformTag, ToolName, current_platform};
use std::path::{Path, PathBuf};

pub use extractor::MAX_SEARCH_DEPTH;
pub use scanner::PLATFORM_TOOLS_DIR;

#[derive(Debug, Clone)]
pub struct ToolLocator {
    bundle: BundleSource,
    platform: PlatformTag,
}

impl Default for ToolLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolLocator {
    /// Locator reading the bundle of the running executable for the current platform.
    pub fn new() -> Self {
        Self {
            bundle: BundleSource::CurrentExe,
            platform: current_platform(),
        }
    }

    pub fn with_bundle(mut self, bundle: BundleSource) -> Self {
        self.bundle = bundle;
        self
    }

    pub fn with_platform(mut self, platform: PlatformTag) -> Self {
        self.platform = platform;
        self
    }

    pub fn bundle(&self) -> &BundleSource {
        &self.bundle
    }

    pub fn platform(&self) -> PlatformTag {
        self.platform
    }

    /// Tries to extract aapt2 from the bundled archive into `output_root`.
    ///
    /// `output_root` should be a fresh, writable directory owned by the
    /// caller, who is also responsible for removing it. It is only created
    /// when the bundle actually carries tools for this platform.
    ///
    /// # Errors
    ///
    /// - [`LocatorError::Extraction`] when reading the archive or writing the output fails
    /// - [`LocatorError::ToolMissing`] when no aapt2 binary was extracted
    /// - [`LocatorError::AmbiguousTool`] when more than one was
    /// - [`LocatorError::PermissionFailure`] when it cannot be made executable
    pub fn extract_aapt2(&self, output_root: &Path) -> Result<Option<PathBuf>> {
        let tree = self
            .bundle
            .open()
            .map_err(|source| LocatorError::Extraction {
                tool: ToolName::AAPT2.to_string(),
                message: format!("failed to open the {}", self.bundle.describe()),
                source,
            })?;

        match tree {
            Some(mut tree) => {
                extractor::extract_tool(&mut tree, self.platform, ToolName::AAPT2, output_root)
            }
            None => Ok(None),
        }
    }

    /// Tries to locate adb under `<sdk_root>/platform-tools`.
    pub fn locate_adb(&self, sdk_root: &Path) -> Result<Option<PathBuf>> {
        scanner::find_in_platform_tools(sdk_root, ToolName::ADB)
    }
}
