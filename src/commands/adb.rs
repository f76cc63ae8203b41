use crate::commands::{LocatedOutput, LocatedSource};
use crate::config::{LocatorConfig, SDK_ENV_VARS};
use crate::error::{LocatorError, Result};
use crate::locator::{PLATFORM_TOOLS_DIR, ToolLocator};
use crate::platform::{ToolName, with_executable_extension};
use std::path::{Path, PathBuf};

pub struct AdbCommand<'a> {
    config: &'a LocatorConfig,
}

impl<'a> AdbCommand<'a> {
    pub fn new(config: &'a LocatorConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, sdk_dir: Option<&Path>, json: bool) -> Result<()> {
        let path = self.locate(sdk_dir)?;
        LocatedOutput::new(ToolName::ADB.as_str(), &path, LocatedSource::Sdk).print(json)
    }

    pub fn locate(&self, sdk_dir: Option<&Path>) -> Result<PathBuf> {
        let Some(sdk_root) = self.config.resolve_sdk_dir(sdk_dir) else {
            return Err(LocatorError::ToolNotLocated {
                tool: ToolName::ADB.to_string(),
                searched: vec![format!(
                    "no SDK directory given (--sdk-dir, {}, or sdk_dir in the config file)",
                    SDK_ENV_VARS.join(", ")
                )],
            });
        };
        log::info!("Searching for adb in SDK {}", sdk_root.display());

        match ToolLocator::new().locate_adb(&sdk_root)? {
            Some(path) => Ok(path),
            None => Err(LocatorError::ToolNotLocated {
                tool: ToolName::ADB.to_string(),
                searched: vec![
                    sdk_root
                        .join(PLATFORM_TOOLS_DIR)
                        .join(with_executable_extension(ToolName::ADB.as_str()))
                        .display()
                        .to_string(),
                ],
            }),
        }
    }
}
