use crate::error::{LocatorError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "sdk-tools-locator";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variables naming the Android SDK, in order of preference.
pub const SDK_ENV_VARS: [&str; 2] = ["ANDROID_HOME", "ANDROID_SDK_ROOT"];

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LocatorConfig {
    /// Android SDK root searched for `platform-tools/adb`.
    #[serde(default)]
    pub sdk_dir: Option<PathBuf>,

    /// Explicit aapt2 binary, bypassing extraction.
    #[serde(default)]
    pub aapt2: Option<PathBuf>,

    /// Archive to extract tools from instead of the running executable.
    #[serde(default)]
    pub bundle: Option<PathBuf>,

    /// Directory aapt2 is extracted into. A fresh temporary directory is used
    /// when unset.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl LocatorConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(config_path)?;
        let config: LocatorConfig = toml::from_str(&contents).map_err(|e| {
            LocatorError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }

    /// Loads the explicitly requested file, or the per-user default location.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) if !path.exists() => Err(LocatorError::ConfigError(format!(
                "Config file {} does not exist",
                path.display()
            ))),
            Some(path) => Self::load(path),
            None => match default_config_path() {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Resolves the SDK root: the command-line value, then the SDK environment
    /// variables, then the configuration file.
    pub fn resolve_sdk_dir(&self, cli_value: Option<&Path>) -> Option<PathBuf> {
        cli_value
            .map(Path::to_path_buf)
            .or_else(sdk_dir_from_env)
            .or_else(|| self.sdk_dir.clone())
    }
}

/// `<config dir>/sdk-tools-locator/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn sdk_dir_from_env() -> Option<PathBuf> {
    SDK_ENV_VARS.iter().find_map(|var| {
        env::var_os(var)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}
