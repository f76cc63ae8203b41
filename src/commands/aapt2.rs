use crate::archive::BundleSource;
use crate::commands::{LocatedOutput, LocatedSource};
use crate::config::LocatorConfig;
use crate::error::{LocatorError, Result};
use crate::locator::ToolLocator;
use crate::platform::{ToolName, file_ops};
use std::fs;
use std::path::{Path, PathBuf};

const TEMP_DIR_PREFIX: &str = "sdk-tools-";

pub struct Aapt2Command<'a> {
    config: &'a LocatorConfig,
}

impl<'a> Aapt2Command<'a> {
    pub fn new(config: &'a LocatorConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(
        &self,
        aapt2: Option<&Path>,
        output_dir: Option<&Path>,
        bundle: Option<&Path>,
        json: bool,
    ) -> Result<()> {
        let (path, source) = self.locate(aapt2, output_dir, bundle)?;
        LocatedOutput::new(ToolName::AAPT2.as_str(), &path, source).print(json)
    }

    /// Resolves aapt2 from an explicit override first, then from the bundle.
    pub fn locate(
        &self,
        aapt2: Option<&Path>,
        output_dir: Option<&Path>,
        bundle: Option<&Path>,
    ) -> Result<(PathBuf, LocatedSource)> {
        if let Some(path) = aapt2.or(self.config.aapt2.as_deref()) {
            if !file_ops::is_executable_file(path) {
                return Err(LocatorError::InvalidOverride(path.to_path_buf()));
            }
            log::info!("Using aapt2 override {}", path.display());
            return Ok((std::path::absolute(path)?, LocatedSource::Override));
        }

        let bundle = match bundle.or(self.config.bundle.as_deref()) {
            Some(path) => BundleSource::Archive(path.to_path_buf()),
            None => BundleSource::CurrentExe,
        };
        let locator = ToolLocator::new().with_bundle(bundle);

        let found = match output_dir.or(self.config.output_dir.as_deref()) {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                locator.extract_aapt2(dir)?
            }
            None => extract_to_temp_dir(&locator)?,
        };

        match found {
            Some(path) => Ok((path, LocatedSource::Bundle)),
            None => Err(LocatorError::ToolNotLocated {
                tool: ToolName::AAPT2.to_string(),
                searched: vec![format!(
                    "{}{}",
                    locator.bundle().describe(),
                    locator.platform().archive_sub_path()
                )],
            }),
        }
    }
}

/// Extracts into a fresh temporary directory, which outlives the process only
/// when aapt2 was actually extracted into it.
fn extract_to_temp_dir(locator: &ToolLocator) -> Result<Option<PathBuf>> {
    let temp_dir = tempfile::Builder::new()
        .prefix(TEMP_DIR_PREFIX)
        .tempdir()?;

    let found = locator.extract_aapt2(temp_dir.path())?;
    if found.is_some() {
        let kept = temp_dir.keep();
        log::debug!("Keeping extraction directory {}", kept.display());
    }
    Ok(found)
}
