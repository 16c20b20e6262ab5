use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{err, error::GameorgError};

pub const DEFAULT_MARKER: &str = "game";
pub const DEFAULT_SUFFIX_TOKEN: &str = "_game";
pub const DEFAULT_CODE_EXTENSION: &str = ".go";
pub const DEFAULT_BUILD_COMMAND: [&str; 2] = ["go", "build"];
pub const DEFAULT_MANIFEST_FILE: &str = "metadata.json";

/// Everything a single run needs to know about how to find, rename and build games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Matched case-insensitively against directory names.
    pub marker: String,
    /// Removed once, case-sensitively, from the directory name.
    pub suffix_token: String,
    pub code_extension: String,
    pub build_command: Vec<String>,
    pub manifest_file: String,
    /// Stop the run when a build exits with a non-zero status.
    pub strict_build: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            suffix_token: DEFAULT_SUFFIX_TOKEN.to_string(),
            code_extension: DEFAULT_CODE_EXTENSION.to_string(),
            build_command: DEFAULT_BUILD_COMMAND.iter().map(|s| s.to_string()).collect(),
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            strict_build: false,
        }
    }
}

impl PipelineConfig {
    pub fn from_path(path: &impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Can't open config file `{}`", path.display()))?;
        let config: PipelineConfig = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Can't parse config file `{}`", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let empty = if self.marker.is_empty() {
            Some("marker")
        } else if self.code_extension.is_empty() {
            Some("code_extension")
        } else if self.manifest_file.is_empty() {
            Some("manifest_file")
        } else if self.build_command.first().map_or(true, |program| program.is_empty()) {
            Some("build_command")
        } else {
            None
        };

        match empty {
            Some(field) => err!(GameorgError::InvalidConfig { message: format!("`{}` can't be empty", field) }),
            None => Ok(()),
        }
    }
}
