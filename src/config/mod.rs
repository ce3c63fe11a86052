//! @acp:module "Configuration"
//! @acp:summary "Run constants loaded from mathgen.config.json or defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::layout::LayoutSpec;
use crate::problem::DEFAULT_MAX_ATTEMPTS;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "mathgen.config.json";

fn default_max_attempts() -> u64 {
    DEFAULT_MAX_ATTEMPTS
}

/// @acp:summary "Run constants; problem semantics are not configurable here"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Rejected draws allowed per problem before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u64,

    /// Extra font directories, searched before the platform ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub font_dirs: Vec<PathBuf>,

    /// Page capacity
    #[serde(default)]
    pub layout: LayoutSpec,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            font_dirs: Vec::new(),
            layout: LayoutSpec::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load the file when it exists, defaults otherwise
    pub fn load_if_exists<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
