use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{Result, VimeoError};
use crate::configs::*;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
  #[serde(default)]
  pub http: HttpConfig,
  #[serde(default)]
  pub endpoints: EndpointsConfig,
  #[serde(default)]
  pub search: SearchConfig,
  #[serde(default)]
  pub logging: Option<LoggingConfig>,
}

impl Config {
  pub fn from_toml_str(config_str: &str) -> Result<Self> {
    toml::from_str(config_str).map_err(|e| VimeoError::Config(e.to_string()))
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    tracing::debug!("Loading configuration from: {}", path.display());

    let config_str = std::fs::read_to_string(path)
      .map_err(|e| VimeoError::Config(format!("{}: {}", path.display(), e)))?;
    if config_str.trim().is_empty() {
      return Err(VimeoError::Config(format!("{} is empty", path.display())));
    }

    Self::from_toml_str(&config_str)
  }
}
