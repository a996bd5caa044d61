use std::path::Path;

use tracing::{debug, instrument};

use crate::{error::ConfigError, types::config::Config};

impl Config {
	pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> { toml::from_str(content) }
}

#[instrument]
pub fn load(path: &Path) -> Result<Config, ConfigError> {
	debug!("Reading config from {:?}", path);
	let content = fs_err::read_to_string(path)?;
	Config::from_toml(&content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

/// Like `load`, but a missing file is `None` rather than an error
#[instrument]
pub fn load_optional(path: &Path) -> Result<Option<Config>, ConfigError> {
	if !path.exists() {
		return Ok(None);
	}
	load(path).map(Some)
}
