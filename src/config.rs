use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_DATABASE: &str = "tournament.db";

/// Settings read from the config file. CLI flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	pub database: Option<PathBuf>,
	pub json: Option<bool>,
}

impl Config {
	pub fn database(&self) -> PathBuf {
		self.database
			.clone()
			.unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
	}
}

/// Loads the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<Config> {
	match std::fs::read_to_string(path) {
		Ok(content) => toml::from_str(&content)
			.with_context(|| format!("failed to parse config at {}", path.display())),
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
		Err(e) => Err(e).with_context(|| format!("failed to read config at {}", path.display())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_file_gives_defaults() {
		let config = load_config(Path::new("does/not/exist.toml")).unwrap();

		assert_eq!(config.database(), PathBuf::from("tournament.db"));
		assert_eq!(config.json, None);
	}

	#[test]
	fn parses_all_fields() {
		let config: Config = toml::from_str("database = \"cup.db\"\njson = true\n").unwrap();

		assert_eq!(config.database(), PathBuf::from("cup.db"));
		assert_eq!(config.json, Some(true));
	}

	#[test]
	fn unknown_keys_are_rejected() {
		assert!(toml::from_str::<Config>("databse = \"cup.db\"").is_err());
	}
}
