use crate::error::{Result, WrapErr};
use api::{ClientConfig, SearchOptions};
use serde::Deserialize;
use std::path::PathBuf;
use view::PlayerConfig;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    pub search: ClientConfig,
    pub player: PlayerConfig,
    /// Used when a flag is not given on the command line
    pub defaults: SearchOptions,
}

impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    pub fn path() -> PathBuf {
        config::config_file_path(config::constants::CLI_CONFIG_FILE_NAME)
    }

    /// Reads `cli.toml`. A missing file means defaults.
    pub fn load() -> Result<Config> {
        let config_path = Self::path();

        match std::fs::read_to_string(&config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str)
                .wrap_err_with(|| format!("Invalid configuration {}", config_path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }
}
