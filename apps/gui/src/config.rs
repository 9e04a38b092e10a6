use crate::app::AppConfig;
use crate::error::Result;
use crate::ui::UiConfig;
use api::{ClientConfig, SearchOptions};
use serde::Deserialize;
use std::path::PathBuf;
use view::PlayerConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub ui: UiConfig,
    pub search: ClientConfig,
    pub player: PlayerConfig,
    /// Initial values of the search settings
    pub defaults: SearchOptions,

    // === System state ===
    pub config_path: PathBuf,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
struct RawConfig {
    app: AppConfig,
    ui: UiConfig,
    search: ClientConfig,
    player: PlayerConfig,
    defaults: SearchOptions,
}

impl Config {
    fn from_raw(raw: RawConfig, config_path: PathBuf) -> Self {
        Self {
            app: raw.app,
            ui: raw.ui,
            search: raw.search,
            player: raw.player,
            defaults: raw.defaults,
            config_path,
        }
    }

    fn default_path() -> PathBuf {
        config::config_file_path(config::constants::GUI_CONFIG_FILE_NAME)
    }

    /// Reads `gui.toml`. A missing file means defaults.
    pub fn load() -> Result<Config> {
        let config_path = Self::default_path();

        let raw_config: RawConfig = match std::fs::read_to_string(&config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => RawConfig::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self::from_raw(raw_config, config_path))
    }

    pub fn load_str(config_str: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(config_str)?;
        Ok(Self::from_raw(raw, Self::default_path()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use api::{ResponseSchema, SnippetLength};

    #[test]
    fn test_app_config_defaults() {
        let default_app = AppConfig::default();
        assert_eq!(default_app.width, 900.0);
        assert_eq!(default_app.height, 700.0);
        assert!(!default_app.submit_empty_query);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = Config::load_str("").expect("Failed to load config");

        assert_eq!(cfg.search, ClientConfig::default());
        assert_eq!(cfg.player, PlayerConfig::default());
        assert_eq!(cfg.defaults, SearchOptions::default());
    }

    #[test]
    fn test_load_config_values() {
        const USER_CONFIG: &'static str = r#"
        [app]
        width = 200.0
        submit-empty-query = true

        [search]
        base-url = "http://search.lan:5000"
        response-schema = "legacy"

        [player]
        base-url = "https://player.example.org"

        [defaults]
        snippet-length = 300
        result-count = 20
        show-scores = true
        "#;

        let cfg = Config::load_str(USER_CONFIG).expect("Failed to load config");

        assert_eq!(cfg.app.width, 200.0);
        assert_eq!(cfg.app.height, 700.0);
        assert!(cfg.app.submit_empty_query);
        assert_eq!(cfg.search.base_url, "http://search.lan:5000");
        assert_eq!(cfg.search.response_schema, ResponseSchema::Legacy);
        assert_eq!(cfg.player.base_url, "https://player.example.org");
        assert_eq!(cfg.player.placeholder_picture_uri, view::DEFAULT_PLACEHOLDER_PICTURE_URI);
        assert_eq!(cfg.defaults.snippet_length, SnippetLength::Minutes5);
        assert_eq!(cfg.defaults.result_count.get(), 20);
        assert!(cfg.defaults.show_scores);
    }

    #[test]
    fn test_load_config_unknown_field() {
        const USER_CONFIG: &'static str = r#"
        [app]
        background-alpha = 0.5
        "#;

        let cfg = Config::load_str(USER_CONFIG);
        let err = cfg.unwrap_err();
        assert!(err.to_string().contains("unknown field `background-alpha`"));
    }

    #[test]
    fn test_load_config_bad_snippet_length() {
        const USER_CONFIG: &'static str = r#"
        [defaults]
        snippet-length = 45
        "#;

        assert!(Config::load_str(USER_CONFIG).is_err());
    }
}
