pub const APP_NAME: &str = "podcast-search";
pub const AUTHOR: &str = "podcast-search";
pub const TOP_LEVEL_DOMAIN: &str = "org";

pub const GUI_CONFIG_FILE_NAME: &str = "gui.toml";
pub const CLI_CONFIG_FILE_NAME: &str = "cli.toml";

/// Overrides the directory configuration files are read from
pub const ENV_CONFIG_DIRECTORY: &str = "PODCAST_SEARCH_CONFIG_DIRECTORY";
