pub const APP_ID: &str = "podcast-search";
pub const APP_NAME: &str = "Podcast Search";

pub const ID_PANEL_SEARCH_BAR: &str = "search_bar_panel";
pub const ID_PANEL_STATUS_BAR: &str = "status_bar_panel";
pub const ID_SEARCH_BAR_SNIPPET_LENGTH: &str = "search_bar_snippet_length";
pub const ID_SETTINGS_WINDOW: &str = "settings_window";

pub const TEXT_STYLE_SEARCH_BAR: &str = "SearchBar";
pub const TEXT_STYLE_STATUS_BAR: &str = "StatusBar";

pub const THUMBNAIL_SIZE: f32 = 56.0;
pub const SKELETON_ROW_HEIGHT: f32 = 40.0;
