use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct AppConfig {
    pub width: f32,
    pub height: f32,
    /// Send a search even when the query box is empty
    pub submit_empty_query: bool,
}


impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 700.0,
            submit_empty_query: false,
        }
    }
}
