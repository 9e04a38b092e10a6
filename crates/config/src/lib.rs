pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    pick_dir(env::var_os(env_key), || strategy_fn(strategy))
}

/// Path of `file_name` inside the configuration directory.
///
/// `PODCAST_SEARCH_CONFIG_DIRECTORY` wins over the platform directory. When the
/// home directory cannot be determined we fall back to the temp directory so a
/// client can still start with defaults.
pub fn config_file_path(file_name: &str) -> PathBuf {
    let dir = match create_strategy() {
        Ok(strategy) => resolve_dir(constants::ENV_CONFIG_DIRECTORY, &strategy, |s| {
            Some(s.config_dir())
        }),
        Err(_) => pick_dir(env::var_os(constants::ENV_CONFIG_DIRECTORY), || None),
    };
    dir.join(file_name)
}

fn pick_dir<F>(env_value: Option<OsString>, fallback: F) -> PathBuf
where
    F: FnOnce() -> Option<PathBuf>,
{
    env_value
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(fallback)
        .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME))
}
