mod config;
mod main;
mod store;
mod user_command;

pub use config::AppConfig;
pub use main::App;
pub use store::{Action, Effect, SearchState, SearchStatus};
pub use user_command::{UserCommand, take_user_commands};
