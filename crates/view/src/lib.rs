//! Result rendering shared by the desktop and console clients.
//!
//! [`render`] is a pure function of its inputs: the same entries always
//! produce the same tree, and the entries are never modified.

mod link;
mod mode;
mod render;
mod time;

pub use link::{DEFAULT_PLACEHOLDER_PICTURE_URI, DEFAULT_PLAYER_BASE_URL, PlayerConfig, deep_link};
pub use mode::{LOADING_PLACEHOLDER_ROWS, ResultsView};
pub use render::{ClipView, EpisodeView, render, render_episode, summary_line};
pub use time::{normalized_start_time, start_seconds, to_hhmmss};
