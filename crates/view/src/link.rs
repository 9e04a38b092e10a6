use crate::time::normalized_start_time;
use api::StartTime;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PLAYER_BASE_URL: &str = "https://open.spotify.com";
pub const DEFAULT_PLACEHOLDER_PICTURE_URI: &str =
    "https://placehold.co/160x160/png?text=Podcast";

/// Where deep links point and what to show when an episode has no artwork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct PlayerConfig {
    pub base_url: String,
    pub placeholder_picture_uri: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PLAYER_BASE_URL.to_string(),
            placeholder_picture_uri: DEFAULT_PLACEHOLDER_PICTURE_URI.to_string(),
        }
    }
}

/// `{base}/episode/{id}?t={seconds}`
pub fn deep_link(player: &PlayerConfig, episode_id: &str, start: &StartTime) -> String {
    let base = player.base_url.trim().trim_end_matches('/');
    format!("{base}/episode/{episode_id}?t={}", normalized_start_time(start))
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://open.spotify.com", StartTime::Text("125.430000".into()), "https://open.spotify.com/episode/abc?t=125")]
    #[case("https://open.spotify.com/", StartTime::Seconds(90.0), "https://open.spotify.com/episode/abc?t=90")]
    #[case("http://player.local", StartTime::Text("0.999".into()), "http://player.local/episode/abc?t=0")]
    fn test_deep_link(#[case] base: &str, #[case] start: StartTime, #[case] expected: &str) {
        let player = PlayerConfig {
            base_url: base.to_string(),
            ..Default::default()
        };
        assert_eq!(deep_link(&player, "abc", &start), expected);
    }
}
