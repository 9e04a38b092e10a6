use crate::link::{PlayerConfig, deep_link};
use crate::time::{start_seconds, to_hhmmss};
use api::{ClipResult, EpisodeResult, ReleaseDate};

/// One clickable transcript excerpt.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipView {
    /// 1-based position in the service's relevance order
    pub rank: usize,
    pub start_seconds: u64,
    pub timestamp: String,
    pub transcript: String,
    /// Score fixed to 5 decimals, present only when scores are shown
    pub score_label: Option<String>,
    pub url: String,
}

/// One collapsible episode section.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeView {
    /// Unique within one rendered result set
    pub key: String,
    pub episode_id: String,
    pub episode_name: String,
    pub show_name: String,
    pub description: String,
    pub picture_uri: String,
    pub summary: Option<String>,
    pub play_url: String,
    pub most_relevant: ClipView,
    /// Remaining clips in ascending start time
    pub others: Vec<ClipView>,
}

pub fn render(entries: &[EpisodeResult], show_scores: bool, player: &PlayerConfig) -> Vec<EpisodeView> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| render_episode(idx, entry, show_scores, player))
        .collect()
}

/// Returns `None` for an entry without snippets, there is no top clip to link.
pub fn render_episode(
    position: usize,
    entry: &EpisodeResult,
    show_scores: bool,
    player: &PlayerConfig,
) -> Option<EpisodeView> {
    let (top, rest) = entry.snippets.split_first()?;

    let make_clip =
        |rank: usize, c: &ClipResult| render_clip(rank, c, entry, show_scores, player);

    let mut others: Vec<ClipView> = rest
        .iter()
        .enumerate()
        .map(|(idx, c)| make_clip(idx + 2, c))
        .collect();
    // Stable, so clips sharing a start keep their relevance order
    others.sort_by_key(|c| c.start_seconds);

    let picture_uri = entry
        .picture_uri
        .as_deref()
        .map(str::trim)
        .filter(|uri| !uri.is_empty())
        .unwrap_or(player.placeholder_picture_uri.as_str())
        .to_string();

    Some(EpisodeView {
        key: format!("{position}-{}", entry.episode_id),
        episode_id: entry.episode_id.clone(),
        episode_name: entry.episode_name.clone(),
        show_name: entry.show_name.clone(),
        description: entry.episode_description.clone(),
        picture_uri,
        summary: summary_line(entry.release_date.as_ref(), entry.duration_ms),
        play_url: deep_link(player, &entry.episode_id, &top.start_time),
        most_relevant: make_clip(1, top),
        others,
    })
}

fn render_clip(
    rank: usize,
    clip: &ClipResult,
    entry: &EpisodeResult,
    show_scores: bool,
    player: &PlayerConfig,
) -> ClipView {
    let start = start_seconds(&clip.start_time);
    ClipView {
        rank,
        start_seconds: start,
        timestamp: to_hhmmss(start),
        transcript: clip.transcript_text.clone(),
        score_label: show_scores
            .then_some(clip.score)
            .flatten()
            .map(|score| format!("{score:.5}")),
        url: deep_link(player, &entry.episode_id, &clip.start_time),
    }
}

/// `Jan 15, 2020 · 30:00`, only when both parts are known.
pub fn summary_line(release_date: Option<&ReleaseDate>, duration_ms: Option<u64>) -> Option<String> {
    let (date, duration_ms) = (release_date?, duration_ms?);
    Some(format!(
        "{} · {}",
        date.date().format("%b %-d, %Y"),
        to_hhmmss(duration_ms / 1000)
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use api::StartTime;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn clip(start: f64, score: f64) -> ClipResult {
        ClipResult {
            start_time: StartTime::Seconds(start),
            transcript_text: format!("at {start}"),
            score: Some(score),
        }
    }

    fn episode(id: &str, snippets: Vec<ClipResult>) -> EpisodeResult {
        EpisodeResult {
            episode_id: id.to_string(),
            episode_name: format!("Episode {id}"),
            show_name: "Show".to_string(),
            episode_description: "Description".to_string(),
            picture_uri: None,
            release_date: None,
            duration_ms: None,
            snippets,
        }
    }

    fn player() -> PlayerConfig {
        PlayerConfig::default()
    }

    #[test]
    fn test_two_tier_clip_order() {
        let entry = episode("e1", vec![clip(50.0, 0.9), clip(10.0, 0.5), clip(30.0, 0.7)]);
        let view = render_episode(0, &entry, false, &player()).unwrap();

        assert_eq!(view.most_relevant.start_seconds, 50);
        assert_eq!(view.most_relevant.rank, 1);

        let starts: Vec<u64> = view.others.iter().map(|c| c.start_seconds).collect();
        assert_eq!(starts, vec![10, 30]);
        let ranks: Vec<usize> = view.others.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![2, 3]);
    }

    #[test]
    fn test_string_start_times_sort_numerically() {
        let mut entry = episode("e1", vec![clip(0.0, 1.0)]);
        entry.snippets.extend(["100.5", "9.999", "20.000000"].map(|t| ClipResult {
            start_time: StartTime::Text(t.to_string()),
            transcript_text: String::new(),
            score: None,
        }));
        let view = render_episode(0, &entry, false, &player()).unwrap();

        let starts: Vec<u64> = view.others.iter().map(|c| c.start_seconds).collect();
        assert_eq!(starts, vec![9, 20, 100]);
    }

    #[test]
    fn test_play_url_targets_top_clip() {
        let entry = episode("4rOoJ6Egrf8K2IrywzwOMk", vec![clip(125.43, 0.9), clip(3.0, 0.1)]);
        let view = render_episode(0, &entry, false, &player()).unwrap();

        assert_eq!(
            view.play_url,
            "https://open.spotify.com/episode/4rOoJ6Egrf8K2IrywzwOMk?t=125"
        );
        assert_eq!(view.others[0].url, "https://open.spotify.com/episode/4rOoJ6Egrf8K2IrywzwOMk?t=3");
        assert_eq!(view.most_relevant.timestamp, "02:05");
    }

    #[rstest]
    #[case(true, Some("0.12346"))]
    #[case(false, None)]
    fn test_score_visibility(#[case] show_scores: bool, #[case] expected: Option<&str>) {
        let entry = episode("e1", vec![clip(1.0, 0.123456789)]);
        let view = render_episode(0, &entry, show_scores, &player()).unwrap();
        assert_eq!(view.most_relevant.score_label.as_deref(), expected);
    }

    #[test]
    fn test_missing_score_has_no_label() {
        let mut entry = episode("e1", vec![clip(1.0, 0.5)]);
        entry.snippets[0].score = None;
        let view = render_episode(0, &entry, true, &player()).unwrap();
        assert_eq!(view.most_relevant.score_label, None);
    }

    #[rstest]
    #[case(None, "https://placehold.co/160x160/png?text=Podcast")]
    #[case(Some(""), "https://placehold.co/160x160/png?text=Podcast")]
    #[case(Some("https://i.scdn.co/image/abc"), "https://i.scdn.co/image/abc")]
    fn test_picture_fallback(#[case] uri: Option<&str>, #[case] expected: &str) {
        let mut entry = episode("e1", vec![clip(1.0, 0.5)]);
        entry.picture_uri = uri.map(str::to_string);
        let view = render_episode(0, &entry, false, &player()).unwrap();
        assert_eq!(view.picture_uri, expected);
    }

    #[rstest]
    #[case(Some((2020, 1, 15)), Some(1_800_000), Some("Jan 15, 2020 · 30:00"))]
    #[case(Some((2021, 7, 4)), Some(3_665_000), Some("Jul 4, 2021 · 01:01:05"))]
    #[case(Some((2020, 1, 15)), None, None)]
    #[case(None, Some(1_800_000), None)]
    fn test_summary_line(
        #[case] date: Option<(i32, u32, u32)>,
        #[case] duration_ms: Option<u64>,
        #[case] expected: Option<&str>,
    ) {
        let date = date.map(|(y, m, d)| ReleaseDate(NaiveDate::from_ymd_opt(y, m, d).unwrap()));
        assert_eq!(summary_line(date.as_ref(), duration_ms).as_deref(), expected);
    }

    #[test]
    fn test_episode_without_snippets_is_skipped() {
        let entries = vec![episode("a", vec![]), episode("b", vec![clip(1.0, 0.5)])];
        let views = render(&entries, false, &player());
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].episode_id, "b");
    }

    #[test]
    fn test_sections_are_independent() {
        let entries = vec![
            episode("a", vec![clip(5.0, 0.9), clip(1.0, 0.2)]),
            episode("a", vec![clip(7.0, 0.8)]),
        ];
        let views = render(&entries, false, &player());

        assert_eq!(views.len(), 2);
        assert_ne!(views[0].key, views[1].key);
        assert_eq!(views[0].others.len(), 1);
        assert!(views[1].others.is_empty());
    }

    #[test]
    fn test_render_is_idempotent_and_pure() {
        let entries = vec![
            episode("a", vec![clip(50.0, 0.9), clip(10.0, 0.5), clip(30.0, 0.7)]),
            episode("b", vec![clip(2.0, 0.3)]),
        ];
        let before = entries.clone();

        let first = render(&entries, true, &player());
        let second = render(&entries, true, &player());

        assert_eq!(first, second);
        assert_eq!(entries, before);
    }
}
