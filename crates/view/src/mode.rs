use crate::link::PlayerConfig;
use crate::render::{EpisodeView, render};
use api::EpisodeResult;

/// Skeleton rows shown while the first search is in flight
pub const LOADING_PLACEHOLDER_ROWS: usize = 6;

/// What the result area currently shows. Painters must handle every variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    /// Nothing searched yet
    Idle,
    Loading { placeholder_rows: usize },
    /// The last search matched nothing
    Empty,
    Episodes(Vec<EpisodeView>),
}

impl ResultsView {
    /// Previous results stay visible while a newer search is in flight; the
    /// skeleton only appears when there is nothing else to show.
    pub fn build(
        in_flight: bool,
        has_searched: bool,
        entries: &[EpisodeResult],
        show_scores: bool,
        player: &PlayerConfig,
    ) -> Self {
        let episodes = render(entries, show_scores, player);
        if !episodes.is_empty() {
            return ResultsView::Episodes(episodes);
        }

        if in_flight {
            ResultsView::Loading {
                placeholder_rows: LOADING_PLACEHOLDER_ROWS,
            }
        } else if has_searched {
            ResultsView::Empty
        } else {
            ResultsView::Idle
        }
    }

    pub fn episode_count(&self) -> usize {
        match self {
            ResultsView::Episodes(episodes) => episodes.len(),
            ResultsView::Idle | ResultsView::Loading { .. } | ResultsView::Empty => 0,
        }
    }
}
