//! Search state and the only function allowed to change it.
//!
//! Every user edit and every backend answer is an [`Action`]. `reduce` takes
//! the old state by value and hands back the new one, plus an [`Effect`] when
//! a request has to leave the UI thread.

use crate::backend::{RequestSeq, SearchOutcome};
use api::{EpisodeResult, ResultCount, SearchOptions, SearchRequest, SnippetLength};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Default, Clone, PartialEq)]
pub enum SearchStatus {
    #[default]
    Idle,
    /// `show_scores` is the score visibility the pending result set will use
    Searching { seq: RequestSeq, show_scores: bool },
    Failed(String),
}

#[derive(Debug)]
pub enum Action {
    EditQuery(String),
    SetSnippetLength(SnippetLength),
    SetResultCount(ResultCount),
    SetShowScores(bool),
    SetQueryOptimization(bool),
    Submit,
    SearchFinished {
        seq: RequestSeq,
        outcome: SearchOutcome,
    },
}

#[derive(Debug, PartialEq)]
pub enum Effect {
    Dispatch {
        seq: RequestSeq,
        request: SearchRequest,
    },
}

#[derive(Debug, Default, Clone)]
pub struct SearchState {
    /// Text in the search box
    pub query: String,
    /// Settings as currently edited; read when the next search is submitted
    pub options: SearchOptions,
    /// Score visibility of the displayed result set, fixed when it arrives
    pub displayed_show_scores: bool,
    /// Latest accepted result set, replaced wholesale
    pub entries: Arc<[EpisodeResult]>,
    pub status: SearchStatus,
    /// Highest sequence number handed out so far
    pub latest_seq: RequestSeq,
    /// At least one search completed successfully
    pub has_searched: bool,
    pub submit_empty_query: bool,
}

impl SearchState {
    pub fn new(options: SearchOptions, submit_empty_query: bool) -> Self {
        Self {
            displayed_show_scores: options.show_scores,
            options,
            submit_empty_query,
            ..Default::default()
        }
    }

    pub fn in_flight(&self) -> bool {
        matches!(self.status, SearchStatus::Searching { .. })
    }

    pub fn reduce(mut self, action: Action) -> (Self, Option<Effect>) {
        match action {
            Action::EditQuery(query) => {
                self.query = query;
                (self, None)
            }
            Action::SetSnippetLength(length) => {
                self.options.snippet_length = length;
                (self, None)
            }
            Action::SetResultCount(count) => {
                self.options.result_count = count;
                (self, None)
            }
            Action::SetShowScores(show) => {
                self.options.show_scores = show;
                (self, None)
            }
            Action::SetQueryOptimization(enabled) => {
                self.options.use_query_optimization = enabled;
                (self, None)
            }
            Action::Submit => self.submit(),
            Action::SearchFinished { seq, outcome } => {
                let state = self.finish(seq, outcome);
                (state, None)
            }
        }
    }

    fn submit(mut self) -> (Self, Option<Effect>) {
        if self.query.trim().is_empty() && !self.submit_empty_query {
            debug!("Ignoring submit of an empty query");
            return (self, None);
        }

        let seq = self.latest_seq.next();
        self.latest_seq = seq;
        self.status = SearchStatus::Searching {
            seq,
            show_scores: self.options.show_scores,
        };

        let request = SearchRequest::from_options(self.query.clone(), &self.options);
        info!("Dispatching search {seq} for {:?}", request.query);

        (self, Some(Effect::Dispatch { seq, request }))
    }

    fn finish(mut self, seq: RequestSeq, outcome: SearchOutcome) -> Self {
        if seq != self.latest_seq {
            debug!("Discarding stale response {seq}, latest is {}", self.latest_seq);
            return self;
        }

        match outcome {
            Ok(entries) => {
                info!("Search {seq} returned {} episodes", entries.len());
                if let SearchStatus::Searching { show_scores, .. } = self.status {
                    self.displayed_show_scores = show_scores;
                }
                self.entries = entries.into();
                self.has_searched = true;
                self.status = SearchStatus::Idle;
            }
            // Previous results stay on screen
            Err(message) => {
                self.status = SearchStatus::Failed(message);
            }
        }
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use api::{ClipResult, StartTime};

    fn entry(id: &str) -> EpisodeResult {
        EpisodeResult {
            episode_id: id.to_string(),
            episode_name: id.to_string(),
            show_name: "Show".to_string(),
            episode_description: String::new(),
            picture_uri: None,
            release_date: None,
            duration_ms: None,
            snippets: vec![ClipResult {
                start_time: StartTime::Seconds(0.0),
                transcript_text: String::new(),
                score: None,
            }],
        }
    }

    fn with_query(query: &str) -> SearchState {
        let (state, _) = SearchState::default().reduce(Action::EditQuery(query.to_string()));
        state
    }

    fn submit(state: SearchState) -> (SearchState, RequestSeq) {
        let (state, effect) = state.reduce(Action::Submit);
        match effect {
            Some(Effect::Dispatch { seq, .. }) => (state, seq),
            None => panic!("submit should dispatch"),
        }
    }

    fn finish(state: SearchState, seq: RequestSeq, outcome: SearchOutcome) -> SearchState {
        state.reduce(Action::SearchFinished { seq, outcome }).0
    }

    fn ids(state: &SearchState) -> Vec<&str> {
        state.entries.iter().map(|e| e.episode_id.as_str()).collect()
    }

    #[test]
    fn test_submit_builds_request_from_current_options() {
        let state = with_query("green grass");
        let (state, _) = state.reduce(Action::SetSnippetLength(SnippetLength::Minutes2));
        let (state, _) = state.reduce(Action::SetResultCount(ResultCount::new(40)));
        let (state, _) = state.reduce(Action::SetQueryOptimization(true));

        let (state, effect) = state.reduce(Action::Submit);

        let expected = SearchRequest {
            query: "green grass".to_string(),
            snippet_length: SnippetLength::Minutes2,
            result_count: ResultCount::new(40),
            use_query_optimization: true,
        };
        assert_eq!(
            effect,
            Some(Effect::Dispatch {
                seq: RequestSeq(1),
                request: expected
            })
        );
        assert_eq!(
            state.status,
            SearchStatus::Searching {
                seq: RequestSeq(1),
                show_scores: false
            }
        );
        assert!(state.in_flight());
    }

    #[test]
    fn test_empty_query_is_ignored_by_default() {
        let (state, effect) = with_query("   ").reduce(Action::Submit);
        assert_eq!(effect, None);
        assert_eq!(state.status, SearchStatus::Idle);
        assert_eq!(state.latest_seq, RequestSeq(0));
    }

    #[test]
    fn test_empty_query_can_be_enabled() {
        let state = SearchState::new(SearchOptions::default(), true);
        let (_, effect) = state.reduce(Action::Submit);
        assert!(matches!(effect, Some(Effect::Dispatch { ref request, .. }) if request.query.is_empty()));
    }

    #[test]
    fn test_success_replaces_entries() {
        let (state, seq) = submit(with_query("a"));
        let state = finish(state, seq, Ok(vec![entry("1"), entry("2")]));
        assert_eq!(ids(&state), vec!["1", "2"]);

        let (state, seq) = submit(state);
        let state = finish(state, seq, Ok(vec![entry("3")]));
        assert_eq!(ids(&state), vec!["3"]);
        assert_eq!(state.status, SearchStatus::Idle);
        assert!(state.has_searched);
    }

    #[test]
    fn test_failure_keeps_previous_entries() {
        let (state, seq) = submit(with_query("a"));
        let state = finish(state, seq, Ok(vec![entry("1")]));

        let (state, seq) = submit(state);
        let state = finish(state, seq, Err("connection refused".to_string()));

        assert_eq!(ids(&state), vec!["1"]);
        assert_eq!(state.status, SearchStatus::Failed("connection refused".to_string()));
        assert!(!state.in_flight());
    }

    #[test]
    fn test_latest_submitted_search_wins() {
        let (state, first) = submit(with_query("a"));
        let (state, second) = submit(state);
        assert!(second > first);

        // Second answer arrives first, then the stale one
        let state = finish(state, second, Ok(vec![entry("new")]));
        let state = finish(state, first, Ok(vec![entry("old")]));

        assert_eq!(ids(&state), vec!["new"]);
        assert_eq!(state.status, SearchStatus::Idle);
    }

    #[test]
    fn test_stale_failure_does_not_touch_status() {
        let (state, first) = submit(with_query("a"));
        let (state, second) = submit(state);

        let state = finish(state, first, Err("timeout".to_string()));
        assert!(matches!(state.status, SearchStatus::Searching { seq, .. } if seq == second));
    }

    #[test]
    fn test_show_scores_applies_to_next_result_set() {
        let (state, seq) = submit(with_query("a"));
        let state = finish(state, seq, Ok(vec![entry("1")]));

        let (state, _) = state.reduce(Action::SetShowScores(true));
        assert!(state.options.show_scores);
        assert!(!state.displayed_show_scores);

        let (state, seq) = submit(state);
        // Old results are still on screen while the request is in flight
        assert!(!state.displayed_show_scores);

        let state = finish(state, seq, Ok(vec![entry("2")]));
        assert!(state.displayed_show_scores);
    }

    #[test]
    fn test_failed_search_keeps_score_visibility_of_shown_results() {
        let (state, seq) = submit(with_query("a"));
        let state = finish(state, seq, Ok(vec![entry("old")]));

        let (state, _) = state.reduce(Action::SetShowScores(true));
        let (state, seq) = submit(state);
        let state = finish(state, seq, Err("boom".to_string()));

        assert_eq!(ids(&state), vec!["old"]);
        assert!(!state.displayed_show_scores);
        assert!(state.options.show_scores);
    }

    #[test]
    fn test_settings_edits_do_not_dispatch() {
        let state = with_query("a");
        let actions = [
            Action::SetSnippetLength(SnippetLength::Minutes5),
            Action::SetResultCount(ResultCount::new(50)),
            Action::SetShowScores(true),
            Action::SetQueryOptimization(true),
            Action::EditQuery("b".to_string()),
        ];
        let mut state = state;
        for action in actions {
            let (next, effect) = state.reduce(action);
            assert_eq!(effect, None);
            state = next;
        }
        assert_eq!(state.latest_seq, RequestSeq(0));
    }
}
