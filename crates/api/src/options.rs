use crate::error::Error;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Length of the transcript window the service cuts around each hit.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    strum::Display,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum SnippetLength {
    #[default]
    #[strum(to_string = "30 s")]
    Seconds30,
    #[strum(to_string = "2 min")]
    Minutes2,
    #[strum(to_string = "5 min")]
    Minutes5,
}

impl SnippetLength {
    pub fn as_secs(self) -> u32 {
        match self {
            SnippetLength::Seconds30 => 30,
            SnippetLength::Minutes2 => 120,
            SnippetLength::Minutes5 => 300,
        }
    }
}

impl TryFrom<u32> for SnippetLength {
    type Error = Error;

    fn try_from(secs: u32) -> Result<Self, Self::Error> {
        match secs {
            30 => Ok(SnippetLength::Seconds30),
            120 => Ok(SnippetLength::Minutes2),
            300 => Ok(SnippetLength::Minutes5),
            other => Err(Error::InvalidSnippetLength(other)),
        }
    }
}

impl From<SnippetLength> for u32 {
    fn from(length: SnippetLength) -> Self {
        length.as_secs()
    }
}

/// Number of episodes to ask for. Always a multiple of 10 within `[10, 50]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct ResultCount(u32);

impl ResultCount {
    pub const MIN: u32 = 10;
    pub const MAX: u32 = 50;
    pub const STEP: u32 = 10;

    /// Snaps `n` to the nearest step and clamps it into range.
    pub fn new(n: u32) -> Self {
        let snapped = n.saturating_add(Self::STEP / 2) / Self::STEP * Self::STEP;
        Self(snapped.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for ResultCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<u32> for ResultCount {
    fn from(n: u32) -> Self {
        Self::new(n)
    }
}

impl From<ResultCount> for u32 {
    fn from(count: ResultCount) -> Self {
        count.0
    }
}

/// User adjustable search settings.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SearchOptions {
    pub snippet_length: SnippetLength,
    pub result_count: ResultCount,
    /// Presentation only, never sent to the service
    pub show_scores: bool,
    /// Let the service rewrite the query with a language model first
    pub use_query_optimization: bool,
}

/// One search call. Built fresh on every submit.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub snippet_length: SnippetLength,
    pub result_count: ResultCount,
    pub use_query_optimization: bool,
}

impl SearchRequest {
    pub fn from_options(query: impl Into<String>, options: &SearchOptions) -> Self {
        Self {
            query: query.into(),
            snippet_length: options.snippet_length,
            result_count: options.result_count,
            use_query_optimization: options.use_query_optimization,
        }
    }
}
