//! Wire contract of the podcast transcript search endpoint.
//!
//! Everything that knows how the remote service spells its parameters and
//! response fields lives here, so callers only ever see [`EpisodeResult`]s.

mod client;
mod error;
mod models;
mod options;
mod response;
mod endpoint;

pub use client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, SearchClient};
pub use error::{Error, Result};
pub use models::{ClipResult, EpisodeResult, ReleaseDate, StartTime};
pub use options::{ResultCount, SearchOptions, SearchRequest, SnippetLength};
pub use response::{ResponseSchema, decode_response};
pub use endpoint::build_search_url;
