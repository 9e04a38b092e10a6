pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid base url `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search endpoint answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("search response has none of the fields {0:?}")]
    MissingResultsField(&'static [&'static str]),

    #[error("snippet length must be one of 30, 120 or 300 seconds, got {0}")]
    InvalidSnippetLength(u32),
}
