use crate::error::{Error, Result};
use crate::options::SearchRequest;
use url::Url;

const SEARCH_PATH: &str = "search";

/// `{base}/search?q=..&length=..&openai=..&results=..`
pub fn build_search_url(base_url: &str, request: &SearchRequest) -> Result<Url> {
    let base = normalize_base(base_url);
    let mut url = Url::parse(&format!("{base}/{SEARCH_PATH}")).map_err(|source| {
        Error::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        }
    })?;

    let openai = if request.use_query_optimization {
        "true"
    } else {
        "false"
    };

    url.query_pairs_mut()
        .clear()
        .append_pair("q", &request.query)
        .append_pair("length", &request.snippet_length.as_secs().to_string())
        .append_pair("openai", openai)
        .append_pair("results", &request.result_count.get().to_string());

    Ok(url)
}

fn normalize_base(base_url: &str) -> String {
    let trimmed = base_url.trim();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    with_scheme.trim_end_matches('/').to_string()
}
