use crate::error::{Error, Result};
use crate::models::EpisodeResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Which field of the response body carries the episode array.
///
/// The field was renamed between service versions; this is the only place
/// that knows about either spelling.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseSchema {
    /// `{"results": [...]}`
    Current,
    /// `{"unformated_results": [...]}`
    Legacy,
    /// Try `Current`, then `Legacy`
    #[default]
    Auto,
}

impl ResponseSchema {
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            ResponseSchema::Current => &["results"],
            ResponseSchema::Legacy => &["unformated_results"],
            ResponseSchema::Auto => &["results", "unformated_results"],
        }
    }
}

/// Decodes a response body into episode results.
///
/// A bare top level array is accepted under every schema. Entries without
/// snippets are dropped since every rendered episode needs a top clip.
pub fn decode_response(body: &[u8], schema: ResponseSchema) -> Result<Vec<EpisodeResult>> {
    let mut value: Value = serde_json::from_slice(body)?;

    let results = if value.is_array() {
        value
    } else {
        schema
            .field_names()
            .iter()
            .find_map(|name| value.get_mut(*name).map(Value::take))
            .ok_or(Error::MissingResultsField(schema.field_names()))?
    };

    if results.is_null() {
        return Ok(Vec::new());
    }

    let raw_entries: Vec<Value> = serde_json::from_value(results)?;

    Ok(raw_entries
        .into_iter()
        .enumerate()
        .filter_map(|(idx, raw)| match serde_json::from_value::<EpisodeResult>(raw) {
            Ok(entry) if entry.snippets.is_empty() => {
                warn!(episode_id = %entry.episode_id, "Dropping episode without snippets");
                None
            }
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(index = idx, "Dropping malformed episode: {e}");
                None
            }
        })
        .collect())
}
