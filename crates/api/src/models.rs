use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Playback offset of a clip, either a number of seconds or a numeric string
/// such as `"125.430000"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StartTime {
    Seconds(f64),
    Text(String),
}

impl Default for StartTime {
    fn default() -> Self {
        StartTime::Seconds(0.0)
    }
}

impl From<f64> for StartTime {
    fn from(secs: f64) -> Self {
        StartTime::Seconds(secs)
    }
}

impl From<&str> for StartTime {
    fn from(text: &str) -> Self {
        StartTime::Text(text.to_string())
    }
}

/// One scored transcript excerpt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipResult {
    #[serde(alias = "startTime", alias = "start")]
    pub start_time: StartTime,
    #[serde(default, alias = "transcriptText", alias = "text")]
    pub transcript_text: String,
    #[serde(default)]
    pub score: Option<f64>,
}

/// One episode matched by a search. `snippets[0]` is the best ranked clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeResult {
    #[serde(alias = "episodeId")]
    pub episode_id: String,
    #[serde(default, alias = "episodeName")]
    pub episode_name: String,
    #[serde(default, alias = "showName")]
    pub show_name: String,
    #[serde(default, alias = "episodeDescription")]
    pub episode_description: String,
    #[serde(default, alias = "pictureUri")]
    pub picture_uri: Option<String>,
    #[serde(
        default,
        alias = "releaseDate",
        deserialize_with = "ReleaseDate::deserialize_lenient"
    )]
    pub release_date: Option<ReleaseDate>,
    #[serde(default, alias = "durationMs")]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub snippets: Vec<ClipResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReleaseDate(pub NaiveDate);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReleaseDate {
    EpochMillis(i64),
    Text(String),
}

impl ReleaseDate {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Accepts `YYYY-MM-DD`, `YYYY-MM`, `YYYY`, RFC 3339 timestamps and epoch
    /// milliseconds.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Some(Self(date));
        }
        if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
            return Some(Self(datetime.date_naive()));
        }
        // Month or year precision
        let padded = match text.len() {
            7 => format!("{text}-01"),
            4 => format!("{text}-01-01"),
            _ => return None,
        };
        NaiveDate::parse_from_str(&padded, "%Y-%m-%d").ok().map(Self)
    }

    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(|dt| Self(dt.date_naive()))
    }

    /// Unrecognized dates become `None` instead of failing the whole response.
    fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawReleaseDate>::deserialize(deserializer)?;
        Ok(raw.and_then(|raw| match raw {
            RawReleaseDate::EpochMillis(millis) => Self::from_epoch_millis(millis),
            RawReleaseDate::Text(text) => Self::parse(&text),
        }))
    }
}

impl Serialize for ReleaseDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.format("%Y-%m-%d").to_string())
    }
}

impl<'de> Deserialize<'de> for ReleaseDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid release date `{text}`")))
    }
}
