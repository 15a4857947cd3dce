// Data models for channel/playlist listing

use serde::{Deserialize, Deserializer};

/// Base of the canonical watch URL written for every record
pub const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// One listed video: a non-empty title and a non-empty identifier.
///
/// The identifier is normally the opaque video id; when the extractor
/// omitted it, the entry's raw `url` field is used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    title: String,
    id: String,
}

impl VideoRecord {
    /// Returns `None` when either field is empty.
    pub fn new(title: impl Into<String>, id: impl Into<String>) -> Option<Self> {
        let title = title.into();
        let id = id.into();
        if title.is_empty() || id.is_empty() {
            return None;
        }
        Some(Self { title, id })
    }

    /// Normalize a raw extractor entry, falling back to `url` when `id` is missing or empty.
    pub fn from_entry(entry: RawEntry) -> Option<Self> {
        let RawEntry { title, id, url } = entry;
        let title = title.filter(|t| !t.is_empty())?;
        let id = id.filter(|i| !i.is_empty()).or(url)?;
        Self::new(title, id)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn watch_url(&self) -> String {
        format!("{}{}", WATCH_URL_BASE, self.id)
    }
}

/// What to list: a source URL and how many videos to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    source_url: String,
    max_count: usize,
}

impl ListingRequest {
    /// Returns `None` for a blank URL or a zero count.
    pub fn new(source_url: impl Into<String>, max_count: usize) -> Option<Self> {
        let source_url = source_url.into();
        if source_url.trim().is_empty() || max_count == 0 {
            return None;
        }
        Some(Self {
            source_url,
            max_count,
        })
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }
}

/// Top-level flat listing as dumped by yt-dlp (`--dump-single-json`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListing {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entries: Vec<Option<RawEntry>>,
}

/// One flat entry; any field may be missing or of an unexpected type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawEntry {
    #[serde(default, deserialize_with = "string_only")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    pub url: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Option<RawEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Option<RawEntry>>>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(|s| s.to_string()))
}
