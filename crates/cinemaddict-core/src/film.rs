//! Film record types
//!
//! The layout follows the server JSON shape (snake_case keys, `genre` for the
//! genre list) so records deserialize straight from an API response or file.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::comment::CommentId;

/// Unique identifier for a film
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmId(pub String);

impl FilmId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FilmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FilmId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A film with its metadata, the ids of its comments and the user's flags.
///
/// Treated as immutable by the views; the owner of the authoritative copy
/// (a presenter) replaces or mutates it in response to view callbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: FilmId,
    /// Ids of the comments attached to this film, in display order
    #[serde(default)]
    pub comments: Vec<CommentId>,
    pub film_info: FilmInfo,
    pub user_details: UserDetails,
}

impl Film {
    /// Whether the film carries at least one comment id
    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }
}

/// Read-only film metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmInfo {
    pub title: String,
    pub alternative_title: String,
    pub total_rating: f64,
    /// Poster image reference (relative path or URL)
    pub poster: String,
    pub age_rating: u8,
    pub director: String,
    #[serde(default)]
    pub writers: Vec<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    pub release: Release,
    /// Runtime in minutes
    pub runtime: u32,
    #[serde(rename = "genre", default)]
    pub genres: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    /// RFC 3339 timestamp, or a bare `YYYY-MM-DD` read as midnight UTC
    #[serde(deserialize_with = "deserialize_release_date")]
    pub date: DateTime<Utc>,
    pub release_country: String,
}

fn deserialize_release_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(date) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(date.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|err| serde::de::Error::custom(format!("invalid release date {:?}: {}", raw, err)))
}

/// Per-user flags, each independent of the others
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserDetails {
    pub watchlist: bool,
    pub already_watched: bool,
    /// When the film was marked as watched, if known
    #[serde(default)]
    pub watching_date: Option<DateTime<Utc>>,
    pub favorite: bool,
}
