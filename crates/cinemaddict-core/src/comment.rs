//! Comment records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a comment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub String);

impl CommentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for CommentId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

/// Reaction attached to a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Smile,
    Sleeping,
    Puke,
    Angry,
}

impl Emotion {
    /// Name used in emoji asset paths and alt texts
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Smile => "smile",
            Emotion::Sleeping => "sleeping",
            Emotion::Puke => "puke",
            Emotion::Angry => "angry",
        }
    }

    /// Relative path of the emoji image for this emotion
    pub fn image_path(&self) -> String {
        format!("./images/emoji/{}.png", self.as_str())
    }
}

/// A single user comment on a film
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    /// Comment body
    pub comment: String,
    pub date: DateTime<Utc>,
    pub emotion: Emotion,
}
