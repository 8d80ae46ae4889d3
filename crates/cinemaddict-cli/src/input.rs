//! Loading films and comments from JSON files

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cinemaddict_core::{Comment, Film};
use serde::de::DeserializeOwned;

fn load_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file {}", what, path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {} file {}", what, path.display()))
}

/// Read a JSON array of films
pub fn load_films(path: &Path) -> Result<Vec<Film>> {
    load_json(path, "films")
}

/// Read a JSON array of comments; no path means no comments
pub fn load_comments(path: Option<&Path>) -> Result<Vec<Comment>> {
    match path {
        Some(path) => load_json(path, "comments"),
        None => Ok(Vec::new()),
    }
}
