//! Cinemaddict core records
//!
//! Plain data types for films and their comments, plus the display
//! formatters the popup views rely on.
//!
//! ## Modules
//!
//! - [`film`]: film record with nested info and per-user flags
//! - [`comment`]: comment record and emotion set
//! - [`format`]: release date, runtime and comment date formatting

pub mod comment;
pub mod film;
pub mod format;

pub use comment::{Comment, CommentId, Emotion};
pub use film::{Film, FilmId, FilmInfo, Release, UserDetails};
pub use format::{format_comment_date, format_release_date, format_runtime};
