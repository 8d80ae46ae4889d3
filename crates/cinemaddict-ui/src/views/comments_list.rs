//! Comment list shown at the bottom of the film details popup

use cinemaddict_core::{format_comment_date, Comment, CommentId};
use tracing::warn;

use crate::framework::{View, ViewBase};

fn comment_template(comment: &Comment) -> String {
    format!(
        r#"<li class="film-details__comment">
            <span class="film-details__comment-emoji">
              <img src="{emoji}" width="55" height="55" alt="emoji-{emotion}">
            </span>
            <div>
              <p class="film-details__comment-text">{text}</p>
              <p class="film-details__comment-info">
                <span class="film-details__comment-author">{author}</span>
                <span class="film-details__comment-day">{day}</span>
                <button class="film-details__comment-delete">Delete</button>
              </p>
            </div>
          </li>"#,
        emoji = comment.emotion.image_path(),
        emotion = comment.emotion.as_str(),
        text = comment.comment,
        author = comment.author,
        day = format_comment_date(&comment.date),
    )
}

/// Markup for a list of comments, one `film-details__comment` item each
pub fn comments_list_template(comments: &[Comment]) -> String {
    let items: String = comments.iter().map(comment_template).collect();

    format!(
        r#"<section class="film-details__comments-wrap">
        <h3 class="film-details__comments-title">Comments <span class="film-details__comments-count">{count}</span></h3>
        <ul class="film-details__comments-list">{items}</ul>
      </section>"#,
        count = comments.len(),
        items = items,
    )
}

/// Renders the comments of one film.
///
/// Built from the film's comment ids and the full comment collection; the
/// ids are resolved once, at construction.
pub struct CommentsListView {
    base: ViewBase,
    comments: Vec<Comment>,
}

impl CommentsListView {
    /// Resolve `ids` against `all_comments`, keeping id order.
    /// Ids with no matching comment are skipped.
    pub fn new(ids: &[CommentId], all_comments: &[Comment]) -> Self {
        let comments = ids
            .iter()
            .filter_map(|id| {
                let found = all_comments.iter().find(|comment| &comment.id == id);
                if found.is_none() {
                    warn!(comment = %id, "comment id not found in collection, skipping");
                }
                found.cloned()
            })
            .collect();

        Self {
            base: ViewBase::new(),
            comments,
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}

impl View for CommentsListView {
    type Interaction = ();

    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn template(&self) -> String {
        comments_list_template(&self.comments)
    }
}
