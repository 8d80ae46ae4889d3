//! Concrete views of the film details popup

mod comments_list;
mod film_details;

pub use comments_list::{comments_list_template, CommentsListView};
pub use film_details::{film_details_template, FilmControl, FilmDetailsView, ACTIVE_CLASS};
