//! Cinemaddict UI
//!
//! View components for the film details popup, built on a small retained
//! DOM that lives entirely in Rust.
//!
//! ## Layers
//!
//! - [`dom`]: elements, class lists, selector queries and click dispatch
//! - [`framework`]: the [`View`] trait (lazy, cached element from a
//!   template), callback registry and mount helpers
//! - [`views`]: the film details popup and its comment list
//!
//! ## Flow
//!
//! ```ignore
//! let view = FilmDetailsView::new(film, &comments)?;
//! render(&view, &page, RenderPosition::BeforeEnd)?;
//! view.set_on_watchlist_click(move || store.toggle_watchlist(&id))?;
//! view.control(FilmControl::Watchlist)?.click();
//! ```
//!
//! Everything is single-threaded and synchronous: handles are `Rc`-based
//! and nothing here is `Send`.

pub mod dom;
pub mod error;
pub mod framework;
pub mod views;

pub use dom::{create_element, Element, Event, EventKind};
pub use error::{DomError, ViewError, ViewResult};
pub use framework::{remove, render, replace, RenderPosition, View, ViewBase};
pub use views::{film_details_template, CommentsListView, FilmControl, FilmDetailsView, ACTIVE_CLASS};
