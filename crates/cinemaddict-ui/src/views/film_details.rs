//! Film details popup
//!
//! [`film_details_template`] renders a [`Film`] into the popup markup and
//! [`FilmDetailsView`] wraps it as a view with a close button, three flag
//! toggles and a mounted comment list.
//!
//! The class names in the markup are what stylesheets and automation key
//! on; they must not change.
//!
//! # Hardening gap
//!
//! Field values are interpolated verbatim, without HTML escaping. Markup in
//! a title or description becomes live markup in the popup. Anything that
//! renders records from an untrusted source must sanitize them first.
//!
//! # Toggle state
//!
//! A toggle's active class is flipped in place on the clicked control after
//! its callback returns `Ok`, instead of re-rendering the whole popup (which
//! would drop the mounted comment list). A callback returning `Err` leaves
//! the control as it was. Owners that confirm a change later can call
//! [`FilmDetailsView::sync_controls`] with the authoritative flags.

use std::fmt;
use std::str::FromStr;

use cinemaddict_core::{format_release_date, format_runtime, Comment, CommentId, Film, UserDetails};
use tracing::{debug, warn};

use super::comments_list::CommentsListView;
use crate::dom::{Element, Event, EventKind};
use crate::framework::{render, CallbackRegistry, RenderPosition, View, ViewBase};
use crate::error::ViewResult;

/// Class marking a toggle control as active
pub const ACTIVE_CLASS: &str = "film-details__control-button--active";

const COMMENTS_CONTAINER: &str = ".film-details__bottom-container";

/// Interactive controls of the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilmControl {
    Close,
    Watchlist,
    Watched,
    Favorite,
}

impl FilmControl {
    /// Controls that carry an active/inactive state
    pub const TOGGLES: [FilmControl; 3] = [
        FilmControl::Watchlist,
        FilmControl::Watched,
        FilmControl::Favorite,
    ];

    pub fn selector(&self) -> &'static str {
        match self {
            FilmControl::Close => ".film-details__close-btn",
            FilmControl::Watchlist => ".film-details__control-button--watchlist",
            FilmControl::Watched => ".film-details__control-button--watched",
            FilmControl::Favorite => ".film-details__control-button--favorite",
        }
    }

    pub fn is_toggle(&self) -> bool {
        !matches!(self, FilmControl::Close)
    }

    /// The flag this control mirrors, if it is a toggle
    pub fn flag(&self, details: &UserDetails) -> Option<bool> {
        match self {
            FilmControl::Close => None,
            FilmControl::Watchlist => Some(details.watchlist),
            FilmControl::Watched => Some(details.already_watched),
            FilmControl::Favorite => Some(details.favorite),
        }
    }

    fn listener_key(&self) -> &'static str {
        match self {
            FilmControl::Close => "film-details:close",
            FilmControl::Watchlist => "film-details:watchlist",
            FilmControl::Watched => "film-details:watched",
            FilmControl::Favorite => "film-details:favorite",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilmControl::Close => "close",
            FilmControl::Watchlist => "watchlist",
            FilmControl::Watched => "watched",
            FilmControl::Favorite => "favorite",
        }
    }
}

impl fmt::Display for FilmControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilmControl {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "close" => Ok(FilmControl::Close),
            "watchlist" => Ok(FilmControl::Watchlist),
            "watched" => Ok(FilmControl::Watched),
            "favorite" => Ok(FilmControl::Favorite),
            other => Err(format!(
                "unknown control '{}', expected close, watchlist, watched or favorite",
                other
            )),
        }
    }
}

fn active_class(flag: bool) -> String {
    if flag {
        format!(" {}", ACTIVE_CLASS)
    } else {
        String::new()
    }
}

fn genres_template(genres: &[String]) -> String {
    genres
        .iter()
        .map(|genre| format!(r#"<span class="film-details__genre">{}</span>"#, genre))
        .collect()
}

/// Markup for the popup of `film`. Pure; fields are not escaped.
pub fn film_details_template(film: &Film) -> String {
    let info = &film.film_info;
    let details = &film.user_details;

    format!(
        r#"<section class="film-details">
  <form class="film-details__inner" action="" method="get">
    <div class="film-details__top-container">
      <div class="film-details__close">
        <button class="film-details__close-btn" type="button">close</button>
      </div>
      <div class="film-details__info-wrap">
        <div class="film-details__poster">
          <img class="film-details__poster-img" src="{poster}" alt="">

          <p class="film-details__age">{age_rating}+</p>
        </div>

        <div class="film-details__info">
          <div class="film-details__info-head">
            <div class="film-details__title-wrap">
              <h3 class="film-details__title">{title}</h3>
              <p class="film-details__title-original">{alternative_title}</p>
            </div>

            <div class="film-details__rating">
              <p class="film-details__total-rating">{total_rating}</p>
            </div>
          </div>

          <table class="film-details__table">
            <tr class="film-details__row">
              <td class="film-details__term">Director</td>
              <td class="film-details__cell">{director}</td>
            </tr>
            <tr class="film-details__row">
              <td class="film-details__term">Writers</td>
              <td class="film-details__cell">{writers}</td>
            </tr>
            <tr class="film-details__row">
              <td class="film-details__term">Actors</td>
              <td class="film-details__cell">{actors}</td>
            </tr>
            <tr class="film-details__row">
              <td class="film-details__term">Release Date</td>
              <td class="film-details__cell">{release_date}</td>
            </tr>
            <tr class="film-details__row">
              <td class="film-details__term">Runtime</td>
              <td class="film-details__cell">{runtime}</td>
            </tr>
            <tr class="film-details__row">
              <td class="film-details__term">Country</td>
              <td class="film-details__cell">{country}</td>
            </tr>
            <tr class="film-details__row">
              <td class="film-details__term">Genres</td>
              <td class="film-details__cell">
                {genres}
              </td>
            </tr>
          </table>

          <p class="film-details__film-description">
            {description}
          </p>
        </div>
      </div>

      <section class="film-details__controls">
        <button type="button" class="film-details__control-button film-details__control-button--watchlist{watchlist_class}" id="watchlist" name="watchlist">Add to watchlist</button>
        <button type="button" class="film-details__control-button film-details__control-button--watched{watched_class}" id="watched" name="watched">Already watched</button>
        <button type="button" class="film-details__control-button film-details__control-button--favorite{favorite_class}" id="favorite" name="favorite">Add to favorites</button>
      </section>
    </div>

    <div class="film-details__bottom-container"></div>
  </form>
</section>"#,
        poster = info.poster,
        age_rating = info.age_rating,
        title = info.title,
        alternative_title = info.alternative_title,
        total_rating = info.total_rating,
        director = info.director,
        writers = info.writers.join(", "),
        actors = info.actors.join(", "),
        release_date = format_release_date(&info.release.date),
        runtime = format_runtime(info.runtime),
        country = info.release.release_country,
        genres = genres_template(&info.genres),
        description = info.description,
        watchlist_class = active_class(details.watchlist),
        watched_class = active_class(details.already_watched),
        favorite_class = active_class(details.favorite),
    )
}

/// The film details popup.
///
/// Owns the film record it was built from and the comment list mounted
/// into its bottom container.
pub struct FilmDetailsView {
    base: ViewBase<FilmControl>,
    film: Film,
    comments_view: Option<CommentsListView>,
}

impl FilmDetailsView {
    /// Build the view; when the film has comment ids, the element is
    /// materialized right away and the comment list mounted into it.
    pub fn new(film: Film, comments: &[Comment]) -> ViewResult<Self> {
        let mut view = Self {
            base: ViewBase::new(),
            film,
            comments_view: None,
        };

        if view.film.has_comments() {
            let ids = view.film.comments.clone();
            view.add_comments(&ids, comments)?;
        }

        Ok(view)
    }

    pub fn film(&self) -> &Film {
        &self.film
    }

    pub fn comments_view(&self) -> Option<&CommentsListView> {
        self.comments_view.as_ref()
    }

    /// Mount a comment list for `ids` into the bottom container, replacing
    /// a previously mounted one.
    pub fn add_comments(&mut self, ids: &[CommentId], comments: &[Comment]) -> ViewResult<()> {
        let container = self.require(COMMENTS_CONTAINER)?;
        if let Some(previous) = self.comments_view.take() {
            crate::framework::remove(&previous);
        }

        let list = CommentsListView::new(ids, comments);
        render(&list, &container, RenderPosition::BeforeEnd)?;
        debug!(film = %self.film.id, comments = list.comments().len(), "mounted comment list");

        self.comments_view = Some(list);
        Ok(())
    }

    pub fn set_on_close_btn_click<F>(&self, callback: F) -> ViewResult<()>
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        self.bind(FilmControl::Close, callback)
    }

    pub fn set_on_watchlist_click<F>(&self, callback: F) -> ViewResult<()>
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        self.bind(FilmControl::Watchlist, callback)
    }

    pub fn set_on_watched_click<F>(&self, callback: F) -> ViewResult<()>
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        self.bind(FilmControl::Watched, callback)
    }

    pub fn set_on_favorite_click<F>(&self, callback: F) -> ViewResult<()>
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        self.bind(FilmControl::Favorite, callback)
    }

    /// Element of `control` inside the popup
    pub fn control(&self, control: FilmControl) -> ViewResult<Element> {
        self.require(control.selector())
    }

    pub fn is_control_active(&self, control: FilmControl) -> ViewResult<bool> {
        Ok(self.control(control)?.has_class(ACTIVE_CLASS))
    }

    /// Set every toggle's active class from `details`, in place
    pub fn sync_controls(&self, details: &UserDetails) -> ViewResult<()> {
        for control in FilmControl::TOGGLES {
            let element = self.control(control)?;
            if control.flag(details).unwrap_or(false) {
                element.add_class(ACTIVE_CLASS);
            } else {
                element.remove_class(ACTIVE_CLASS);
            }
        }
        Ok(())
    }

    fn bind<F>(&self, control: FilmControl, callback: F) -> ViewResult<()>
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        let target = self.control(control)?;
        let replaced = self.base.callbacks().set(control, callback);

        let callbacks = self.base.callbacks().clone();
        let bound = target.add_event_listener(EventKind::Click, control.listener_key(), move |event| {
            on_control_click(&callbacks, control, event);
        });

        if bound {
            debug!(%control, "bound click listener");
        } else {
            debug!(%control, replaced, "click listener already bound, callback updated");
        }
        Ok(())
    }
}

fn on_control_click(callbacks: &CallbackRegistry<FilmControl>, control: FilmControl, event: &mut Event) {
    event.prevent_default();

    match callbacks.invoke(&control) {
        Some(Ok(())) => {
            if control.is_toggle() {
                let active = event.current_target().toggle_class(ACTIVE_CLASS);
                debug!(%control, active, "toggled control");
            }
        }
        Some(Err(err)) => {
            warn!(%control, error = %err, "click callback failed, control left unchanged");
        }
        None => {
            warn!(%control, "click on control without a registered callback");
        }
    }
}

impl View for FilmDetailsView {
    type Interaction = FilmControl;

    fn base(&self) -> &ViewBase<FilmControl> {
        &self.base
    }

    fn template(&self) -> String {
        film_details_template(&self.film)
    }
}
