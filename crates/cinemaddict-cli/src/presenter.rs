//! Film popup presenter
//!
//! Owns the authoritative copy of a film while its popup is open and keeps
//! it in step with the popup's controls.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::{bail, Result};
use chrono::Utc;
use cinemaddict_core::{Comment, Film, UserDetails};
use cinemaddict_ui::{render, Element, FilmControl, FilmDetailsView, RenderPosition, View};
use tracing::info;

pub struct FilmPopupPresenter {
    film: Rc<RefCell<Film>>,
    view: FilmDetailsView,
    closed: Rc<Cell<bool>>,
}

impl FilmPopupPresenter {
    /// Render the popup for `film` at the end of `container` and wire its
    /// controls
    pub fn open(film: Film, comments: &[Comment], container: &Element) -> Result<Self> {
        let view = FilmDetailsView::new(film.clone(), comments)?;
        render(&view, container, RenderPosition::BeforeEnd)?;

        let film = Rc::new(RefCell::new(film));
        let closed = Rc::new(Cell::new(false));

        // weak, so the listener on a descendant does not keep the popup alive
        let popup = view.element()?.downgrade();
        let flag = closed.clone();
        view.set_on_close_btn_click(move || {
            if let Some(element) = popup.upgrade() {
                element.remove();
            }
            flag.set(true);
            info!("popup closed");
            Ok(())
        })?;

        view.set_on_watchlist_click(flag_toggle(&film, FilmControl::Watchlist))?;
        view.set_on_watched_click(flag_toggle(&film, FilmControl::Watched))?;
        view.set_on_favorite_click(flag_toggle(&film, FilmControl::Favorite))?;

        info!(film = %film.borrow().id, "popup opened");
        Ok(Self { film, view, closed })
    }

    /// Simulate a user click on `control`
    pub fn click(&self, control: FilmControl) -> Result<()> {
        if !self.is_open() {
            bail!("cannot click '{}': popup is closed", control);
        }
        self.view.control(control)?.click();
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        !self.closed.get()
    }

    /// Current authoritative record
    pub fn film(&self) -> Film {
        self.film.borrow().clone()
    }

    pub fn view(&self) -> &FilmDetailsView {
        &self.view
    }
}

fn flag_mut(details: &mut UserDetails, control: FilmControl) -> Option<&mut bool> {
    match control {
        FilmControl::Close => None,
        FilmControl::Watchlist => Some(&mut details.watchlist),
        FilmControl::Watched => Some(&mut details.already_watched),
        FilmControl::Favorite => Some(&mut details.favorite),
    }
}

fn flag_toggle(
    film: &Rc<RefCell<Film>>,
    control: FilmControl,
) -> impl Fn() -> Result<()> + 'static {
    let film = Rc::clone(film);
    move || {
        let mut film = film.borrow_mut();
        let value = match flag_mut(&mut film.user_details, control) {
            Some(flag) => {
                *flag = !*flag;
                *flag
            }
            None => bail!("'{}' is not a toggle", control),
        };
        if control == FilmControl::Watched {
            film.user_details.watching_date = value.then(Utc::now);
        }
        info!(film = %film.id, %control, value, "updated user details");
        Ok(())
    }
}
