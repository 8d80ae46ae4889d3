//! Property-based tests for the film details popup
//!
//! Uses proptest to check the template and toggle invariants over
//! arbitrary film records.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{TimeZone, Utc};
use cinemaddict_core::{Film, FilmId, FilmInfo, Release, UserDetails};
use cinemaddict_ui::{film_details_template, FilmControl, FilmDetailsView, View};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Plain text without markup characters
fn text_strategy(max: usize) -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("[a-zA-Z0-9][a-zA-Z0-9 .,']{{0,{}}}", max))
        .expect("valid regex")
}

fn genres_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[A-Z][a-z-]{0,11}").expect("valid regex"),
        0..6,
    )
}

fn user_details_strategy() -> impl Strategy<Value = UserDetails> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(watchlist, already_watched, favorite)| {
        UserDetails {
            watchlist,
            already_watched,
            watching_date: None,
            favorite,
        }
    })
}

fn film_strategy() -> impl Strategy<Value = Film> {
    (
        text_strategy(60),
        text_strategy(200),
        0u8..=21,
        genres_strategy(),
        0u32..400,
        user_details_strategy(),
    )
        .prop_map(|(title, description, age_rating, genres, runtime, user_details)| Film {
            id: FilmId::from("0"),
            comments: Vec::new(),
            film_info: FilmInfo {
                alternative_title: format!("{} (original)", title),
                title,
                total_rating: 7.5,
                poster: "./images/posters/poster.jpg".to_string(),
                age_rating,
                director: "Director".to_string(),
                writers: vec!["Writer".to_string()],
                actors: vec!["Actor".to_string()],
                release: Release {
                    date: Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap(),
                    release_country: "Japan".to_string(),
                },
                runtime,
                genres,
                description,
            },
            user_details,
        })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Title, description and age rating appear verbatim in the markup
    #[test]
    fn template_contains_read_only_fields(film in film_strategy()) {
        let markup = film_details_template(&film);

        prop_assert!(markup.contains(&film.film_info.title));
        prop_assert!(markup.contains(&film.film_info.description));
        let age = format!("{}+", film.film_info.age_rating);
        prop_assert!(markup.contains(&age));
    }

    /// Exactly one genre tag per genre, in input order
    #[test]
    fn one_genre_tag_per_genre(film in film_strategy()) {
        let view = FilmDetailsView::new(film.clone(), &[]).unwrap();
        let tags: Vec<String> = view
            .element()
            .unwrap()
            .query_selector_all(".film-details__genre")
            .unwrap()
            .iter()
            .map(|tag| tag.text_content())
            .collect();

        prop_assert_eq!(tags, film.film_info.genres);
    }

    /// Each watchlist click runs the callback once and flips only the
    /// watchlist control
    #[test]
    fn watchlist_clicks_flip_only_watchlist(film in film_strategy(), clicks in 0usize..6) {
        let initial = film.user_details;
        let view = FilmDetailsView::new(film, &[]).unwrap();
        let hits = Rc::new(Cell::new(0usize));
        let counter = hits.clone();
        view.set_on_watchlist_click(move || {
            counter.set(counter.get() + 1);
            Ok(())
        }).unwrap();

        let button = view.control(FilmControl::Watchlist).unwrap();
        for _ in 0..clicks {
            button.click();
        }

        prop_assert_eq!(hits.get(), clicks);
        prop_assert_eq!(
            view.is_control_active(FilmControl::Watchlist).unwrap(),
            initial.watchlist ^ (clicks % 2 == 1)
        );
        prop_assert_eq!(view.is_control_active(FilmControl::Watched).unwrap(), initial.already_watched);
        prop_assert_eq!(view.is_control_active(FilmControl::Favorite).unwrap(), initial.favorite);
    }

    /// The element is built once and reused until removed
    #[test]
    fn element_identity_holds(film in film_strategy()) {
        let view = FilmDetailsView::new(film, &[]).unwrap();
        let first = view.element().unwrap();
        prop_assert!(first.is_same_node(&view.element().unwrap()));

        view.remove_element();
        prop_assert!(!first.is_same_node(&view.element().unwrap()));
    }
}
