//! CLI Integration Tests
//!
//! Run the `cinemaddict` binary against JSON fixtures written to a
//! temporary directory.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const FILMS: &str = r#"[
  {
    "id": "0",
    "comments": ["1", "3"],
    "film_info": {
      "title": "Popeye the Sailor Meets Sindbad",
      "alternative_title": "Popeye Meets Sindbad",
      "total_rating": 6.3,
      "poster": "./images/posters/popeye-meets-sinbad.png",
      "age_rating": 6,
      "director": "Dave Fleischer",
      "writers": ["Max Fleischer"],
      "actors": ["Jack Mercer", "Gus Wickie"],
      "release": { "date": "1936-11-27T00:00:00.000Z", "release_country": "USA" },
      "runtime": 125,
      "genre": ["Cartoon", "Comedy"],
      "description": "Sindbad claims to be the greatest sailor."
    },
    "user_details": { "watchlist": false, "already_watched": false, "favorite": true }
  },
  {
    "id": "1",
    "comments": [],
    "film_info": {
      "title": "Santa Claus Conquers the Martians",
      "alternative_title": "Santa vs Mars",
      "total_rating": 2.3,
      "poster": "./images/posters/santa-claus-conquers-the-martians.jpg",
      "age_rating": 0,
      "director": "Nicholas Webster",
      "writers": [],
      "actors": [],
      "release": { "date": "1964-11-14T00:00:00.000Z", "release_country": "USA" },
      "runtime": 81,
      "genre": [],
      "description": "The Martians kidnap Santa Claus."
    },
    "user_details": { "watchlist": true, "already_watched": false, "favorite": false }
  },
  {
    "id": "2",
    "comments": [],
    "film_info": {
      "title": "The Great Flamarion",
      "alternative_title": "Flamarion",
      "total_rating": 8.9,
      "poster": "./images/posters/the-great-flamarion.jpg",
      "age_rating": 12,
      "director": "Anthony Mann",
      "writers": ["Anne Wigton"],
      "actors": ["Erich von Stroheim"],
      "release": { "date": "1945-03-30", "release_country": "USA" },
      "runtime": 45,
      "genre": ["Film-Noir"],
      "description": "The grim tale of a trick shooter."
    },
    "user_details": { "watchlist": false, "already_watched": false, "favorite": false }
  }
]"#;

const COMMENTS: &str = r#"[
  { "id": "1", "author": "Tim Macoveev", "comment": "Interesting setting", "date": "2019-12-31T23:59:00.000Z", "emotion": "smile" },
  { "id": "2", "author": "John Doe", "comment": "Booooooooooring", "date": "2020-01-01T10:00:00.000Z", "emotion": "sleeping" },
  { "id": "3", "author": "Ann Lee", "comment": "Almost two hours? Seriously?", "date": "2020-01-02T08:30:00.000Z", "emotion": "angry" }
]"#;

struct Fixtures {
    dir: TempDir,
    films: PathBuf,
    comments: PathBuf,
}

fn fixtures() -> Fixtures {
    let dir = TempDir::new().unwrap();
    let films = dir.path().join("films.json");
    let comments = dir.path().join("comments.json");
    fs::write(&films, FILMS).unwrap();
    fs::write(&comments, COMMENTS).unwrap();
    Fixtures {
        dir,
        films,
        comments,
    }
}

fn cli_cmd() -> Command {
    Command::cargo_bin("cinemaddict").expect("Failed to find cinemaddict binary")
}

fn popup_cmd(fixtures: &Fixtures, film: &str) -> Command {
    let mut cmd = cli_cmd();
    cmd.arg("popup")
        .arg("--films")
        .arg(&fixtures.films)
        .arg("--comments")
        .arg(&fixtures.comments)
        .arg("--film")
        .arg(film);
    cmd
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_films() {
    let fixtures = fixtures();

    cli_cmd()
        .arg("list")
        .arg("--films")
        .arg(&fixtures.films)
        .assert()
        .success()
        .stdout(predicate::str::contains("0\tPopeye the Sailor Meets Sindbad"))
        .stdout(predicate::str::contains("1\tSanta Claus Conquers the Martians"));
}

#[test]
fn test_list_missing_file_fails() {
    let fixtures = fixtures();

    cli_cmd()
        .arg("list")
        .arg("--films")
        .arg(fixtures.dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read films file"));
}

// ============================================================================
// Popup Command Tests
// ============================================================================

#[test]
fn test_popup_renders_film_and_comments() {
    let fixtures = fixtures();

    popup_cmd(&fixtures, "0")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<section class="film-details">"#))
        .stdout(predicate::str::contains("Popeye the Sailor Meets Sindbad"))
        .stdout(predicate::str::contains("27 Nov 1936"))
        .stdout(predicate::str::contains("2h 05m"))
        .stdout(predicate::str::contains("Interesting setting"))
        .stdout(predicate::str::contains("Almost two hours? Seriously?"))
        .stdout(predicate::str::contains("Booooooooooring").not())
        .stdout(predicate::str::contains("popup:     open"));
}

#[test]
fn test_popup_without_comments_keeps_container_empty() {
    let fixtures = fixtures();

    popup_cmd(&fixtures, "1")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<div class="film-details__bottom-container"></div>"#,
        ));
}

#[test]
fn test_popup_clicks_update_details() {
    let fixtures = fixtures();

    popup_cmd(&fixtures, "0")
        .arg("--click")
        .arg("watchlist")
        .arg("--click")
        .arg("favorite")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "film-details__control-button--watchlist film-details__control-button--active",
        ))
        .stdout(predicate::str::contains("  watchlist: true"))
        .stdout(predicate::str::contains("  favorite:  false"));
}

#[test]
fn test_popup_close_removes_popup() {
    let fixtures = fixtures();

    popup_cmd(&fixtures, "1")
        .arg("--click")
        .arg("close")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<main class="main"></main>"#))
        .stdout(predicate::str::contains("popup:     closed"));
}

#[test]
fn test_popup_click_after_close_fails() {
    let fixtures = fixtures();

    popup_cmd(&fixtures, "1")
        .arg("--click")
        .arg("close")
        .arg("--click")
        .arg("watched")
        .assert()
        .failure()
        .stderr(predicate::str::contains("popup is closed"));
}

#[test]
fn test_popup_accepts_date_only_release() {
    let fixtures = fixtures();

    popup_cmd(&fixtures, "2")
        .assert()
        .success()
        .stdout(predicate::str::contains("30 Mar 1945"))
        .stdout(predicate::str::contains("45m"));
}

#[test]
fn test_popup_unknown_film_fails() {
    let fixtures = fixtures();

    popup_cmd(&fixtures, "42")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Film not found: 42"));
}

#[test]
fn test_popup_unknown_control_rejected() {
    let fixtures = fixtures();

    popup_cmd(&fixtures, "0")
        .arg("--click")
        .arg("rewind")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown control"));
}

#[test]
fn test_popup_writes_output_file() {
    let fixtures = fixtures();
    let output = fixtures.dir.path().join("page.html");

    popup_cmd(&fixtures, "1")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("<section").not());

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.starts_with(r#"<main class="main"><section class="film-details">"#));
}
