//! Cinemaddict CLI
//!
//! Renders the film details popup from JSON records, optionally replaying
//! clicks on its controls.
//!
//! ## Usage
//!
//! ```bash
//! # List films in a file
//! cinemaddict list --films films.json
//!
//! # Render a film's popup
//! cinemaddict popup --films films.json --comments comments.json --film 0
//!
//! # Add to watchlist and favorites, then print the resulting page
//! cinemaddict popup --films films.json --film 0 --click watchlist --click favorite
//! ```
//!
//! Set `RUST_LOG=debug` to see view lifecycle logs on stderr.

mod input;
mod presenter;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cinemaddict_core::FilmId;
use cinemaddict_ui::{create_element, FilmControl};
use tracing_subscriber::EnvFilter;

use crate::presenter::FilmPopupPresenter;

/// Page the popup is mounted into
const PAGE_MARKUP: &str = r#"<main class="main"></main>"#;

/// Cinemaddict - film details popup
#[derive(Parser)]
#[command(name = "cinemaddict")]
#[command(version = "0.1.0")]
#[command(about = "Cinemaddict - render the film details popup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the films in a films file
    List {
        /// JSON array of films
        #[arg(short, long)]
        films: PathBuf,
    },

    /// Open a film's details popup and print the page markup
    Popup {
        /// JSON array of films
        #[arg(short, long)]
        films: PathBuf,

        /// JSON array of comments
        #[arg(short, long)]
        comments: Option<PathBuf>,

        /// Id of the film to open
        #[arg(long = "film")]
        film_id: String,

        /// Control to click, in order (close, watchlist, watched, favorite)
        #[arg(long = "click", value_name = "CONTROL")]
        clicks: Vec<FilmControl>,

        /// Write the page markup here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { films } => {
            let films = input::load_films(&films)?;
            if films.is_empty() {
                println!("No films.");
            }
            for film in films {
                println!("{}\t{}", film.id, film.film_info.title);
            }
        }

        Commands::Popup {
            films,
            comments,
            film_id,
            clicks,
            output,
        } => {
            let films = input::load_films(&films)?;
            let comments = input::load_comments(comments.as_deref())?;
            let film_id = FilmId(film_id);
            let film = films
                .into_iter()
                .find(|film| film.id == film_id)
                .with_context(|| format!("Film not found: {}", film_id))?;

            let page = create_element(PAGE_MARKUP)?;
            let presenter = FilmPopupPresenter::open(film, &comments, &page)?;
            for control in clicks {
                presenter.click(control)?;
            }

            let markup = page.outer_html();
            match output {
                Some(path) => {
                    fs::write(&path, &markup)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Wrote page markup to {:?}", path);
                }
                None => println!("{}", markup),
            }

            let film = presenter.film();
            let details = film.user_details;
            println!();
            println!("Film: {} ({})", film.film_info.title, film.id);
            println!("  watchlist: {}", details.watchlist);
            println!("  watched:   {}", details.already_watched);
            println!("  favorite:  {}", details.favorite);
            println!(
                "  comments:  {}",
                presenter
                    .view()
                    .comments_view()
                    .map_or(0, |list| list.comments().len())
            );
            println!("  popup:     {}", if presenter.is_open() { "open" } else { "closed" });
        }
    }

    Ok(())
}
