//! Extracts upcoming matches, active rosters and tournament results for
//! esports teams from Liquipedia wiki pages.

pub use client::LiquipediaClient;
pub use error::{LiquipediaError, Result};
pub use fetcher::{Fetcher, HttpFetcher};
pub use games::{Game, GameRegistry};
pub use model::*;
pub use crate::scraper::matches::extract_matches;
pub use crate::scraper::results::extract_results;
pub use crate::scraper::roster::extract_players;
pub use crate::scraper::{Document, Node, PageContext};

mod client;
pub mod dates;
mod error;
mod fetcher;
mod games;
mod model;
mod scraper;
