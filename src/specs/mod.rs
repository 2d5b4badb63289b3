// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction: each file knows *where the ground truth lives in
//! one page's HTML* and returns a typed shape from [`crate::model`].
//!
//! ## What lives here
//! - Pure document parsing (`parse_doc`) plus a thin `fetch` that builds the URL
//!   and hands the page to `parse_doc`.
//! - The exact class markers the site uses. Only those; no general DOM modelling.
//!
//! ## What does **not** live here
//! - Coercion to numbers / table shapes (`normalize`).
//! - Looping over dates, matches and teams, and partial-failure policy (`scrape`).
//!
//! ## Conventions
//! - A missing element that identifies the page (score, team names) is an `Err`;
//!   anything else is a nullable field plus a `MissingField` diagnostic.
//! - Specs are testable offline against inline HTML or saved fixtures.

use scraper::Html;

use crate::error::{Result, ScrapeError};

pub mod commentary;
pub mod games;
pub mod lineups;
pub mod roster;
pub mod statistics;
pub mod teams;

/// Present only for played matches.
pub(crate) const SCORE: &str = "div.Gamestrip__Score.relative.tc.w-100.fw-heavy-900.h2.clr-gray-01";
pub(crate) const TEAM_NAME: &str = "h2.ScoreCell__TeamName.ScoreCell__TeamName--displayName.db";

/// A match page without a score is a canceled (or not yet played) match.
pub(crate) fn ensure_played(doc: &Html, match_id: &str) -> Result<()> {
    let score = css!(SCORE);
    if doc.select(&score).next().is_none() {
        log::debug!("Game canceled: {match_id}");
        return Err(ScrapeError::Canceled { match_id: s!(match_id) });
    }
    Ok(())
}
