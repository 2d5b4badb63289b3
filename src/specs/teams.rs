// src/specs/teams.rs
//! Standings page for a season: canonical `(name, espn_id)` for every team.
//!
//! Each row carries the full name in a `span.hide-mobile` wrapping a link to
//! `/futebol/time/_/id/{id}/{slug}`. Rows without that link are skipped.

use scraper::Html;

use crate::config::consts::TEAM_PREFIX;
use crate::core::html::{href, id_from_href, text};
use crate::core::net::{urls, Fetch};
use crate::error::Result;
use crate::model::Team;

pub fn fetch(fetcher: &dyn Fetch, season: i32) -> Result<Vec<Team>> {
    let doc = fetcher.fetch(&urls::standings(season))?;
    parse_doc(&doc)
}

pub fn parse_doc(doc: &Html) -> Result<Vec<Team>> {
    let span = css!("span.hide-mobile");
    let link = css!("a");

    let mut teams: Vec<Team> = Vec::new();
    for a in doc.select(&span).filter_map(|s| s.select(&link).next()) {
        let Some(h) = href(a).filter(|h| h.contains(TEAM_PREFIX)) else { continue };
        let espn_id = id_from_href(h, TEAM_PREFIX);
        if espn_id.is_empty() || teams.iter().any(|t| t.espn_id == espn_id) {
            continue;
        }
        teams.push(Team { name: text(a), espn_id });
    }
    Ok(teams)
}
