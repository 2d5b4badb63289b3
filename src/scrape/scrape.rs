// src/scrape/scrape.rs
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{
    core::net::Fetch,
    dates::{self, DateRange},
    error::{Result, ScrapeError},
    model::{MatchCommentary, MatchLineup, MatchReport, Team, TeamRoster},
    report::{Diagnostic, Reporter},
    specs::{commentary, games, lineups, roster, statistics, teams},
};

/// Everything extracted for one match. Each page is independent: a missing
/// commentary page does not discard the statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchData {
    pub match_id: String,
    pub report: Option<MatchReport>,
    pub commentary: Option<MatchCommentary>,
    pub lineup: Option<MatchLineup>,
}

impl MatchData {
    pub fn is_empty(&self) -> bool {
        self.report.is_none() && self.commentary.is_none() && self.lineup.is_none()
    }
}

/// Match ids per results date in `from..=to` (`to` defaults to `today`).
/// Days without games are left out.
pub fn collect_games(
    fetcher: &dyn Fetch,
    from: NaiveDate,
    to: Option<NaiveDate>,
    today: NaiveDate,
    rep: &mut dyn Reporter,
) -> Result<BTreeMap<NaiveDate, Vec<String>>> {
    let to = to.unwrap_or(today);
    dates::validate(from, to, today)?;

    let days = DateRange::new(from, to);
    rep.begin(days.clone().count());
    rep.log(&format!("Looking for games from {from} to {to}…"));

    let mut out = BTreeMap::new();
    for date in days {
        let day = dates::compact(date);
        match games::fetch(fetcher, date) {
            Ok(ids) => {
                if !ids.is_empty() {
                    out.insert(date, ids);
                }
                rep.item_done(&day);
            }
            Err(e) => {
                note_failure(rep, &e);
                rep.item_failed(&day);
            }
        }
    }
    rep.finish();
    Ok(out)
}

/// Statistics, commentary and lineup pages for one match.
pub fn collect_match(fetcher: &dyn Fetch, match_id: &str, rep: &mut dyn Reporter) -> MatchData {
    let report = statistics::fetch(fetcher, match_id, rep).map_err(|e| note_failure(rep, &e)).ok();
    let commentary = commentary::fetch(fetcher, match_id, rep).map_err(|e| note_failure(rep, &e)).ok();
    let lineup = lineups::fetch(fetcher, match_id, rep).map_err(|e| note_failure(rep, &e)).ok();
    MatchData { match_id: s!(match_id), report, commentary, lineup }
}

pub fn collect_matches(fetcher: &dyn Fetch, ids: &[String], rep: &mut dyn Reporter) -> Vec<MatchData> {
    rep.begin(ids.len());
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        let data = collect_match(fetcher, id, rep);
        if data.is_empty() {
            rep.item_failed(id);
        } else {
            rep.item_done(id);
            out.push(data);
        }
    }
    rep.finish();
    out
}

/// Teams listed on the season standings. A missing page yields no teams.
pub fn collect_teams(fetcher: &dyn Fetch, season: i32, rep: &mut dyn Reporter) -> Vec<Team> {
    rep.log(&format!("Refreshing teams for {season}…"));
    match teams::fetch(fetcher, season) {
        Ok(list) => {
            rep.log(&format!("{} teams", list.len()));
            list
        }
        Err(e) => {
            note_failure(rep, &e);
            Vec::new()
        }
    }
}

pub fn collect_rosters(fetcher: &dyn Fetch, teams: &[Team], season: i32, rep: &mut dyn Reporter) -> Vec<TeamRoster> {
    rep.begin(teams.len());
    let mut out = Vec::with_capacity(teams.len());
    for team in teams {
        match roster::fetch(fetcher, &team.espn_id, season, rep) {
            Ok(r) => {
                rep.item_done(&team.name);
                out.push(r);
            }
            Err(e) => {
                note_failure(rep, &e);
                rep.item_failed(&team.name);
            }
        }
    }
    rep.finish();
    out
}

/// Turn a per-item error into the matching diagnostic.
fn note_failure(rep: &mut dyn Reporter, e: &ScrapeError) {
    match e {
        ScrapeError::NotFound { url } | ScrapeError::Http { url, .. } => {
            rep.diagnostic(&Diagnostic::NotFound { url: url.clone() })
        }
        ScrapeError::Canceled { match_id } => rep.diagnostic(&Diagnostic::Canceled { match_id: match_id.clone() }),
        // already reported where the mismatch was seen
        ScrapeError::Inconsistent { .. } => {}
        other => rep.log(&format!("Skipped: {other}")),
    }
}
