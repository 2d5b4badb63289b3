// src/runner.rs
use std::collections::HashSet;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::{
    config::options::AppOptions,
    core::net::Fetch,
    error::Result,
    file::write_rows,
    normalize::{self, Table},
    report::Reporter,
    scrape::{collect_games, collect_matches, collect_rosters, collect_teams},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    /// Rows written per table, in write order.
    pub rows: Vec<(Table, usize)>,
    pub matches: usize,
    pub teams: usize,
}

impl RunSummary {
    pub fn rows_in(&self, table: Table) -> Option<usize> {
        self.rows.iter().find(|(t, _)| *t == table).map(|(_, n)| *n)
    }
}

/// Discovery → extraction → normalization → one file per table.
pub fn run(opts: &AppOptions, fetcher: &dyn Fetch, rep: &mut dyn Reporter) -> Result<RunSummary> {
    let today = chrono::Local::now().date_naive();
    run_at(opts, fetcher, rep, today)
}

/// [`run`] with an explicit "today" (the last day allowed in the range).
pub fn run_at(opts: &AppOptions, fetcher: &dyn Fetch, rep: &mut dyn Reporter, today: NaiveDate) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let scrape = &opts.scrape;
    let export = &opts.export;

    if scrape.games {
        let by_day = collect_games(fetcher, scrape.from, scrape.to, today, rep)?;
        let ids: Vec<String> = by_day.into_values().flatten().collect();
        rep.log(&format!("{} games found", ids.len()));

        let matches = collect_matches(fetcher, &ids, rep);
        summary.matches = matches.len();

        let mut stats = Vec::new();
        let mut games = Vec::new();
        let mut plays = Vec::new();
        let mut lineups = Vec::new();
        for m in &matches {
            if let Some(r) = &m.report {
                stats.extend(normalize::statistics(r, rep));
                games.extend(normalize::match_row(r, rep));
            }
            if let Some(c) = &m.commentary {
                plays.extend(normalize::plays(c, rep));
            }
            if let Some(l) = &m.lineup {
                lineups.extend(normalize::lineups(l, rep));
            }
        }

        record(&mut summary, Table::Statistics, stats.len(), write_rows(export, &stats)?);
        record(&mut summary, Table::Lineups, lineups.len(), write_rows(export, &lineups)?);
        record(&mut summary, Table::Plays, plays.len(), write_rows(export, &plays)?);
        record(&mut summary, Table::Matches, games.len(), write_rows(export, &games)?);
    }

    if scrape.rosters {
        let teams = collect_teams(fetcher, scrape.season, rep);
        summary.teams = teams.len();
        let rosters = collect_rosters(fetcher, &teams, scrape.season, rep);

        // a player listed by two teams keeps the first entry
        let mut seen = HashSet::new();
        let mut players = Vec::new();
        let mut tenures = Vec::new();
        for r in &rosters {
            players.extend(normalize::players(r, rep).into_iter().filter(|p| seen.insert(p.espn_id)));
            tenures.extend(normalize::tenures(r, rep));
        }
        let team_rows = normalize::teams(&teams, rep);

        record(&mut summary, Table::Players, players.len(), write_rows(export, &players)?);
        record(&mut summary, Table::Tenures, tenures.len(), write_rows(export, &tenures)?);
        record(&mut summary, Table::Teams, team_rows.len(), write_rows(export, &team_rows)?);
    }

    rep.log(&format!("Wrote {} files to {}", summary.files_written.len(), export.out_dir().display()));
    Ok(summary)
}

fn record(summary: &mut RunSummary, table: Table, n: usize, path: PathBuf) {
    summary.rows.push((table, n));
    summary.files_written.push(path);
}
