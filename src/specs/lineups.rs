// src/specs/lineups.rs
//! Lineup page (`/futebol/escalacoes/_/jogoId/{id}`).
//!
//! Per team there is a players table and a reserves table. The players table
//! marks players who came on with `SoccerLineUpPlayer__Header--subbedIn` but
//! does not mark starters, so starters are computed by exclusion:
//!
//! ```text
//! substitutes = subbed-in headers
//! starters    = all headers − substitutes
//! reserves    = reserves-table links − (starters ∪ substitutes)
//! ```
//!
//! All differences are by player id, and each list is deduplicated, so a
//! player ends up in exactly one list per team.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};

use super::{ensure_played, TEAM_NAME};
use crate::config::consts::PLAYER_PREFIX;
use crate::core::html::{href, id_from_href, texts};
use crate::core::net::{urls, Fetch};
use crate::error::{Result, ScrapeError};
use crate::model::{MatchLineup, TeamLineup};
use crate::report::{Diagnostic, Reporter};

pub fn fetch(fetcher: &dyn Fetch, match_id: &str, rep: &mut dyn Reporter) -> Result<MatchLineup> {
    let doc = fetcher.fetch(&urls::lineups(match_id))?;
    parse_doc(&doc, match_id, rep)
}

pub fn parse_doc(doc: &Html, match_id: &str, rep: &mut dyn Reporter) -> Result<MatchLineup> {
    ensure_played(doc, match_id)?;
    let root = doc.root_element();
    let page = format!("escalacoes/{match_id}");

    let names = texts(root, &css!(TEAM_NAME));
    if names.len() < 2 {
        return Err(ScrapeError::MissingElement { page, what: "team names" });
    }

    let players_sel = css!("div.ResponsiveTable.LineUps__PlayersTable");
    let players: Vec<ElementRef> = root.select(&players_sel).collect();
    if players.len() < 2 {
        return Err(ScrapeError::MissingElement { page, what: "players tables" });
    }

    let reserves_sel = css!("div.ResponsiveTable.LineUps__SubstitutesTable");
    let reserves: Vec<ElementRef> = root.select(&reserves_sel).collect();
    if reserves.len() < 2 {
        rep.diagnostic(&Diagnostic::MissingField { page: page.clone(), field: "reserves tables" });
    }

    // one stray reserves table cannot be attributed to a side
    let reserves_of = |side: usize| if reserves.len() >= 2 { Some(reserves[side]) } else { None };
    let home = team_lineup(names[0].clone(), players[0], reserves_of(0))?;
    let away = team_lineup(names[1].clone(), players[1], reserves_of(1))?;

    Ok(MatchLineup { match_id: s!(match_id), home, away })
}

/// One team, independently of the other.
fn team_lineup(team: String, players: ElementRef<'_>, reserves: Option<ElementRef<'_>>) -> Result<TeamLineup> {
    let subbed = css!("div.SoccerLineUpPlayer__Header--subbedIn");
    let header = css!("div.SoccerLineUpPlayer__Header");
    let name = css!("a.AnchorLink.SoccerLineUpPlayer__Header__Name");
    let link = css!("a.AnchorLink");

    let substitutes = dedup(ids_in(players.select(&subbed), &name), &HashSet::new());

    let mut taken: HashSet<String> = substitutes.iter().cloned().collect();
    let starters = dedup(ids_in(players.select(&header), &name), &taken);
    taken.extend(starters.iter().cloned());

    let reserves = match reserves {
        Some(table) => dedup(
            table.select(&link).filter_map(href).filter(|h| h.contains(PLAYER_PREFIX)).map(player_id).collect(),
            &taken,
        ),
        None => Vec::new(),
    };

    Ok(TeamLineup { team, starters, substitutes, reserves })
}

fn ids_in<'a>(blocks: impl Iterator<Item = ElementRef<'a>>, name: &Selector) -> Vec<String> {
    blocks.flat_map(|b| b.select(name).filter_map(href).map(player_id).collect::<Vec<_>>()).collect()
}

fn player_id(href: &str) -> String {
    id_from_href(href, PLAYER_PREFIX)
}

/// Keep first occurrences, skipping anything in `exclude`.
fn dedup(ids: Vec<String>, exclude: &HashSet<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| !id.is_empty() && !exclude.contains(id) && seen.insert(id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineupStatus;
    use crate::report::Collector;

    fn player(id: &str, subbed_in: bool) -> String {
        let extra = if subbed_in { " SoccerLineUpPlayer__Header--subbedIn" } else { "" };
        format!(
            r#"<div class="SoccerLineUpPlayer__Header{extra}"><a class="AnchorLink SoccerLineUpPlayer__Header__Name" href="https://www.espn.com.br/futebol/jogador/_/id/{id}/nome">P{id}</a></div>"#
        )
    }

    fn reserve(id: &str) -> String {
        format!(r#"<a class="AnchorLink" href="https://www.espn.com.br/futebol/jogador/_/id/{id}">R{id}</a>"#)
    }

    fn page(with_reserves: bool) -> Html {
        let home_players = [player("1", false), player("2", false), player("3", true), player("2", false)].concat();
        let away_players = [player("10", false), player("11", true), player("11", false)].concat();
        let home_res = [reserve("3"), reserve("4"), reserve("4"), reserve("1")].concat();
        let away_res = [reserve("12")].concat();
        let res = if with_reserves {
            format!(
                r#"<div class="ResponsiveTable LineUps__SubstitutesTable">{home_res}</div>
                   <div class="ResponsiveTable LineUps__SubstitutesTable">{away_res}</div>"#
            )
        } else {
            String::new()
        };
        Html::parse_document(&format!(
            r#"<html><body>
            <h2 class="ScoreCell__TeamName ScoreCell__TeamName--displayName db">Palmeiras</h2>
            <div class="Gamestrip__Score relative tc w-100 fw-heavy-900 h2 clr-gray-01">2</div>
            <h2 class="ScoreCell__TeamName ScoreCell__TeamName--displayName db">Botafogo</h2>
            <div class="ResponsiveTable LineUps__PlayersTable">{home_players}</div>
            <div class="ResponsiveTable LineUps__PlayersTable">{away_players}</div>
            {res}
            </body></html>"#
        ))
    }

    #[test]
    fn partitions_each_team_by_exclusion() {
        let l = parse_doc(&page(true), "699", &mut Collector::new()).unwrap();

        assert_eq!(l.home.team, "Palmeiras");
        assert_eq!(l.home.substitutes, vec!["3"]);
        assert_eq!(l.home.starters, vec!["1", "2"]);
        assert_eq!(l.home.reserves, vec!["4"]);

        assert_eq!(l.away.team, "Botafogo");
        assert_eq!(l.away.substitutes, vec!["11"]);
        assert_eq!(l.away.starters, vec!["10"]);
        assert_eq!(l.away.reserves, vec!["12"]);
    }

    #[test]
    fn every_player_has_one_status() {
        let l = parse_doc(&page(true), "699", &mut Collector::new()).unwrap();
        for team in [&l.home, &l.away] {
            let entries: Vec<(&str, LineupStatus)> = team.entries().collect();
            let unique: HashSet<&str> = entries.iter().map(|(id, _)| *id).collect();
            assert_eq!(unique.len(), entries.len());
            assert!(team.starters.iter().all(|s| !team.substitutes.contains(s)));
        }
    }

    #[test]
    fn missing_reserves_tables_leave_lists_empty() {
        let mut rep = Collector::new();
        let l = parse_doc(&page(false), "699", &mut rep).unwrap();
        assert!(l.home.reserves.is_empty() && l.away.reserves.is_empty());
        assert_eq!(l.home.starters, vec!["1", "2"]);
        assert_eq!(rep.count(|d| matches!(d, Diagnostic::MissingField { .. })), 1);
    }

    #[test]
    fn missing_players_tables_is_an_error() {
        let doc = Html::parse_document(
            r#"<div class="Gamestrip__Score relative tc w-100 fw-heavy-900 h2 clr-gray-01">0</div>
            <h2 class="ScoreCell__TeamName ScoreCell__TeamName--displayName db">A</h2>
            <h2 class="ScoreCell__TeamName ScoreCell__TeamName--displayName db">B</h2>"#,
        );
        let err = parse_doc(&doc, "699", &mut Collector::new()).unwrap_err();
        assert!(matches!(err, ScrapeError::MissingElement { what: "players tables", .. }));
    }
}
