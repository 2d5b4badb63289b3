// src/specs/roster.rs
//! Team roster page for one season.
//!
//! Player rows are `tr.Table__TR--sm.Table__even`; cells by index:
//! 0 name (with the player link), 1 position code, 2 age, 3 height,
//! 4 weight (ignored), 5 nationality. `--` is the site's "unknown".

use scraper::Html;

use crate::config::consts::PLAYER_PREFIX;
use crate::core::html::{href, id_from_href, text};
use crate::core::net::{urls, Fetch};
use crate::core::sanitize::placeholder_to_none;
use crate::error::Result;
use crate::model::{Position, RosterPlayer, TeamRoster};
use crate::report::{Diagnostic, Reporter};

const POSITION: usize = 1;
const AGE: usize = 2;
const HEIGHT: usize = 3;
const NATIONALITY: usize = 5;

pub fn fetch(fetcher: &dyn Fetch, team_id: &str, season: i32, rep: &mut dyn Reporter) -> Result<TeamRoster> {
    let doc = fetcher.fetch(&urls::roster(team_id, season))?;
    parse_doc(&doc, team_id, season, rep)
}

pub fn parse_doc(doc: &Html, team_id: &str, season: i32, rep: &mut dyn Reporter) -> Result<TeamRoster> {
    let row_sel = css!("tr.Table__TR.Table__TR--sm.Table__even");
    let cell_sel = css!("td.Table__TD");
    let link_sel = css!("a.AnchorLink");
    let page = format!("elenco/{team_id}/{season}");

    let mut players = Vec::new();
    for row in doc.select(&row_sel) {
        let Some(link) = row.select(&link_sel).next() else {
            rep.diagnostic(&Diagnostic::MissingField { page: page.clone(), field: "player link" });
            continue;
        };
        let cells: Vec<String> = row.select(&cell_sel).map(text).collect();
        if cells.len() <= NATIONALITY {
            rep.diagnostic(&Diagnostic::MissingField { page: page.clone(), field: "roster cells" });
            continue;
        }

        players.push(RosterPlayer {
            name: text(link),
            espn_id: href(link).map(|h| id_from_href(h, PLAYER_PREFIX)).unwrap_or_default(),
            position: Position::from_code(&cells[POSITION]),
            age: placeholder_to_none(&cells[AGE]),
            height: placeholder_to_none(&cells[HEIGHT]),
            nationality: placeholder_to_none(&cells[NATIONALITY]),
        });
    }
    log::debug!("team {team_id} ({season}): {} players", players.len());

    Ok(TeamRoster { team_id: s!(team_id), season, players })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Collector;

    fn row(id: &str, name: &str, cells: [&str; 5]) -> String {
        let [pos, age, ht, wt, nat] = cells;
        format!(
            r#"<tr class="Table__TR Table__TR--sm Table__even">
              <td class="Table__TD"><a class="AnchorLink" href="https://www.espn.com.br/futebol/jogador/_/id/{id}/x">{name}</a></td>
              <td class="Table__TD">{pos}</td><td class="Table__TD">{age}</td><td class="Table__TD">{ht}</td>
              <td class="Table__TD">{wt}</td><td class="Table__TD">{nat}</td>
            </tr>"#
        )
    }

    #[test]
    fn reads_rows_and_placeholders() {
        let html = format!(
            "<table><tbody>{}{}</tbody></table>",
            row("229016", "Raphael Veiga", ["M", "29", "1.76 m", "70 kg", "Brasil"]),
            row("300001", "Jovem", ["X", "--", "--", "--", "--"]),
        );
        let r = parse_doc(&Html::parse_document(&html), "2029", 2024, &mut Collector::new()).unwrap();

        assert_eq!(r.team_id, "2029");
        assert_eq!(r.season, 2024);
        assert_eq!(r.players.len(), 2);

        let veiga = &r.players[0];
        assert_eq!(veiga.name, "Raphael Veiga");
        assert_eq!(veiga.espn_id, "229016");
        assert_eq!(veiga.position, Some(Position::Midfielder));
        assert_eq!(veiga.age.as_deref(), Some("29"));
        assert_eq!(veiga.height.as_deref(), Some("1.76 m"));
        assert_eq!(veiga.nationality.as_deref(), Some("Brasil"));

        let jovem = &r.players[1];
        assert_eq!(jovem.position, None);
        assert_eq!((jovem.age.clone(), jovem.height.clone(), jovem.nationality.clone()), (None, None, None));
    }

    #[test]
    fn short_or_unlinked_rows_are_skipped() {
        let html = r#"<table>
            <tr class="Table__TR Table__TR--sm Table__even"><td class="Table__TD">Sem link</td></tr>
            <tr class="Table__TR Table__TR--sm Table__even">
              <td class="Table__TD"><a class="AnchorLink" href="https://www.espn.com.br/futebol/jogador/_/id/1">A</a></td>
              <td class="Table__TD">G</td>
            </tr></table>"#;
        let mut rep = Collector::new();
        let r = parse_doc(&Html::parse_document(html), "2029", 2024, &mut rep).unwrap();
        assert!(r.players.is_empty());
        assert_eq!(rep.count(|d| matches!(d, Diagnostic::MissingField { .. })), 2);
    }
}
