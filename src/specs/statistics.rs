// src/specs/statistics.rs
//! Match statistics page (`/futebol/partida-estatisticas/_/jogoId/{id}`).
//!
//! Shape:
//! - two team names and two scores in the game strip,
//! - seven labelled stats rendered as home/away span pairs, of which only
//!   shots on target, shots and saves are kept (the rest is derivable from the
//!   commentary),
//! - possession as two percentages,
//! - match metadata, each piece independently optional.

use scraper::Html;

use super::{ensure_played, SCORE, TEAM_NAME};
use crate::core::html::{first_text, text, texts};
use crate::core::net::{urls, Fetch};
use crate::core::sanitize::{attendance_digits, score_before_marker, strip_percent};
use crate::error::{Result, ScrapeError};
use crate::model::{MatchReport, TeamSide};
use crate::report::{Diagnostic, Reporter};

/// Order of the stat spans on the page.
const STAT_LABELS: [&str; 7] = [
    "chute a gol", "chute", "faltas", "amarelos", "vermelhos", "escanteios", "defesas",
];
const SHOTS_ON_TARGET: usize = 0;
const SHOTS: usize = 1;
const SAVES: usize = 6;

pub fn fetch(fetcher: &dyn Fetch, match_id: &str, rep: &mut dyn Reporter) -> Result<MatchReport> {
    let doc = fetcher.fetch(&urls::statistics(match_id))?;
    parse_doc(&doc, match_id, rep)
}

pub fn parse_doc(doc: &Html, match_id: &str, rep: &mut dyn Reporter) -> Result<MatchReport> {
    ensure_played(doc, match_id)?;
    let root = doc.root_element();
    let page = format!("estatisticas/{match_id}");
    let missing = |what| ScrapeError::MissingElement { page: page.clone(), what };

    let names = texts(root, &css!(TEAM_NAME));
    let [home_name, away_name] = pair(names).ok_or_else(|| missing("team names"))?;

    let scores: Vec<String> = texts(root, &css!(SCORE)).iter().map(|s| score_before_marker(s)).collect();
    let [home_goals, away_goals] = pair(scores).ok_or_else(|| missing("scores"))?;

    // home, away, home, away, ...
    let stats = texts(root, &css!("span.bLeWt.ZfQkn.JoGSb.hsDdd.ICQCm"));
    if stats.len() < STAT_LABELS.len() * 2 {
        return Err(missing("team stats"));
    }
    let stat = |label: usize, side: usize| stats[label * 2 + side].clone();

    let home_poss = first_text(root, &css!("span.bLeWt.ZfQkn.JoGSb.VZTD.pgHdv.uHRs"))
        .ok_or_else(|| missing("home possession"))?;
    let away_poss = first_text(root, &css!("span.bLeWt.ZfQkn.JoGSb.VZTD.nljvg"))
        .ok_or_else(|| missing("away possession"))?;

    let home = TeamSide {
        name: home_name,
        goals: home_goals,
        shots_on_target: stat(SHOTS_ON_TARGET, 0),
        shots: stat(SHOTS, 0),
        saves: stat(SAVES, 0),
        possession: strip_percent(&home_poss),
    };
    let away = TeamSide {
        name: away_name,
        goals: away_goals,
        shots_on_target: stat(SHOTS_ON_TARGET, 1),
        shots: stat(SHOTS, 1),
        saves: stat(SAVES, 1),
        possession: strip_percent(&away_poss),
    };

    // Metadata: every piece may be absent.
    let mut optional = |sel: &str, field: &'static str| -> Result<Option<String>> {
        let found = first_text(root, &css!(sel));
        if found.is_none() {
            rep.diagnostic(&Diagnostic::MissingField { page: page.clone(), field });
        }
        Ok(found)
    };

    let competition = optional("div.ScoreCell__GameNote.di", "competition")?;
    let stadium = optional("div.n6.clr-gray-03.GameInfo__Location__Name--noImg", "stadium")?;
    let location = optional("span.Location__Text", "location")?;
    let attendance = optional("div.Attendance__Numbers", "attendance")?.map(|a| attendance_digits(&a));
    let referee = optional("li.GameInfo__List__Item", "referee")?;

    // "16:00, 13 de abril de 2024" → kickoff, date
    let meta = css!("div.n8.GameInfo__Meta");
    let span = css!("span");
    let schedule = root
        .select(&meta)
        .next()
        .and_then(|m| m.select(&span).next())
        .map(text);
    if schedule.is_none() {
        rep.diagnostic(&Diagnostic::MissingField { page: page.clone(), field: "schedule" });
    }
    let (kickoff, date) = match schedule {
        Some(s) => {
            let mut parts = s.split(',').map(|p| p.trim().to_string());
            (parts.next(), parts.next())
        }
        None => (None, None),
    };

    Ok(MatchReport {
        match_id: s!(match_id),
        competition,
        stadium,
        location,
        kickoff,
        date,
        attendance,
        referee,
        home,
        away,
    })
}

/// First two values, home then away.
fn pair(v: Vec<String>) -> Option<[String; 2]> {
    let mut it = v.into_iter();
    Some([it.next()?, it.next()?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Collector;

    fn page(attendance: bool) -> String {
        let att = if attendance {
            r#"<div class="Attendance__Numbers">Attendance: 38,512</div>"#
        } else {
            ""
        };
        format!(
            r#"<html><body>
            <div class="ScoreCell__GameNote di">Brasileirão Série A, Rodada 1</div>
            <h2 class="ScoreCell__TeamName ScoreCell__TeamName--displayName db">Palmeiras</h2>
            <div class="Gamestrip__Score relative tc w-100 fw-heavy-900 h2 clr-gray-01">2<svg></svg>V</div>
            <h2 class="ScoreCell__TeamName ScoreCell__TeamName--displayName db">Botafogo</h2>
            <div class="Gamestrip__Score relative tc w-100 fw-heavy-900 h2 clr-gray-01">1</div>
            <span class="bLeWt ZfQkn JoGSb VZTD pgHdv uHRs">58.3%</span>
            <span class="bLeWt ZfQkn JoGSb VZTD nljvg">41.7%</span>
            <span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">6</span><span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">3</span>
            <span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">15</span><span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">9</span>
            <span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">12</span><span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">14</span>
            <span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">2</span><span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">3</span>
            <span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">0</span><span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">1</span>
            <span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">7</span><span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">4</span>
            <span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">2</span><span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">4</span>
            <div class="n6 clr-gray-03 GameInfo__Location__Name--noImg">Allianz Parque</div>
            <div class="n8 GameInfo__Meta"><span>16:00, 13 de abril de 2024</span></div>
            <span class="Location__Text">São Paulo, Brasil</span>
            {att}
            <ul><li class="GameInfo__List__Item">Wilton Pereira Sampaio</li></ul>
            </body></html>"#
        )
    }

    #[test]
    fn parses_full_page() {
        let doc = Html::parse_document(&page(true));
        let mut rep = Collector::new();
        let r = parse_doc(&doc, "699", &mut rep).unwrap();

        assert_eq!(r.match_id, "699");
        assert_eq!(r.home.name, "Palmeiras");
        assert_eq!(r.away.name, "Botafogo");
        assert_eq!(r.home.goals, "2");
        assert_eq!(r.away.goals, "1");
        assert_eq!((r.home.shots_on_target.as_str(), r.home.shots.as_str(), r.home.saves.as_str()), ("6", "15", "2"));
        assert_eq!((r.away.shots_on_target.as_str(), r.away.shots.as_str(), r.away.saves.as_str()), ("3", "9", "4"));
        assert_eq!(r.home.possession, "58.3");
        assert_eq!(r.away.possession, "41.7");
        assert_eq!(r.competition.as_deref(), Some("Brasileirão Série A, Rodada 1"));
        assert_eq!(r.stadium.as_deref(), Some("Allianz Parque"));
        assert_eq!(r.location.as_deref(), Some("São Paulo, Brasil"));
        assert_eq!(r.kickoff.as_deref(), Some("16:00"));
        assert_eq!(r.date.as_deref(), Some("13 de abril de 2024"));
        assert_eq!(r.attendance.as_deref(), Some("38512"));
        assert_eq!(r.referee.as_deref(), Some("Wilton Pereira Sampaio"));
        assert!(rep.diagnostics.is_empty());
    }

    #[test]
    fn missing_attendance_is_null_only() {
        let doc = Html::parse_document(&page(false));
        let mut rep = Collector::new();
        let r = parse_doc(&doc, "699", &mut rep).unwrap();
        assert_eq!(r.attendance, None);
        assert!(r.competition.is_some() && r.stadium.is_some() && r.referee.is_some() && r.date.is_some());
        assert_eq!(
            rep.diagnostics,
            vec![Diagnostic::MissingField { page: s!("estatisticas/699"), field: "attendance" }]
        );
    }

    #[test]
    fn same_page_twice_is_identical() {
        let doc = Html::parse_document(&page(true));
        let a = parse_doc(&doc, "699", &mut Collector::new()).unwrap();
        let b = parse_doc(&Html::parse_document(&page(true)), "699", &mut Collector::new()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn no_score_means_canceled() {
        let doc = Html::parse_document(r#"<h2 class="ScoreCell__TeamName ScoreCell__TeamName--displayName db">Palmeiras</h2>"#);
        let err = parse_doc(&doc, "700", &mut Collector::new()).unwrap_err();
        assert!(matches!(err, ScrapeError::Canceled { .. }));
    }

    #[test]
    fn short_stat_list_aborts_whole_match() {
        let html = page(true).replace(
            r#"<span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">2</span><span class="bLeWt ZfQkn JoGSb hsDdd ICQCm">4</span>"#,
            "",
        );
        let err = parse_doc(&Html::parse_document(&html), "699", &mut Collector::new()).unwrap_err();
        assert!(matches!(err, ScrapeError::MissingElement { what: "team stats", .. }));
    }
}
