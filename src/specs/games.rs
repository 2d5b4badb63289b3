// src/specs/games.rs
//! Results page for one date: the match ids played that day.

use chrono::NaiveDate;
use scraper::Html;

use crate::config::consts::GAME_PREFIX;
use crate::core::html::{href, id_from_href};
use crate::core::net::{urls, Fetch};
use crate::error::Result;

pub fn fetch(fetcher: &dyn Fetch, date: NaiveDate) -> Result<Vec<String>> {
    let doc = fetcher.fetch(&urls::results(date))?;
    parse_doc(&doc, date)
}

/// Match ids in page order, without repeats. Empty when the page shows the
/// "no games" banner.
pub fn parse_doc(doc: &Html, date: NaiveDate) -> Result<Vec<String>> {
    let no_games = css!("h4.n5.tc.pv6.clr-gray-05");
    if doc.select(&no_games).next().is_some() {
        log::info!("No games on {date}");
        return Ok(Vec::new());
    }

    let link = css!("a.AnchorLink.Button.Button--sm.Button--anchorLink.Button--alt.mb4.w-100.mr2");
    let mut ids: Vec<String> = Vec::new();
    for h in doc.select(&link).filter_map(href) {
        if !h.contains("partida-estatisticas") {
            continue;
        }
        let id = id_from_href(h, GAME_PREFIX);
        if !id.is_empty() && !ids.contains(&id) {
            ids.push(id);
        }
    }
    log::debug!("{date}: {} games", ids.len());
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BTN: &str = "AnchorLink Button Button--sm Button--anchorLink Button--alt mb4 w-100 mr2";

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 13).unwrap()
    }

    #[test]
    fn collects_statistics_links_only() {
        let html = format!(
            r#"<section>
              <a class="{BTN}" href="/futebol/partida-estatisticas/_/jogoId/699/palmeiras-botafogo">Estatísticas</a>
              <a class="{BTN}" href="/futebol/partida/_/jogoId/699">Resumo</a>
              <a class="{BTN}" href="/futebol/partida-estatisticas/_/jogoId/700">Estatísticas</a>
              <a class="{BTN}" href="/futebol/partida-estatisticas/_/jogoId/699">Estatísticas</a>
            </section>"#
        );
        let ids = parse_doc(&Html::parse_document(&html), day()).unwrap();
        assert_eq!(ids, vec!["699", "700"]);
    }

    #[test]
    fn no_games_banner_means_empty() {
        let html = r#"<h4 class="n5 tc pv6 clr-gray-05">Nenhum jogo nesta data</h4>"#;
        assert!(parse_doc(&Html::parse_document(html), day()).unwrap().is_empty());
    }
}
