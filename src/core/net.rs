// src/core/net.rs
// Page fetching. One blocking GET at a time, with a polite pause between requests.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    thread,
    time::{Duration, Instant},
};

use reqwest::blocking::Client;
use scraper::Html;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Given a URL, return the parsed page or `NotFound`.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Html>;
}

/// Parse a response body; the site answers missing data with a 200 + "404" title.
pub fn parse_page(url: &str, body: &str) -> Result<Html> {
    let doc = Html::parse_document(body);
    let err404 = css!("h1.Error404__Title");
    if doc.select(&err404).next().is_some() {
        log::debug!("Data not found: {url}");
        return Err(ScrapeError::NotFound { url: s!(url) });
    }
    Ok(doc)
}

pub struct HttpFetcher {
    client: Client,
    pause: Duration,
    last: Cell<Option<Instant>>,
}

impl HttpFetcher {
    pub fn new(pause: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|source| ScrapeError::Http { url: s!("<client>"), source })?;
        Ok(Self { client, pause, last: Cell::new(None) })
    }

    fn wait_turn(&self) {
        if let Some(prev) = self.last.get() {
            let since = prev.elapsed();
            if since < self.pause {
                thread::sleep(self.pause - since);
            }
        }
        self.last.set(Some(Instant::now()));
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Html> {
        self.wait_turn();
        let t = Instant::now();

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| ScrapeError::Http { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            log::debug!("Error {} for {url}", status.as_u16());
            return Err(ScrapeError::NotFound { url: s!(url) });
        }
        let body = resp
            .text()
            .map_err(|source| ScrapeError::Http { url: s!(url), source })?;
        log::debug!("GET {url} in {:?} ({} bytes)", t.elapsed(), body.len());

        parse_page(url, &body)
    }
}

/// Serves saved pages from memory. Unknown URLs are `NotFound`.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    requested: RefCell<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(url, body);
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, body: impl Into<String>) {
        self.pages.insert(url.into(), body.into());
    }

    /// URLs in the order they were asked for.
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Fetch for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<Html> {
        self.requested.borrow_mut().push(s!(url));
        match self.pages.get(url) {
            Some(body) => parse_page(url, body),
            None => Err(ScrapeError::NotFound { url: s!(url) }),
        }
    }
}

/// Page URLs for one source.
pub mod urls {
    use chrono::NaiveDate;

    use crate::config::consts::{BASE_URL, LEAGUE};
    use crate::dates;

    pub fn results(date: NaiveDate) -> String {
        format!("{BASE_URL}/futebol/resultados/_/data/{}/liga/{LEAGUE}", dates::compact(date))
    }

    pub fn statistics(match_id: &str) -> String {
        format!("{BASE_URL}/futebol/partida-estatisticas/_/jogoId/{match_id}")
    }

    pub fn commentary(match_id: &str) -> String {
        format!("{BASE_URL}/futebol/comentario/_/jogoId/{match_id}")
    }

    pub fn lineups(match_id: &str) -> String {
        format!("{BASE_URL}/futebol/escalacoes/_/jogoId/{match_id}")
    }

    pub fn standings(season: i32) -> String {
        format!("{BASE_URL}/futebol/classificacao/_/liga/{}/temporada/{season}", LEAGUE.to_ascii_uppercase())
    }

    pub fn roster(team_id: &str, season: i32) -> String {
        format!(
            "{BASE_URL}/futebol/time/elenco/_/id/{team_id}/liga/{}/temporada/{season}",
            LEAGUE.to_ascii_uppercase()
        )
    }
}
