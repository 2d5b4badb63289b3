// src/scrape/mod.rs
//! Collection loops over the page specs: dates → match ids → match pages, and
//! season → teams → rosters. One item failing never stops the batch.
mod scrape;

pub use scrape::collect_games;
pub use scrape::collect_match;
pub use scrape::collect_matches;
pub use scrape::collect_rosters;
pub use scrape::collect_teams;
pub use scrape::MatchData;
