// src/lib.rs
//! Brasileirão match data from ESPN's rendered pages into relational tables.
//!
//! Pipeline: [`scrape`] walks dates and teams, [`specs`] reads one page each,
//! [`classify`] decodes commentary lines, [`normalize`] shapes table rows and
//! [`file`] writes them. [`runner::run`] ties it together.

#[macro_use]
pub mod macros;

pub mod classify;
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod dates;
pub mod error;
pub mod file;
pub mod model;
pub mod normalize;
pub mod report;
pub mod runner;
pub mod scrape;
pub mod specs;

pub use error::{Result, ScrapeError};
