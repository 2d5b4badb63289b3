// src/config/options.rs
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::consts::*;
use crate::dates;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// First results date to visit.
    pub from: NaiveDate,
    /// Last results date; `None` means today.
    pub to: Option<NaiveDate>,
    /// Season used for the standings and roster pages.
    pub season: i32,
    /// Scrape matches (stats, commentary, lineups).
    pub games: bool,
    /// Scrape teams and rosters.
    pub rosters: bool,
    pub pause_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            from: dates::parse_compact(FIRST_ROUND).unwrap_or_default(),
            to: None,
            season: DEFAULT_SEASON,
            games: true,
            rosters: true,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse user text into the output directory. A pasted file name is ignored;
    /// one file per table is written there.
    pub fn set_out_dir(&mut self, text: &str) {
        let p = PathBuf::from(text.trim());
        self.out_dir = if p.extension().is_some() {
            p.parent().map(Path::to_path_buf).unwrap_or_default()
        } else {
            p
        };
    }

    /// `<out_dir>/<table>.<ext>`
    pub fn table_path(&self, table: &str) -> PathBuf {
        self.out_dir.join(format!("{table}.{}", self.format.ext()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_path_follows_format() {
        let mut opts = ExportOptions::default();
        opts.set_out_dir("out/run1");
        assert_eq!(opts.table_path("lances"), PathBuf::from("out/run1/lances.csv"));
        opts.format = ExportFormat::Tsv;
        assert_eq!(opts.table_path("lances"), PathBuf::from("out/run1/lances.tsv"));
    }

    #[test]
    fn pasted_file_name_keeps_directory() {
        let mut opts = ExportOptions::default();
        opts.set_out_dir("out/run1/whatever.csv");
        assert_eq!(opts.out_dir(), Path::new("out/run1"));
    }

    #[test]
    fn defaults_start_at_first_round() {
        let opts = ScrapeOptions::default();
        assert_eq!(opts.from, NaiveDate::from_ymd_opt(2024, 4, 13).unwrap());
        assert_eq!(opts.season, 2024);
        assert!(opts.games && opts.rosters);
    }
}
