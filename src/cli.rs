// src/cli.rs
use std::time::Duration;

use crate::config::options::{AppOptions, ExportFormat};
use crate::core::net::HttpFetcher;
use crate::dates::parse_compact;
use crate::error::{Result, ScrapeError};
use crate::report::Reporter;
use crate::runner::{self, RunSummary};

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Command {
    Run(AppOptions),
    Help,
}

/// Parse arguments (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut opts = AppOptions::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| usage(format!("Missing value for {flag}")));
        match a.as_str() {
            "--from" => opts.scrape.from = parse_compact(&value("--from")?)?,
            "--to" => opts.scrape.to = Some(parse_compact(&value("--to")?)?),
            "--season" => {
                let v = value("--season")?;
                opts.scrape.season = v.parse().map_err(|_| usage(format!("Invalid season: {v}")))?;
            }
            "-o" | "--out" => opts.export.set_out_dir(&value("--out")?),
            "--format" => {
                opts.export.format = match value("--format")?.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(usage(format!("Unknown format: {other}"))),
                };
            }
            "--pause-ms" => {
                let v = value("--pause-ms")?;
                opts.scrape.pause_ms = v.parse().map_err(|_| usage(format!("Invalid pause: {v}")))?;
            }
            "--no-games" => opts.scrape.games = false,
            "--no-rosters" => opts.scrape.rosters = false,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(usage(format!("Unknown arg: {a}"))),
        }
    }

    Ok(Command::Run(opts))
}

/// Live run against the site.
pub fn run(opts: &AppOptions, rep: &mut dyn Reporter) -> Result<RunSummary> {
    let fetcher = HttpFetcher::new(Duration::from_millis(opts.scrape.pause_ms))?;
    runner::run(opts, &fetcher, rep)
}

fn usage(msg: String) -> ScrapeError {
    ScrapeError::Usage(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::Path;

    fn opts(args: &[&str]) -> AppOptions {
        match parse_args(args.iter().copied()).unwrap() {
            Command::Run(o) => o,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn defaults_without_args() {
        let o = opts(&[]);
        assert_eq!(o, AppOptions::default());
        assert_eq!(o.scrape.from, NaiveDate::from_ymd_opt(2024, 4, 13).unwrap());
        assert!(o.scrape.games && o.scrape.rosters);
    }

    #[test]
    fn all_flags() {
        let o = opts(&[
            "--from", "20240501", "--to", "20240505", "--season", "2023", "-o", "out/x", "--format", "TSV",
            "--pause-ms", "0", "--no-rosters",
        ]);
        assert_eq!(o.scrape.from, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(o.scrape.to, NaiveDate::from_ymd_opt(2024, 5, 5));
        assert_eq!(o.scrape.season, 2023);
        assert_eq!(o.export.out_dir(), Path::new("out/x"));
        assert_eq!(o.export.format, ExportFormat::Tsv);
        assert_eq!(o.scrape.pause_ms, 0);
        assert!(o.scrape.games && !o.scrape.rosters);
    }

    #[test]
    fn bad_input_is_a_usage_error() {
        assert!(matches!(parse_args(["--bogus"]), Err(ScrapeError::Usage(_))));
        assert!(matches!(parse_args(["--season"]), Err(ScrapeError::Usage(_))));
        assert!(matches!(parse_args(["--format", "xlsx"]), Err(ScrapeError::Usage(_))));
        assert!(matches!(parse_args(["--from", "13/04/2024"]), Err(ScrapeError::DateRange(_))));
        assert!(matches!(parse_args(["-h"]), Ok(Command::Help)));
    }
}
