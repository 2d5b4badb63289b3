// src/dates.rs
use chrono::{Days, NaiveDate};

use crate::error::{Result, ScrapeError};

/// Inclusive day-by-day range. Empty when `from > to`.
#[derive(Clone, Debug)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { next: (from <= to).then_some(from), end: to }
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let cur = self.next?;
        self.next = cur.checked_add_days(Days::new(1)).filter(|d| *d <= self.end);
        Some(cur)
    }
}

/// `20240413` → 2024-04-13
pub fn parse_compact(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y%m%d")
        .map_err(|e| ScrapeError::DateRange(format!("{s:?}: {e}")))
}

/// 2024-04-13 → `20240413`
pub fn compact(d: NaiveDate) -> String {
    d.format("%Y%m%d").to_string()
}

/// Only past (or current) days are scraped.
pub fn validate(from: NaiveDate, to: NaiveDate, today: NaiveDate) -> Result<()> {
    if from > today || to > today {
        return Err(ScrapeError::DateRange(format!(
            "{from}..{to} reaches past today ({today}); only past games are scraped"
        )));
    }
    if from > to {
        return Err(ScrapeError::DateRange(format!("start {from} is after end {to}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn range_is_inclusive_and_crosses_months() {
        let days: Vec<_> = DateRange::new(d(2024, 4, 29), d(2024, 5, 2)).collect();
        assert_eq!(days, vec![d(2024, 4, 29), d(2024, 4, 30), d(2024, 5, 1), d(2024, 5, 2)]);
    }

    #[test]
    fn single_day_and_inverted_range() {
        assert_eq!(DateRange::new(d(2024, 4, 13), d(2024, 4, 13)).count(), 1);
        assert_eq!(DateRange::new(d(2024, 4, 14), d(2024, 4, 13)).count(), 0);
    }

    #[test]
    fn compact_form_round_trips() {
        assert_eq!(parse_compact("20240413").unwrap(), d(2024, 4, 13));
        assert_eq!(compact(d(2024, 4, 3)), "20240403");
        assert!(parse_compact("2024-04-13").is_err());
    }

    #[test]
    fn rejects_future_and_inverted() {
        let today = d(2024, 6, 1);
        assert!(validate(d(2024, 4, 13), d(2024, 6, 1), today).is_ok());
        assert!(validate(d(2024, 4, 13), d(2024, 6, 2), today).is_err());
        assert!(validate(d(2024, 5, 2), d(2024, 5, 1), today).is_err());
    }
}
