// src/report.rs
//! Run-scoped reporting.
//!
//! Extractors, normalizers and collection loops never touch process-wide logging
//! state directly for anything a caller might want to inspect; they hand
//! [`Diagnostic`]s and status lines to a `&mut dyn Reporter` owned by the run.
//! Frontends implement this to surface status to users; tests use [`Collector`].

use std::fmt;

use crate::normalize::Table;

/// Everything the pipeline drops or tolerates instead of failing.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// Fetch failed or the site answered with its 404 page.
    NotFound { url: String },
    /// Match page without a score.
    Canceled { match_id: String },
    /// Timestamp/comment sequences of different length.
    Inconsistent { match_id: String, timestamps: usize, comments: usize },
    /// Commentary line that matched no trigger (or whose anchors were missing).
    Unrecognized { match_id: String, minute: String, text: String },
    /// Optional element absent; the field is null or the row is skipped.
    MissingField { page: String, field: &'static str },
    /// Text that could not be coerced to the column type.
    Coercion { table: Table, field: &'static str, value: String },
    /// Normalizer called with an extract of the wrong kind.
    WrongInput { table: Table, got: &'static str },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NotFound { url } => write!(f, "not found: {url}"),
            Diagnostic::Canceled { match_id } => write!(f, "match {match_id}: canceled (no score)"),
            Diagnostic::Inconsistent { match_id, timestamps, comments } => write!(
                f,
                "match {match_id}: data inconsistency ({timestamps} timestamps, {comments} comments)"
            ),
            Diagnostic::Unrecognized { match_id, minute, text } => {
                write!(f, "match {match_id} [{minute}]: non-standard comment: {text}")
            }
            Diagnostic::MissingField { page, field } => write!(f, "{page}: missing {field}"),
            Diagnostic::Coercion { table, field, value } => {
                write!(f, "{}.{field}: cannot coerce {value:?}", table.name())
            }
            Diagnostic::WrongInput { table, got } => {
                write!(f, "{}: expected its own extract, got {got}", table.name())
            }
        }
    }
}

pub trait Reporter {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Something was dropped or nulled; never fatal.
    fn diagnostic(&mut self, _d: &Diagnostic) {}

    /// One logical unit (a match, a team) completed.
    fn item_done(&mut self, _id: &str) {}

    /// One logical unit failed; the batch carries on.
    fn item_failed(&mut self, _id: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op reporter.
pub struct NullReporter;
impl Reporter for NullReporter {}

/// Forwards everything to the `log` facade.
#[derive(Default)]
pub struct LogReporter {
    total: usize,
    done: usize,
    failed: usize,
}

impl Reporter for LogReporter {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.failed = 0;
    }

    fn log(&mut self, msg: &str) {
        log::info!("{msg}");
    }

    fn diagnostic(&mut self, d: &Diagnostic) {
        match d {
            Diagnostic::Unrecognized { .. } | Diagnostic::MissingField { .. } => log::debug!("{d}"),
            _ => log::warn!("{d}"),
        }
    }

    fn item_done(&mut self, id: &str) {
        self.done += 1;
        log::info!("[{}/{}] {id} done", self.done + self.failed, self.total);
    }

    fn item_failed(&mut self, id: &str) {
        self.failed += 1;
        log::warn!("[{}/{}] {id} failed", self.done + self.failed, self.total);
    }

    fn finish(&mut self) {
        if self.total > 0 {
            log::info!("{} ok, {} failed", self.done, self.failed);
        }
    }
}

/// Keeps everything in memory so a caller can assert on it.
#[derive(Debug, Default)]
pub struct Collector {
    pub diagnostics: Vec<Diagnostic>,
    pub lines: Vec<String>,
    pub done: Vec<String>,
    pub failed: Vec<String>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&Diagnostic) -> bool) -> usize {
        self.diagnostics.iter().filter(|d| pred(d)).count()
    }
}

impl Reporter for Collector {
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }

    fn diagnostic(&mut self, d: &Diagnostic) {
        self.diagnostics.push(d.clone());
    }

    fn item_done(&mut self, id: &str) {
        self.done.push(s!(id));
    }

    fn item_failed(&mut self, id: &str) {
        self.failed.push(s!(id));
    }
}
