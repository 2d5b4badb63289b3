// src/specs/commentary.rs
//! Commentary page: two parallel columns (timestamp, comment). Each pair goes
//! through [`crate::classify::classify`]; lines it does not recognize are
//! dropped with an `Unrecognized` diagnostic.

use scraper::Html;

use super::ensure_played;
use crate::classify::classify;
use crate::core::html::raw_text;
use crate::core::net::{urls, Fetch};
use crate::error::{Result, ScrapeError};
use crate::model::{CommentaryEvent, MatchCommentary};
use crate::report::{Diagnostic, Reporter};

pub fn fetch(fetcher: &dyn Fetch, match_id: &str, rep: &mut dyn Reporter) -> Result<MatchCommentary> {
    let doc = fetcher.fetch(&urls::commentary(match_id))?;
    parse_doc(&doc, match_id, rep)
}

pub fn parse_doc(doc: &Html, match_id: &str, rep: &mut dyn Reporter) -> Result<MatchCommentary> {
    ensure_played(doc, match_id)?;

    let ts_sel = css!("div.MatchCommentary__Comment__Timestamp");
    let body_sel = css!("div.MatchCommentary__Comment__GameDetails");
    let timestamps: Vec<String> = doc.select(&ts_sel).map(raw_text).collect();
    let comments: Vec<String> = doc.select(&body_sel).map(raw_text).collect();

    pair_up(match_id, &timestamps, &comments, rep)
}

/// Classify aligned (minute, text) pairs. Sequences of different length abort
/// the whole page.
pub fn pair_up(
    match_id: &str,
    timestamps: &[String],
    comments: &[String],
    rep: &mut dyn Reporter,
) -> Result<MatchCommentary> {
    if timestamps.len() != comments.len() {
        rep.diagnostic(&Diagnostic::Inconsistent {
            match_id: s!(match_id),
            timestamps: timestamps.len(),
            comments: comments.len(),
        });
        return Err(ScrapeError::Inconsistent {
            match_id: s!(match_id),
            timestamps: timestamps.len(),
            comments: comments.len(),
        });
    }

    let mut events = Vec::new();
    for (minute, text) in timestamps.iter().zip(comments) {
        match classify(text, minute) {
            Some(play) => {
                let seq = events.len() as u32 + 1;
                events.push(CommentaryEvent { seq, play });
            }
            None => rep.diagnostic(&Diagnostic::Unrecognized {
                match_id: s!(match_id),
                minute: minute.clone(),
                text: text.clone(),
            }),
        }
    }

    Ok(MatchCommentary { match_id: s!(match_id), events })
}
