// src/classify.rs
//! Commentary line → typed [`Play`].
//!
//! The site writes commentary from a fixed set of Portuguese templates, e.g.
//!
//! ```text
//! Falta cometida por Gustavo Gómez (Palmeiras).
//! Escanteio, Palmeiras. Cedido por Alex Telles.
//! Gol! Palmeiras 1, Botafogo 0. Raphael Veiga (Palmeiras) chute de pé direito ... Assistência de Rony.
//! ```
//!
//! Each template is a [`Rule`]: a trigger substring plus an extractor that slices
//! the line at offsets fixed by the template's wording. Rules are tried in order
//! and the first trigger found picks the branch; nothing else is tried after it.
//!
//! Offsets are in characters (`Substituição `, `lesão de ` and `Assistência de `
//! are longer in bytes). Every slice is bounds-checked: a line whose trigger
//! matched but whose anchors are missing is treated like any other unrecognized
//! line (`None`), never sliced at a wrong position.

use crate::model::{EventKind, Play};

struct Rule {
    trigger: &'static str,
    extract: fn(&str) -> Option<Fields>,
}

/// Priority order matters: a goal line mentions no foul, but a foul line may
/// mention a team called "Gol…", etc.
const RULES: [Rule; 11] = [
    Rule { trigger: "Falta cometida", extract: foul_committed },
    Rule { trigger: "sofre uma falta", extract: foul_suffered },
    Rule { trigger: "Oportunidade perdida", extract: missed_chance },
    Rule { trigger: "Escanteio", extract: corner },
    Rule { trigger: "Impedimento", extract: offside },
    Rule { trigger: "cartão", extract: card },
    Rule { trigger: "Gol", extract: goal },
    Rule { trigger: "Substituição", extract: substitution },
    Rule { trigger: "lesão", extract: injury },
    Rule { trigger: "Fim do primeiro", extract: first_half_end },
    Rule { trigger: "Fim do segundo", extract: second_half_end },
];

/// Classify one commentary line. `None` = unrecognized (no trigger, or the
/// template's anchors are not where the trigger promises).
pub fn classify(text: &str, minute: &str) -> Option<Play> {
    let rule = RULES.iter().find(|r| text.contains(r.trigger))?;
    let Some(f) = (rule.extract)(text) else {
        log::debug!("trigger {:?} matched but anchors are missing: {text}", rule.trigger);
        return None;
    };
    Some(Play {
        kind: f.kind,
        minute: minute.trim().to_string(),
        player_1: f.player_1,
        player_2: f.player_2,
        team: f.team,
        description: f.description,
    })
}

struct Fields {
    kind: EventKind,
    player_1: Option<String>,
    player_2: Option<String>,
    team: Option<String>,
    description: Option<String>,
}

impl Fields {
    fn new(kind: EventKind) -> Self {
        Self { kind, player_1: None, player_2: None, team: None, description: None }
    }
}

/* ---------------- templates ---------------- */

// "Falta cometida por <p1> (<team>)."
fn foul_committed(t: &str) -> Option<Fields> {
    let point = t.find('(')?;
    let mut f = Fields::new(EventKind::FoulCommitted);
    f.player_1 = field(slice(t, fwd(t, 0, 19)?, back(t, point, 1)?)?);
    f.team = field(slice(t, fwd(t, point, 1)?, back(t, t.len(), 2)?)?);
    Some(f)
}

// "<p2> (<team>) sofre uma falta ..."
fn foul_suffered(t: &str) -> Option<Fields> {
    let point = t.find('(')?;
    let close = t.find(')')?;
    let mut f = Fields::new(EventKind::FoulSuffered);
    f.player_2 = field(slice(t, 0, back(t, point, 1)?)?);
    f.team = field(slice(t, fwd(t, point, 1)?, close)?);
    Some(f)
}

// "Oportunidade perdida. <p1> (<team>) <shot description>. ..."
fn missed_chance(t: &str) -> Option<Fields> {
    let point = t.find('(')?;
    let close = t.find(')')?;
    let mut f = Fields::new(EventKind::MissedChance);
    f.player_1 = field(slice(t, fwd(t, 0, 21)?, back(t, point, 1)?)?);
    f.team = field(slice(t, fwd(t, point, 1)?, close)?);
    f.description = Some(s!(match Shot::of(shot_text(t, close)) {
        Shot::Header => "CABECEIO",
        Shot::RightFoot => "CHUTE (pé direito)",
        Shot::LeftFoot => "CHUTE (pé esquerdo)",
    }));
    Some(f)
}

// "Escanteio, <team>. Cedido por <p2>."
fn corner(t: &str) -> Option<Fields> {
    let start = fwd(t, 0, 11)?;
    let point = find_from(t, ".", start)?;
    let mut f = Fields::new(EventKind::Corner);
    f.team = field(slice(t, start, point)?);

    let rest = t.get(point + 1..)?.trim();
    let rest = rest.strip_suffix('.').unwrap_or(rest);
    let rest = rest.strip_prefix("Cedido por ").unwrap_or(rest);
    f.player_2 = field(rest);
    Some(f)
}

// "Impedimento, <team>. <p1> tentou ..., mas encontrou <p2> em posição de impedimento."
fn offside(t: &str) -> Option<Fields> {
    let start = fwd(t, 0, 13)?;
    let point = find_from(t, ".", start)?;
    let tried = t.find("tentou")?;
    let found = t.find("encontrou")?;
    let pos = t.find(" em posição")?;
    let mut f = Fields::new(EventKind::Offside);
    f.team = field(slice(t, start, point)?);
    f.player_1 = field(slice(t, fwd(t, point, 2)?, back(t, tried, 1)?)?);
    f.player_2 = field(slice(t, fwd(t, found, 10)?, pos)?);
    Some(f)
}

// "<p1> (<team>) recebeu cartão amarelo por <reason>."
fn card(t: &str) -> Option<Fields> {
    let kind = if t.contains("amarelo") {
        EventKind::YellowCard
    } else if t.contains("vermelho") {
        EventKind::RedCard
    } else {
        return None;
    };
    let point = t.find('(')?;
    let close = t.find(')')?;
    let mut f = Fields::new(kind);
    f.player_1 = field(slice(t, 0, back(t, point, 1)?)?);
    f.team = field(slice(t, fwd(t, point, 1)?, close)?);
    if let Some(by) = find_from(t, "por", point) {
        f.description = field(slice(t, by, back(t, t.len(), 1)?)?);
    }
    Some(f)
}

// "Gol! <score>. <p1> (<team>) <shot description>. Assistência de <p2>."
fn goal(t: &str) -> Option<Fields> {
    let point = t.find(" (")?;
    let dot = t.find('.')?;
    let close = t.find(')')?;
    let mut f = Fields::new(EventKind::Goal);
    f.player_1 = field(slice(t, fwd(t, dot, 2)?, point)?);
    f.team = field(slice(t, fwd(t, point, 2)?, close)?);
    if let Some(assist) = t.find("Assistência ") {
        f.player_2 = field(slice(t, fwd(t, assist, 15)?, back(t, t.len(), 1)?)?);
    }
    f.description = Some(s!(match Shot::of(shot_text(t, close)) {
        Shot::Header => "cabeça",
        Shot::RightFoot => "pé direito",
        Shot::LeftFoot => "pé esquerdo",
    }));
    Some(f)
}

// "Substituição <team>, entra em campo <p1> substituindo <p2>."
fn substitution(t: &str) -> Option<Fields> {
    let start = fwd(t, 0, 13)?;
    let comma = find_from(t, ",", start)?;
    let point = t.find("substituindo")?;
    let field_at = t.find("campo")?;
    let end = find_from(t, ".", point)?;
    let mut f = Fields::new(EventKind::Substitution);
    f.team = field(slice(t, start, comma)?);
    f.player_1 = field(slice(t, fwd(t, field_at, 6)?, back(t, point, 1)?)?);
    f.player_2 = field(slice(t, fwd(t, point, 13)?, end)?);
    Some(f)
}

// "... lesão de <p1> (<team>)."
fn injury(t: &str) -> Option<Fields> {
    let point = t.find('(')?;
    let at = t.find("lesão de")?;
    let close = find_from(t, ")", point)?;
    let mut f = Fields::new(EventKind::Injury);
    f.player_1 = field(slice(t, fwd(t, at, 9)?, back(t, point, 1)?)?);
    f.team = field(slice(t, fwd(t, point, 1)?, close)?);
    Some(f)
}

fn first_half_end(_: &str) -> Option<Fields> {
    Some(Fields::new(EventKind::FirstHalfEnd))
}

fn second_half_end(_: &str) -> Option<Fields> {
    Some(Fields::new(EventKind::SecondHalfEnd))
}

/* ---------------- shot type ---------------- */

enum Shot {
    Header,
    RightFoot,
    LeftFoot,
}

impl Shot {
    /// Left foot when nothing else is named. Placement ("canto inferior
    /// direito") shares the sentence, so only the foot phrase counts.
    fn of(desc: &str) -> Self {
        if desc.contains("cabeça") {
            Shot::Header
        } else if desc.contains("pé direito") {
            Shot::RightFoot
        } else {
            Shot::LeftFoot
        }
    }
}

/// Text between the team's closing parenthesis and the end of that sentence.
fn shot_text(t: &str, close: usize) -> &str {
    let from = close + 1;
    let to = find_from(t, ".", from).unwrap_or(t.len());
    t.get(from..to).unwrap_or_default()
}

/* ---------------- char-offset slicing ---------------- */

/// Byte index `n` characters after byte index `at`.
fn fwd(s: &str, at: usize, n: usize) -> Option<usize> {
    s.get(at..)?
        .char_indices()
        .map(|(i, _)| at + i)
        .chain(std::iter::once(s.len()))
        .nth(n)
}

/// Byte index `n` characters before byte index `at`.
fn back(s: &str, at: usize, n: usize) -> Option<usize> {
    if n == 0 {
        return s.is_char_boundary(at).then_some(at);
    }
    s.get(..at)?.char_indices().rev().nth(n - 1).map(|(i, _)| i)
}

fn find_from(s: &str, pat: &str, from: usize) -> Option<usize> {
    s.get(from..)?.find(pat).map(|i| from + i)
}

/// Refuses inverted or out-of-range spans instead of yielding garbage.
fn slice(s: &str, from: usize, to: usize) -> Option<&str> {
    if from > to {
        return None;
    }
    s.get(from..to)
}

fn field(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}
