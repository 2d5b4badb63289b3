// src/model.rs
//! Typed shapes produced by the page extractors.
//!
//! Values are kept as the text the page shows (`"12"`, `"58.3"`, `"1.85 m"`);
//! coercion to numbers belongs to [`crate::normalize`].

/// Closed set of commentary event types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    FoulCommitted,
    FoulSuffered,
    MissedChance,
    Corner,
    Offside,
    YellowCard,
    RedCard,
    Goal,
    Substitution,
    Injury,
    FirstHalfEnd,
    SecondHalfEnd,
}

impl EventKind {
    /// Value stored in `lances.tipo`.
    pub fn tag(self) -> &'static str {
        match self {
            EventKind::FoulCommitted => "FALTA-FEITA",
            EventKind::FoulSuffered => "FALTA-SOFRIDA",
            EventKind::MissedChance => "GOL-PERDIDO",
            EventKind::Corner => "ESCANTEIO",
            EventKind::Offside => "IMPEDIMENTO",
            EventKind::YellowCard => "CARTAO-AMARELO",
            EventKind::RedCard => "CARTAO-VERMELHO",
            EventKind::Goal => "GOL",
            EventKind::Substitution => "SUBSTITUICAO",
            EventKind::Injury => "LESAO",
            EventKind::FirstHalfEnd => "ENCERRAMENTO-1",
            EventKind::SecondHalfEnd => "ENCERRAMENTO-2",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineupStatus {
    Starter,
    Substitute,
    Reserve,
}

impl LineupStatus {
    pub fn tag(self) -> &'static str {
        match self {
            LineupStatus::Starter => "TITULAR",
            LineupStatus::Substitute => "SUBSTITUTO",
            LineupStatus::Reserve => "RESERVA",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    Attacker,
    Goalkeeper,
    Defender,
    Midfielder,
}

impl Position {
    /// Roster table code; anything else is unmapped.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "A" => Some(Position::Attacker),
            "G" => Some(Position::Goalkeeper),
            "D" => Some(Position::Defender),
            "M" => Some(Position::Midfielder),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Position::Attacker => "ATACANTE",
            Position::Goalkeeper => "GOLEIRO",
            Position::Defender => "DEFENSOR",
            Position::Midfielder => "MEIO-CAMPO",
        }
    }
}

/* ---------------- statistics page ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamSide {
    pub name: String,
    pub goals: String,
    pub shots_on_target: String,
    pub shots: String,
    pub saves: String,
    pub possession: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchReport {
    pub match_id: String,
    pub competition: Option<String>,
    pub stadium: Option<String>,
    pub location: Option<String>,
    pub kickoff: Option<String>,
    pub date: Option<String>,
    pub attendance: Option<String>,
    pub referee: Option<String>,
    pub home: TeamSide,
    pub away: TeamSide,
}

/* ---------------- commentary page ---------------- */

/// One recognized commentary line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Play {
    pub kind: EventKind,
    pub minute: String,
    pub player_1: Option<String>,
    pub player_2: Option<String>,
    pub team: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentaryEvent {
    /// 1-based, in order of appearance; minutes are not unique.
    pub seq: u32,
    pub play: Play,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchCommentary {
    pub match_id: String,
    pub events: Vec<CommentaryEvent>,
}

/* ---------------- lineup page ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TeamLineup {
    pub team: String,
    pub starters: Vec<String>,
    pub substitutes: Vec<String>,
    pub reserves: Vec<String>,
}

impl TeamLineup {
    /// Every (player, status) pair; each player appears once.
    pub fn entries(&self) -> impl Iterator<Item = (&str, LineupStatus)> + '_ {
        tagged(&self.starters, LineupStatus::Starter)
            .chain(tagged(&self.substitutes, LineupStatus::Substitute))
            .chain(tagged(&self.reserves, LineupStatus::Reserve))
    }
}

fn tagged(ids: &[String], st: LineupStatus) -> impl Iterator<Item = (&str, LineupStatus)> + '_ {
    ids.iter().map(move |id| (id.as_str(), st))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchLineup {
    pub match_id: String,
    pub home: TeamLineup,
    pub away: TeamLineup,
}

/* ---------------- roster + standings pages ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterPlayer {
    pub name: String,
    pub espn_id: String,
    pub position: Option<Position>,
    pub age: Option<String>,
    pub height: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRoster {
    pub team_id: String,
    pub season: i32,
    pub players: Vec<RosterPlayer>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub espn_id: String,
}
