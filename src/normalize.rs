// src/normalize.rs
//! Extract → destination-table rows.
//!
//! Each destination table has a typed row struct implementing [`Row`]; its
//! `cells()` are in the table's exact column order, so column completeness is
//! a compile-time property. The per-table functions coerce source text to
//! numbers and fan nested extracts out to one row per team / player / event.
//!
//! Coercion failures drop the affected input (a whole match, or one roster
//! player) and report a [`Diagnostic::Coercion`]. [`normalize`] dispatches by
//! table and answers a mismatched extract with no rows and
//! [`Diagnostic::WrongInput`].

use std::fmt;

use crate::core::sanitize::strip_meters;
use crate::model::{
    EventKind, LineupStatus, MatchCommentary, MatchLineup, MatchReport, Position, RosterPlayer,
    Team, TeamRoster, TeamSide,
};
use crate::report::{Diagnostic, Reporter};

/* ---------------- tables ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    Statistics,
    Lineups,
    Plays,
    Matches,
    Players,
    Tenures,
    Teams,
}

impl Table {
    pub const ALL: [Table; 7] = [
        Table::Statistics,
        Table::Lineups,
        Table::Plays,
        Table::Matches,
        Table::Players,
        Table::Tenures,
        Table::Teams,
    ];

    /// File stem, also the downstream table name.
    pub fn name(self) -> &'static str {
        match self {
            Table::Statistics => "estatisticas",
            Table::Lineups => "escalacoes",
            Table::Plays => "lances",
            Table::Matches => "partidas",
            Table::Players => "jogadores",
            Table::Tenures => "passagens",
            Table::Teams => "times",
        }
    }

    /// Header row, byte-for-byte what the loaders expect.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::Statistics => &["id_partida", "id_time", "chute_gol", "gol", "chute", "defesa", "posse"],
            Table::Lineups => &["time", "partida", "jogador", "status_"],
            Table::Plays => &["id_partida", "jogador_1", "jogador_2", "tipo", "minuto", "descricao", "time"],
            Table::Matches => &[
                "espn_id", "local_", "estadio", "campeonato", "arbitro", "data_", "horario", "audiencia",
            ],
            Table::Players => &["nome", "espn_id", "posicao", "idade", "altura", "nacionalidade"],
            Table::Tenures => &["id_jogador", "id_time", "ano"],
            Table::Teams => &["nome", "espn_id"],
        }
    }
}

/* ---------------- values ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int(n) => write!(f, "{n}"),
            // 58.0 stays "58.0"
            Value::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{x:.1}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(t) => f.write_str(t),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(t: &str) -> Self {
        Value::Text(s!(t))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<&String> for Value {
    fn from(t: &String) -> Self {
        Value::Text(t.clone())
    }
}

/* ---------------- rows ---------------- */

pub trait Row {
    const TABLE: Table;
    fn cells(&self) -> Vec<Value>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatRow {
    pub id_partida: i64,
    pub id_time: String,
    pub chute_gol: i64,
    pub gol: i64,
    pub chute: i64,
    pub defesa: i64,
    pub posse: f64,
}

impl Row for StatRow {
    const TABLE: Table = Table::Statistics;
    fn cells(&self) -> Vec<Value> {
        vec![
            self.id_partida.into(),
            (&self.id_time).into(),
            self.chute_gol.into(),
            self.gol.into(),
            self.chute.into(),
            self.defesa.into(),
            self.posse.into(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineupRow {
    pub time: String,
    pub partida: i64,
    pub jogador: i64,
    pub status: LineupStatus,
}

impl Row for LineupRow {
    const TABLE: Table = Table::Lineups;
    fn cells(&self) -> Vec<Value> {
        vec![(&self.time).into(), self.partida.into(), self.jogador.into(), self.status.tag().into()]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayRow {
    pub id_partida: i64,
    pub jogador_1: Option<String>,
    pub jogador_2: Option<String>,
    pub tipo: EventKind,
    pub minuto: String,
    pub descricao: Option<String>,
    pub time: Option<String>,
}

impl Row for PlayRow {
    const TABLE: Table = Table::Plays;
    fn cells(&self) -> Vec<Value> {
        vec![
            self.id_partida.into(),
            self.jogador_1.as_ref().into(),
            self.jogador_2.as_ref().into(),
            self.tipo.tag().into(),
            (&self.minuto).into(),
            self.descricao.as_ref().into(),
            self.time.as_ref().into(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatchRow {
    pub espn_id: i64,
    pub local: Option<String>,
    pub estadio: Option<String>,
    pub campeonato: Option<String>,
    pub arbitro: Option<String>,
    pub data: Option<String>,
    pub horario: Option<String>,
    pub audiencia: Option<i64>,
}

impl Row for MatchRow {
    const TABLE: Table = Table::Matches;
    fn cells(&self) -> Vec<Value> {
        vec![
            self.espn_id.into(),
            self.local.as_ref().into(),
            self.estadio.as_ref().into(),
            self.campeonato.as_ref().into(),
            self.arbitro.as_ref().into(),
            self.data.as_ref().into(),
            self.horario.as_ref().into(),
            self.audiencia.into(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerRow {
    pub nome: String,
    pub espn_id: i64,
    pub posicao: Option<Position>,
    pub idade: Option<i64>,
    pub altura: Option<f64>,
    pub nacionalidade: Option<String>,
}

impl Row for PlayerRow {
    const TABLE: Table = Table::Players;
    fn cells(&self) -> Vec<Value> {
        vec![
            (&self.nome).into(),
            self.espn_id.into(),
            self.posicao.map(Position::tag).into(),
            self.idade.into(),
            self.altura.into(),
            self.nacionalidade.as_ref().into(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TenureRow {
    pub id_jogador: i64,
    pub id_time: i64,
    pub ano: i64,
}

impl Row for TenureRow {
    const TABLE: Table = Table::Tenures;
    fn cells(&self) -> Vec<Value> {
        vec![self.id_jogador.into(), self.id_time.into(), self.ano.into()]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamRow {
    pub nome: String,
    pub espn_id: i64,
}

impl Row for TeamRow {
    const TABLE: Table = Table::Teams;
    fn cells(&self) -> Vec<Value> {
        vec![(&self.nome).into(), self.espn_id.into()]
    }
}

/* ---------------- dispatch ---------------- */

/// Any extractor output.
#[derive(Clone, Copy, Debug)]
pub enum Extract<'a> {
    Match(&'a MatchReport),
    Commentary(&'a MatchCommentary),
    Lineup(&'a MatchLineup),
    Player(&'a RosterPlayer),
    Roster(&'a TeamRoster),
    Teams(&'a [Team]),
}

impl Extract<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Extract::Match(_) => "match report",
            Extract::Commentary(_) => "commentary",
            Extract::Lineup(_) => "lineup",
            Extract::Player(_) => "roster player",
            Extract::Roster(_) => "team roster",
            Extract::Teams(_) => "team list",
        }
    }
}

/// Rows for `table` built from `input`, as cells in column order.
pub fn normalize(table: Table, input: &Extract<'_>, rep: &mut dyn Reporter) -> Vec<Vec<Value>> {
    match (table, *input) {
        (Table::Statistics, Extract::Match(r)) => cells(statistics(r, rep)),
        (Table::Matches, Extract::Match(r)) => cells(match_row(r, rep)),
        (Table::Plays, Extract::Commentary(c)) => cells(plays(c, rep)),
        (Table::Lineups, Extract::Lineup(l)) => cells(lineups(l, rep)),
        (Table::Players, Extract::Player(p)) => cells(player(p, rep)),
        (Table::Players, Extract::Roster(r)) => cells(players(r, rep)),
        (Table::Tenures, Extract::Roster(r)) => cells(tenures(r, rep)),
        (Table::Teams, Extract::Teams(t)) => cells(teams(t, rep)),
        (table, other) => {
            rep.diagnostic(&Diagnostic::WrongInput { table, got: other.kind() });
            Vec::new()
        }
    }
}

fn cells<R: Row>(rows: impl IntoIterator<Item = R>) -> Vec<Vec<Value>> {
    rows.into_iter().map(|r| r.cells()).collect()
}

/* ---------------- per table ---------------- */

/// Two rows (home, away) or none.
pub fn statistics(r: &MatchReport, rep: &mut dyn Reporter) -> Vec<StatRow> {
    let mut c = Coerce::new(Table::Statistics, rep);
    let rows: Option<Vec<StatRow>> = [&r.home, &r.away]
        .into_iter()
        .map(|side| stat_row(&mut c, &r.match_id, side))
        .collect();
    rows.unwrap_or_default()
}

fn stat_row(c: &mut Coerce<'_>, match_id: &str, side: &TeamSide) -> Option<StatRow> {
    Some(StatRow {
        id_partida: c.int("id_partida", match_id)?,
        id_time: side.name.clone(),
        chute_gol: c.int("chute_gol", &side.shots_on_target)?,
        gol: c.int("gol", &side.goals)?,
        chute: c.int("chute", &side.shots)?,
        defesa: c.int("defesa", &side.saves)?,
        posse: c.float("posse", &side.possession)?,
    })
}

pub fn match_row(r: &MatchReport, rep: &mut dyn Reporter) -> Option<MatchRow> {
    let mut c = Coerce::new(Table::Matches, rep);
    Some(MatchRow {
        espn_id: c.int("espn_id", &r.match_id)?,
        local: r.location.clone(),
        estadio: r.stadium.clone(),
        campeonato: r.competition.clone(),
        arbitro: r.referee.clone(),
        data: r.date.clone(),
        horario: r.kickoff.clone(),
        audiencia: c.opt_int("audiencia", r.attendance.as_deref())?,
    })
}

/// One row per recognized event, in page order.
pub fn plays(m: &MatchCommentary, rep: &mut dyn Reporter) -> Vec<PlayRow> {
    let mut c = Coerce::new(Table::Plays, rep);
    let Some(id) = c.int("id_partida", &m.match_id) else { return Vec::new() };
    m.events
        .iter()
        .map(|e| PlayRow {
            id_partida: id,
            jogador_1: e.play.player_1.clone(),
            jogador_2: e.play.player_2.clone(),
            tipo: e.play.kind,
            minuto: e.play.minute.clone(),
            descricao: e.play.description.clone(),
            time: e.play.team.clone(),
        })
        .collect()
}

/// One row per (team, player).
pub fn lineups(l: &MatchLineup, rep: &mut dyn Reporter) -> Vec<LineupRow> {
    let mut c = Coerce::new(Table::Lineups, rep);
    lineup_rows(&mut c, l).unwrap_or_default()
}

fn lineup_rows(c: &mut Coerce<'_>, l: &MatchLineup) -> Option<Vec<LineupRow>> {
    let partida = c.int("partida", &l.match_id)?;
    let mut out = Vec::new();
    for team in [&l.home, &l.away] {
        for (id, status) in team.entries() {
            out.push(LineupRow { time: team.team.clone(), partida, jogador: c.int("jogador", id)?, status });
        }
    }
    Some(out)
}

pub fn player(p: &RosterPlayer, rep: &mut dyn Reporter) -> Option<PlayerRow> {
    let mut c = Coerce::new(Table::Players, rep);
    let height = p.height.as_deref().map(strip_meters);
    Some(PlayerRow {
        nome: p.name.clone(),
        espn_id: c.int("espn_id", &p.espn_id)?,
        posicao: p.position,
        idade: c.opt_int("idade", p.age.as_deref())?,
        altura: c.opt_float("altura", height.as_deref())?,
        nacionalidade: p.nationality.clone(),
    })
}

/// Player by player; one bad row does not drop the team.
pub fn players(r: &TeamRoster, rep: &mut dyn Reporter) -> Vec<PlayerRow> {
    r.players.iter().filter_map(|p| player(p, rep)).collect()
}

/// One row per player for the roster's season.
pub fn tenures(r: &TeamRoster, rep: &mut dyn Reporter) -> Vec<TenureRow> {
    let mut c = Coerce::new(Table::Tenures, rep);
    let Some(team) = c.int("id_time", &r.team_id) else { return Vec::new() };
    r.players
        .iter()
        .filter_map(|p| {
            Some(TenureRow { id_jogador: c.int("id_jogador", &p.espn_id)?, id_time: team, ano: i64::from(r.season) })
        })
        .collect()
}

pub fn teams(ts: &[Team], rep: &mut dyn Reporter) -> Vec<TeamRow> {
    let mut c = Coerce::new(Table::Teams, rep);
    ts.iter()
        .filter_map(|t| Some(TeamRow { nome: t.name.clone(), espn_id: c.int("espn_id", &t.espn_id)? }))
        .collect()
}

/* ---------------- coercion ---------------- */

/// Text → number for one table; every failure is reported.
struct Coerce<'r> {
    table: Table,
    rep: &'r mut dyn Reporter,
}

impl<'r> Coerce<'r> {
    fn new(table: Table, rep: &'r mut dyn Reporter) -> Self {
        Self { table, rep }
    }

    fn fail(&mut self, field: &'static str, value: &str) {
        self.rep.diagnostic(&Diagnostic::Coercion { table: self.table, field, value: s!(value) });
    }

    fn int(&mut self, field: &'static str, value: &str) -> Option<i64> {
        match value.trim().parse() {
            Ok(n) => Some(n),
            Err(_) => {
                self.fail(field, value);
                None
            }
        }
    }

    fn float(&mut self, field: &'static str, value: &str) -> Option<f64> {
        match value.trim().parse() {
            Ok(x) => Some(x),
            Err(_) => {
                self.fail(field, value);
                None
            }
        }
    }

    /// Absent stays `Some(None)`; present but malformed is `None`.
    fn opt_int(&mut self, field: &'static str, value: Option<&str>) -> Option<Option<i64>> {
        match value {
            None => Some(None),
            Some(v) => self.int(field, v).map(Some),
        }
    }

    fn opt_float(&mut self, field: &'static str, value: Option<&str>) -> Option<Option<f64>> {
        match value {
            None => Some(None),
            Some(v) => self.float(field, v).map(Some),
        }
    }
}
