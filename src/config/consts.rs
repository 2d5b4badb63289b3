// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.espn.com.br";
pub const LEAGUE: &str = "bra.1";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/87.0.4280.88 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite

// Link prefixes stripped to get source ids
pub const PLAYER_PREFIX: &str = "https://www.espn.com.br/futebol/jogador/_/id/";
pub const GAME_PREFIX: &str = "/futebol/partida-estatisticas/_/jogoId/";
pub const TEAM_PREFIX: &str = "/futebol/time/_/id/";

// Scrape
pub const DEFAULT_SEASON: i32 = 2024;
pub const FIRST_ROUND: &str = "20240413";

// Export
pub const DEFAULT_OUT_DIR: &str = "Datas";
