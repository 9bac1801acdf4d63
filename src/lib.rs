pub mod aggregate;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod service;
pub mod source;

pub use crate::aggregate::{aggregate_usage, BattleOutcome, BattleRecord, UsageRecord};
pub use crate::error::PasteError;
pub use crate::service::{FetchOptions, ParsedPaste, PasteMetadata, PasteService};
pub use crate::source::PasteSource;
pub use pokepaste_core::{is_valid_name, normalize, ParsedPokemon};

use crate::aggregate::{best_matchups, matchup_table, worst_matchups, MatchupStat};
use anyhow::Context;
use serde::Serialize;
use std::path::Path;

pub fn load_battles(path: &Path) -> anyhow::Result<Vec<BattleRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read battles file at {}", path.display()))?;
    let battles: Vec<BattleRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    Ok(battles)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupReport {
    pub battles: usize,
    pub counted_battles: usize,
    pub pokemon: Vec<MatchupStat>,
    pub best: Vec<MatchupStat>,
    pub worst: Vec<MatchupStat>,
}

pub fn matchup_report(battles: &[BattleRecord], min_games: u32) -> MatchupReport {
    let usage = aggregate_usage(battles);
    MatchupReport {
        battles: battles.len(),
        counted_battles: battles
            .iter()
            .filter(|b| b.outcome != BattleOutcome::Unknown)
            .count(),
        pokemon: matchup_table(&usage),
        best: best_matchups(&usage, min_games),
        worst: worst_matchups(&usage, min_games),
    }
}
