//! Usage and matchup statistics over recorded battles.
//!
//! Everything here is recomputed from the full input on each call.

use pokepaste_core::{normalize, ParsedPokemon};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

pub const DEFAULT_MIN_MATCHUP_GAMES: u32 = 3;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum BattleOutcome {
    Win,
    Loss,
    /// Ties, forfeits before turn one, unfinished replays.
    Unknown,
}

impl From<String> for BattleOutcome {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "win" | "w" => BattleOutcome::Win,
            "loss" | "lose" | "l" => BattleOutcome::Loss,
            _ => BattleOutcome::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub outcome: BattleOutcome,
    /// Full opposing team sheet.
    #[serde(alias = "opponentTeam")]
    pub opponent_team: Vec<String>,
    /// The part of the sheet actually brought to the battle.
    #[serde(default, alias = "opponentBrought")]
    pub opponent_brought: Vec<String>,
}

impl BattleRecord {
    pub fn new(outcome: BattleOutcome, team: &[&str], brought: &[&str]) -> Self {
        Self {
            outcome,
            opponent_team: team.iter().map(|s| s.to_string()).collect(),
            opponent_brought: brought.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    pub times_on_team: u32,
    pub times_brought: u32,
    pub games_against: u32,
    pub wins_against: u32,
}

impl UsageRecord {
    pub fn win_rate(&self) -> u32 {
        percent(self.wins_against, self.games_against)
    }

    pub fn attendance_rate(&self) -> u32 {
        percent(self.times_brought, self.times_on_team)
    }
}

/// `round(part / whole * 100)` with halves rounded up; 0 when `whole` is 0.
/// `part` is clamped to `whole`, so the result never exceeds 100.
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (u64::from(part.min(whole)), u64::from(whole));
    ((200 * part + whole) / (2 * whole)) as u32
}

/// Per canonical opponent Pokémon: sheet appearances, picks and results.
/// Battles that are neither a win nor a loss are ignored.
pub fn aggregate_usage(battles: &[BattleRecord]) -> BTreeMap<String, UsageRecord> {
    let mut usage: BTreeMap<String, UsageRecord> = BTreeMap::new();
    for battle in battles {
        let won = match battle.outcome {
            BattleOutcome::Win => true,
            BattleOutcome::Loss => false,
            BattleOutcome::Unknown => continue,
        };
        let brought: HashSet<String> = battle
            .opponent_brought
            .iter()
            .map(|name| normalize(name))
            .collect();

        for raw in &battle.opponent_team {
            let name = normalize(raw);
            if name.is_empty() {
                continue;
            }
            let was_brought = brought.contains(&name);
            let record = usage.entry(name).or_default();
            record.times_on_team += 1;
            record.games_against += 1;
            if was_brought {
                record.times_brought += 1;
            }
            if won {
                record.wins_against += 1;
            }
        }
    }
    usage
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupStat {
    pub name: String,
    #[serde(flatten)]
    pub usage: UsageRecord,
    pub win_rate: u32,
    pub attendance_rate: u32,
}

impl MatchupStat {
    pub fn new(name: impl Into<String>, usage: UsageRecord) -> Self {
        Self {
            name: name.into(),
            win_rate: usage.win_rate(),
            attendance_rate: usage.attendance_rate(),
            usage,
        }
    }
}

pub fn matchup_table(usage: &BTreeMap<String, UsageRecord>) -> Vec<MatchupStat> {
    usage
        .iter()
        .map(|(name, record)| MatchupStat::new(name.clone(), *record))
        .collect()
}

fn eligible(usage: &BTreeMap<String, UsageRecord>, min_games: u32) -> Vec<MatchupStat> {
    usage
        .iter()
        .filter(|(_, record)| record.games_against >= min_games)
        .map(|(name, record)| MatchupStat::new(name.clone(), *record))
        .collect()
}

/// Highest win rate first; more games breaks ties.
pub fn best_matchups(usage: &BTreeMap<String, UsageRecord>, min_games: u32) -> Vec<MatchupStat> {
    let mut rows = eligible(usage, min_games);
    rows.sort_by(|a, b| {
        b.win_rate
            .cmp(&a.win_rate)
            .then(b.usage.games_against.cmp(&a.usage.games_against))
            .then_with(|| a.name.cmp(&b.name))
    });
    rows
}

/// Lowest win rate first; more games breaks ties.
pub fn worst_matchups(usage: &BTreeMap<String, UsageRecord>, min_games: u32) -> Vec<MatchupStat> {
    let mut rows = eligible(usage, min_games);
    rows.sort_by(|a, b| {
        a.win_rate
            .cmp(&b.win_rate)
            .then(b.usage.games_against.cmp(&a.usage.games_against))
            .then_with(|| a.name.cmp(&b.name))
    });
    rows
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCount {
    pub name: String,
    pub count: u32,
    pub usage_rate: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveUsage {
    /// Team sheets this Pokémon appeared on.
    pub sheets: u32,
    pub moves: Vec<MoveCount>,
}

/// Move frequencies per canonical Pokémon across team sheets. Move names are
/// grouped case-insensitively and keep the first spelling seen.
pub fn aggregate_move_usage<'a, I>(teams: I) -> BTreeMap<String, MoveUsage>
where
    I: IntoIterator<Item = &'a [ParsedPokemon]>,
{
    struct Tally {
        sheets: u32,
        order: Vec<String>,
        counts: HashMap<String, (String, u32)>,
    }

    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();
    for team in teams {
        for pokemon in team {
            let name = normalize(&pokemon.name);
            if name.is_empty() {
                continue;
            }
            let tally = tallies.entry(name).or_insert_with(|| Tally {
                sheets: 0,
                order: Vec::new(),
                counts: HashMap::new(),
            });
            tally.sheets += 1;
            let mut seen = HashSet::new();
            for mv in &pokemon.moves {
                let key = mv.trim().to_lowercase();
                if key.is_empty() || !seen.insert(key.clone()) {
                    continue;
                }
                if !tally.counts.contains_key(&key) {
                    tally.order.push(key.clone());
                    tally.counts.insert(key.clone(), (mv.trim().to_string(), 0));
                }
                if let Some((_, count)) = tally.counts.get_mut(&key) {
                    *count += 1;
                }
            }
        }
    }

    tallies
        .into_iter()
        .map(|(name, tally)| {
            let mut moves: Vec<MoveCount> = tally
                .order
                .iter()
                .filter_map(|key| tally.counts.get(key))
                .map(|(display, count)| MoveCount {
                    name: display.clone(),
                    count: *count,
                    usage_rate: percent(*count, tally.sheets),
                })
                .collect();
            moves.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
            (
                name,
                MoveUsage {
                    sheets: tally.sheets,
                    moves,
                },
            )
        })
        .collect()
}
