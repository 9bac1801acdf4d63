use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_LEVEL: u32 = 50;
pub const MAX_MOVES: usize = 4;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKey {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

/// Positional order used by `EVs:`/`IVs:` lines.
pub const STAT_ORDER: [StatKey; 6] = [
    StatKey::Hp,
    StatKey::Atk,
    StatKey::Def,
    StatKey::Spa,
    StatKey::Spd,
    StatKey::Spe,
];

impl StatKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StatKey::Hp => "hp",
            StatKey::Atk => "atk",
            StatKey::Def => "def",
            StatKey::Spa => "spa",
            StatKey::Spd => "spd",
            StatKey::Spe => "spe",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only stats that were actually written in the paste are present.
pub type StatSpread = BTreeMap<StatKey, u32>;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub fn marker(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPokemon {
    /// Canonical species identifier.
    pub name: String,
    pub nickname: Option<String>,
    pub item: Option<String>,
    pub ability: Option<String>,
    pub level: u32,
    pub nature: Option<String>,
    pub tera_type: Option<String>,
    pub moves: Vec<String>,
    #[serde(default)]
    pub evs: StatSpread,
    #[serde(default)]
    pub ivs: StatSpread,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub shiny: bool,
}

impl ParsedPokemon {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nickname: None,
            item: None,
            ability: None,
            level: DEFAULT_LEVEL,
            nature: None,
            tera_type: None,
            moves: Vec::new(),
            evs: StatSpread::new(),
            ivs: StatSpread::new(),
            gender: None,
            shiny: false,
        }
    }

    /// Appends a move unless the moveset is already full.
    pub fn push_move(&mut self, move_name: impl Into<String>) -> bool {
        if self.moves.len() >= MAX_MOVES {
            return false;
        }
        self.moves.push(move_name.into());
        true
    }

    pub fn has_nickname(&self) -> bool {
        self.nickname.is_some()
    }

    pub fn has_item(&self) -> bool {
        self.item.is_some()
    }

    pub fn has_ability(&self) -> bool {
        self.ability.is_some()
    }

    pub fn has_moves(&self) -> bool {
        !self.moves.is_empty()
    }

    pub fn has_nature(&self) -> bool {
        self.nature.is_some()
    }

    pub fn has_evs(&self) -> bool {
        !self.evs.is_empty()
    }

    pub fn has_ivs(&self) -> bool {
        !self.ivs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_cap_is_enforced() {
        let mut mon = ParsedPokemon::new("amoonguss");
        for mv in ["Spore", "Rage Powder", "Pollen Puff", "Protect"] {
            assert!(mon.push_move(mv));
        }
        assert!(!mon.push_move("Sludge Bomb"));
        assert_eq!(mon.moves.len(), MAX_MOVES);
        assert_eq!(mon.moves[3], "Protect");
    }

    #[test]
    fn serializes_with_wire_names() {
        let mut mon = ParsedPokemon::new("flutter-mane");
        mon.tera_type = Some("Fairy".to_string());
        mon.gender = Some(Gender::Female);
        mon.evs.insert(StatKey::Spa, 252);
        let value = serde_json::to_value(&mon).unwrap();
        assert_eq!(value["teraType"], "Fairy");
        assert_eq!(value["gender"], "F");
        assert_eq!(value["evs"]["spa"], 252);
        assert!(value["evs"].get("hp").is_none());
    }
}
