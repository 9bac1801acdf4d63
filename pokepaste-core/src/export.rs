use crate::model::{ParsedPokemon, StatSpread, DEFAULT_LEVEL, STAT_ORDER};
use crate::names::display_name;
use std::fmt::Write;

const DEFAULT_EV: u32 = 0;
const DEFAULT_IV: u32 = 31;

impl ParsedPokemon {
    /// Renders the record back into export text that [`crate::parse_team`] reads.
    pub fn to_showdown_text(&self) -> String {
        let mut out = String::new();
        let species = display_name(&self.name);
        match &self.nickname {
            Some(nickname) => {
                let _ = write!(out, "{nickname} ({species})");
            }
            None => out.push_str(&species),
        }
        if let Some(gender) = self.gender {
            let _ = write!(out, " ({})", gender.marker());
        }
        if let Some(item) = &self.item {
            let _ = write!(out, " @ {item}");
        }
        out.push('\n');

        if let Some(ability) = &self.ability {
            let _ = writeln!(out, "Ability: {ability}");
        }
        if self.level != DEFAULT_LEVEL {
            let _ = writeln!(out, "Level: {}", self.level);
        }
        if self.shiny {
            out.push_str("Shiny: Yes\n");
        }
        if let Some(tera) = &self.tera_type {
            let _ = writeln!(out, "Tera Type: {tera}");
        }
        if !self.evs.is_empty() {
            let _ = writeln!(out, "EVs: {}", stat_line(&self.evs, DEFAULT_EV));
        }
        if let Some(nature) = &self.nature {
            let _ = writeln!(out, "{nature} Nature");
        }
        if !self.ivs.is_empty() {
            let _ = writeln!(out, "IVs: {}", stat_line(&self.ivs, DEFAULT_IV));
        }
        for mv in &self.moves {
            let _ = writeln!(out, "- {mv}");
        }
        out
    }
}

fn stat_line(spread: &StatSpread, default: u32) -> String {
    STAT_ORDER
        .iter()
        .map(|stat| spread.get(stat).copied().unwrap_or(default).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Joins records into a full team export, blank line between entries.
pub fn team_to_showdown_text(team: &[ParsedPokemon]) -> String {
    team.iter()
        .map(ParsedPokemon::to_showdown_text)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Gender, StatKey};
    use crate::parser::parse_team;

    #[test]
    fn export_then_parse_keeps_the_build() {
        let mut mon = ParsedPokemon::new("incineroar");
        mon.nickname = Some("Big Cat".to_string());
        mon.gender = Some(Gender::Male);
        mon.item = Some("Safety Goggles".to_string());
        mon.ability = Some("Intimidate".to_string());
        mon.nature = Some("Careful".to_string());
        mon.tera_type = Some("Ghost".to_string());
        mon.evs.insert(StatKey::Hp, 252);
        mon.evs.insert(StatKey::Spd, 252);
        mon.ivs.insert(StatKey::Spe, 0);
        for mv in ["Fake Out", "Knock Off", "Parting Shot", "Protect"] {
            mon.push_move(mv);
        }

        let text = mon.to_showdown_text();
        assert!(text.starts_with("Big Cat (Incineroar) (M) @ Safety Goggles\n"));
        assert!(text.contains("EVs: 252/0/0/0/252/0\n"));
        assert!(text.contains("IVs: 31/31/31/31/31/0\n"));

        let team = parse_team(&text);
        assert!(team.errors.is_empty());
        let parsed = &team.pokemon[0];
        assert_eq!(parsed.name, mon.name);
        assert_eq!(parsed.nickname, mon.nickname);
        assert_eq!(parsed.moves, mon.moves);
        assert_eq!(parsed.ivs[&StatKey::Spe], 0);
        assert_eq!(parsed.evs[&StatKey::Spd], 252);
    }

    #[test]
    fn team_export_separates_entries() {
        let team = vec![ParsedPokemon::new("rillaboom"), ParsedPokemon::new("amoonguss")];
        let text = team_to_showdown_text(&team);
        assert_eq!(text, "Rillaboom\n\nAmoonguss\n");
        assert_eq!(parse_team(&text).pokemon.len(), 2);
    }
}
