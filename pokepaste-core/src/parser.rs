use crate::error::ParseError;
use crate::model::{Gender, ParsedPokemon, StatSpread, STAT_ORDER};
use crate::names::normalize;
use crate::tokenizer::split_text;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static NICKNAME_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)\s*\(([^()]+)\)$").expect("static regex"));
static GENDER_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((M|F)\)").expect("static regex"));
static NATURE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)nature").expect("static regex"));

/// Result of parsing a whole export: successes and per-block failures side by side.
#[derive(Debug, Default)]
pub struct TeamParse {
    pub pokemon: Vec<ParsedPokemon>,
    pub errors: Vec<ParseError>,
    pub blocks: usize,
}

/// Parses every block of `text`; a failing block never stops the others.
pub fn parse_team(text: &str) -> TeamParse {
    let blocks = split_text(text);
    let mut out = TeamParse {
        blocks: blocks.len(),
        ..TeamParse::default()
    };
    for block in &blocks {
        match parse_block(block) {
            Ok(Some(pokemon)) => out.pokemon.push(pokemon),
            Ok(None) => {}
            Err(err) => out.errors.push(err),
        }
    }
    out
}

/// Parses one line group into a record. `Ok(None)` for an empty block.
pub fn parse_block(lines: &[&str]) -> Result<Option<ParsedPokemon>, ParseError> {
    let Some((first, rest)) = lines.split_first() else {
        return Ok(None);
    };
    let mut pokemon = parse_name_line(first)?;

    for line in rest {
        let line = line.trim();
        let lowered = line.to_lowercase();
        if let Some(move_name) = line.strip_prefix('-') {
            let move_name = move_name.trim();
            if !pokemon.push_move(move_name) {
                debug!(species = %pokemon.name, move_name, "dropping move past the fourth");
            }
        } else if lowered.contains("ability:") {
            pokemon.ability = value_after_colon(line);
        } else if lowered.contains("nature") {
            let nature = NATURE_WORD.replace_all(line, "");
            let nature = nature.trim();
            pokemon.nature = (!nature.is_empty()).then(|| nature.to_string());
        } else if lowered.contains("tera type:") {
            pokemon.tera_type = value_after_colon(line);
        } else if lowered.contains("level:") {
            if let Some(level) = after_colon(line).and_then(leading_int) {
                pokemon.level = level;
            }
        } else if lowered.contains("evs:") {
            pokemon.evs = parse_stat_line(line)?;
        } else if lowered.contains("ivs:") {
            pokemon.ivs = parse_stat_line(line)?;
        } else if lowered.contains("shiny") {
            pokemon.shiny = true;
        }
    }
    Ok(Some(pokemon))
}

/// `Nickname (Species) (F) @ Item`, every part but the species optional.
fn parse_name_line(line: &str) -> Result<ParsedPokemon, ParseError> {
    let (head, item) = match line.split_once('@') {
        Some((head, item)) => {
            let item = item.trim();
            (head, (!item.is_empty()).then(|| item.to_string()))
        }
        None => (line, None),
    };

    if head.matches('(').count() != head.matches(')').count() {
        return Err(ParseError::UnbalancedParentheses {
            line: line.to_string(),
        });
    }

    let gender = GENDER_MARKER.captures(head).map(|caps| match &caps[1] {
        "M" => Gender::Male,
        _ => Gender::Female,
    });
    let head = GENDER_MARKER.replace(head, "");
    let head = head.trim();

    let (nickname, species) = match NICKNAME_FORM.captures(head) {
        Some(caps) => {
            let nickname = caps[1].trim();
            (
                (!nickname.is_empty()).then(|| nickname.to_string()),
                caps[2].trim().to_string(),
            )
        }
        None => (None, head.to_string()),
    };

    let mut pokemon = ParsedPokemon::new(normalize(&species));
    pokemon.nickname = nickname;
    pokemon.item = item;
    pokemon.gender = gender;
    Ok(pokemon)
}

fn after_colon(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, value)| value.trim())
}

fn value_after_colon(line: &str) -> Option<String> {
    after_colon(line)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Reads the leading digits of `text`, ignoring anything after them
/// (`"252 HP"` reads as 252).
fn leading_int(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let end = text
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

/// Positional `a/b/c/d/e/f` in hp, atk, def, spa, spd, spe order.
fn parse_stat_line(line: &str) -> Result<StatSpread, ParseError> {
    let values = after_colon(line).unwrap_or_default();
    let segments: Vec<&str> = values.split('/').map(str::trim).collect();
    if segments.len() > STAT_ORDER.len() {
        return Err(ParseError::TooManyStatValues {
            line: line.to_string(),
            count: segments.len(),
        });
    }
    Ok(STAT_ORDER
        .iter()
        .zip(segments)
        .filter_map(|(stat, segment)| leading_int(segment).map(|value| (*stat, value)))
        .collect())
}
