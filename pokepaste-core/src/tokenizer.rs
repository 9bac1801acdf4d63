//! Splits export text into per-Pokémon line groups.
//!
//! This is a line classifier, not a grammar. A species line without a held
//! item is recognised only by what it lacks (no `:`, no leading `-`, no
//! nature/level keyword), so odd names can land in the wrong block.

const ITEM_SEPARATOR: &str = " @ ";

/// Blank lines and `//` comments carry no information.
pub fn is_ignored_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with("//")
}

/// Whether `line` opens a new Pokémon entry.
pub fn starts_new_pokemon(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.contains(ITEM_SEPARATOR) {
        return true;
    }
    let lowered = trimmed.to_lowercase();
    !trimmed.contains(':')
        && !trimmed.starts_with('-')
        && !lowered.contains("nature")
        && !lowered.contains("level")
}

pub fn split_blocks<'a, I>(lines: I) -> Vec<Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut blocks = Vec::new();
    let mut current: Vec<&'a str> = Vec::new();

    for raw in lines {
        if is_ignored_line(raw) {
            continue;
        }
        let line = raw.trim();
        if starts_new_pokemon(line) && !current.is_empty() {
            blocks.push(std::mem::take(&mut current));
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

pub fn split_text(text: &str) -> Vec<Vec<&str>> {
    split_blocks(text.lines())
}
