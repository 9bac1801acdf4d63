//! Parsing for Showdown/Pokepaste team exports and canonical Pokémon names.
//!
//! The main entry points are [`parse_team`] for whole exports and
//! [`names::normalize`] for mapping any spelling of a species to one id.

pub mod error;
pub mod export;
pub mod model;
pub mod names;
pub mod parser;
pub mod tokenizer;

pub use error::ParseError;
pub use model::{Gender, ParsedPokemon, StatKey, StatSpread};
pub use names::{is_valid_name, normalize};
pub use parser::{parse_block, parse_team, TeamParse};
pub use tokenizer::{split_blocks, split_text};

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::export::team_to_showdown_text;
    pub use crate::model::{Gender, ParsedPokemon, StatKey, StatSpread};
    pub use crate::names::{display_name, is_valid_name, normalize};
    pub use crate::parser::{parse_block, parse_team};
    pub use crate::tokenizer::split_text;
}
