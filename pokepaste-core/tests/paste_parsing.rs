use pokepaste_core::prelude::*;
use pokepaste_core::ParseError;

const SAMPLE_TEAM: &str = "\
=== [gen9vgc2025regg] Sun Room ===

Koraidon @ Choice Band
Ability: Orichalcum Pulse
Level: 50
Tera Type: Fire
EVs: 4/252/0/0/0/252
Jolly Nature
- Flare Blitz
- Collision Course
- Dragon Claw
- U-turn

// lead
Torkoal @ Charcoal
Ability: Drought
Level: 50
Tera Type: Fire
EVs: 252/0/4/252/0/0
Quiet Nature
IVs: 31/0/31/31/31/0
- Eruption
- Heat Wave
- Earth Power
- Protect

Lady (Indeedee-F) (F) @ Psychic Seed
Ability: Psychic Surge
Shiny: Yes
Sassy Nature
- Follow Me
- Helping Hand
- Trick Room
- Protect
- Ally Switch
";

#[test]
fn parses_a_full_export() {
    let team = parse_team(SAMPLE_TEAM);
    // The header line has no colon and reads as its own block.
    assert_eq!(team.blocks, 4);
    assert!(team.errors.is_empty());

    let names: Vec<&str> = team.pokemon.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names[1..], ["koraidon", "torkoal", "indeedee-female"]);

    let koraidon = &team.pokemon[1];
    assert_eq!(koraidon.item.as_deref(), Some("Choice Band"));
    assert_eq!(koraidon.nature.as_deref(), Some("Jolly"));
    assert_eq!(koraidon.evs.get(&StatKey::Atk), Some(&252));
    assert!(koraidon.ivs.is_empty());

    let torkoal = &team.pokemon[2];
    assert_eq!(torkoal.ivs.get(&StatKey::Spe), Some(&0));
    assert_eq!(torkoal.moves[0], "Eruption");

    let indeedee = &team.pokemon[3];
    assert_eq!(indeedee.nickname.as_deref(), Some("Lady"));
    assert_eq!(indeedee.gender, Some(Gender::Female));
    assert!(indeedee.shiny);
    assert_eq!(indeedee.moves.len(), 4);
    assert!(!indeedee.moves.iter().any(|m| m == "Ally Switch"));
}

#[test]
fn title_lines_read_as_their_own_block() {
    let team = parse_team(SAMPLE_TEAM);
    assert_eq!(team.pokemon[0].name, "gen9vgc2025regg-sun-room");
    assert!(team.pokemon[0].moves.is_empty());

    let header_only = parse_team("=== ===");
    assert_eq!(header_only.pokemon.len(), 1);
    assert!(!is_valid_name(&header_only.pokemon[0].name));
}

#[test]
fn block_count_ignores_blank_and_comment_lines() {
    let noisy = "\n\n// a\nAmoonguss\n\n\n// b\n- Spore\nRillaboom @ Miracle Seed\n\n// c\n\nGholdengo\n// d\n";
    assert_eq!(split_text(noisy).len(), 3);
    assert_eq!(parse_team(noisy).pokemon.len(), 3);
}

#[test]
fn bad_block_is_isolated() {
    let text = "Amoonguss\nIVs: 31/31/31/31/31/31/31\n\nRillaboom\n- Fake Out";
    let team = parse_team(text);
    assert_eq!(team.pokemon.len(), 1);
    assert_eq!(
        team.errors,
        vec![ParseError::TooManyStatValues {
            line: "IVs: 31/31/31/31/31/31/31".to_string(),
            count: 7,
        }]
    );
}

#[test]
fn export_round_trip_for_team() {
    let team = parse_team(SAMPLE_TEAM);
    let reparsed = parse_team(&team_to_showdown_text(&team.pokemon[1..]));
    assert_eq!(reparsed.pokemon, team.pokemon[1..]);
}
