use vgc_tracker::aggregate::{aggregate_usage, best_matchups, worst_matchups, BattleOutcome, BattleRecord};
use vgc_tracker::matchup_report;

use BattleOutcome::{Loss, Unknown, Win};

fn battle(outcome: BattleOutcome, team: &[&str], brought: &[&str]) -> BattleRecord {
    BattleRecord::new(outcome, team, brought)
}

#[test]
fn four_battles_against_the_same_pokemon() {
    let team = ["Flutter Mane", "Incineroar", "Rillaboom", "Amoonguss", "Urshifu-Rapid-Strike", "Tornadus"];
    let battles = vec![
        battle(Win, &team, &["Flutter Mane", "Incineroar", "Rillaboom", "Amoonguss"]),
        battle(Win, &team, &["Flutter Mane", "Incineroar", "Tornadus", "Amoonguss"]),
        battle(Loss, &team, &["Flutter Mane, L50, F", "Rillaboom", "Tornadus", "Urshifu-Rapid-Strike"]),
        battle(Win, &team, &["Incineroar", "Rillaboom", "Tornadus", "Amoonguss"]),
    ];
    let usage = aggregate_usage(&battles);
    let flutter = usage["flutter-mane"];
    assert_eq!(flutter.times_on_team, 4);
    assert_eq!(flutter.times_brought, 3);
    assert_eq!(flutter.games_against, 4);
    assert_eq!(flutter.wins_against, 3);
    assert_eq!(flutter.win_rate(), 75);
    assert_eq!(flutter.attendance_rate(), 75);

    for record in usage.values() {
        assert!(record.times_brought <= record.times_on_team);
        assert!(record.wins_against <= record.games_against);
    }
}

#[test]
fn unknown_outcomes_contribute_nothing() {
    let battles = vec![
        battle(Unknown, &["Incineroar"], &["Incineroar"]),
        battle(Loss, &["Amoonguss"], &[]),
    ];
    let usage = aggregate_usage(&battles);
    assert!(!usage.contains_key("incineroar"));
    let amoonguss = usage["amoonguss"];
    assert_eq!(amoonguss.games_against, 1);
    assert_eq!(amoonguss.wins_against, 0);
    assert_eq!(amoonguss.attendance_rate(), 0);
}

#[test]
fn empty_input_is_empty() {
    assert!(aggregate_usage(&[]).is_empty());
}

#[test]
fn rankings_require_three_games_and_break_ties_by_volume() {
    let mut battles = Vec::new();
    for _ in 0..3 {
        battles.push(battle(Win, &["Ogerpon", "Rillaboom", "Amoonguss"], &[]));
    }
    battles.push(battle(Win, &["Rillaboom", "Incineroar"], &[]));
    for _ in 0..3 {
        battles.push(battle(Loss, &["Incineroar"], &[]));
    }
    for _ in 0..2 {
        battles.push(battle(Win, &["Tornadus"], &[]));
    }

    let usage = aggregate_usage(&battles);
    assert_eq!(usage["rillaboom"].games_against, 4);
    assert_eq!(usage["incineroar"].games_against, 4);
    assert_eq!(usage["tornadus"].games_against, 2);

    let best = best_matchups(&usage, 3);
    let names: Vec<&str> = best.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["rillaboom", "amoonguss", "ogerpon", "incineroar"]);
    assert_eq!(best[0].win_rate, 100);
    assert_eq!(best[3].win_rate, 25);

    let worst = worst_matchups(&usage, 3);
    let names: Vec<&str> = worst.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["incineroar", "rillaboom", "amoonguss", "ogerpon"]);

    assert!(best_matchups(&usage, 5).is_empty());
}

#[test]
fn report_serializes_rates() {
    let battles = vec![
        battle(Win, &["Incineroar"], &["Incineroar"]),
        battle(Loss, &["Incineroar"], &[]),
        battle(Win, &["Incineroar"], &["Incineroar"]),
        battle(Unknown, &["Incineroar"], &[]),
    ];
    let report = matchup_report(&battles, 3);
    assert_eq!(report.battles, 4);
    assert_eq!(report.counted_battles, 3);
    let value = serde_json::to_value(&report).unwrap();
    let row = &value["best"][0];
    assert_eq!(row["name"], "incineroar");
    assert_eq!(row["winRate"], 67);
    assert_eq!(row["attendanceRate"], 67);
    assert_eq!(row["timesOnTeam"], 3);
}
