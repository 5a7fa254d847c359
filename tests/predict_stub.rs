use matchup_form::predict::{
    PredictionResult, Predictor, STUB_PLAYER_PROPS, StubPredictor, predict, predict_from_json,
};
use matchup_form::roster::{PlayerField, PlayerStat, PlayerValue, Roster, Team, TeamField, TeamSide};

fn team_with_wins(wins: i64) -> Team {
    Team {
        wins,
        ..Team::default()
    }
}

fn expected_props() -> Vec<String> {
    vec![
        "Player A1 from Team A is predicted to score 2 touchdowns".to_string(),
        "Player B2 from Team B is predicted to have 100 receiving yards".to_string(),
    ]
}

#[test]
fn more_wins_for_a_predicts_team_a() {
    let out = predict(&team_with_wins(3), &team_with_wins(1));
    assert_eq!(out.game_outcome, "Team A wins");
    assert_eq!(out.player_props, expected_props());
}

#[test]
fn tie_goes_to_team_b() {
    let out = predict(&team_with_wins(1), &team_with_wins(1));
    assert_eq!(out.game_outcome, "Team B wins");
    assert_eq!(out.player_props, expected_props());
}

#[test]
fn fewer_wins_for_a_predicts_team_b() {
    let out = predict(&team_with_wins(-4), &team_with_wins(0));
    assert_eq!(out.game_outcome, "Team B wins");
}

#[test]
fn player_data_and_other_stats_do_not_change_the_output() {
    let mut roster = Roster::new();
    roster.set_team_field(TeamSide::A, TeamField::Wins, 2);
    let baseline = StubPredictor.predict_roster(&roster);

    roster.set_team_field(TeamSide::B, TeamField::TotalPoints, 999);
    roster.set_team_field(TeamSide::A, TeamField::Losses, 40);
    roster.add_player(TeamSide::B);
    roster.set_player_field(
        TeamSide::B,
        0,
        PlayerField::Stat(PlayerStat::AnytimeTouchdowns),
        PlayerValue::Int(9),
    );

    assert_eq!(StubPredictor.predict_roster(&roster), baseline);
    assert_eq!(baseline.player_props.len(), STUB_PLAYER_PROPS.len());
}

#[test]
fn prediction_serializes_with_camel_case_keys() {
    let out = predict(&team_with_wins(3), &team_with_wins(1));
    let json = serde_json::to_value(&out).expect("serialize");
    assert_eq!(json["gameOutcome"], "Team A wins");
    assert_eq!(json["playerProps"].as_array().map(|a| a.len()), Some(2));
}

#[test]
fn predict_from_json_reads_partial_snapshots() {
    let raw = r#"{
        "team_a": { "wins": 5, "players": [ { "name": "QB1", "passing_yards": 310 } ] },
        "team_b": { "wins": 2 }
    }"#;
    let out = predict_from_json(raw).expect("valid matchup");
    assert_eq!(
        out,
        PredictionResult {
            game_outcome: "Team A wins".to_string(),
            player_props: expected_props(),
        }
    );

    let empty = predict_from_json("{}").expect("defaults apply");
    assert_eq!(empty.game_outcome, "Team B wins");
}

#[test]
fn predict_from_json_rejects_malformed_input() {
    assert!(predict_from_json("not json").is_err());
    assert!(predict_from_json(r#"{"team_a": {"wins": "three"}}"#).is_err());
}
