use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::roster::{Roster, Team};

pub const TEAM_A_WINS: &str = "Team A wins";
pub const TEAM_B_WINS: &str = "Team B wins";

pub const STUB_PLAYER_PROPS: [&str; 2] = [
    "Player A1 from Team A is predicted to score 2 touchdowns",
    "Player B2 from Team B is predicted to have 100 receiving yards",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub game_outcome: String,
    pub player_props: Vec<String>,
}

pub trait Predictor {
    fn predict(&self, team_a: &Team, team_b: &Team) -> PredictionResult;

    fn predict_roster(&self, roster: &Roster) -> PredictionResult {
        self.predict(&roster.team_a, &roster.team_b)
    }
}

/// Placeholder model. Only the win counts matter; player data is ignored and the
/// props are fixed text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubPredictor;

impl Predictor for StubPredictor {
    fn predict(&self, team_a: &Team, team_b: &Team) -> PredictionResult {
        // Ties go to B.
        let outcome = if team_a.wins > team_b.wins {
            TEAM_A_WINS
        } else {
            TEAM_B_WINS
        };
        PredictionResult {
            game_outcome: outcome.to_string(),
            player_props: STUB_PLAYER_PROPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub fn predict(team_a: &Team, team_b: &Team) -> PredictionResult {
    StubPredictor.predict(team_a, team_b)
}

/// Runs the stub over a matchup snapshot shaped like `{"team_a": {...}, "team_b": {...}}`.
/// Missing teams and fields default to zero / empty.
pub fn predict_from_json(raw: &str) -> Result<PredictionResult> {
    let roster: Roster = serde_json::from_str(raw).context("invalid matchup json")?;
    Ok(StubPredictor.predict_roster(&roster))
}
