use std::collections::VecDeque;

use crate::form::{self, FormRow};
use crate::predict::{PredictionResult, Predictor, StubPredictor};
use crate::roster::{PlayerField, PlayerValue, Roster, TeamField, TeamSide};

pub const DEFAULT_MAX_LOGS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub team: TeamSide,
    pub row: FormRow,
    pub buffer: String,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub roster: Roster,
    pub prediction: Option<PredictionResult>,
    pub focus: TeamSide,
    pub selected_a: usize,
    pub selected_b: usize,
    pub editing: Option<EditBuffer>,
    pub logs: VecDeque<String>,
    pub max_logs: usize,
    pub help_overlay: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_max_logs(DEFAULT_MAX_LOGS)
    }

    pub fn with_max_logs(max_logs: usize) -> Self {
        Self {
            roster: Roster::new(),
            prediction: None,
            focus: TeamSide::A,
            selected_a: 0,
            selected_b: 0,
            editing: None,
            logs: VecDeque::with_capacity(max_logs),
            max_logs,
            help_overlay: false,
        }
    }

    pub fn selected(&self, side: TeamSide) -> usize {
        match side {
            TeamSide::A => self.selected_a,
            TeamSide::B => self.selected_b,
        }
    }

    fn selected_mut(&mut self, side: TeamSide) -> &mut usize {
        match side {
            TeamSide::A => &mut self.selected_a,
            TeamSide::B => &mut self.selected_b,
        }
    }

    pub fn rows(&self, side: TeamSide) -> Vec<FormRow> {
        form::team_rows(self.roster.team(side))
    }

    pub fn selected_row(&self) -> Option<FormRow> {
        self.rows(self.focus).get(self.selected(self.focus)).copied()
    }

    pub fn focus_team(&mut self, side: TeamSide) {
        self.cancel_edit();
        self.focus = side;
    }

    pub fn toggle_focus(&mut self) {
        self.focus_team(self.focus.other());
    }

    pub fn select_next(&mut self) {
        let total = self.rows(self.focus).len();
        let selected = self.selected_mut(self.focus);
        if total == 0 {
            *selected = 0;
            return;
        }
        *selected = (*selected + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.rows(self.focus).len();
        let selected = self.selected_mut(self.focus);
        if total == 0 {
            *selected = 0;
            return;
        }
        if *selected == 0 {
            *selected = total - 1;
        } else {
            *selected -= 1;
        }
    }

    /// Moves the cursor of `side` onto the name row of player `index`.
    pub fn select_player(&mut self, side: TeamSide, index: usize) {
        let rows = self.rows(side);
        if let Some(pos) = rows.iter().position(|row| {
            *row
                == FormRow::Player {
                    index,
                    field: PlayerField::Name,
                }
        }) {
            *self.selected_mut(side) = pos;
        }
    }

    pub fn clamp_selection(&mut self) {
        for side in TeamSide::ALL {
            let total = self.rows(side).len();
            let selected = self.selected_mut(side);
            if total == 0 {
                *selected = 0;
            } else if *selected >= total {
                *selected = total - 1;
            }
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        self.logs.push_back(format!("{stamp} {}", msg.into()));
        while self.logs.len() > self.max_logs {
            self.logs.pop_front();
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Opens the row under the cursor for editing, prefilled with its current value.
    pub fn begin_edit(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        let team = self.roster.team(self.focus);
        let buffer = form::row_value(team, row).unwrap_or_default();
        self.editing = Some(EditBuffer {
            team: self.focus,
            row,
            buffer,
        });
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn push_edit_char(&mut self, c: char) {
        if let Some(edit) = self.editing.as_mut()
            && form::accepts_char(edit.row, &edit.buffer, c)
        {
            edit.buffer.push(c);
        }
    }

    pub fn pop_edit_char(&mut self) {
        if let Some(edit) = self.editing.as_mut() {
            edit.buffer.pop();
        }
    }

    /// Closes the edit buffer and turns it into a delta. Input that is not an integer
    /// for a numeric row is dropped with a warning.
    pub fn commit_edit(&mut self) -> Option<Delta> {
        let edit = self.editing.take()?;
        let label = form::row_label(edit.team, edit.row);
        match edit.row {
            FormRow::Team(field) => match form::parse_int_input(&edit.buffer) {
                Some(value) => Some(Delta::SetTeamField {
                    team: edit.team,
                    field,
                    value,
                }),
                None => {
                    self.push_log(format!("[WARN] {label}: '{}' is not a whole number", edit.buffer));
                    None
                }
            },
            FormRow::Player {
                index,
                field: PlayerField::Name,
            } => Some(Delta::SetPlayerField {
                team: edit.team,
                index,
                field: PlayerField::Name,
                value: PlayerValue::Text(edit.buffer),
            }),
            FormRow::Player { index, field } => match form::parse_int_input(&edit.buffer) {
                Some(value) => Some(Delta::SetPlayerField {
                    team: edit.team,
                    index,
                    field,
                    value: PlayerValue::Int(value),
                }),
                None => {
                    self.push_log(format!("[WARN] {label}: '{}' is not a whole number", edit.buffer));
                    None
                }
            },
        }
    }

    /// Step change for the numeric row under the cursor.
    pub fn step_selected(&self, step: i64) -> Option<Delta> {
        let row = self.selected_row()?;
        let current = form::row_int_value(self.roster.team(self.focus), row)?;
        let value = current.saturating_add(step);
        match row {
            FormRow::Team(field) => Some(Delta::SetTeamField {
                team: self.focus,
                field,
                value,
            }),
            FormRow::Player { index, field } => Some(Delta::SetPlayerField {
                team: self.focus,
                index,
                field,
                value: PlayerValue::Int(value),
            }),
        }
    }

    pub fn remove_selected_player(&self) -> Option<Delta> {
        let index = self.selected_row()?.player_index()?;
        Some(Delta::RemovePlayer {
            team: self.focus,
            index,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delta {
    SetTeamField {
        team: TeamSide,
        field: TeamField,
        value: i64,
    },
    AddPlayer {
        team: TeamSide,
    },
    RemovePlayer {
        team: TeamSide,
        index: usize,
    },
    SetPlayerField {
        team: TeamSide,
        index: usize,
        field: PlayerField,
        value: PlayerValue,
    },
    Predict,
    Log(String),
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    apply_delta_with(state, delta, &StubPredictor);
}

pub fn apply_delta_with(state: &mut AppState, delta: Delta, predictor: &dyn Predictor) {
    match delta {
        Delta::SetTeamField { team, field, value } => {
            state.roster.set_team_field(team, field, value);
            state.push_log(format!(
                "[INFO] {} = {value}",
                form::row_label(team, FormRow::Team(field))
            ));
        }
        Delta::AddPlayer { team } => {
            state.roster.add_player(team);
            let count = state.roster.team(team).players.len();
            state.push_log(format!(
                "[INFO] Added Player {count} to {}",
                form::team_label(team)
            ));
        }
        Delta::RemovePlayer { team, index } => {
            match state.roster.remove_player(team, index) {
                Some(removed) => {
                    let name = if removed.name.is_empty() {
                        String::new()
                    } else {
                        format!(" ({})", removed.name)
                    };
                    state.push_log(format!(
                        "[INFO] Removed Player {}{name} from {}",
                        index + 1,
                        form::team_label(team)
                    ));
                }
                None => state.push_log(format!(
                    "[WARN] {} has no Player {}",
                    form::team_label(team),
                    index + 1
                )),
            }
            // Player rows shift after a removal, so an open player edit would point at
            // the wrong player.
            let stale_edit = state
                .editing
                .as_ref()
                .is_some_and(|edit| edit.team == team && edit.row.player_index().is_some());
            if stale_edit {
                state.editing = None;
            }
            state.clamp_selection();
        }
        Delta::SetPlayerField {
            team,
            index,
            field,
            value,
        } => {
            let label = form::row_label(team, FormRow::Player { index, field });
            let shown = match &value {
                PlayerValue::Text(text) => format!("'{text}'"),
                PlayerValue::Int(v) => v.to_string(),
            };
            if state.roster.set_player_field(team, index, field, value) {
                state.push_log(format!("[INFO] {} {label} = {shown}", form::team_label(team)));
            } else {
                state.push_log(format!(
                    "[WARN] {} {label} was not updated",
                    form::team_label(team)
                ));
            }
        }
        Delta::Predict => {
            let result = predictor.predict_roster(&state.roster);
            state.push_log(format!("[INFO] Prediction: {}", result.game_outcome));
            state.prediction = Some(result);
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}
