use crate::roster::{PlayerField, PlayerStat, Team, TeamField, TeamSide};

/// One editable line of a team panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Team(TeamField),
    Player { index: usize, field: PlayerField },
}

impl FormRow {
    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            FormRow::Player {
                field: PlayerField::Name,
                ..
            }
        )
    }

    pub fn player_index(self) -> Option<usize> {
        match self {
            FormRow::Team(_) => None,
            FormRow::Player { index, .. } => Some(index),
        }
    }
}

pub const PLAYER_FIELDS: [PlayerField; 7] = [
    PlayerField::Name,
    PlayerField::Stat(PlayerStat::Receptions),
    PlayerField::Stat(PlayerStat::ReceivingYards),
    PlayerField::Stat(PlayerStat::RushingYards),
    PlayerField::Stat(PlayerStat::PassingYards),
    PlayerField::Stat(PlayerStat::PassingTouchdowns),
    PlayerField::Stat(PlayerStat::AnytimeTouchdowns),
];

pub fn team_rows(team: &Team) -> Vec<FormRow> {
    let mut rows = Vec::with_capacity(TeamField::ALL.len() + team.players.len() * PLAYER_FIELDS.len());
    rows.extend(TeamField::ALL.iter().map(|f| FormRow::Team(*f)));
    for index in 0..team.players.len() {
        rows.extend(
            PLAYER_FIELDS
                .iter()
                .map(|field| FormRow::Player { index, field: *field }),
        );
    }
    rows
}

pub fn team_label(side: TeamSide) -> &'static str {
    match side {
        TeamSide::A => "Team A",
        TeamSide::B => "Team B",
    }
}

pub fn team_field_label(field: TeamField) -> &'static str {
    match field {
        TeamField::Wins => "Wins",
        TeamField::Losses => "Losses",
        TeamField::TotalPoints => "Total Points",
        TeamField::TotalPointsLost => "Total Points Lost",
    }
}

pub fn player_field_label(field: PlayerField) -> &'static str {
    match field {
        PlayerField::Name => "Name",
        PlayerField::Stat(PlayerStat::Receptions) => "Receptions",
        PlayerField::Stat(PlayerStat::ReceivingYards) => "Receiving Yards",
        PlayerField::Stat(PlayerStat::RushingYards) => "Rushing Yards",
        PlayerField::Stat(PlayerStat::PassingYards) => "Passing Yards",
        PlayerField::Stat(PlayerStat::PassingTouchdowns) => "Passing Touchdowns",
        PlayerField::Stat(PlayerStat::AnytimeTouchdowns) => "Anytime Touchdowns",
    }
}

/// Player numbers are 1-based on screen.
pub fn row_label(side: TeamSide, row: FormRow) -> String {
    match row {
        FormRow::Team(field) => format!("{} {}", team_label(side), team_field_label(field)),
        FormRow::Player { index, field } => {
            format!("Player {} {}", index + 1, player_field_label(field))
        }
    }
}

pub fn row_value(team: &Team, row: FormRow) -> Option<String> {
    match row {
        FormRow::Team(field) => Some(team.field(field).to_string()),
        FormRow::Player { index, field } => {
            let player = team.players.get(index)?;
            Some(match field {
                PlayerField::Name => player.name.clone(),
                PlayerField::Stat(stat) => player.stat(stat).to_string(),
            })
        }
    }
}

pub fn row_int_value(team: &Team, row: FormRow) -> Option<i64> {
    match row {
        FormRow::Team(field) => Some(team.field(field)),
        FormRow::Player {
            index,
            field: PlayerField::Stat(stat),
        } => team.players.get(index).map(|p| p.stat(stat)),
        FormRow::Player { .. } => None,
    }
}

/// Mirrors a step-1 number input: integers only, optional leading sign.
pub fn parse_int_input(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Whether `c` may be typed at the end of `buffer` while editing `row`.
pub fn accepts_char(row: FormRow, buffer: &str, c: char) -> bool {
    if !row.is_numeric() {
        return !c.is_control();
    }
    c.is_ascii_digit() || (c == '-' && buffer.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Player;

    #[test]
    fn team_rows_lists_team_fields_then_each_player() {
        let mut team = Team::default();
        assert_eq!(team_rows(&team).len(), 4);

        team.players.push(Player::default());
        team.players.push(Player::default());
        let rows = team_rows(&team);
        assert_eq!(rows.len(), 4 + 14);
        assert_eq!(rows[0], FormRow::Team(TeamField::Wins));
        assert_eq!(
            rows[4],
            FormRow::Player {
                index: 0,
                field: PlayerField::Name
            }
        );
        assert_eq!(rows[11].player_index(), Some(1));
    }

    #[test]
    fn labels_use_one_based_player_numbers() {
        let row = FormRow::Player {
            index: 1,
            field: PlayerField::Stat(PlayerStat::ReceivingYards),
        };
        assert_eq!(row_label(TeamSide::B, row), "Player 2 Receiving Yards");
        assert_eq!(
            row_label(TeamSide::A, FormRow::Team(TeamField::TotalPointsLost)),
            "Team A Total Points Lost"
        );
    }

    #[test]
    fn parse_int_input_accepts_signed_integers_only() {
        assert_eq!(parse_int_input("42"), Some(42));
        assert_eq!(parse_int_input(" -7 "), Some(-7));
        assert_eq!(parse_int_input("+3"), Some(3));
        assert_eq!(parse_int_input(""), None);
        assert_eq!(parse_int_input("-"), None);
        assert_eq!(parse_int_input("1.5"), None);
        assert_eq!(parse_int_input("12a"), None);
    }

    #[test]
    fn numeric_rows_only_take_digits_and_leading_minus() {
        let row = FormRow::Team(TeamField::Wins);
        assert!(accepts_char(row, "", '-'));
        assert!(!accepts_char(row, "1", '-'));
        assert!(accepts_char(row, "1", '9'));
        assert!(!accepts_char(row, "1", 'x'));

        let name = FormRow::Player {
            index: 0,
            field: PlayerField::Name,
        };
        assert!(accepts_char(name, "Jo", 'e'));
        assert!(accepts_char(name, "", '-'));
    }
}
