use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamSide {
    A,
    B,
}

impl TeamSide {
    pub const ALL: [TeamSide; 2] = [TeamSide::A, TeamSide::B];

    pub fn other(self) -> Self {
        match self {
            TeamSide::A => TeamSide::B,
            TeamSide::B => TeamSide::A,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamField {
    Wins,
    Losses,
    TotalPoints,
    TotalPointsLost,
}

impl TeamField {
    pub const ALL: [TeamField; 4] = [
        TeamField::Wins,
        TeamField::Losses,
        TeamField::TotalPoints,
        TeamField::TotalPointsLost,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStat {
    Receptions,
    ReceivingYards,
    RushingYards,
    PassingYards,
    PassingTouchdowns,
    AnytimeTouchdowns,
}

impl PlayerStat {
    pub const ALL: [PlayerStat; 6] = [
        PlayerStat::Receptions,
        PlayerStat::ReceivingYards,
        PlayerStat::RushingYards,
        PlayerStat::PassingYards,
        PlayerStat::PassingTouchdowns,
        PlayerStat::AnytimeTouchdowns,
    ];
}

/// Which player field an edit targets. `Name` is text, the rest are integer stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerField {
    Name,
    Stat(PlayerStat),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerValue {
    Text(String),
    Int(i64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub receptions: i64,
    #[serde(default)]
    pub receiving_yards: i64,
    #[serde(default)]
    pub rushing_yards: i64,
    #[serde(default)]
    pub passing_yards: i64,
    #[serde(default)]
    pub passing_touchdowns: i64,
    #[serde(default)]
    pub anytime_touchdowns: i64,
}

impl Player {
    pub fn stat(&self, stat: PlayerStat) -> i64 {
        match stat {
            PlayerStat::Receptions => self.receptions,
            PlayerStat::ReceivingYards => self.receiving_yards,
            PlayerStat::RushingYards => self.rushing_yards,
            PlayerStat::PassingYards => self.passing_yards,
            PlayerStat::PassingTouchdowns => self.passing_touchdowns,
            PlayerStat::AnytimeTouchdowns => self.anytime_touchdowns,
        }
    }

    fn stat_mut(&mut self, stat: PlayerStat) -> &mut i64 {
        match stat {
            PlayerStat::Receptions => &mut self.receptions,
            PlayerStat::ReceivingYards => &mut self.receiving_yards,
            PlayerStat::RushingYards => &mut self.rushing_yards,
            PlayerStat::PassingYards => &mut self.passing_yards,
            PlayerStat::PassingTouchdowns => &mut self.passing_touchdowns,
            PlayerStat::AnytimeTouchdowns => &mut self.anytime_touchdowns,
        }
    }

    /// Applies `value` to `field`. A text value aimed at a stat (or an int aimed at the
    /// name) is ignored and reported as `false`.
    pub fn set_field(&mut self, field: PlayerField, value: PlayerValue) -> bool {
        match (field, value) {
            (PlayerField::Name, PlayerValue::Text(name)) => {
                self.name = name;
                true
            }
            (PlayerField::Stat(stat), PlayerValue::Int(v)) => {
                *self.stat_mut(stat) = v;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: i64,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub total_points_lost: i64,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Team {
    pub fn field(&self, field: TeamField) -> i64 {
        match field {
            TeamField::Wins => self.wins,
            TeamField::Losses => self.losses,
            TeamField::TotalPoints => self.total_points,
            TeamField::TotalPointsLost => self.total_points_lost,
        }
    }

    pub fn set_field(&mut self, field: TeamField, value: i64) {
        match field {
            TeamField::Wins => self.wins = value,
            TeamField::Losses => self.losses = value,
            TeamField::TotalPoints => self.total_points = value,
            TeamField::TotalPointsLost => self.total_points_lost = value,
        }
    }
}

/// The two sides of a matchup. Both teams exist for the whole session; only their
/// contents change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub team_a: Team,
    #[serde(default)]
    pub team_b: Team,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::A => &self.team_a,
            TeamSide::B => &self.team_b,
        }
    }

    fn team_mut(&mut self, side: TeamSide) -> &mut Team {
        match side {
            TeamSide::A => &mut self.team_a,
            TeamSide::B => &mut self.team_b,
        }
    }

    pub fn player(&self, side: TeamSide, index: usize) -> Option<&Player> {
        self.team(side).players.get(index)
    }

    pub fn set_team_field(&mut self, side: TeamSide, field: TeamField, value: i64) {
        self.team_mut(side).set_field(field, value);
    }

    pub fn add_player(&mut self, side: TeamSide) {
        self.team_mut(side).players.push(Player::default());
    }

    /// Out-of-range indices leave the roster untouched and return `None`.
    pub fn remove_player(&mut self, side: TeamSide, index: usize) -> Option<Player> {
        let players = &mut self.team_mut(side).players;
        if index < players.len() {
            Some(players.remove(index))
        } else {
            None
        }
    }

    pub fn set_player_field(
        &mut self,
        side: TeamSide,
        index: usize,
        field: PlayerField,
        value: PlayerValue,
    ) -> bool {
        match self.team_mut(side).players.get_mut(index) {
            Some(player) => player.set_field(field, value),
            None => false,
        }
    }
}
