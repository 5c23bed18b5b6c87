use serde::{Deserialize, Serialize};

pub const MIN_TEAMS: usize = 4;
pub const MAX_TEAMS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueSettings {
    pub difficulty: u8,
    pub season_length: u32,
    pub salary_cap: bool,
    pub salary_cap_amount: i64,
    pub training_risk: f64,
    pub setup_complete: bool,
    pub playoff_size: usize,
    pub playoff_series_length: u32,
    pub playoff_by_conference: bool,
    pub draft_rounds: u32,
    pub scouting_points_per_season: u32,
    pub starting_balance: i64,
}

impl LeagueSettings {
    /// Defaults for a league of `team_count` teams.
    pub fn for_teams(team_count: usize, season_length: u32) -> Self {
        LeagueSettings {
            season_length: season_length.clamp(4, 20),
            playoff_size: team_count.min(4),
            playoff_by_conference: team_count >= 6,
            ..LeagueSettings::default()
        }
    }

    pub fn apply(&mut self, patch: &SettingsPatch) {
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty.min(5);
        }
        if let Some(season_length) = patch.season_length {
            self.season_length = season_length.clamp(4, 20);
        }
        if let Some(salary_cap) = patch.salary_cap {
            self.salary_cap = salary_cap;
        }
        if let Some(amount) = patch.salary_cap_amount {
            self.salary_cap_amount = amount.max(0);
        }
        if let Some(risk) = patch.training_risk {
            self.training_risk = risk.clamp(0.7, 1.3);
        }
        if let Some(setup_complete) = patch.setup_complete {
            self.setup_complete = setup_complete;
        }
        if let Some(size) = patch.playoff_size {
            self.playoff_size = size.max(2);
        }
        if let Some(length) = patch.playoff_series_length {
            // best-of series must be odd
            let length = length.max(1);
            self.playoff_series_length = if length % 2 == 0 { length + 1 } else { length };
        }
        if let Some(by_conference) = patch.playoff_by_conference {
            self.playoff_by_conference = by_conference;
        }
    }
}

impl Default for LeagueSettings {
    fn default() -> Self {
        LeagueSettings {
            difficulty: 1,
            season_length: 10,
            salary_cap: true,
            salary_cap_amount: 100_000,
            training_risk: 1.0,
            setup_complete: false,
            playoff_size: 4,
            playoff_series_length: 1,
            playoff_by_conference: false,
            draft_rounds: 3,
            scouting_points_per_season: 10,
            starting_balance: 100_000,
        }
    }
}

/// Partial settings update. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub difficulty: Option<u8>,
    pub season_length: Option<u32>,
    pub salary_cap: Option<bool>,
    pub salary_cap_amount: Option<i64>,
    pub training_risk: Option<f64>,
    pub setup_complete: Option<bool>,
    pub playoff_size: Option<usize>,
    pub playoff_series_length: Option<u32>,
    pub playoff_by_conference: Option<bool>,
}
