use crate::r#match::PlayerGameStats;
use serde::{Deserialize, Serialize};

/// Running totals for the current season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub games: u32,
    pub pass_yards: u32,
    pub pass_touchdowns: u32,
    pub interceptions: u32,
    pub rush_yards: u32,
    pub rush_touchdowns: u32,
    pub receiving_yards: u32,
    pub receiving_touchdowns: u32,
    pub tackles: u32,
    pub sacks: u32,
}

impl SeasonStats {
    pub fn record_game(&mut self, line: &PlayerGameStats) {
        self.games += 1;

        if let Some(passing) = &line.passing {
            self.pass_yards += passing.yards;
            self.pass_touchdowns += passing.touchdowns;
            self.interceptions += passing.interceptions;
        }

        if let Some(rushing) = &line.rushing {
            self.rush_yards += rushing.yards;
            self.rush_touchdowns += rushing.touchdowns;
        }

        if let Some(receiving) = &line.receiving {
            self.receiving_yards += receiving.yards;
            self.receiving_touchdowns += receiving.touchdowns;
        }

        if let Some(defense) = &line.defense {
            self.tackles += defense.tackles;
            self.sacks += defense.sacks;
        }
    }

    pub fn reset(&mut self) {
        *self = SeasonStats::default();
    }
}
