use crate::club::Position;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassingStats {
    pub attempts: u32,
    pub completions: u32,
    pub yards: u32,
    pub touchdowns: u32,
    pub interceptions: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RushingStats {
    pub carries: u32,
    pub yards: u32,
    pub touchdowns: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivingStats {
    pub targets: u32,
    pub receptions: u32,
    pub yards: u32,
    pub touchdowns: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefensiveStats {
    pub tackles: u32,
    pub sacks: u32,
}

/// One player's box-score line. Blocks a player did not take part in are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerGameStats {
    pub player_id: u32,
    pub name: String,
    pub position: Position,
    pub passing: Option<PassingStats>,
    pub rushing: Option<RushingStats>,
    pub receiving: Option<ReceivingStats>,
    pub defense: Option<DefensiveStats>,
    pub fantasy: f64,
}

impl PlayerGameStats {
    pub fn new(player_id: u32, name: impl Into<String>, position: Position) -> Self {
        PlayerGameStats {
            player_id,
            name: name.into(),
            position,
            passing: None,
            rushing: None,
            receiving: None,
            defense: None,
            fantasy: 0.0,
        }
    }

    /// QB: yards/25 + TD x4 - INT x2. RB/WR/TE: yards/10 + TD x6.
    /// Everyone else: tackles + sacks x4.
    pub fn compute_fantasy(&mut self) {
        self.fantasy = match self.position {
            Position::Quarterback => self
                .passing
                .map(|p| p.yards as f64 / 25.0 + p.touchdowns as f64 * 4.0 - p.interceptions as f64 * 2.0)
                .unwrap_or(0.0),
            Position::RunningBack | Position::WideReceiver | Position::TightEnd => {
                let rushing = self
                    .rushing
                    .map(|r| r.yards as f64 / 10.0 + r.touchdowns as f64 * 6.0)
                    .unwrap_or(0.0);
                let receiving = self
                    .receiving
                    .map(|r| r.yards as f64 / 10.0 + r.touchdowns as f64 * 6.0)
                    .unwrap_or(0.0);

                rushing + receiving
            }
            _ => self
                .defense
                .map(|d| d.tackles as f64 + d.sacks as f64 * 4.0)
                .unwrap_or(0.0),
        };
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    pub player_id: u32,
    pub name: String,
    pub position: Position,
    pub team: String,
    pub fantasy: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub home: String,
    pub away: String,
    pub home_score: u32,
    pub away_score: u32,
    pub top_players: Vec<TopPerformer>,
    pub home_stats: Vec<PlayerGameStats>,
    pub away_stats: Vec<PlayerGameStats>,
}

impl GameResult {
    /// Home must score strictly more; a tie goes to the away side.
    pub fn home_won(&self) -> bool {
        self.home_score > self.away_score
    }

    pub fn winner(&self) -> &str {
        if self.home_won() { &self.home } else { &self.away }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boxscore {
    pub id: u32,
    pub season: u32,
    pub week: u32,
    pub game: GameResult,
}

impl Boxscore {
    pub fn lines(&self) -> impl Iterator<Item = &PlayerGameStats> {
        self.game.home_stats.iter().chain(self.game.away_stats.iter())
    }
}

/// Score-only record kept for every game of the season, used by tiebreakers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastGame {
    pub id: u32,
    pub season: u32,
    pub week: u32,
    pub home: String,
    pub away: String,
    pub home_score: u32,
    pub away_score: u32,
}

impl PastGame {
    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }

    pub fn between(&self, first: &str, second: &str) -> bool {
        (self.home == first && self.away == second) || (self.home == second && self.away == first)
    }

    /// Same rule as the standings: a tie goes to the away side.
    pub fn winner(&self) -> &str {
        if self.home_score > self.away_score { &self.home } else { &self.away }
    }

    pub fn won_by(&self, team: &str) -> bool {
        self.involves(team) && self.winner() == team
    }

    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        if self.home == team {
            Some(&self.away)
        } else if self.away == team {
            Some(&self.home)
        } else {
            None
        }
    }
}
