use crate::club::{Persona, Player, Position};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
}

impl TeamRecord {
    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Win share over games played; a team with no games counts as one game played.
    pub fn win_percentage(&self) -> f64 {
        self.wins as f64 / self.games().max(1) as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub color: String,
    pub conference: String,
    pub division: String,
    pub roster: Vec<Player>,
    pub record: TeamRecord,
    pub points_for: u32,
    pub points_against: u32,
    pub played_opponents: Vec<String>,
    pub persona: Persona,
    pub balance: i64,
    pub is_user: bool,
}

impl Team {
    pub fn new(name: impl Into<String>, color: impl Into<String>, persona: Persona) -> Self {
        Team {
            name: name.into(),
            color: color.into(),
            conference: String::new(),
            division: String::new(),
            roster: Vec::new(),
            record: TeamRecord::default(),
            points_for: 0,
            points_against: 0,
            played_opponents: Vec::new(),
            persona,
            balance: 0,
            is_user: false,
        }
    }

    /// Rounded roster average overall; an empty roster plays like a 60.
    pub fn strength(&self) -> i32 {
        if self.roster.is_empty() {
            return 60;
        }

        let total: u32 = self.roster.iter().map(|p| p.overall as u32).sum();

        (total as f64 / self.roster.len() as f64).round() as i32
    }

    pub fn count_at(&self, position: Position) -> usize {
        self.roster.iter().filter(|p| p.position == position).count()
    }

    pub fn player(&self, player_id: u32) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == player_id)
    }

    pub fn player_mut(&mut self, player_id: u32) -> Option<&mut Player> {
        self.roster.iter_mut().find(|p| p.id == player_id)
    }

    pub fn has_player(&self, player_id: u32) -> bool {
        self.roster.iter().any(|p| p.id == player_id)
    }

    /// Removes a player from the roster, returning it to the caller.
    pub fn take_player(&mut self, player_id: u32) -> Option<Player> {
        let idx = self.roster.iter().position(|p| p.id == player_id)?;
        Some(self.roster.remove(idx))
    }

    /// Adds a player unless one with the same id is already rostered.
    pub fn add_player(&mut self, player: Player) {
        if !self.has_player(player.id) {
            self.roster.push(player);
        }
    }

    pub fn first_at(&self, position: Position) -> Option<&Player> {
        self.roster.iter().find(|p| p.position == position)
    }

    /// Highest overall on the roster; the earliest listed wins a tie.
    pub fn best_player(&self) -> Option<&Player> {
        self.roster.iter().rev().max_by_key(|p| p.overall)
    }

    /// Roster sorted from the lowest overall up. Ties keep roster order.
    pub fn lowest_rated(&self) -> Vec<&Player> {
        self.roster.iter().sorted_by_key(|p| p.overall).collect()
    }

    /// Salary plus active bonus amortization for `season`.
    pub fn payroll(&self, season: u32) -> i64 {
        self.roster.iter().map(|p| p.contract.cap_hit(season)).sum()
    }

    pub fn point_differential(&self) -> i64 {
        self.points_for as i64 - self.points_against as i64
    }

    pub fn record_result(&mut self, points_for: u32, points_against: u32, won: bool) {
        if won {
            self.record.wins += 1;
        } else {
            self.record.losses += 1;
        }

        self.points_for += points_for;
        self.points_against += points_against;
    }

    /// Clears wins, losses and points for a new regular season.
    pub fn reset_record(&mut self) {
        self.record = TeamRecord::default();
        self.points_for = 0;
        self.points_against = 0;
    }
}
