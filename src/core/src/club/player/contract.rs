use crate::utils::round_i64;
use serde::{Deserialize, Serialize};

pub const ROOKIE_CONTRACT_YEARS: u32 = 2;

/// Player contract. The signing bonus is spread evenly over `years` for cap
/// purposes, starting at `start_season`. A contract without a start season is
/// treated as starting in whatever season is being asked about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub years: u32,
    pub salary: i64,
    pub signing_bonus: i64,
    pub guaranteed: i64,
    pub start_season: Option<u32>,
}

impl Contract {
    pub fn new(years: u32, salary: i64) -> Self {
        Contract {
            years,
            salary,
            signing_bonus: 0,
            guaranteed: 0,
            start_season: None,
        }
    }

    /// Rookie scale: salary grows with the revealed overall.
    pub fn rookie(overall: u8, season: u32) -> Self {
        let salary = round_i64(4000.0 + (overall as f64 - 60.0) * 120.0);

        Contract {
            years: ROOKIE_CONTRACT_YEARS,
            salary,
            signing_bonus: 0,
            guaranteed: 0,
            start_season: Some(season),
        }
    }

    pub fn with_bonus(mut self, signing_bonus: i64, guaranteed: i64) -> Self {
        self.signing_bonus = signing_bonus;
        self.guaranteed = guaranteed;
        self
    }

    pub fn starting(mut self, season: u32) -> Self {
        self.start_season = Some(season);
        self
    }

    pub fn years_elapsed(&self, season: u32) -> u32 {
        season.saturating_sub(self.start_season.unwrap_or(season))
    }

    pub fn remaining_years(&self, season: u32) -> u32 {
        self.years.saturating_sub(self.years_elapsed(season))
    }

    /// Per-season share of the signing bonus.
    pub fn amortized_bonus(&self) -> i64 {
        if self.signing_bonus == 0 || self.years == 0 {
            return 0;
        }

        round_i64(self.signing_bonus as f64 / self.years as f64)
    }

    /// Salary plus the bonus amortization while the contract is still running.
    pub fn cap_hit(&self, season: u32) -> i64 {
        if self.years_elapsed(season) < self.years {
            self.salary + self.amortized_bonus()
        } else {
            self.salary
        }
    }

    /// Yearly cost regardless of season, used by valuation.
    pub fn annual_cost(&self) -> i64 {
        let bonus_share = if self.signing_bonus != 0 && self.years != 0 {
            round_i64(self.signing_bonus as f64 / self.years.max(1) as f64)
        } else {
            0
        };

        self.salary + bonus_share
    }

    /// Unamortized bonus that would accelerate onto the cap on release.
    pub fn dead_money(&self, season: u32) -> i64 {
        if self.signing_bonus == 0 || self.years == 0 {
            return 0;
        }

        let per_year = self.signing_bonus as f64 / self.years as f64;

        round_i64(per_year * self.remaining_years(season) as f64)
    }
}

impl Default for Contract {
    fn default() -> Self {
        Contract::new(2, 4000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rookie_salary_scales_with_overall() {
        assert_eq!(Contract::rookie(60, 1).salary, 4000);
        assert_eq!(Contract::rookie(80, 1).salary, 6400);
        assert_eq!(Contract::rookie(80, 3).start_season, Some(3));
    }

    #[test]
    fn test_cap_hit_drops_bonus_after_term() {
        let contract = Contract::new(3, 10000).with_bonus(6000, 6000).starting(1);

        assert_eq!(contract.cap_hit(1), 12000);
        assert_eq!(contract.cap_hit(3), 12000);
        assert_eq!(contract.cap_hit(4), 10000);
    }

    #[test]
    fn test_dead_money_non_increasing_and_reaches_zero() {
        let contract = Contract::new(3, 10000).with_bonus(6000, 6000).starting(1);

        let mut previous = i64::MAX;
        for season in 1..=6 {
            let dead = contract.dead_money(season);
            assert!(dead <= previous);
            previous = dead;
        }

        assert_eq!(contract.dead_money(1), 6000);
        assert_eq!(contract.dead_money(2), 4000);
        assert_eq!(contract.dead_money(4), 0);
    }

    #[test]
    fn test_dead_money_zero_without_bonus() {
        assert_eq!(Contract::new(4, 9000).starting(1).dead_money(1), 0);
    }

    #[test]
    fn test_unstarted_contract_counts_as_current() {
        let contract = Contract::new(2, 5000).with_bonus(2000, 0);

        assert_eq!(contract.remaining_years(7), 2);
        assert_eq!(contract.cap_hit(9), 6000);
    }
}
