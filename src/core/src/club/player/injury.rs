use crate::utils::{FloatUtils, IntegerUtils};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjurySeverity {
    Minor,
    Moderate,
    Severe,
    /// Set by hand rather than rolled after a game.
    Unspecified,
}

impl InjurySeverity {
    /// Returns (min_weeks, max_weeks) for this severity
    pub fn duration_range(&self) -> (u32, u32) {
        match self {
            InjurySeverity::Minor => (1, 2),
            InjurySeverity::Moderate => (3, 6),
            InjurySeverity::Severe => (7, 16),
            InjurySeverity::Unspecified => (1, 1),
        }
    }

    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let roll = FloatUtils::unit(rng);

        if roll < 0.6 {
            InjurySeverity::Minor
        } else if roll < 0.9 {
            InjurySeverity::Moderate
        } else {
            InjurySeverity::Severe
        }
    }
}

impl Display for InjurySeverity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            InjurySeverity::Minor => "minor",
            InjurySeverity::Moderate => "moderate",
            InjurySeverity::Severe => "severe",
            InjurySeverity::Unspecified => "unspecified",
        };

        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injury {
    pub severity: InjurySeverity,
    pub weeks_remaining: u32,
}

impl Injury {
    pub fn new(severity: InjurySeverity, weeks_remaining: u32) -> Self {
        Injury {
            severity,
            weeks_remaining,
        }
    }

    /// Draws a duration from the severity's range.
    pub fn roll<R: Rng + ?Sized>(severity: InjurySeverity, rng: &mut R) -> Self {
        let (min, max) = severity.duration_range();
        let weeks = IntegerUtils::random(rng, min as i32, max as i32) as u32;

        Injury::new(severity, weeks)
    }

    /// One week of rehab. Returns true once the player is healthy.
    pub fn heal_week(&mut self) -> bool {
        self.weeks_remaining = self.weeks_remaining.saturating_sub(1);
        self.weeks_remaining == 0
    }
}

pub struct InjuryRisk;

impl InjuryRisk {
    /// Per-game chance that a healthy player gets hurt.
    pub fn chance(age: u8, overall: u8, injury_prone: bool, difficulty: u8, training_risk: f64) -> f64 {
        let age_factor = (age as f64 - 24.0).max(0.0) / 40.0 * 0.02;
        let quality_factor = (80.0 - overall as f64).max(0.0) / 200.0 * 0.02;
        let difficulty_factor = difficulty as f64 * 0.004;

        let base = (0.01 + age_factor + quality_factor + difficulty_factor) * training_risk;

        if injury_prone { base * 1.5 } else { base }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rolled_duration_within_range() {
        let mut rng = StdRng::seed_from_u64(5);

        for severity in [InjurySeverity::Minor, InjurySeverity::Moderate, InjurySeverity::Severe] {
            let (min, max) = severity.duration_range();
            for _ in 0..50 {
                let injury = Injury::roll(severity, &mut rng);
                assert!(injury.weeks_remaining >= min && injury.weeks_remaining <= max);
            }
        }
    }

    #[test]
    fn test_heal_week_reports_recovery() {
        let mut injury = Injury::new(InjurySeverity::Minor, 2);

        assert!(!injury.heal_week());
        assert!(injury.heal_week());
        assert_eq!(injury.weeks_remaining, 0);
    }

    #[test]
    fn test_chance_grows_with_age_and_difficulty() {
        let young = InjuryRisk::chance(22, 80, false, 0, 1.0);
        let old = InjuryRisk::chance(34, 80, false, 0, 1.0);
        let hard = InjuryRisk::chance(34, 80, false, 5, 1.0);
        let prone = InjuryRisk::chance(34, 80, true, 5, 1.0);

        assert!((young - 0.01).abs() < 1e-9);
        assert!(old > young);
        assert!(hard > old);
        assert!((prone - hard * 1.5).abs() < 1e-9);
    }
}
