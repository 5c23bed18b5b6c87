use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonPhase {
    #[default]
    Offseason,
    Draft,
    FreeAgency,
    RosterManagement,
    RegularSeason,
    Playoffs,
}

impl SeasonPhase {
    pub const CYCLE: [SeasonPhase; 6] = [
        SeasonPhase::Offseason,
        SeasonPhase::Draft,
        SeasonPhase::FreeAgency,
        SeasonPhase::RosterManagement,
        SeasonPhase::RegularSeason,
        SeasonPhase::Playoffs,
    ];

    /// Cyclic successor; playoffs wrap around to the offseason.
    pub fn next(self) -> SeasonPhase {
        match self {
            SeasonPhase::Offseason => SeasonPhase::Draft,
            SeasonPhase::Draft => SeasonPhase::FreeAgency,
            SeasonPhase::FreeAgency => SeasonPhase::RosterManagement,
            SeasonPhase::RosterManagement => SeasonPhase::RegularSeason,
            SeasonPhase::RegularSeason => SeasonPhase::Playoffs,
            SeasonPhase::Playoffs => SeasonPhase::Offseason,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SeasonPhase::Offseason => "offseason",
            SeasonPhase::Draft => "draft",
            SeasonPhase::FreeAgency => "free_agency",
            SeasonPhase::RosterManagement => "roster_management",
            SeasonPhase::RegularSeason => "regular_season",
            SeasonPhase::Playoffs => "playoffs",
        }
    }
}

impl Display for SeasonPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_walks_the_cycle() {
        let mut phase = SeasonPhase::Offseason;

        for expected in SeasonPhase::CYCLE.iter().cycle().skip(1).take(12) {
            phase = phase.next();
            assert_eq!(phase, *expected);
        }
    }

    #[test]
    fn test_display_uses_snake_case() {
        assert_eq!(SeasonPhase::FreeAgency.to_string(), "free_agency");
        assert_eq!(SeasonPhase::RegularSeason.to_string(), "regular_season");
    }
}
