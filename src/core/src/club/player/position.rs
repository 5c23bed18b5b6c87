use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "RB")]
    RunningBack,
    #[serde(rename = "WR")]
    WideReceiver,
    #[serde(rename = "TE")]
    TightEnd,
    #[serde(rename = "OL")]
    OffensiveLine,
    #[serde(rename = "DL")]
    DefensiveLine,
    #[serde(rename = "LB")]
    Linebacker,
    #[serde(rename = "CB")]
    Cornerback,
}

impl Position {
    /// Roster order used when building a fresh team.
    pub const ALL: [Position; 8] = [
        Position::Quarterback,
        Position::RunningBack,
        Position::WideReceiver,
        Position::TightEnd,
        Position::OffensiveLine,
        Position::DefensiveLine,
        Position::Linebacker,
        Position::Cornerback,
    ];

    /// Positions the free-agent market is stocked with.
    pub const SKILL: [Position; 4] = [
        Position::Quarterback,
        Position::RunningBack,
        Position::WideReceiver,
        Position::TightEnd,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::OffensiveLine => "OL",
            Position::DefensiveLine => "DL",
            Position::Linebacker => "LB",
            Position::Cornerback => "CB",
        }
    }

    /// Weight applied to overall when sharing out pass targets.
    pub fn target_multiplier(&self) -> f64 {
        match self {
            Position::WideReceiver => 1.2,
            Position::TightEnd => 0.9,
            Position::RunningBack => 0.6,
            _ => 0.4,
        }
    }

    pub fn is_receiver(&self) -> bool {
        matches!(
            self,
            Position::RunningBack | Position::WideReceiver | Position::TightEnd
        )
    }

    /// Line and defensive positions, credited with tackles and sacks.
    pub fn is_trench_or_defense(&self) -> bool {
        matches!(
            self,
            Position::OffensiveLine
                | Position::DefensiveLine
                | Position::Linebacker
                | Position::Cornerback
        )
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
