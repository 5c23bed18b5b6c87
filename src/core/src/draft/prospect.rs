use crate::club::{Contract, Injury, Player, PlayerAttributes, PlayerTraits, Position};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProspectArchetype {
    Workhorse,
    Speedster,
    Speedy,
    PositionalBlocker,
    CoverageSpecialist,
    BigPlayWr,
    DualThreatQb,
}

impl ProspectArchetype {
    /// Archetypes seen in the first prospect class of a new league.
    pub const FOUNDING: [ProspectArchetype; 3] = [
        ProspectArchetype::Workhorse,
        ProspectArchetype::Speedster,
        ProspectArchetype::PositionalBlocker,
    ];

    pub const ALL: [ProspectArchetype; 7] = [
        ProspectArchetype::Workhorse,
        ProspectArchetype::Speedster,
        ProspectArchetype::Speedy,
        ProspectArchetype::PositionalBlocker,
        ProspectArchetype::CoverageSpecialist,
        ProspectArchetype::BigPlayWr,
        ProspectArchetype::DualThreatQb,
    ];
}

impl Display for ProspectArchetype {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ProspectArchetype::Workhorse => "workhorse",
            ProspectArchetype::Speedster => "speedster",
            ProspectArchetype::Speedy => "speedy",
            ProspectArchetype::PositionalBlocker => "positional-blocker",
            ProspectArchetype::CoverageSpecialist => "coverage-specialist",
            ProspectArchetype::BigPlayWr => "big-play-wr",
            ProspectArchetype::DualThreatQb => "dual-threat-qb",
        };

        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoutingSource {
    Regional,
    National,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutingEvent {
    pub points: u32,
    pub source: ScoutingSource,
    /// Grade after this visit.
    pub grade: u8,
    /// Uncertainty after this visit.
    pub uncertainty: u8,
}

/// Draft-eligible player. `true_overall` stays hidden until the pick is made;
/// everyone else sees `scout_grade`. `scout_confidence` holds uncertainty,
/// 0 certain to 100 unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prospect {
    pub id: u32,
    pub name: String,
    pub position: Position,
    pub age: u8,
    pub true_overall: u8,
    pub scout_grade: u8,
    pub scout_confidence: u8,
    pub scout_history: Vec<ScoutingEvent>,
    pub archetype: ProspectArchetype,
    pub bust_probability: f64,
    pub attributes: PlayerAttributes,
    pub traits: PlayerTraits,
    #[serde(default)]
    pub injury: Option<Injury>,
}

impl Prospect {
    pub fn bust_probability_for(true_overall: u8) -> f64 {
        ((80.0 - true_overall as f64) / 180.0).max(0.02)
    }

    /// The drafted player: the true overall becomes visible and a rookie
    /// contract starting in `season` replaces the scouting data. The id carries over.
    pub fn promote(self, season: u32) -> Player {
        Player::builder(self.id, self.name, self.position)
            .overall(self.true_overall)
            .age(self.age)
            .attributes(self.attributes)
            .traits(self.traits)
            .contract(Contract::rookie(self.true_overall, season))
            .injury(self.injury)
            .build()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn prospect(id: u32, position: Position, true_overall: u8, scout_grade: u8) -> Prospect {
        Prospect {
            id,
            name: format!("Prospect {}", id),
            position,
            age: 21,
            true_overall,
            scout_grade,
            scout_confidence: 25,
            scout_history: Vec::new(),
            archetype: ProspectArchetype::Workhorse,
            bust_probability: Prospect::bust_probability_for(true_overall),
            attributes: PlayerAttributes::default(),
            traits: PlayerTraits::default(),
            injury: None,
        }
    }

    #[test]
    fn test_promote_reveals_true_overall() {
        let player = prospect(77, Position::WideReceiver, 84, 70).promote(3);

        assert_eq!(player.id, 77);
        assert_eq!(player.overall, 84);
        assert_eq!(player.contract.start_season, Some(3));
        assert_eq!(player.contract.salary, 6880);
        assert!(!player.starter);
    }

    #[test]
    fn test_bust_probability_floor() {
        assert!((Prospect::bust_probability_for(90) - 0.02).abs() < 1e-9);
        assert!((Prospect::bust_probability_for(62) - 0.1).abs() < 1e-9);
    }
}
