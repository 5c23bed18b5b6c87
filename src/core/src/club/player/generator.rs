use crate::club::{Contract, Player, PlayerAttributes, PlayerTraits, Position};
use crate::draft::{Prospect, ProspectArchetype};
use crate::league::IdSequence;
use crate::utils::{IntegerUtils, SliceUtils};
use rand::Rng;
use serde::{Deserialize, Serialize};

const DEFAULT_FIRST_NAMES: [&str; 20] = [
    "Alex", "Jordan", "Taylor", "Chris", "Drew", "Sam", "Cody", "Blake", "Evan", "Ryan", "Logan",
    "Kyle", "Mason", "Sean", "Tyler", "Derek", "Noah", "Liam", "Oliver", "Ethan",
];

const DEFAULT_LAST_NAMES: [&str; 20] = [
    "Johnson", "Smith", "Brown", "Davis", "Miller", "Wilson", "Moore", "Taylor", "Anderson",
    "Thomas", "Jackson", "White", "Harris", "Martin", "Thompson", "Garcia", "Martinez",
    "Robinson", "Clark", "Rodriguez",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeopleNameGeneratorData {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

impl PeopleNameGeneratorData {
    pub fn new(first_names: Vec<String>, last_names: Vec<String>) -> Self {
        PeopleNameGeneratorData {
            first_names,
            last_names,
        }
    }
}

impl Default for PeopleNameGeneratorData {
    fn default() -> Self {
        PeopleNameGeneratorData {
            first_names: DEFAULT_FIRST_NAMES.iter().map(|s| s.to_string()).collect(),
            last_names: DEFAULT_LAST_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub struct PlayerGenerator {
    people_names_data: PeopleNameGeneratorData,
}

impl PlayerGenerator {
    pub fn with_people_names(people_names: &PeopleNameGeneratorData) -> Self {
        let people_names_data = if people_names.first_names.is_empty() || people_names.last_names.is_empty() {
            PeopleNameGeneratorData::default()
        } else {
            people_names.clone()
        };

        PlayerGenerator { people_names_data }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        ids: &mut IdSequence,
        rng: &mut R,
        position: Position,
        overall: u8,
        age: u8,
    ) -> Player {
        let salary = IntegerUtils::random(rng, 4000, 12000) as i64;

        Player::builder(ids.next_id(), self.generate_name(rng), position)
            .overall(overall)
            .age(age)
            .attributes(PlayerAttributes::random(rng))
            .traits(PlayerTraits::random(rng))
            .contract(Contract::new(2, salary))
            .build()
    }

    /// A fresh roster player: 60-80 overall, 20-34 years old.
    pub fn roster_player<R: Rng + ?Sized>(&self, ids: &mut IdSequence, rng: &mut R, position: Position) -> Player {
        let overall = IntegerUtils::random(rng, 60, 80) as u8;
        let age = IntegerUtils::random(rng, 20, 34) as u8;

        self.generate(ids, rng, position, overall, age)
    }

    /// A skill-position free agent: 55-78 overall, 21-33 years old.
    pub fn free_agent<R: Rng + ?Sized>(&self, ids: &mut IdSequence, rng: &mut R) -> Player {
        let position = *SliceUtils::sample(rng, &Position::SKILL).unwrap_or(&Position::RunningBack);
        let overall = IntegerUtils::random(rng, 55, 78) as u8;
        let age = IntegerUtils::random(rng, 21, 33) as u8;

        self.generate(ids, rng, position, overall, age)
    }

    /// Prospect of the founding class: skill positions only, a tight +/-6
    /// grade and uniform uncertainty.
    pub fn founding_prospect<R: Rng + ?Sized>(&self, ids: &mut IdSequence, rng: &mut R) -> Prospect {
        let position = *SliceUtils::sample(rng, &Position::SKILL).unwrap_or(&Position::RunningBack);
        let true_overall = IntegerUtils::random(rng, 60, 85) as u8;
        let grade = true_overall as i32 + IntegerUtils::random(rng, -6, 6);
        let archetype = *SliceUtils::sample(rng, &ProspectArchetype::FOUNDING)
            .unwrap_or(&ProspectArchetype::Workhorse);

        self.prospect(ids, rng, position, true_overall, grade, 25, archetype)
    }

    /// Prospect of a yearly draft class. Wider talent range; the grade's noise
    /// shrinks with the scouts' uncertainty.
    pub fn draft_class_prospect<R: Rng + ?Sized>(&self, ids: &mut IdSequence, rng: &mut R) -> Prospect {
        let position = *SliceUtils::sample(rng, &Position::ALL).unwrap_or(&Position::RunningBack);
        let true_overall = IntegerUtils::random(rng, 58, 92) as u8;
        let uncertainty = IntegerUtils::random(rng, 5, 35) as u8;
        let spread = (12.0 * uncertainty as f64 / 100.0).round() as i32;
        let grade = true_overall as i32 + IntegerUtils::random(rng, -spread, spread);
        let archetype = *SliceUtils::sample(rng, &ProspectArchetype::ALL)
            .unwrap_or(&ProspectArchetype::Workhorse);

        self.prospect(ids, rng, position, true_overall, grade, uncertainty, archetype)
    }

    #[allow(clippy::too_many_arguments)]
    fn prospect<R: Rng + ?Sized>(
        &self,
        ids: &mut IdSequence,
        rng: &mut R,
        position: Position,
        true_overall: u8,
        grade: i32,
        uncertainty: u8,
        archetype: ProspectArchetype,
    ) -> Prospect {
        Prospect {
            id: ids.next_id(),
            name: self.generate_name(rng),
            position,
            age: IntegerUtils::random(rng, 19, 22) as u8,
            true_overall,
            scout_grade: grade.clamp(0, 99) as u8,
            scout_confidence: uncertainty,
            scout_history: Vec::new(),
            archetype,
            bust_probability: Prospect::bust_probability_for(true_overall),
            attributes: PlayerAttributes::random(rng),
            traits: PlayerTraits::random(rng),
            injury: None,
        }
    }

    fn generate_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        format!("{} {}", self.generate_first_name(rng), self.generate_last_name(rng))
    }

    fn generate_first_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        SliceUtils::sample(rng, &self.people_names_data.first_names)
            .cloned()
            .unwrap_or_default()
    }

    fn generate_last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        SliceUtils::sample(rng, &self.people_names_data.last_names)
            .cloned()
            .unwrap_or_default()
    }
}
