use crate::club::{Contract, Injury, PlayerAttributes, PlayerTraits, Position, SeasonStats};
use serde::{Deserialize, Serialize};

pub const RATING_MAX: u8 = 99;
pub const RATING_FLOOR: u8 = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: Position,
    pub overall: u8,
    pub age: u8,
    pub attributes: PlayerAttributes,
    pub traits: PlayerTraits,
    pub contract: Contract,
    pub starter: bool,
    pub injury: Option<Injury>,
    pub season_stats: SeasonStats,
}

impl Player {
    pub fn builder(id: u32, name: impl Into<String>, position: Position) -> PlayerBuilder {
        PlayerBuilder::new(id, name, position)
    }

    pub fn is_injured(&self) -> bool {
        self.injury.is_some()
    }

    pub fn is_injury_prone(&self) -> bool {
        self.traits.injury_prone
    }

    /// Ages the player one season. Veterans past 30 lose up to `decline`
    /// overall, never dropping below the rating floor.
    pub fn age_one_season(&mut self, decline: u8) {
        self.age = self.age.saturating_add(1);

        if self.age > 30 {
            self.overall = self.overall.saturating_sub(decline).max(RATING_FLOOR);
        }
    }

    pub fn should_retire(&self) -> bool {
        self.age > 38 && self.overall < 55
    }
}

pub struct PlayerBuilder {
    id: u32,
    name: String,
    position: Position,
    overall: u8,
    age: u8,
    attributes: Option<PlayerAttributes>,
    traits: Option<PlayerTraits>,
    contract: Option<Contract>,
    starter: bool,
    injury: Option<Injury>,
}

impl PlayerBuilder {
    pub fn new(id: u32, name: impl Into<String>, position: Position) -> Self {
        PlayerBuilder {
            id,
            name: name.into(),
            position,
            overall: 60,
            age: 24,
            attributes: None,
            traits: None,
            contract: None,
            starter: false,
            injury: None,
        }
    }

    pub fn overall(mut self, overall: u8) -> Self {
        self.overall = overall.min(RATING_MAX);
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = age;
        self
    }

    pub fn attributes(mut self, attributes: PlayerAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn traits(mut self, traits: PlayerTraits) -> Self {
        self.traits = Some(traits);
        self
    }

    pub fn contract(mut self, contract: Contract) -> Self {
        self.contract = Some(contract);
        self
    }

    pub fn starter(mut self, starter: bool) -> Self {
        self.starter = starter;
        self
    }

    pub fn injury(mut self, injury: Option<Injury>) -> Self {
        self.injury = injury;
        self
    }

    pub fn build(self) -> Player {
        Player {
            id: self.id,
            name: self.name,
            position: self.position,
            overall: self.overall,
            age: self.age,
            attributes: self.attributes.unwrap_or_default(),
            traits: self.traits.unwrap_or_default(),
            contract: self.contract.unwrap_or_default(),
            starter: self.starter,
            injury: self.injury,
            season_stats: SeasonStats::default(),
        }
    }
}
