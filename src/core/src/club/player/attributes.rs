use crate::utils::{FloatUtils, IntegerUtils};
use rand::Rng;
use serde::{Deserialize, Serialize};

const ATTRIBUTE_MIN: i32 = 40;
const ATTRIBUTE_MAX: i32 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub speed: u8,
    pub strength: u8,
    pub awareness: u8,
    pub hands: u8,
    pub coverage: u8,
    pub durability: u8,
}

impl PlayerAttributes {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut roll = || IntegerUtils::random(rng, ATTRIBUTE_MIN, ATTRIBUTE_MAX) as u8;

        PlayerAttributes {
            speed: roll(),
            strength: roll(),
            awareness: roll(),
            hands: roll(),
            coverage: roll(),
            durability: roll(),
        }
    }

    pub fn average(&self) -> f32 {
        let sum = self.speed as u32
            + self.strength as u32
            + self.awareness as u32
            + self.hands as u32
            + self.coverage as u32
            + self.durability as u32;

        sum as f32 / 6.0
    }
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        PlayerAttributes {
            speed: 60,
            strength: 60,
            awareness: 60,
            hands: 60,
            coverage: 60,
            durability: 60,
        }
    }
}

/// Traits scouts and trade partners cannot see. Only `injury_prone` feeds
/// valuation and injury rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerTraits {
    pub injury_prone: bool,
    pub clutch: bool,
    pub consistency: bool,
    pub leader: bool,
}

impl PlayerTraits {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        PlayerTraits {
            injury_prone: FloatUtils::chance(rng, 0.08),
            clutch: FloatUtils::chance(rng, 0.12),
            consistency: FloatUtils::chance(rng, 0.70),
            leader: FloatUtils::chance(rng, 0.15),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_attributes_within_bounds() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let attrs = PlayerAttributes::random(&mut rng);
            for value in [
                attrs.speed,
                attrs.strength,
                attrs.awareness,
                attrs.hands,
                attrs.coverage,
                attrs.durability,
            ] {
                assert!((40..=95).contains(&value));
            }
        }
    }

    #[test]
    fn test_consistency_is_common_and_injury_prone_rare() {
        let mut rng = StdRng::seed_from_u64(11);

        let traits: Vec<PlayerTraits> = (0..2000).map(|_| PlayerTraits::random(&mut rng)).collect();
        let consistent = traits.iter().filter(|t| t.consistency).count();
        let prone = traits.iter().filter(|t| t.injury_prone).count();

        assert!(consistent > 1200);
        assert!(prone < 300);
    }
}
