use crate::club::{Player, Team};
use crate::utils::round_i64;

const RATING_WEIGHT: f64 = 10.0;
const YOUTH_PEAK_AGE: i32 = 28;
const YOUTH_WEIGHT: f64 = 6.0;
const NEED_DEPTH: usize = 2;
const NEED_WEIGHT: f64 = 110.0;
const INJURY_PRONE_PENALTY: f64 = 60.0;
const COST_DIVISOR: f64 = 30.0;
const MAX_COST_PENALTY: f64 = 400.0;

/// How much a player is worth to a particular team. Higher is better.
pub struct PlayerValuation;

impl PlayerValuation {
    pub fn value_for_team(player: &Player, team: &Team) -> i64 {
        let value = Self::determine_base(player) + Self::determine_youth_bonus(player) + Self::determine_need_bonus(player, team)
            - Self::determine_durability_penalty(player)
            - Self::determine_cost_penalty(player);

        round_i64(value)
    }

    fn determine_base(player: &Player) -> f64 {
        player.overall as f64 * RATING_WEIGHT
    }

    fn determine_youth_bonus(player: &Player) -> f64 {
        (YOUTH_PEAK_AGE - player.age as i32).max(0) as f64 * YOUTH_WEIGHT
    }

    fn determine_need_bonus(player: &Player, team: &Team) -> f64 {
        NEED_DEPTH.saturating_sub(team.count_at(player.position)) as f64 * NEED_WEIGHT
    }

    fn determine_durability_penalty(player: &Player) -> f64 {
        if player.is_injury_prone() {
            INJURY_PRONE_PENALTY
        } else {
            0.0
        }
    }

    fn determine_cost_penalty(player: &Player) -> f64 {
        (player.contract.annual_cost() as f64 / COST_DIVISOR).min(MAX_COST_PENALTY).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Contract, Persona, PlayerTraits, Position};

    fn team_with(positions: &[Position]) -> Team {
        let mut team = Team::new("Tigers", "#f00", Persona::balanced());
        for (idx, position) in positions.iter().enumerate() {
            team.add_player(Player::builder(idx as u32 + 1, format!("P{}", idx), *position).build());
        }
        team
    }

    fn candidate(age: u8, salary: i64) -> Player {
        Player::builder(99, "Candidate", Position::WideReceiver)
            .overall(75)
            .age(age)
            .contract(Contract::new(2, salary))
            .build()
    }

    #[test]
    fn test_value_components() {
        let team = team_with(&[Position::Quarterback]);
        let player = candidate(24, 6000);

        // 750 base + 24 youth + 220 need - 200 cost
        assert_eq!(PlayerValuation::value_for_team(&player, &team), 794);
    }

    #[test]
    fn test_need_bonus_disappears_with_depth() {
        let deep = team_with(&[Position::WideReceiver, Position::WideReceiver]);
        let thin = team_with(&[Position::WideReceiver]);
        let player = candidate(30, 6000);

        let thin_value = PlayerValuation::value_for_team(&player, &thin);
        let deep_value = PlayerValuation::value_for_team(&player, &deep);

        assert_eq!(thin_value - deep_value, 110);
    }

    #[test]
    fn test_cost_penalty_is_capped() {
        let team = team_with(&[Position::WideReceiver, Position::WideReceiver]);
        let cheap = candidate(30, 0);
        let expensive = candidate(30, 1_000_000);

        let gap = PlayerValuation::value_for_team(&cheap, &team) - PlayerValuation::value_for_team(&expensive, &team);

        assert_eq!(gap, 400);
    }

    #[test]
    fn test_injury_prone_penalty() {
        let team = team_with(&[]);
        let healthy = candidate(26, 3000);
        let mut fragile = healthy.clone();
        fragile.traits = PlayerTraits {
            injury_prone: true,
            ..PlayerTraits::default()
        };

        assert_eq!(
            PlayerValuation::value_for_team(&healthy, &team) - PlayerValuation::value_for_team(&fragile, &team),
            60
        );
    }
}
