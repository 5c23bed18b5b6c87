use crate::club::{Player, Position, Team};
use crate::r#match::{
    DefensiveStats, GameResult, PassingStats, PlayerGameStats, ReceivingStats, RushingStats,
    TopPerformer,
};
use crate::utils::{FloatUtils, IntegerUtils, round_u32};
use itertools::Itertools;
use rand::Rng;

const TOP_PLAYERS: usize = 3;

/// Score plus a weighted-allocation box score. Volume is split between the
/// two sides by relative strength and then shared out across each roster;
/// there is no play-by-play.
pub struct GameSimulator;

impl GameSimulator {
    pub fn simulate<R: Rng + ?Sized>(home: &Team, away: &Team, difficulty: u8, rng: &mut R) -> GameResult {
        let home_strength = home.strength() + IntegerUtils::random(rng, -10, 10);
        let away_strength = away.strength() + IntegerUtils::random(rng, -10, 10);

        let home_score = Self::score(home_strength, difficulty, rng);
        let away_score = Self::score(away_strength, difficulty, rng);

        let home_stats = distribute_team_stats(home, home_strength, away_strength, rng);
        let away_stats = distribute_team_stats(away, away_strength, home_strength, rng);

        let top_players = home_stats
            .iter()
            .map(|line| (line, &home.name))
            .chain(away_stats.iter().map(|line| (line, &away.name)))
            .sorted_by(|(a, _), (b, _)| b.fantasy.total_cmp(&a.fantasy))
            .take(TOP_PLAYERS)
            .map(|(line, team)| TopPerformer {
                player_id: line.player_id,
                name: line.name.clone(),
                position: line.position,
                team: team.clone(),
                fantasy: line.fantasy.round() as i64,
            })
            .collect();

        GameResult {
            home: home.name.clone(),
            away: away.name.clone(),
            home_score,
            away_score,
            top_players,
            home_stats,
            away_stats,
        }
    }

    /// Score-only game between two AI sides that are not on the user's schedule.
    pub fn quick_scores<R: Rng + ?Sized>(first: &Team, second: &Team, difficulty: u8, rng: &mut R) -> (u32, u32) {
        let first_strength = first.strength() + IntegerUtils::random(rng, -8, 8);
        let second_strength = second.strength() + IntegerUtils::random(rng, -8, 8);

        (
            Self::score(first_strength, difficulty, rng),
            Self::score(second_strength, difficulty, rng),
        )
    }

    fn score<R: Rng + ?Sized>(strength: i32, difficulty: u8, rng: &mut R) -> u32 {
        let raw = strength as f64 / 10.0 + IntegerUtils::random(rng, 7, 28) as f64 - difficulty as f64;

        round_u32(raw)
    }
}

/// Per-player lines for one side. `team_strength` and `opponent_strength`
/// are the noisy game-day strengths.
fn distribute_team_stats<R: Rng + ?Sized>(
    team: &Team,
    team_strength: i32,
    opponent_strength: i32,
    rng: &mut R,
) -> Vec<PlayerGameStats> {
    let roster = &team.roster;
    let strength_total = (team_strength + opponent_strength).max(1) as f64;
    let own_share = team_strength.max(0) as f64 / strength_total;
    let opponent_share = opponent_strength.max(0) as f64 / strength_total;

    let pass_base = IntegerUtils::random(rng, 28, 44) as f64;
    let pass_attempts = round_u32(pass_base * own_share).max(10);
    let rush_base = IntegerUtils::random(rng, 28, 44) as f64;
    let rush_attempts = round_u32(rush_base * opponent_share).max(8);

    let weights: Vec<f64> = roster
        .iter()
        .map(|p| (p.overall as f64 * p.position.target_multiplier()).max(0.1))
        .collect();
    let total_weight = weights.iter().sum::<f64>().max(1.0);

    let total_targets = round_u32(pass_attempts as f64 * (0.55 + FloatUtils::unit(rng) * 0.08)).max(6);
    let total_carries = round_u32(rush_attempts as f64 * (0.9 + FloatUtils::unit(rng) * 0.2)).max(10);

    let mut lines: Vec<PlayerGameStats> = roster
        .iter()
        .zip(weights.iter())
        .map(|(player, weight)| {
            let mut line = PlayerGameStats::new(player.id, player.name.clone(), player.position);

            if player.position.is_receiver() {
                let share = (weight / total_weight).max(0.01);
                line.receiving = Some(receiving_line(player, total_targets, share, rng));
            } else if player.position.is_trench_or_defense() {
                line.defense = Some(defensive_line(player, rng));
            }

            line
        })
        .collect();

    let running_backs: Vec<usize> = roster
        .iter()
        .enumerate()
        .filter(|(_, p)| p.position == Position::RunningBack)
        .map(|(idx, _)| idx)
        .collect();
    let rb_weight = running_backs
        .iter()
        .map(|&idx| roster[idx].overall as f64)
        .sum::<f64>()
        .max(1.0);

    for idx in running_backs {
        let share = roster[idx].overall as f64 / rb_weight;
        lines[idx].rushing = Some(rushing_line(&roster[idx], total_carries, share, rng));
    }

    // the first quarterback takes every snap
    if let Some(qb_idx) = roster.iter().position(|p| p.position == Position::Quarterback) {
        lines[qb_idx].passing = Some(passing_line(&roster[qb_idx], pass_attempts, rng));
    }

    lines.iter_mut().for_each(PlayerGameStats::compute_fantasy);

    lines
}

fn receiving_line<R: Rng + ?Sized>(player: &Player, total_targets: u32, share: f64, rng: &mut R) -> ReceivingStats {
    let overall = player.overall as f64;

    let targets = round_u32(total_targets as f64 * share * (0.8 + FloatUtils::unit(rng) * 0.4));
    let catch_rate = (0.4 + (overall - 60.0) / 120.0 + FloatUtils::unit(rng) * 0.15).min(0.98);
    let receptions = round_u32(targets as f64 * catch_rate);

    let yards_per_catch = match player.position {
        Position::RunningBack => 3.0 + (overall - 60.0) / 10.0 + FloatUtils::unit(rng) * 3.0,
        _ => 7.0 + (overall - 60.0) / 8.0 + (FloatUtils::unit(rng) * 6.0 - 2.0),
    };
    let yards = round_u32(receptions as f64 * yards_per_catch);
    let touchdowns = round_u32(yards as f64 / IntegerUtils::random(rng, 80, 260) as f64);

    ReceivingStats {
        targets,
        receptions,
        yards,
        touchdowns,
    }
}

fn rushing_line<R: Rng + ?Sized>(player: &Player, total_carries: u32, share: f64, rng: &mut R) -> RushingStats {
    let overall = player.overall as f64;

    let carries = round_u32(total_carries as f64 * share * (0.7 + FloatUtils::unit(rng) * 0.6));
    let yards_per_carry = 3.0 + (overall - 60.0) / 10.0 + FloatUtils::unit(rng) * 2.0;
    let yards = round_u32(carries as f64 * yards_per_carry);
    let touchdowns = round_u32(yards as f64 / IntegerUtils::random(rng, 80, 260) as f64);

    RushingStats {
        carries,
        yards,
        touchdowns,
    }
}

fn passing_line<R: Rng + ?Sized>(player: &Player, attempts: u32, rng: &mut R) -> PassingStats {
    let overall = player.overall as f64;

    let completion_rate = 0.45 + (overall - 60.0) * 0.006 + (FloatUtils::unit(rng) * 0.06 - 0.02);
    let completions = round_u32(attempts as f64 * completion_rate.clamp(0.3, 0.9));
    let yards_per_attempt = 6.0 + (overall - 60.0) / 8.0 + (FloatUtils::unit(rng) * 3.0 - 1.0);
    let yards = round_u32(completions as f64 * yards_per_attempt);
    let touchdowns = round_u32(yards as f64 / IntegerUtils::random(rng, 140, 260) as f64);
    let interceptions = round_u32(IntegerUtils::random(rng, 0, 3) as f64 - (overall - 60.0) / 26.0);

    PassingStats {
        attempts,
        completions,
        yards,
        touchdowns,
        interceptions,
    }
}

fn defensive_line<R: Rng + ?Sized>(player: &Player, rng: &mut R) -> DefensiveStats {
    let overall = player.overall as f64;

    DefensiveStats {
        tackles: round_u32(overall / 10.0 * (1.0 + FloatUtils::unit(rng) * 0.8)),
        sacks: round_u32(((overall - 72.0) / 22.0 * FloatUtils::unit(rng)).max(0.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::Persona;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn team(name: &str, positions: &[Position], overall: u8, first_id: u32) -> Team {
        let mut team = Team::new(name, "#444", Persona::balanced());
        for (offset, position) in positions.iter().enumerate() {
            let id = first_id + offset as u32;
            team.add_player(
                Player::builder(id, format!("{} {}", name, id), *position)
                    .overall(overall)
                    .build(),
            );
        }
        team
    }

    #[test]
    fn test_simulate_produces_full_box_score() {
        let mut rng = StdRng::seed_from_u64(42);
        let home = team("Ravens", &Position::ALL, 75, 1);
        let away = team("Tigers", &Position::ALL, 65, 100);

        let result = GameSimulator::simulate(&home, &away, 1, &mut rng);

        assert_eq!(result.home_stats.len(), 8);
        assert_eq!(result.away_stats.len(), 8);
        assert_eq!(result.top_players.len(), 3);

        let qb = &result.home_stats[0];
        let passing = qb.passing.expect("quarterback passes");
        assert!(passing.attempts >= 10);
        assert!(passing.completions <= passing.attempts);

        let rb = &result.home_stats[1];
        assert!(rb.rushing.is_some());
        assert!(rb.receiving.is_some());

        let cb = &result.home_stats[7];
        assert!(cb.defense.is_some());
        assert!(cb.passing.is_none());
    }

    #[test]
    fn test_top_players_sorted_by_fantasy() {
        let mut rng = StdRng::seed_from_u64(9);
        let home = team("Ravens", &Position::ALL, 80, 1);
        let away = team("Tigers", &Position::ALL, 80, 100);

        let result = GameSimulator::simulate(&home, &away, 0, &mut rng);

        let scores: Vec<i64> = result.top_players.iter().map(|p| p.fantasy).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_missing_position_leaves_block_absent() {
        let mut rng = StdRng::seed_from_u64(5);
        let home = team("Ravens", &[Position::WideReceiver, Position::Linebacker], 70, 1);
        let away = team("Tigers", &Position::ALL, 70, 100);

        let result = GameSimulator::simulate(&home, &away, 1, &mut rng);

        assert!(result.home_stats.iter().all(|line| line.passing.is_none()));
        assert!(result.home_stats.iter().all(|line| line.rushing.is_none()));
    }

    #[test]
    fn test_negative_raw_score_clamps_to_zero() {
        let mut rng = StdRng::seed_from_u64(77);

        // strength -400 caps the raw score at -40 + 28 - 5 = -17
        for _ in 0..50 {
            assert_eq!(GameSimulator::score(-400, 5, &mut rng), 0);
        }

        assert_eq!(round_u32(-3.6), 0);
        assert_eq!(round_u32(2.5), 3);
    }

    #[test]
    fn test_quick_scores_stay_in_range_on_hard_difficulty() {
        let mut rng = StdRng::seed_from_u64(77);
        let home = team("Ravens", &[], 0, 1);
        let away = team("Tigers", &[], 0, 100);

        for _ in 0..50 {
            let (a, b) = GameSimulator::quick_scores(&home, &away, 5, &mut rng);
            assert!(a <= 40 && b <= 40);
        }
    }
}
