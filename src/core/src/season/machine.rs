use crate::error::EngineResult;
use crate::league::League;
use crate::season::SeasonPhase;
use crate::utils::IntegerUtils;
use log::{info, warn};
use rand::Rng;

const MIN_FREE_AGENTS: usize = 8;
const FREE_AGENTS_PER_AI_TEAM: usize = 2;
const AUTO_TRADE_ATTEMPTS: usize = 4;
const MAX_SEASON_DECLINE: i32 = 3;
/// Upper bound on simulated weeks when finishing a regular season.
const WEEK_SAFETY_LIMIT: usize = 100;

impl League {
    /// Moves the league to the next phase of the cycle, running that
    /// transition's side effects. The transition runs on a copy and is only
    /// committed when every step succeeds.
    pub fn advance_phase<R: Rng + ?Sized>(&mut self, rng: &mut R) -> EngineResult<SeasonPhase> {
        let mut next = self.clone();

        let phase = next.transition(rng)?;

        next.phase = phase;
        next.notify(format!("Phase changed to {}", phase));

        *self = next;

        info!("season {} phase: {}", self.season, phase);

        Ok(phase)
    }

    fn transition<R: Rng + ?Sized>(&mut self, rng: &mut R) -> EngineResult<SeasonPhase> {
        let next = self.phase.next();

        match (self.phase, next) {
            (SeasonPhase::Offseason, SeasonPhase::Draft) => {
                self.ensure_free_agents(MIN_FREE_AGENTS, rng);

                let class_size = self.settings.draft_rounds as usize * self.team_count();
                self.ensure_prospects(class_size, rng);

                self.start_draft(self.settings.draft_rounds)?;
            }
            (SeasonPhase::Draft, SeasonPhase::FreeAgency) => {
                self.ensure_free_agents(MIN_FREE_AGENTS, rng);
            }
            (SeasonPhase::FreeAgency, SeasonPhase::RosterManagement) => {
                self.ensure_free_agents(self.teams.len() * FREE_AGENTS_PER_AI_TEAM, rng);
                self.auto_sign_free_agents();
                self.auto_propose_trades(AUTO_TRADE_ATTEMPTS, rng);
            }
            (SeasonPhase::RosterManagement, SeasonPhase::RegularSeason) => {
                self.week = 1;
                self.all_teams_mut().for_each(|t| t.reset_record());
            }
            (SeasonPhase::RegularSeason, SeasonPhase::Playoffs) => {
                let mut simulated = 0;

                while self.week <= self.settings.season_length && simulated < WEEK_SAFETY_LIMIT {
                    self.simulate_week(rng)?;
                    simulated += 1;
                }
            }
            (SeasonPhase::Playoffs, SeasonPhase::Offseason) => {
                if let Err(e) = self.run_playoffs(rng) {
                    warn!("season {} ended without a champion: {}", self.season, e);
                }

                self.advance_season(rng);
            }
            _ => {}
        }

        Ok(next)
    }

    /// Rolls the league into the next season: everyone ages a year, veterans
    /// past 30 may lose up to 3 overall, and old low-rated players retire.
    pub fn advance_season<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        self.season += 1;
        self.week = 1;

        let mut retired = 0;

        for team in self.all_teams_mut() {
            for player in team.roster.iter_mut() {
                let decline = IntegerUtils::random(rng, 0, MAX_SEASON_DECLINE) as u8;

                player.age_one_season(decline);
                player.season_stats.reset();
            }

            let before = team.roster.len();
            team.roster.retain(|p| !p.should_retire());
            retired += before - team.roster.len();

            team.played_opponents.clear();
        }

        // rankings only read the current season
        let season = self.season;
        self.past_games.retain(|g| g.season >= season);

        self.scouting_points = self.settings.scouting_points_per_season;
        self.draft = None;

        self.notify(format!(
            "Season advanced to {}. Players aged and {} retirements processed.",
            self.season, retired
        ));

        retired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::tests::test_league;
    use crate::r#match::PastGame;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_full_cycle_increments_season_once() {
        let mut league = test_league();
        let mut rng = StdRng::seed_from_u64(2024);

        let mut visited = Vec::new();
        for _ in 0..5 {
            visited.push(league.advance_phase(&mut rng).expect("phase"));
            assert_eq!(league.season, 1);
        }

        visited.push(league.advance_phase(&mut rng).expect("phase"));

        assert_eq!(
            visited,
            vec![
                SeasonPhase::Draft,
                SeasonPhase::FreeAgency,
                SeasonPhase::RosterManagement,
                SeasonPhase::RegularSeason,
                SeasonPhase::Playoffs,
                SeasonPhase::Offseason,
            ]
        );
        assert_eq!(league.season, 2);
        assert_eq!(league.week, 1);
        assert_eq!(league.history.len(), 1);
        assert!(league.draft.is_none());
    }

    #[test]
    fn test_offseason_to_draft_prepares_board_and_pools() {
        let mut league = test_league();
        let mut rng = StdRng::seed_from_u64(5);

        league.advance_phase(&mut rng).expect("phase");

        assert_eq!(league.phase, SeasonPhase::Draft);
        assert!(league.free_agents.len() >= MIN_FREE_AGENTS);
        assert!(league.prospects.len() >= 3 * 4);

        let draft = league.draft.as_ref().expect("board");
        assert_eq!(draft.board.len(), 12);
        assert!(!draft.started);
        assert_eq!(league.notifications.latest().expect("notice").text, "Phase changed to draft");
    }

    #[test]
    fn test_regular_season_is_played_out() {
        let mut league = test_league();
        league.phase = SeasonPhase::RegularSeason;
        let mut rng = StdRng::seed_from_u64(8);

        league.advance_phase(&mut rng).expect("phase");

        assert_eq!(league.phase, SeasonPhase::Playoffs);
        assert_eq!(league.week, league.settings.season_length + 1);
        assert_eq!(league.user_team.record.games(), league.settings.season_length);
    }

    #[test]
    fn test_advance_season_ages_and_retires() {
        let mut league = test_league();
        league.scouting_points = 0;
        league.user_team.played_opponents.push("Tigers".into());
        league.user_team.roster[0].age = 39;
        league.user_team.roster[0].overall = 50;
        let roster_size = league.user_team.roster.len();
        league.past_games.push(PastGame {
            id: 500,
            season: 1,
            week: 3,
            home: "Ravens".into(),
            away: "Tigers".into(),
            home_score: 21,
            away_score: 14,
        });
        let mut rng = StdRng::seed_from_u64(3);

        let retired = league.advance_season(&mut rng);

        assert_eq!(retired, 1);
        assert_eq!(league.user_team.roster.len(), roster_size - 1);
        assert!(league.user_team.roster.iter().all(|p| p.age == 27));
        assert!(league.user_team.played_opponents.is_empty());
        assert_eq!(league.scouting_points, league.settings.scouting_points_per_season);
        assert_eq!(league.season, 2);
        assert!(league.past_games.is_empty());
    }
}
