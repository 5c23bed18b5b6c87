use crate::club::Team;
use crate::error::{EngineError, EngineResult};
use crate::league::{InjuryReport, League};
use crate::r#match::{Boxscore, GameResult, GameSimulator, PastGame, PlayerGameStats};
use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

pub const RECENT_BOXSCORES_LIMIT: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    pub season: u32,
    pub week: u32,
    pub game: GameResult,
    pub other_games: Vec<PastGame>,
    pub injuries: Vec<InjuryReport>,
}

impl League {
    /// Plays one full-box-score game and credits every line to the players'
    /// season totals. Records and points are left to the caller.
    pub fn play_game<R: Rng + ?Sized>(&mut self, home: &str, away: &str, rng: &mut R) -> EngineResult<GameResult> {
        let difficulty = self.settings.difficulty;

        let (home_team, away_team) = self
            .teams_pair_mut(home, away)
            .ok_or_else(|| EngineError::TeamNotFound(format!("{} / {}", home, away)))?;

        let result = GameSimulator::simulate(home_team, away_team, difficulty, rng);

        apply_season_stats(home_team, &result.home_stats);
        apply_season_stats(away_team, &result.away_stats);

        Ok(result)
    }

    /// Simulates the current week: the user's game in full, the rest of the
    /// league as score-only pairings.
    pub fn simulate_week<R: Rng + ?Sized>(&mut self, rng: &mut R) -> EngineResult<WeekSummary> {
        if self.week > self.settings.season_length {
            return Err(EngineError::SeasonComplete);
        }

        if self.teams.is_empty() {
            return Err(EngineError::NotEnoughTeams);
        }

        self.advance_injuries();

        let opponent = self.pick_user_opponent(rng);
        let user_name = self.user_team.name.clone();
        let week = self.week;

        let game = self.play_game(&user_name, &opponent, rng)?;
        self.apply_result(&game.home, &game.away, game.home_score, game.away_score);

        if !self.user_team.played_opponents.contains(&opponent) {
            self.user_team.played_opponents.push(opponent.clone());
        }

        let user_game = self.past_game(&game.home, &game.away, game.home_score, game.away_score);
        self.past_games.push(user_game);

        let other_games = self.simulate_other_games(&opponent, rng);
        self.past_games.extend(other_games.iter().cloned());

        let boxscore = Boxscore {
            id: self.ids.next_id(),
            season: self.season,
            week,
            game: game.clone(),
        };
        self.recent_boxscores.insert(0, boxscore);
        self.recent_boxscores.truncate(RECENT_BOXSCORES_LIMIT);

        let mut injuries = self.roll_injuries(&user_name, rng);
        injuries.extend(self.roll_injuries(&opponent, rng));

        self.week += 1;

        info!(
            "🏈 week {} final: {} {} - {} {}",
            week, game.home, game.home_score, game.away_score, game.away
        );

        Ok(WeekSummary {
            season: self.season,
            week,
            game,
            other_games,
            injuries,
        })
    }

    /// An AI team the user has not faced since the last reset.
    fn pick_user_opponent<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let mut candidates: Vec<&Team> = self
            .teams
            .iter()
            .filter(|t| !self.user_team.played_opponents.contains(&t.name))
            .collect();

        if candidates.is_empty() {
            candidates = self.teams.iter().collect();
        }

        let choice = candidates
            .choose(rng)
            .map(|t| t.name.clone())
            .unwrap_or_default();

        if self.teams.iter().all(|t| self.user_team.played_opponents.contains(&t.name)) {
            debug!("user schedule exhausted, clearing played opponents");
            self.user_team.played_opponents.clear();
        }

        choice
    }

    /// Pairs the AI teams not facing the user at random. An odd team out sits the week.
    fn simulate_other_games<R: Rng + ?Sized>(&mut self, user_opponent: &str, rng: &mut R) -> Vec<PastGame> {
        let mut names: Vec<String> = self
            .teams
            .iter()
            .filter(|t| t.name != user_opponent)
            .map(|t| t.name.clone())
            .collect();

        names.shuffle(rng);

        let difficulty = self.settings.difficulty;
        let mut games = Vec::with_capacity(names.len() / 2);

        for pair in names.chunks_exact(2) {
            let scores = match self.teams_pair_mut(&pair[0], &pair[1]) {
                Some((home, away)) => GameSimulator::quick_scores(home, away, difficulty, rng),
                None => continue,
            };

            self.apply_result(&pair[0], &pair[1], scores.0, scores.1);
            games.push(self.past_game(&pair[0], &pair[1], scores.0, scores.1));
        }

        games
    }

    fn apply_result(&mut self, home: &str, away: &str, home_score: u32, away_score: u32) {
        let home_won = home_score > away_score;

        if let Some((home_team, away_team)) = self.teams_pair_mut(home, away) {
            home_team.record_result(home_score, away_score, home_won);
            away_team.record_result(away_score, home_score, !home_won);
        }
    }

    fn past_game(&mut self, home: &str, away: &str, home_score: u32, away_score: u32) -> PastGame {
        PastGame {
            id: self.ids.next_id(),
            season: self.season,
            week: self.week,
            home: home.to_string(),
            away: away.to_string(),
            home_score,
            away_score,
        }
    }
}

fn apply_season_stats(team: &mut Team, lines: &[PlayerGameStats]) {
    for line in lines {
        if let Some(player) = team.player_mut(line.player_id) {
            player.season_stats.record_game(line);
        }
    }
}
