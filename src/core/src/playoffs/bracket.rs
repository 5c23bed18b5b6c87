use crate::club::Team;
use crate::error::{EngineError, EngineResult};
use crate::league::{ChampionRecord, League};
use crate::playoffs::TeamRanking;
use itertools::Itertools;
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub home: String,
    pub away: String,
    pub seed_home: usize,
    pub seed_away: usize,
}

/// First-round bracket. Seed `i` hosts seed `N - 1 - i`; with an odd field
/// the top seed sits out the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoffBracket {
    pub seeds: Vec<String>,
    pub matchups: Vec<Matchup>,
    pub byes: Vec<String>,
}

impl PlayoffBracket {
    pub fn from_seeds(seeds: Vec<String>) -> Self {
        let (byes, pairs) = pair_round(&seeds);

        let matchups = pairs
            .into_iter()
            .map(|(home, away)| Matchup {
                seed_home: seed_of(&seeds, &home),
                seed_away: seed_of(&seeds, &away),
                home,
                away,
            })
            .collect();

        PlayoffBracket { seeds, matchups, byes }
    }

    pub fn size(&self) -> usize {
        self.seeds.len()
    }
}

impl League {
    pub fn generate_playoff_bracket(&self) -> PlayoffBracket {
        let size = self.settings.playoff_size.min(self.team_count());
        let ranking = TeamRanking::new(self);

        let mut seeds: Vec<&Team> = if self.settings.playoff_by_conference {
            self.conference_seeds(&ranking, size)
        } else {
            ranking.sort(self.all_teams())
        };

        seeds.truncate(size);

        PlayoffBracket::from_seeds(seeds.iter().map(|t| t.name.clone()).collect())
    }

    /// Division winners lead each conference's allocation, the conference's
    /// best remaining teams fill it, and the overall ranking pads any shortfall.
    fn conference_seeds<'a>(&'a self, ranking: &TeamRanking, size: usize) -> Vec<&'a Team> {
        let conferences: Vec<&str> = self.all_teams().map(|t| t.conference.as_str()).unique().collect();
        let per_conference = (size / conferences.len().max(1)).max(1);

        let mut seeds: Vec<&Team> = Vec::with_capacity(size);

        for conference in conferences {
            let members: Vec<&Team> = self.all_teams().filter(|t| t.conference == conference).collect();

            let leaders: Vec<&Team> = members
                .iter()
                .map(|t| t.division.as_str())
                .unique()
                .filter_map(|division| {
                    ranking
                        .sort(members.iter().copied().filter(|t| t.division == division))
                        .first()
                        .copied()
                })
                .collect();

            let leaders = ranking.sort(leaders);

            seeds.extend(leaders.iter().take(per_conference));

            if seeds.len() < size {
                let fill = per_conference.saturating_sub(leaders.len());

                seeds.extend(
                    ranking
                        .sort(members.iter().copied())
                        .into_iter()
                        .filter(|t| !leaders.iter().any(|l| l.name == t.name))
                        .take(fill),
                );
            }
        }

        if seeds.len() < size {
            let missing = size - seeds.len();
            let padding: Vec<&Team> = ranking
                .sort(self.all_teams())
                .into_iter()
                .filter(|t| !seeds.iter().any(|s| s.name == t.name))
                .take(missing)
                .collect();

            seeds.extend(padding);
        }

        seeds
    }

    /// Plays the bracket out, each round as a best-of series, and records the champion.
    pub fn run_playoffs<R: Rng + ?Sized>(&mut self, rng: &mut R) -> EngineResult<String> {
        let bracket = self.generate_playoff_bracket();

        if bracket.size() < 2 {
            return Err(EngineError::NotEnoughTeams);
        }

        let wins_needed = self.settings.playoff_series_length.max(1).div_ceil(2);
        let mut entrants = bracket.seeds.clone();
        let mut round = 1;

        while entrants.len() > 1 {
            let (byes, pairs) = pair_round(&entrants);
            let mut advancing = byes;

            for (home, away) in pairs {
                let winner = self.play_series(&home, &away, wins_needed, rng)?;

                debug!("playoff round {}: {} vs {} -> {}", round, home, away, winner);

                advancing.push(winner);
            }

            entrants = advancing;
            round += 1;
        }

        let champion = entrants.pop().ok_or(EngineError::PlayoffSimulation)?;

        self.history.insert(
            0,
            ChampionRecord {
                season: self.season,
                champion: champion.clone(),
            },
        );

        info!("🏆 {} won the championship for season {}", champion, self.season);

        self.notify(format!("{} won the championship for season {}!", champion, self.season));

        Ok(champion)
    }

    /// Every series game is a full box-score game, so playoff lines count
    /// toward the players' season totals.
    fn play_series<R: Rng + ?Sized>(&mut self, home: &str, away: &str, wins_needed: u32, rng: &mut R) -> EngineResult<String> {
        let (mut home_wins, mut away_wins) = (0, 0);

        while home_wins < wins_needed && away_wins < wins_needed {
            let game = self.play_game(home, away, rng)?;

            if game.home_won() {
                home_wins += 1;
            } else {
                away_wins += 1;
            }
        }

        Ok(if home_wins > away_wins { home.to_string() } else { away.to_string() })
    }
}

/// Splits a seeded field into byes and pairings, best against worst.
fn pair_round(entrants: &[String]) -> (Vec<String>, Vec<(String, String)>) {
    let (byes, rest) = if entrants.len() % 2 == 1 {
        entrants.split_at(1)
    } else {
        entrants.split_at(0)
    };

    let pairs = (0..rest.len() / 2)
        .map(|i| (rest[i].clone(), rest[rest.len() - 1 - i].clone()))
        .collect();

    (byes.to_vec(), pairs)
}

fn seed_of(seeds: &[String], name: &str) -> usize {
    seeds.iter().position(|s| s == name).map(|idx| idx + 1).unwrap_or(0)
}
