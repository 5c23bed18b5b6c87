use crate::club::{Player, Position, SeasonStats};
use crate::draft::Prospect;
use crate::league::League;
use crate::r#match::PlayerGameStats;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where a player id currently lives. Membership is exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerLocation<'a> {
    Rostered { team: &'a str, player: &'a Player },
    FreeAgent(&'a Player),
    Prospect(&'a Prospect),
}

impl PlayerLocation<'_> {
    pub fn name(&self) -> &str {
        match self {
            PlayerLocation::Rostered { player, .. } | PlayerLocation::FreeAgent(player) => &player.name,
            PlayerLocation::Prospect(prospect) => &prospect.name,
        }
    }

    pub fn affiliation(&self) -> &str {
        match self {
            PlayerLocation::Rostered { team, .. } => team,
            PlayerLocation::FreeAgent(_) => "Free Agent",
            PlayerLocation::Prospect(_) => "Prospect",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatCategory {
    PassingYards,
    RushingYards,
    ReceivingYards,
    Tackles,
    Sacks,
}

impl StatCategory {
    fn from_season(&self, stats: &SeasonStats) -> u32 {
        match self {
            StatCategory::PassingYards => stats.pass_yards,
            StatCategory::RushingYards => stats.rush_yards,
            StatCategory::ReceivingYards => stats.receiving_yards,
            StatCategory::Tackles => stats.tackles,
            StatCategory::Sacks => stats.sacks,
        }
    }

    fn from_game(&self, line: &PlayerGameStats) -> u32 {
        match self {
            StatCategory::PassingYards => line.passing.map(|p| p.yards).unwrap_or(0),
            StatCategory::RushingYards => line.rushing.map(|r| r.yards).unwrap_or(0),
            StatCategory::ReceivingYards => line.receiving.map(|r| r.yards).unwrap_or(0),
            StatCategory::Tackles => line.defense.map(|d| d.tackles).unwrap_or(0),
            StatCategory::Sacks => line.defense.map(|d| d.sacks).unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatScope {
    Season,
    /// The newest `n` stored boxscores.
    RecentGames(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLeader {
    pub player_id: u32,
    pub name: String,
    pub position: Position,
    pub team: String,
    pub value: u32,
}

impl League {
    pub fn player_by_id(&self, player_id: u32) -> Option<PlayerLocation<'_>> {
        for team in self.all_teams() {
            if let Some(player) = team.player(player_id) {
                return Some(PlayerLocation::Rostered {
                    team: &team.name,
                    player,
                });
            }
        }

        if let Some(player) = self.free_agents.iter().find(|p| p.id == player_id) {
            return Some(PlayerLocation::FreeAgent(player));
        }

        self.prospects
            .iter()
            .find(|p| p.id == player_id)
            .map(PlayerLocation::Prospect)
    }

    /// Top `limit` players in a category. Players with nothing recorded are left out.
    pub fn stat_leaders(&self, category: StatCategory, scope: StatScope, limit: usize) -> Vec<StatLeader> {
        let leaders: Vec<StatLeader> = match scope {
            StatScope::Season => self
                .all_teams()
                .flat_map(|team| {
                    team.roster.iter().map(move |player| StatLeader {
                        player_id: player.id,
                        name: player.name.clone(),
                        position: player.position,
                        team: team.name.clone(),
                        value: category.from_season(&player.season_stats),
                    })
                })
                .collect(),
            StatScope::RecentGames(games) => {
                let mut totals: HashMap<u32, StatLeader> = HashMap::new();

                for boxscore in self.recent_boxscores.iter().take(games) {
                    let sides = [
                        (&boxscore.game.home, &boxscore.game.home_stats),
                        (&boxscore.game.away, &boxscore.game.away_stats),
                    ];

                    for (team, lines) in sides {
                        for line in lines {
                            totals
                                .entry(line.player_id)
                                .or_insert_with(|| StatLeader {
                                    player_id: line.player_id,
                                    name: line.name.clone(),
                                    position: line.position,
                                    team: team.clone(),
                                    value: 0,
                                })
                                .value += category.from_game(line);
                        }
                    }
                }

                totals.into_values().collect()
            }
        };

        leaders
            .into_iter()
            .filter(|leader| leader.value > 0)
            .sorted_by(|a, b| b.value.cmp(&a.value).then_with(|| a.player_id.cmp(&b.player_id)))
            .take(limit)
            .collect()
    }
}
