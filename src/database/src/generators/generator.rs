use crate::loaders::DatabaseEntity;
use gridiron_core::league::{IdSequence, League, LeagueSettings, MAX_TEAMS, MIN_TEAMS};
use gridiron_core::{PeopleNameGeneratorData, Persona, PlayerGenerator, Position, Team};
use log::debug;
use rand::Rng;

const ROSTER_SIZE: usize = 12;
const STARTERS: usize = 4;
const DEFAULT_TEAM_COUNT: usize = 8;
const DEFAULT_SEASON_LENGTH: u32 = 10;

/// What the user picks on the setup screen.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLeagueOptions {
    pub league_name: Option<String>,
    pub num_teams: usize,
    pub season_length: u32,
    /// Names for the first teams; the bundled list fills the rest.
    pub team_names: Vec<String>,
}

impl Default for NewLeagueOptions {
    fn default() -> Self {
        NewLeagueOptions {
            league_name: None,
            num_teams: DEFAULT_TEAM_COUNT,
            season_length: DEFAULT_SEASON_LENGTH,
            team_names: Vec::new(),
        }
    }
}

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds a fresh league in the offseason of season 1. The first team is
    /// the user's.
    pub fn generate<R: Rng + ?Sized>(data: &DatabaseEntity, options: &NewLeagueOptions, rng: &mut R) -> League {
        let team_count = options.num_teams.clamp(MIN_TEAMS, MAX_TEAMS);
        let settings = LeagueSettings::for_teams(team_count, options.season_length);

        let people_names = PeopleNameGeneratorData::new(data.first_names.clone(), data.last_names.clone());
        let player_generator = PlayerGenerator::with_people_names(&people_names);

        let mut ids = IdSequence::default();

        let mut teams: Vec<Team> = Self::team_names(data, options, team_count)
            .into_iter()
            .enumerate()
            .map(|(idx, name)| {
                let mut team = Self::generate_team(data, idx, name, rng);
                team.balance = settings.starting_balance;

                for slot in 0..ROSTER_SIZE {
                    let position = Position::ALL[slot % Position::ALL.len()];
                    let mut player = player_generator.roster_player(&mut ids, rng, position);
                    player.starter = slot < STARTERS;
                    team.add_player(player);
                }

                team
            })
            .collect();

        let user_team = teams.remove(0);

        let free_agent_count = (8.0f64).max((team_count as f64 * 1.2).round()) as usize;
        let free_agents = (0..free_agent_count)
            .map(|_| player_generator.free_agent(&mut ids, rng))
            .collect();

        let prospect_count = (10.0f64).max((team_count as f64 * 1.5).round()) as usize;
        let prospects = (0..prospect_count)
            .map(|_| player_generator.founding_prospect(&mut ids, rng))
            .collect();

        let name = options.league_name.clone().unwrap_or_else(|| data.league_name.clone());

        let mut league = League::new(name, user_team, teams, settings);
        league.free_agents = free_agents;
        league.prospects = prospects;
        league.generator_data = people_names;
        league.ids = ids;

        debug!(
            "generated league {}: {} teams, {} free agents, {} prospects",
            league.name,
            league.team_count(),
            league.free_agents.len(),
            league.prospects.len()
        );

        league
    }

    fn generate_team<R: Rng + ?Sized>(data: &DatabaseEntity, idx: usize, name: String, rng: &mut R) -> Team {
        let color = data
            .team_colors
            .get(idx % data.team_colors.len().max(1))
            .cloned()
            .unwrap_or_else(|| "#444".to_string());

        let persona = if idx == 0 { Persona::balanced() } else { Persona::random(rng) };

        let mut team = Team::new(name, color, persona);

        let conferences = data.conferences.len().max(1);
        team.conference = data
            .conferences
            .get(idx % conferences)
            .cloned()
            .unwrap_or_default();
        team.division = format!("Division {}", idx / conferences + 1);

        team
    }

    /// Requested names first, then unused bundled names, then numbered teams.
    fn team_names(data: &DatabaseEntity, options: &NewLeagueOptions, team_count: usize) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(team_count);

        let candidates = options
            .team_names
            .iter()
            .map(|n| n.trim().to_string())
            .chain(data.team_names.iter().cloned());

        for name in candidates {
            if names.len() == team_count {
                break;
            }

            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }

        let mut suffix = 1;
        while names.len() < team_count {
            let name = format!("Team {}", suffix);
            if !names.contains(&name) {
                names.push(name);
            }
            suffix += 1;
        }

        names
    }
}
