use crate::club::{PeopleNameGeneratorData, Player, PlayerGenerator, Team};
use crate::draft::{DraftState, Prospect};
use crate::league::{ChampionRecord, IdSequence, LeagueSettings, Notification, Notifications, SettingsPatch};
use crate::r#match::{Boxscore, PastGame};
use crate::season::SeasonPhase;
use crate::transfers::TradeRecord;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Root aggregate. The user team lives apart from the AI teams; code that
/// needs every team walks the AI list first and the user team last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub name: String,
    pub teams: Vec<Team>,
    pub user_team: Team,
    pub free_agents: Vec<Player>,
    pub prospects: Vec<Prospect>,
    pub draft: Option<DraftState>,
    pub recent_boxscores: Vec<Boxscore>,
    pub past_games: Vec<PastGame>,
    pub trade_history: Vec<TradeRecord>,
    pub notifications: Notifications,
    pub history: Vec<ChampionRecord>,
    pub settings: LeagueSettings,
    pub week: u32,
    pub season: u32,
    pub phase: SeasonPhase,
    pub dead_money: i64,
    pub scouting_points: u32,
    #[serde(default)]
    pub generator_data: PeopleNameGeneratorData,
    #[serde(default)]
    pub ids: IdSequence,
}

impl League {
    pub fn new(name: impl Into<String>, mut user_team: Team, teams: Vec<Team>, settings: LeagueSettings) -> Self {
        user_team.is_user = true;

        let scouting_points = settings.scouting_points_per_season;

        League {
            name: name.into(),
            teams,
            user_team,
            free_agents: Vec::new(),
            prospects: Vec::new(),
            draft: None,
            recent_boxscores: Vec::new(),
            past_games: Vec::new(),
            trade_history: Vec::new(),
            notifications: Notifications::default(),
            history: Vec::new(),
            settings,
            week: 1,
            season: 1,
            phase: SeasonPhase::Offseason,
            dead_money: 0,
            scouting_points,
            generator_data: PeopleNameGeneratorData::default(),
            ids: IdSequence::default(),
        }
    }

    pub fn user_team_name(&self) -> &str {
        &self.user_team.name
    }

    pub fn is_user_team(&self, name: &str) -> bool {
        self.user_team.name == name
    }

    pub fn team_count(&self) -> usize {
        self.teams.len() + 1
    }

    /// AI teams in league order, then the user team.
    pub fn all_teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter().chain(std::iter::once(&self.user_team))
    }

    pub fn all_teams_mut(&mut self) -> impl Iterator<Item = &mut Team> {
        self.teams.iter_mut().chain(std::iter::once(&mut self.user_team))
    }

    pub fn team_names(&self) -> Vec<String> {
        self.all_teams().map(|t| t.name.clone()).collect()
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.all_teams().find(|t| t.name == name)
    }

    pub fn team_mut(&mut self, name: &str) -> Option<&mut Team> {
        self.all_teams_mut().find(|t| t.name == name)
    }

    /// Two distinct teams borrowed mutably at once.
    pub fn teams_pair_mut(&mut self, first: &str, second: &str) -> Option<(&mut Team, &mut Team)> {
        if first == second {
            return None;
        }

        let first_is_user = self.user_team.name == first;
        let second_is_user = self.user_team.name == second;

        if first_is_user {
            let idx = self.teams.iter().position(|t| t.name == second)?;
            return Some((&mut self.user_team, &mut self.teams[idx]));
        }

        if second_is_user {
            let idx = self.teams.iter().position(|t| t.name == first)?;
            return Some((&mut self.teams[idx], &mut self.user_team));
        }

        let a = self.teams.iter().position(|t| t.name == first)?;
        let b = self.teams.iter().position(|t| t.name == second)?;

        if a < b {
            let (left, right) = self.teams.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.teams.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }

    /// Rostered player anywhere in the league.
    pub fn rostered_player_mut(&mut self, player_id: u32) -> Option<&mut Player> {
        self.all_teams_mut()
            .flat_map(|t| t.roster.iter_mut())
            .find(|p| p.id == player_id)
    }

    pub fn notify(&mut self, text: impl Into<String>) {
        let notification = Notification {
            id: self.ids.next_id(),
            text: text.into(),
            season: self.season,
            week: self.week,
            read: false,
        };

        debug!("notification: {}", notification.text);

        self.notifications.push(notification);
    }

    pub fn mark_all_notifications_read(&mut self) {
        self.notifications.mark_all_read();
    }

    pub fn update_settings(&mut self, patch: &SettingsPatch) {
        self.settings.apply(patch);
    }

    pub fn player_generator(&self) -> PlayerGenerator {
        PlayerGenerator::with_people_names(&self.generator_data)
    }

    /// Tops the free-agent pool up to `min_count` skill players.
    pub fn ensure_free_agents<R: Rng + ?Sized>(&mut self, min_count: usize, rng: &mut R) {
        let generator = self.player_generator();
        let mut added = 0;

        while self.free_agents.len() < min_count {
            let player = generator.free_agent(&mut self.ids, rng);
            self.free_agents.push(player);
            added += 1;
        }

        if added > 0 {
            debug!("free agent pool topped up with {} players", added);
        }
    }

    /// Adds `count` draft-class prospects to the pool and returns their ids.
    pub fn generate_prospects<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<u32> {
        let generator = self.player_generator();

        let class: Vec<Prospect> = (0..count)
            .map(|_| generator.draft_class_prospect(&mut self.ids, rng))
            .collect();

        let ids = class.iter().map(|p| p.id).collect();
        self.prospects.extend(class);

        debug!("generated a draft class of {} prospects", count);

        ids
    }

    /// Tops the prospect pool up to `min_count` with a fresh draft class.
    pub fn ensure_prospects<R: Rng + ?Sized>(&mut self, min_count: usize, rng: &mut R) {
        let missing = min_count.saturating_sub(self.prospects.len());

        if missing > 0 {
            self.generate_prospects(missing, rng);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::club::{Persona, Position};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Small deterministic league used across module tests: three AI teams
    /// plus the user team, eight players each (one per position, 70 overall).
    pub(crate) fn test_league() -> League {
        let names = ["Ravens", "Tigers", "Warriors", "Panthers"];
        let mut ids = IdSequence::default();

        let mut teams: Vec<Team> = names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let mut team = Team::new(*name, "#444", Persona::balanced());
                team.conference = if idx % 2 == 0 { "East".into() } else { "West".into() };
                team.division = format!("Division {}", idx / 2 + 1);
                team.balance = 100_000;

                for position in Position::ALL {
                    let id = ids.next_id();
                    team.add_player(
                        Player::builder(id, format!("{} {}", name, position), position)
                            .overall(70)
                            .age(26)
                            .build(),
                    );
                }

                team
            })
            .collect();

        let user = teams.remove(0);

        let mut league = League::new("Test League", user, teams, LeagueSettings::for_teams(4, 10));
        league.ids = ids;
        league
    }

    #[test]
    fn test_all_teams_ends_with_user() {
        let league = test_league();

        let names = league.team_names();
        assert_eq!(names, vec!["Tigers", "Warriors", "Panthers", "Ravens"]);
        assert!(league.user_team.is_user);
        assert_eq!(league.team_count(), 4);
    }

    #[test]
    fn test_teams_pair_mut_resolves_user_and_ai() {
        let mut league = test_league();

        let (a, b) = league.teams_pair_mut("Ravens", "Panthers").expect("pair");
        assert_eq!(a.name, "Ravens");
        assert_eq!(b.name, "Panthers");

        let (a, b) = league.teams_pair_mut("Warriors", "Tigers").expect("pair");
        assert_eq!(a.name, "Warriors");
        assert_eq!(b.name, "Tigers");

        assert!(league.teams_pair_mut("Tigers", "Tigers").is_none());
        assert!(league.teams_pair_mut("Tigers", "Nobody").is_none());
    }

    #[test]
    fn test_ensure_free_agents_tops_up() {
        let mut league = test_league();
        let mut rng = StdRng::seed_from_u64(4);

        league.ensure_free_agents(8, &mut rng);
        assert_eq!(league.free_agents.len(), 8);

        league.ensure_free_agents(2, &mut rng);
        assert_eq!(league.free_agents.len(), 8);
    }

    #[test]
    fn test_generate_prospects_appends_a_draft_class() {
        let mut league = test_league();
        let mut rng = StdRng::seed_from_u64(11);

        let ids = league.generate_prospects(6, &mut rng);

        assert_eq!(ids.len(), 6);
        assert_eq!(league.prospects.len(), 6);
        assert!(ids.iter().all(|id| league.prospects.iter().any(|p| p.id == *id)));

        league.ensure_prospects(4, &mut rng);
        assert_eq!(league.prospects.len(), 6);

        league.ensure_prospects(9, &mut rng);
        assert_eq!(league.prospects.len(), 9);
    }

    #[test]
    fn test_notify_stamps_season_and_week() {
        let mut league = test_league();
        league.week = 4;

        league.notify("hello");

        let latest = league.notifications.latest().expect("notification");
        assert_eq!(latest.text, "hello");
        assert_eq!(latest.week, 4);
        assert!(!latest.read);
    }
}
