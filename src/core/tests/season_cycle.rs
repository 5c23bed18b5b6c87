use gridiron_core::league::{IdSequence, NOTIFICATIONS_LIMIT};
use gridiron_core::r#match::RECENT_BOXSCORES_LIMIT;
use gridiron_core::{
    FranchiseSession, League, LeagueSettings, MemoryStore, PeopleNameGeneratorData, Persona, PlayerGenerator,
    Position, SeasonPhase, Team,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn build_league(rng: &mut StdRng) -> League {
    let generator = PlayerGenerator::with_people_names(&PeopleNameGeneratorData::default());
    let mut ids = IdSequence::default();

    let mut teams: Vec<Team> = ["Ravens", "Tigers", "Warriors", "Panthers", "Bulls", "Hawks"]
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let persona = if idx == 0 { Persona::balanced() } else { Persona::random(rng) };
            let mut team = Team::new(*name, "#444", persona);
            team.conference = if idx % 2 == 0 { "East".into() } else { "West".into() };
            team.division = format!("Division {}", idx / 2 + 1);
            team.balance = 100_000;

            for slot in 0..12 {
                let position = Position::ALL[slot % Position::ALL.len()];
                team.add_player(generator.roster_player(&mut ids, rng, position));
            }

            team
        })
        .collect();

    let user = teams.remove(0);
    let mut league = League::new("Integration", user, teams, LeagueSettings::for_teams(6, 8));
    league.ids = ids;
    league
}

fn all_player_ids(league: &League) -> Vec<u32> {
    league
        .all_teams()
        .flat_map(|t| t.roster.iter().map(|p| p.id))
        .chain(league.free_agents.iter().map(|p| p.id))
        .chain(league.prospects.iter().map(|p| p.id))
        .collect()
}

#[test]
fn two_seasons_keep_league_invariants() {
    let mut rng = StdRng::seed_from_u64(77);
    let league = build_league(&mut rng);

    let mut session = FranchiseSession::new(MemoryStore::default(), league, rng);

    for _ in 0..12 {
        session.advance_phase().unwrap();

        let league = session.league();

        let mut ids = all_player_ids(league);
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "a player is in two places at once");

        assert!(league.notifications.len() <= NOTIFICATIONS_LIMIT);
        assert!(league.recent_boxscores.len() <= RECENT_BOXSCORES_LIMIT);
    }

    let league = session.league();
    assert_eq!(league.season, 3);
    assert_eq!(league.phase, SeasonPhase::Offseason);
    assert_eq!(league.history.len(), 2);
    assert_eq!(league.history[0].season, 2);
    assert_eq!(session.store().saves, 12);
}

#[test]
fn same_seed_same_season() {
    let play = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut league = build_league(&mut rng);

        for _ in 0..6 {
            league.advance_phase(&mut rng).unwrap();
        }

        league
    };

    assert_eq!(play(13), play(13));
}
