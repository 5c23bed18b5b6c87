use database::{DatabaseGenerator, DatabaseLoader, JsonFileStore, NewLeagueOptions};
use gridiron_core::{FranchiseSession, LeagueStore, SeasonPhase};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn open_session(path: &std::path::Path, seed: u64) -> FranchiseSession<JsonFileStore, StdRng> {
    let data = DatabaseLoader::load().unwrap();

    FranchiseSession::open(JsonFileStore::new(path), StdRng::seed_from_u64(seed), |rng| {
        DatabaseGenerator::generate(&data, &NewLeagueOptions::default(), rng)
    })
    .unwrap()
}

#[test]
fn full_season_cycle_persists_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("league.json.gz");

    let mut session = open_session(&path, 42);

    for _ in 0..6 {
        session.advance_phase().unwrap();
    }

    let league = session.league();
    assert_eq!(league.phase, SeasonPhase::Offseason);
    assert_eq!(league.season, 2);
    assert_eq!(league.history.len(), 1);

    let stored = JsonFileStore::new(&path).load().unwrap().unwrap();
    assert_eq!(&stored, league);
}

#[test]
fn reopening_resumes_the_saved_league() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("league.json");

    let mut session = open_session(&path, 1);
    session.advance_phase().unwrap();
    let draft_board = session.league().draft.clone();
    drop(session);

    let resumed = open_session(&path, 2);

    assert_eq!(resumed.league().phase, SeasonPhase::Draft);
    assert_eq!(resumed.league().draft, draft_board);
}

#[test]
fn user_draft_flow_through_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(&dir.path().join("league.json"), 5);

    session.advance_phase().unwrap();
    session.begin_draft().unwrap();

    let league = session.league();
    let pick = league.current_pick().cloned().unwrap();
    assert_eq!(pick.owner, league.user_team.name);

    let prospect_id = league.prospects[0].id;
    let player_id = session.make_user_pick(pick.id, prospect_id).unwrap();

    assert!(session.league().user_team.has_player(player_id));
    assert_ne!(session.league().current_pick().map(|p| p.id), Some(pick.id));
}
