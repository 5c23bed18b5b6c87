use color_eyre::eyre::{Result, WrapErr};
use database::{DatabaseGenerator, DatabaseLoader, JsonFileStore, NewLeagueOptions};
use env_logger::Env;
use gridiron_core::FranchiseSession;
use gridiron_core::utils::TimeEstimation;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;

const DEFAULT_SAVE_PATH: &str = "league.json.gz";
const DEFAULT_PHASES: usize = 6;

fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let save_path = env::var("GRIDIRON_SAVE").unwrap_or_else(|_| String::from(DEFAULT_SAVE_PATH));

    let phases = env::var("GRIDIRON_PHASES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_PHASES);

    let rng = match env::var("GRIDIRON_SEED").ok().and_then(|v| v.parse::<u64>().ok()) {
        Some(seed) => {
            info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database.wrap_err("bundled league data is malformed")?;

    info!("database loaded: {} ms", estimated);

    let mut session = FranchiseSession::open(JsonFileStore::new(&save_path), rng, |rng| {
        DatabaseGenerator::generate(&database, &NewLeagueOptions::default(), rng)
    })
    .wrap_err_with(|| format!("failed to open league at {}", save_path))?;

    for _ in 0..phases {
        let (phase, estimated) = TimeEstimation::estimate(|| session.advance_phase());
        let phase = phase.wrap_err("phase transition failed")?;

        info!("entered {}: {} ms", phase, estimated);
    }

    let league = session.league();
    let user = &league.user_team;

    info!(
        "{}: season {}, {} {}-{}, balance ${}",
        league.name, league.season, user.name, user.record.wins, user.record.losses, user.balance
    );

    if let Some(record) = league.history.first() {
        info!("last champion: {} (season {})", record.champion, record.season);
    }

    Ok(())
}
