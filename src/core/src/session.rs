use crate::draft::ScoutingEvent;
use crate::error::{EngineError, EngineResult};
use crate::league::League;
use crate::r#match::WeekSummary;
use crate::season::SeasonPhase;
use crate::transfers::TradeDecision;
use log::{debug, info};
use rand::Rng;
use thiserror::Error;

/// Persistence boundary. The engine never touches storage itself; a
/// session loads a league through a store and saves it back after every
/// operation.
pub trait LeagueStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load(&self) -> Result<Option<League>, Self::Error>;

    fn save(&mut self, league: &League) -> Result<(), Self::Error>;
}

#[derive(Error, Debug)]
pub enum SessionError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("league store failed: {0}")]
    Store(#[source] E),
}

/// In-memory store, handy for tests and throwaway leagues.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<League>,
    pub saves: usize,
}

impl MemoryStore {
    pub fn with_league(league: League) -> Self {
        MemoryStore {
            snapshot: Some(league),
            saves: 0,
        }
    }

    pub fn snapshot(&self) -> Option<&League> {
        self.snapshot.as_ref()
    }
}

impl LeagueStore for MemoryStore {
    type Error = std::convert::Infallible;

    fn load(&self) -> Result<Option<League>, Self::Error> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, league: &League) -> Result<(), Self::Error> {
        self.snapshot = Some(league.clone());
        self.saves += 1;
        Ok(())
    }
}

/// A league being played: the snapshot, the store it came from and the
/// random source every simulation draws from.
pub struct FranchiseSession<S: LeagueStore, R: Rng> {
    store: S,
    league: League,
    rng: R,
}

pub type SessionResult<T, S> = Result<T, SessionError<<S as LeagueStore>::Error>>;

impl<S: LeagueStore, R: Rng> FranchiseSession<S, R> {
    pub fn new(store: S, league: League, rng: R) -> Self {
        FranchiseSession { store, league, rng }
    }

    /// Loads the stored league, or builds one with `create` and saves it.
    pub fn open<F>(mut store: S, mut rng: R, create: F) -> SessionResult<Self, S>
    where
        F: FnOnce(&mut R) -> League,
    {
        let league = match store.load().map_err(SessionError::Store)? {
            Some(league) => {
                info!("loaded league {} (season {}, {})", league.name, league.season, league.phase);
                league
            }
            None => {
                let league = create(&mut rng);
                store.save(&league).map_err(SessionError::Store)?;
                info!("created league {} with {} teams", league.name, league.team_count());
                league
            }
        };

        Ok(FranchiseSession { store, league, rng })
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, League, R) {
        (self.store, self.league, self.rng)
    }

    /// Runs one engine operation and persists the league afterwards. The
    /// league is saved even when the operation fails, so notifications about
    /// the failure survive.
    pub fn apply<T, F>(&mut self, operation: F) -> SessionResult<T, S>
    where
        F: FnOnce(&mut League, &mut R) -> EngineResult<T>,
    {
        let result = operation(&mut self.league, &mut self.rng);

        self.save()?;

        if let Err(e) = &result {
            debug!("operation rejected: {}", e);
        }

        Ok(result?)
    }

    pub fn save(&mut self) -> SessionResult<(), S> {
        self.store.save(&self.league).map_err(SessionError::Store)
    }

    pub fn advance_phase(&mut self) -> SessionResult<SeasonPhase, S> {
        self.apply(|league, rng| league.advance_phase(rng))
    }

    pub fn simulate_week(&mut self) -> SessionResult<WeekSummary, S> {
        self.apply(|league, rng| league.simulate_week(rng))
    }

    pub fn propose_trade(
        &mut self,
        receiving_team: &str,
        offered_player: u32,
        requested_player: u32,
    ) -> SessionResult<TradeDecision, S> {
        self.apply(|league, _| {
            let user = league.user_team_name().to_string();
            league.propose_trade(&user, receiving_team, offered_player, requested_player)
        })
    }

    pub fn sign_free_agent(&mut self, player_id: u32) -> SessionResult<i64, S> {
        self.apply(|league, _| league.sign_free_agent(player_id))
    }

    pub fn scout_prospect(&mut self, prospect_id: u32, points: u32) -> SessionResult<ScoutingEvent, S> {
        self.apply(|league, _| league.scout_prospect(prospect_id, points))
    }

    pub fn begin_draft(&mut self) -> SessionResult<usize, S> {
        self.apply(|league, _| league.begin_draft())
    }

    pub fn make_user_pick(&mut self, pick_id: u32, prospect_id: u32) -> SessionResult<u32, S> {
        self.apply(|league, _| league.make_user_pick(pick_id, prospect_id))
    }

    pub fn run_playoffs(&mut self) -> SessionResult<String, S> {
        self.apply(|league, rng| league.run_playoffs(rng))
    }
}
