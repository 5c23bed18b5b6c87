use thiserror::Error;

/// Business failures reported by league operations.
///
/// None of these are fatal: an operation returning one of them has left the
/// league exactly as it found it (apart from a notification where noted).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(u32),

    #[error("Prospect not found: {0}")]
    ProspectNotFound(u32),

    #[error("Pick not found: {0}")]
    PickNotFound(u32),

    #[error("Pick already used")]
    PickAlreadyUsed,

    #[error("Draft not started")]
    DraftNotStarted,

    #[error("Draft already started")]
    DraftAlreadyStarted,

    #[error("No draft board")]
    NoDraftBoard,

    #[error("Not on the clock: pick {0} is not the current pick")]
    NotOnTheClock(u32),

    #[error("Offer declined by AI")]
    PickTradeDeclined,

    #[error("Trade declined by {team} (net {diff})")]
    TradeDeclined { team: String, diff: i64 },

    #[error("Insufficient funds: need {required}, balance {balance}")]
    InsufficientFunds { required: i64, balance: i64 },

    #[error("Not enough scouting points: need {required}, have {available}")]
    NotEnoughScoutingPoints { required: u32, available: u32 },

    #[error("No remaining years")]
    NoRemainingContractYears,

    #[error("Invalid contract: {0}")]
    InvalidContract(String),

    #[error("Not enough teams")]
    NotEnoughTeams,

    #[error("Playoff simulation error")]
    PlayoffSimulation,

    #[error("Season complete")]
    SeasonComplete,

    #[error("Cannot trade with the same team: {0}")]
    SameTeam(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
