pub mod club;
pub mod draft;
pub mod error;
pub mod finance;
pub mod league;
pub mod r#match;
pub mod playoffs;
pub mod season;
pub mod session;
pub mod transfers;
pub mod utils;

pub use error::{EngineError, EngineResult};

// Re-export club items
pub use club::{
    // Player exports
    Player, PlayerBuilder, PlayerAttributes, PlayerTraits, PlayerGenerator, PeopleNameGeneratorData,
    Position, Contract, Injury, InjuryRisk, InjurySeverity, SeasonStats,
    // Team exports
    Team, TeamRecord, Persona, PersonaStyle,
};

pub use draft::{
    DraftPick, DraftState, Prospect, ProspectArchetype, ProspectSelector, ScoutReport, ScoutingEvent,
    ScoutingSource,
};
pub use finance::CapProjection;
pub use league::{
    ChampionRecord, IdSequence, InjuryReport, League, LeagueSettings, Notification, Notifications, PlayerLocation,
    SettingsPatch, StatCategory, StatLeader, StatScope,
};
pub use r#match::{Boxscore, GameResult, GameSimulator, PastGame, PlayerGameStats, TopPerformer, WeekSummary};
pub use playoffs::{Matchup, PlayoffBracket, TeamRanking};
pub use season::SeasonPhase;
pub use session::{FranchiseSession, LeagueStore, MemoryStore, SessionError, SessionResult};
pub use transfers::{PlayerValuation, TradeDecision, TradeRecord};
pub use utils::*;
