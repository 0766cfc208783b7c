pub mod session;
pub mod types;

pub use session::BattleSession;
pub use types::{
    BattleSummary, PlayerVitals, RespawnPolicy, SessionError, SessionOutcome, TurnResult,
};
