use std::fmt;

use crate::constants::{ENEMY_FADE_SECONDS, PLAYER_HP_FLOOR, RESULT_REVEAL_SECONDS};

/// Player hit points as seen by the battle engine.
///
/// The engine clamps `hp` to `[PLAYER_HP_FLOOR, max_hp]`; defeat is
/// detected at the floor, so an hp of 0 never leaves the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerVitals {
    pub hp: u32,
    pub max_hp: u32,
}

impl PlayerVitals {
    pub fn new(hp: u32, max_hp: u32) -> Self {
        let max_hp = max_hp.max(PLAYER_HP_FLOOR);
        Self {
            hp: hp.clamp(PLAYER_HP_FLOOR, max_hp),
            max_hp,
        }
    }

    pub fn at_floor(&self) -> bool {
        self.hp == PLAYER_HP_FLOOR
    }

    pub fn hp_ratio(&self) -> f64 {
        self.hp as f64 / self.max_hp as f64
    }
}

/// How one battle session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Victory,
    Defeat,
}

/// How a defeated enemy's replacement is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnPolicy {
    /// Draw the next enemy uniformly from the location pool.
    FreshDraw,
    /// Respawn the fallen enemy's own template at full HP.
    SameTemplate,
}

/// Configuration error reported by `BattleSession::start`.
///
/// These are caller contract violations surfaced loudly; the engine
/// never silently substitutes an empty session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    EmptyEnemyPool,
    EmptyQuizPool,
    ZeroQuota,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::EmptyEnemyPool => write!(f, "encounter has no enemies to fight"),
            SessionError::EmptyQuizPool => write!(f, "encounter has no quiz questions"),
            SessionError::ZeroQuota => write!(f, "enemy quota must be at least 1"),
        }
    }
}

impl std::error::Error for SessionError {}

/// What a single `submit_answer` call resolved to.
///
/// Terminal variants mean the session is over; the host should wait the
/// advance delay, then collect the completion exactly once via
/// `take_completion`. Non-terminal variants leave the answer lock held
/// until `advance_turn` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Dropped without any state change: the session was terminated,
    /// locked, or between questions. Expected under UI races.
    Ignored,
    /// Correct answer; the enemy survived the hit.
    EnemyHit { damage: u32 },
    /// Correct answer; the enemy fell but the quota is not yet met.
    EnemyDefeated { damage: u32 },
    /// Correct answer; the quota is met. Terminal.
    Victory { damage: u32 },
    /// Wrong answer; the player survived the hit.
    PlayerHit { damage: u32 },
    /// Wrong answer; the player's HP reached the floor. Terminal.
    Defeat { damage: u32 },
}

impl TurnResult {
    pub fn is_ignored(&self) -> bool {
        matches!(self, TurnResult::Ignored)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnResult::Victory { .. } | TurnResult::Defeat { .. })
    }

    /// Seconds the host should hold the result on screen before calling
    /// `advance_turn` (or, for terminal results, collecting the
    /// completion). The engine itself never sleeps.
    pub fn advance_delay_seconds(&self) -> f64 {
        match self {
            TurnResult::Ignored => 0.0,
            TurnResult::EnemyDefeated { .. } => RESULT_REVEAL_SECONDS + ENEMY_FADE_SECONDS,
            _ => RESULT_REVEAL_SECONDS,
        }
    }
}

/// One-time completion report, delivered at most once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleSummary {
    pub outcome: SessionOutcome,
    pub enemies_defeated: u32,
    pub turns_taken: u32,
    pub final_vitals: PlayerVitals,
}
