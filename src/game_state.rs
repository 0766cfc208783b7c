use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::battle::PlayerVitals;
use crate::constants::*;

/// Persisted player progression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub save_id: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub exp: u64,
    pub exp_to_next: u64,
    pub attack: u32,
    pub defense: u32,
    pub gold: u64,
    pub battle_in_progress: bool,
    pub current_location: String,
    pub last_save_time: i64,
    #[serde(default)]
    pub play_time_seconds: u64,
}

/// Merge-style partial update: only the present fields are applied.
#[derive(Debug, Clone, Default)]
pub struct GameStateUpdate {
    pub hp: Option<u32>,
    pub mp: Option<u32>,
    pub exp_gained: Option<u64>,
    pub gold_gained: Option<u64>,
    pub battle_in_progress: Option<bool>,
    pub current_location: Option<String>,
}

impl GameState {
    /// A fresh level-1 character at the starting village.
    pub fn new(current_time: i64) -> Self {
        Self {
            save_id: Uuid::new_v4().to_string(),
            level: 1,
            hp: STARTING_MAX_HP,
            max_hp: STARTING_MAX_HP,
            mp: STARTING_MAX_MP,
            max_mp: STARTING_MAX_MP,
            exp: 0,
            exp_to_next: XP_CURVE_BASE as u64,
            attack: STARTING_ATTACK,
            defense: STARTING_DEFENSE,
            gold: STARTING_GOLD,
            battle_in_progress: false,
            current_location: "village".to_string(),
            last_save_time: current_time,
            play_time_seconds: 0,
        }
    }

    /// The subset of state the battle engine operates on.
    pub fn vitals(&self) -> PlayerVitals {
        PlayerVitals::new(self.hp, self.max_hp)
    }

    /// Writes battle-final vitals back. Only called after a session has
    /// ended; mid-session the engine owns the working copy.
    pub fn apply_vitals(&mut self, vitals: PlayerVitals) {
        self.hp = vitals.hp.min(self.max_hp).max(PLAYER_HP_FLOOR);
    }

    /// Applies a partial update; absent fields are left untouched.
    pub fn merge(&mut self, update: GameStateUpdate) {
        if let Some(hp) = update.hp {
            self.hp = hp.min(self.max_hp);
        }
        if let Some(mp) = update.mp {
            self.mp = mp.min(self.max_mp);
        }
        if let Some(exp) = update.exp_gained {
            self.grant_exp(exp);
        }
        if let Some(gold) = update.gold_gained {
            self.gold = self.gold.saturating_add(gold);
        }
        if let Some(flag) = update.battle_in_progress {
            self.battle_in_progress = flag;
        }
        if let Some(location) = update.current_location {
            self.current_location = location;
        }
    }

    /// Grants experience, resolving any level-ups.
    pub fn grant_exp(&mut self, amount: u64) {
        self.exp = self.exp.saturating_add(amount);
        while self.exp >= self.exp_to_next {
            self.exp -= self.exp_to_next;
            self.level_up();
        }
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.max_hp += LEVEL_UP_MAX_HP_GAIN;
        self.max_mp += LEVEL_UP_MAX_MP_GAIN;
        self.attack += LEVEL_UP_ATTACK_GAIN;
        self.defense += LEVEL_UP_DEFENSE_GAIN;
        // Level-ups restore the player
        self.hp = self.max_hp;
        self.mp = self.max_mp;
        self.exp_to_next = exp_for_level(self.level);
    }

    /// Full rest (safe locations).
    pub fn rest(&mut self) {
        self.hp = self.max_hp;
        self.mp = self.max_mp;
    }
}

/// XP required to advance from `level` to the next one.
pub fn exp_for_level(level: u32) -> u64 {
    (XP_CURVE_BASE * (level as f64).powf(XP_CURVE_EXPONENT)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state_defaults() {
        let state = GameState::new(1234567890);
        assert_eq!(state.level, 1);
        assert_eq!(state.hp, STARTING_MAX_HP);
        assert_eq!(state.mp, STARTING_MAX_MP);
        assert_eq!(state.gold, STARTING_GOLD);
        assert_eq!(state.exp, 0);
        assert_eq!(state.exp_to_next, 100);
        assert_eq!(state.current_location, "village");
        assert!(!state.battle_in_progress);
        assert!(!state.save_id.is_empty());
        assert_eq!(state.last_save_time, 1234567890);
    }

    #[test]
    fn test_merge_applies_only_present_fields() {
        let mut state = GameState::new(0);
        state.merge(GameStateUpdate {
            gold_gained: Some(300),
            battle_in_progress: Some(true),
            ..Default::default()
        });
        assert_eq!(state.gold, STARTING_GOLD + 300);
        assert!(state.battle_in_progress);
        // Untouched fields keep their values
        assert_eq!(state.hp, STARTING_MAX_HP);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_merge_hp_capped_at_max() {
        let mut state = GameState::new(0);
        state.merge(GameStateUpdate {
            hp: Some(9999),
            ..Default::default()
        });
        assert_eq!(state.hp, state.max_hp);
    }

    #[test]
    fn test_grant_exp_levels_up() {
        let mut state = GameState::new(0);
        state.hp = 50;

        state.grant_exp(100); // exactly one level
        assert_eq!(state.level, 2);
        assert_eq!(state.exp, 0);
        assert_eq!(state.exp_to_next, exp_for_level(2));
        assert_eq!(state.max_hp, STARTING_MAX_HP + LEVEL_UP_MAX_HP_GAIN);
        assert_eq!(state.hp, state.max_hp); // restored on level-up
    }

    #[test]
    fn test_grant_exp_multiple_levels() {
        let mut state = GameState::new(0);
        // 100 (1->2) + 282 (2->3) = 382; grant enough for two levels
        state.grant_exp(100 + exp_for_level(2));
        assert_eq!(state.level, 3);
    }

    #[test]
    fn test_exp_curve_monotonic() {
        let mut previous = 0;
        for level in 1..30 {
            let required = exp_for_level(level);
            assert!(required > previous);
            previous = required;
        }
    }

    #[test]
    fn test_rest_restores_vitals() {
        let mut state = GameState::new(0);
        state.hp = 1;
        state.mp = 0;
        state.rest();
        assert_eq!(state.hp, state.max_hp);
        assert_eq!(state.mp, state.max_mp);
    }

    #[test]
    fn test_vitals_roundtrip() {
        let mut state = GameState::new(0);
        let mut vitals = state.vitals();
        assert_eq!(vitals.hp, state.hp);

        vitals.hp = 1;
        state.apply_vitals(vitals);
        assert_eq!(state.hp, 1);
    }
}
