//! The battle session state machine.
//!
//! One session covers one encounter: present question, resolve answer,
//! apply damage, check termination, advance or end. All mutation happens
//! through `submit_answer` and `advance_turn`; the host (UI) owns the
//! pacing delays between them and collects the outcome exactly once
//! through the completion latch.

use rand::Rng;

use crate::constants::{
    CORRECT_DAMAGE_MAX, CORRECT_DAMAGE_MIN, PLAYER_HP_FLOOR, WRONG_DAMAGE_MAX, WRONG_DAMAGE_MIN,
};
use crate::enemies::{EnemyInstance, EnemyTemplate};
use crate::quiz::QuizItem;

use super::types::{
    BattleSummary, PlayerVitals, RespawnPolicy, SessionError, SessionOutcome, TurnResult,
};

/// Deferred work for the next `advance_turn` call.
#[derive(Debug, Clone, Copy)]
struct PendingAdvance {
    respawn_enemy: bool,
}

/// State machine: AwaitingAnswer -> (locked, resolving) -> next turn,
/// Victory, or Defeat. Terminal states have no outgoing transitions.
#[derive(Debug)]
pub struct BattleSession {
    enemy: EnemyInstance,
    defeated_count: u32,
    enemy_quota: u32,
    active_quiz: Option<QuizItem>,
    answer_locked: bool,
    terminated: bool,
    outcome: Option<SessionOutcome>,
    turns_taken: u32,
    vitals: PlayerVitals,
    quiz_pool: Vec<QuizItem>,
    enemy_pool: Vec<EnemyTemplate>,
    respawn_policy: RespawnPolicy,
    pending: Option<PendingAdvance>,
    /// Single-use completion latch: set once when the session
    /// terminates, emptied by the first `take_completion`.
    completion: Option<BattleSummary>,
}

impl BattleSession {
    /// Starts an encounter. Fails fast on misconfiguration; a returned
    /// session is always in a well-formed awaiting-answer state.
    pub fn start(
        enemy_pool: Vec<EnemyTemplate>,
        quiz_pool: Vec<QuizItem>,
        quota: u32,
        vitals: PlayerVitals,
        respawn_policy: RespawnPolicy,
        rng: &mut impl Rng,
    ) -> Result<Self, SessionError> {
        if enemy_pool.is_empty() {
            return Err(SessionError::EmptyEnemyPool);
        }
        if quiz_pool.is_empty() {
            return Err(SessionError::EmptyQuizPool);
        }
        if quota == 0 {
            return Err(SessionError::ZeroQuota);
        }

        let enemy = enemy_pool[rng.gen_range(0..enemy_pool.len())].spawn();
        let first_quiz = quiz_pool[rng.gen_range(0..quiz_pool.len())].clone();

        Ok(Self {
            enemy,
            defeated_count: 0,
            enemy_quota: quota,
            active_quiz: Some(first_quiz),
            answer_locked: false,
            terminated: false,
            outcome: None,
            turns_taken: 0,
            vitals,
            quiz_pool,
            enemy_pool,
            respawn_policy,
            pending: None,
            completion: None,
        })
    }

    /// Resolves one answer. Ignored (no state change) when the session
    /// is terminated, the lock is held, or no question is active; those
    /// are expected under UI races, not errors.
    pub fn submit_answer(&mut self, choice: &str, rng: &mut impl Rng) -> TurnResult {
        if self.terminated || self.answer_locked {
            return TurnResult::Ignored;
        }
        let correct = match &self.active_quiz {
            Some(quiz) => quiz.is_correct(choice),
            None => return TurnResult::Ignored,
        };

        self.answer_locked = true;
        self.turns_taken += 1;

        if correct {
            let damage = rng.gen_range(CORRECT_DAMAGE_MIN..=CORRECT_DAMAGE_MAX);
            self.enemy.take_damage(damage);

            if self.enemy.is_alive() {
                self.pending = Some(PendingAdvance {
                    respawn_enemy: false,
                });
                return TurnResult::EnemyHit { damage };
            }

            self.defeated_count += 1;
            if self.defeated_count == self.enemy_quota {
                self.finish(SessionOutcome::Victory);
                return TurnResult::Victory { damage };
            }

            self.pending = Some(PendingAdvance {
                respawn_enemy: true,
            });
            TurnResult::EnemyDefeated { damage }
        } else {
            let damage = rng.gen_range(WRONG_DAMAGE_MIN..=WRONG_DAMAGE_MAX);
            let raw = self.vitals.hp.saturating_sub(damage);
            self.vitals.hp = raw.max(PLAYER_HP_FLOOR);

            // Defeat rule: the unclamped result reached the floor. This
            // also covers a pre-damage hp already at the floor.
            if raw <= PLAYER_HP_FLOOR {
                self.finish(SessionOutcome::Defeat);
                return TurnResult::Defeat { damage };
            }

            self.pending = Some(PendingAdvance {
                respawn_enemy: false,
            });
            TurnResult::PlayerHit { damage }
        }
    }

    /// Host-scheduled continuation: draws the next question (and the
    /// next enemy when one fell) and releases the answer lock. No-op on
    /// terminated sessions or when nothing is pending, so duplicate
    /// timer fires are harmless.
    pub fn advance_turn(&mut self, rng: &mut impl Rng) {
        if self.terminated {
            return;
        }
        let pending = match self.pending.take() {
            Some(p) => p,
            None => return,
        };

        if pending.respawn_enemy {
            self.enemy = match self.respawn_policy {
                RespawnPolicy::FreshDraw => {
                    // Pool is non-empty by the start() contract.
                    self.enemy_pool[rng.gen_range(0..self.enemy_pool.len())].spawn()
                }
                RespawnPolicy::SameTemplate => {
                    let mut same = self.enemy.clone();
                    same.reset_hp();
                    same
                }
            };
        }

        // Repetition across turns is acceptable; draws are uniform.
        self.active_quiz = Some(self.quiz_pool[rng.gen_range(0..self.quiz_pool.len())].clone());
        self.answer_locked = false;
    }

    /// The completion latch. Returns the summary on the first call
    /// after termination and `None` forever after, so the reward and
    /// navigation path can only run once per session.
    pub fn take_completion(&mut self) -> Option<BattleSummary> {
        self.completion.take()
    }

    fn finish(&mut self, outcome: SessionOutcome) {
        self.terminated = true;
        self.outcome = Some(outcome);
        self.pending = None;
        self.completion = Some(BattleSummary {
            outcome,
            enemies_defeated: self.defeated_count,
            turns_taken: self.turns_taken,
            final_vitals: self.vitals,
        });
    }

    pub fn enemy(&self) -> &EnemyInstance {
        &self.enemy
    }

    pub fn vitals(&self) -> PlayerVitals {
        self.vitals
    }

    pub fn active_quiz(&self) -> Option<&QuizItem> {
        self.active_quiz.as_ref()
    }

    pub fn defeated_count(&self) -> u32 {
        self.defeated_count
    }

    pub fn enemy_quota(&self) -> u32 {
        self.enemy_quota
    }

    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    pub fn answer_locked(&self) -> bool {
        self.answer_locked
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.outcome
    }

    /// True when a continuation is waiting on the host's timer.
    pub fn advance_pending(&self) -> bool {
        self.pending.is_some()
    }
}
