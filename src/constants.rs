// Battle turn pacing (seconds the UI holds the answer reveal before advancing)
pub const RESULT_REVEAL_SECONDS: f64 = 1.5;
pub const ENEMY_FADE_SECONDS: f64 = 0.5;

// Quiz damage ranges (inclusive)
pub const CORRECT_DAMAGE_MIN: u32 = 15;
pub const CORRECT_DAMAGE_MAX: u32 = 34;
pub const WRONG_DAMAGE_MIN: u32 = 10;
pub const WRONG_DAMAGE_MAX: u32 = 24;

// Player HP never drops below this; reaching it is the defeat condition
pub const PLAYER_HP_FLOOR: u32 = 1;

// Enemies to defeat per encounter unless the location overrides it
pub const DEFAULT_ENEMY_QUOTA: u32 = 10;

// Questions drawn per encounter (sampled without replacement)
pub const QUIZ_SET_SIZE: usize = 20;

// Starting player stats
pub const STARTING_MAX_HP: u32 = 100;
pub const STARTING_MAX_MP: u32 = 30;
pub const STARTING_ATTACK: u32 = 20;
pub const STARTING_DEFENSE: u32 = 10;
pub const STARTING_GOLD: u64 = 500;

// XP and leveling
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_EXPONENT: f64 = 1.5;
pub const LEVEL_UP_MAX_HP_GAIN: u32 = 10;
pub const LEVEL_UP_MAX_MP_GAIN: u32 = 3;
pub const LEVEL_UP_ATTACK_GAIN: u32 = 2;
pub const LEVEL_UP_DEFENSE_GAIN: u32 = 1;

// Save system
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;
pub const SAVE_VERSION_MAGIC: u64 = 0x515A_5155_4553_5400; // "QZQUEST\0"

// UI timing
pub const TICK_INTERVAL_MS: u64 = 50;
