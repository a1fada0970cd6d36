// Board geometry
pub const BOARD_SIZE: usize = 8;
pub const GOAL_ROW: usize = 0;
pub const SPAWN_ROW: usize = 0;
pub const PLAYER_HOME_ROW: usize = 7;

// Longest ray a slider can travel on an 8x8 board
pub const MAX_RAY_LENGTH: usize = 7;

// Rows enemy sliders may not wander into while the early-game restriction holds
pub const RESTRICTED_ROW_MIN: usize = 3;
pub const RESTRICTED_ROW_MAX: usize = 4;

// Spawn policy
pub const INITIAL_SPAWN_RATE: f64 = 0.3;
pub const SPAWN_RATE_STEP: f64 = 0.05;
pub const SPAWN_RATE_CAP: f64 = 0.7;

pub const INITIAL_SPECIAL_CHANCE: f64 = 0.2;
pub const SPECIAL_CHANCE_STEP: f64 = 0.03;
pub const SPECIAL_CHANCE_CAP: f64 = 0.4;

// Difficulty ramp timing (in turns)
pub const RAMP_INTERVAL_TURNS: u32 = 5;
pub const MIDDLE_ROWS_UNLOCK_TURN: u32 = 10;
