//! Grid Snake - a classic snake arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid state, per-tick transition, food placement)
//! - `render`: Stateless draw pass over the simulation state
//! - `input`: Key mapping and the between-tick direction latch
//! - `platform`: Clock abstraction and tick gating
//! - `term`: Terminal implementation of the drawing surface
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod platform;
pub mod render;
pub mod sim;
pub mod term;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Board edge length in cells (the board is square)
    pub const GRID_SIZE: i32 = 20;
    /// Snake length after a reset
    pub const INITIAL_SNAKE_LENGTH: usize = 3;
    /// Seconds between simulation ticks at level 1
    pub const BASE_MOVE_DELAY: f32 = 0.15;
    /// Points per food
    pub const FOOD_REWARD: u32 = 5;
    /// Score distance between level-ups
    pub const LEVEL_SCORE_STEP: u32 = 50;
    /// Move delay multiplier applied on each level-up
    pub const LEVEL_SPEEDUP: f32 = 0.9;

    /// Host frame pacing; rendering runs every frame regardless of ticks
    pub const FRAME_INTERVAL_MS: u64 = 16;
}
