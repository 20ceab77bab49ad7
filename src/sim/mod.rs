//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering, clock, or terminal dependencies
//! - Tick gating happens in the host; `tick` always advances exactly one step

pub mod food;
pub mod state;
pub mod tick;

pub use food::place_food;
pub use state::{Direction, GameState};
pub use tick::{Collision, TickEvent, TickInput, tick};
