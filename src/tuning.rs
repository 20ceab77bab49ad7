//! Data-driven game balance
//!
//! Board parameters and balance knobs (per-food reward, level pacing, the
//! self-collision rule around the vacating tail cell), loadable from a JSON
//! file so an alternate balance can be tried without recompiling. Anything
//! invalid is rejected at startup.

use std::fs;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::consts;

/// Environment variable naming an optional tuning JSON file.
const TUNING_ENV: &str = "GRID_SNAKE_TUNING";

/// Which body cells a candidate head is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelfCollisionRule {
    /// Test against the whole pre-move body: moving into the cell the tail
    /// is about to vacate still counts as a collision.
    #[default]
    IncludeTail,
    /// The tail cell vacates during the same tick, so moving into it is
    /// legal.
    TailVacates,
}

/// Game balance parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Board edge length in cells (the board is square)
    pub grid_size: i32,
    /// Snake length after a reset
    pub initial_snake_length: usize,
    /// Seconds between ticks at level 1
    pub base_move_delay: f32,
    /// Points per food
    pub food_reward: u32,
    /// Score distance between level-ups
    pub level_score_step: u32,
    /// Move delay multiplier applied on level-up; below 1 speeds the game up
    pub level_speedup: f32,
    /// Self-collision rule for the cell the tail is vacating
    pub self_collision: SelfCollisionRule,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            grid_size: consts::GRID_SIZE,
            initial_snake_length: consts::INITIAL_SNAKE_LENGTH,
            base_move_delay: consts::BASE_MOVE_DELAY,
            food_reward: consts::FOOD_REWARD,
            level_score_step: consts::LEVEL_SCORE_STEP,
            level_speedup: consts::LEVEL_SPEEDUP,
            self_collision: SelfCollisionRule::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON. Absent fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json).context("malformed tuning JSON")?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from the file named by `GRID_SNAKE_TUNING`, or defaults
    /// when the variable is unset. A named-but-broken file is an error, not
    /// a silent fallback.
    pub fn load() -> Result<Self> {
        match std::env::var(TUNING_ENV) {
            Ok(path) => {
                let json = fs::read_to_string(&path)
                    .with_context(|| format!("reading tuning file {path}"))?;
                let tuning = Self::from_json(&json)?;
                log::info!("loaded tuning from {path}");
                Ok(tuning)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.grid_size < 4 {
            bail!("grid_size must be at least 4, got {}", self.grid_size);
        }
        if self.initial_snake_length == 0 {
            bail!("initial_snake_length must be at least 1");
        }
        if self.initial_snake_length as i32 > self.grid_size / 2 {
            bail!(
                "initial_snake_length {} does not fit the starting row of a {}-cell board",
                self.initial_snake_length,
                self.grid_size
            );
        }
        if !(self.base_move_delay > 0.0) {
            bail!("base_move_delay must be positive, got {}", self.base_move_delay);
        }
        if self.food_reward == 0 {
            bail!("food_reward must be at least 1");
        }
        if self.level_score_step == 0 {
            bail!("level_score_step must be at least 1");
        }
        if !(self.level_speedup > 0.0 && self.level_speedup <= 1.0) {
            bail!(
                "level_speedup must be in (0, 1], got {}",
                self.level_speedup
            );
        }
        Ok(())
    }
}
