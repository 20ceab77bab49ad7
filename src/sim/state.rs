//! Game state and core simulation types
//!
//! Everything the per-tick transition reads and mutates lives here. One
//! `GameState` value is owned by the host loop and passed explicitly; there
//! are no process-wide globals.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::food::place_food;
use crate::tuning::{SelfCollisionRule, Tuning};

/// Heading of the snake, one of the four grid-axis unit vectors.
///
/// The grid origin is the top-left corner and y grows downward, so `Up`
/// decreases y. This matches terminal row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step vector for this heading.
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// True if `other` is the exact 180-degree reverse of this heading.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.delta() + other.delta() == IVec2::ZERO
    }
}

/// Complete game state (deterministic: fixed seed and inputs give a fixed
/// trajectory)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Snake body cells, head first; grows at the head, shrinks at the tail
    pub snake: Vec<IVec2>,
    /// Current heading, applied once per tick
    pub direction: Direction,
    /// The one active food cell, never on the snake
    pub food: IVec2,
    /// Points scored since the last reset
    pub score: u32,
    /// Current level, 1-based
    pub level: u32,
    /// Seconds between ticks; shrinks as levels advance
    pub move_delay: f32,
    /// Board parameters and balance knobs
    pub tuning: Tuning,
    /// Score threshold for the next level-up
    next_level_score: u32,
    rng: Pcg32,
}

impl GameState {
    /// Create a game state in its starting configuration.
    ///
    /// The RNG is seeded once here and keeps advancing across resets, so a
    /// run's food sequence is reproducible from its seed.
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut state = Self {
            seed,
            snake: Vec::new(),
            direction: Direction::Right,
            food: IVec2::ZERO,
            score: 0,
            level: 1,
            move_delay: tuning.base_move_delay,
            next_level_score: tuning.level_score_step,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        };
        state.reset();
        state
    }

    /// Reinitialize all mutable state to the starting configuration.
    ///
    /// This is both the explicit-restart and the game-over path; no
    /// game-over state is retained. Always succeeds.
    pub fn reset(&mut self) {
        let center = self.tuning.grid_size / 2;
        self.snake.clear();
        for i in 0..self.tuning.initial_snake_length as i32 {
            self.snake.push(IVec2::new(center - i, center));
        }
        self.direction = Direction::Right;
        self.score = 0;
        self.level = 1;
        self.move_delay = self.tuning.base_move_delay;
        self.next_level_score = self.tuning.level_score_step;
        self.food = place_food(&mut self.rng, self.tuning.grid_size, &self.snake);
    }

    /// The head cell.
    pub fn head(&self) -> IVec2 {
        self.snake[0]
    }

    /// True if `cell` lies on the board.
    pub fn in_bounds(&self, cell: IVec2) -> bool {
        let n = self.tuning.grid_size;
        cell.x >= 0 && cell.x < n && cell.y >= 0 && cell.y < n
    }

    /// Self-collision test for a candidate head, per the configured rule.
    ///
    /// The body has not moved yet when this runs; under `IncludeTail` the
    /// cell the tail is about to vacate still counts as occupied.
    pub fn hits_body(&self, candidate: IVec2) -> bool {
        match self.tuning.self_collision {
            SelfCollisionRule::IncludeTail => self.snake.contains(&candidate),
            SelfCollisionRule::TailVacates => {
                self.snake[..self.snake.len() - 1].contains(&candidate)
            }
        }
    }

    /// Apply the scoring side of eating one food: bump the score and, when
    /// the threshold is crossed, advance the level and shorten the move
    /// delay. Returns whether a level-up happened.
    pub(super) fn score_food(&mut self) -> bool {
        self.score += self.tuning.food_reward;
        if self.score >= self.next_level_score {
            self.level += 1;
            self.move_delay *= self.tuning.level_speedup;
            self.next_level_score += self.tuning.level_score_step;
            return true;
        }
        false
    }

    /// Place a fresh food item avoiding the current snake.
    pub(super) fn respawn_food(&mut self) {
        self.food = place_food(&mut self.rng, self.tuning.grid_size, &self.snake);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_deltas() {
        assert_eq!(Direction::Up.delta(), IVec2::new(0, -1));
        assert_eq!(Direction::Down.delta(), IVec2::new(0, 1));
        assert_eq!(Direction::Left.delta(), IVec2::new(-1, 0));
        assert_eq!(Direction::Right.delta(), IVec2::new(1, 0));
    }

    #[test]
    fn opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn reset_produces_starting_configuration() {
        let state = GameState::new(Tuning::default(), 7);

        assert_eq!(
            state.snake,
            vec![
                IVec2::new(10, 10),
                IVec2::new(9, 10),
                IVec2::new(8, 10)
            ]
        );
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.move_delay, state.tuning.base_move_delay);
        assert!(state.in_bounds(state.food));
        assert!(!state.snake.contains(&state.food));
    }

    #[test]
    fn reset_twice_yields_identical_fixed_state() {
        let mut state = GameState::new(Tuning::default(), 99);
        state.reset();
        let snake = state.snake.clone();
        let direction = state.direction;

        state.reset();
        assert_eq!(state.snake, snake);
        assert_eq!(state.direction, direction);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.move_delay, state.tuning.base_move_delay);
    }

    #[test]
    fn score_food_advances_level_at_threshold() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.score = 45;

        let leveled = state.score_food();
        assert!(leveled);
        assert_eq!(state.score, 50);
        assert_eq!(state.level, 2);
        let expected = state.tuning.base_move_delay * state.tuning.level_speedup;
        assert!((state.move_delay - expected).abs() < 1e-6);

        // The next threshold moved up, so the next food does not level.
        assert!(!state.score_food());
        assert_eq!(state.level, 2);
    }

    #[test]
    fn hits_body_include_tail_counts_tail_cell() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.snake = vec![IVec2::new(5, 5), IVec2::new(4, 5), IVec2::new(3, 5)];

        assert!(state.hits_body(IVec2::new(3, 5)));
        assert!(state.hits_body(IVec2::new(4, 5)));
        assert!(!state.hits_body(IVec2::new(6, 5)));
    }

    #[test]
    fn hits_body_tail_vacates_frees_tail_cell() {
        let tuning = Tuning {
            self_collision: SelfCollisionRule::TailVacates,
            ..Tuning::default()
        };
        let mut state = GameState::new(tuning, 1);
        state.snake = vec![IVec2::new(5, 5), IVec2::new(4, 5), IVec2::new(3, 5)];

        assert!(!state.hits_body(IVec2::new(3, 5)));
        assert!(state.hits_body(IVec2::new(4, 5)));
    }
}
