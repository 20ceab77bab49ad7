//! The per-tick state transition
//!
//! `tick` advances the simulation by exactly one discrete step. The host
//! gates calls on the current move delay (see `platform::TickTimer`); this
//! module never looks at a clock. A collision resets the game in place;
//! there is no retained game-over state.

use super::state::{Direction, GameState};

/// Input latched for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Heading change requested since the last tick, already filtered for
    /// reversals by the input latch
    pub turn: Option<Direction>,
}

/// Why a tick ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The candidate head left the board
    Wall,
    /// The candidate head landed on the body
    Body,
}

/// What a tick did, reported for host-side logging and tests. The sim never
/// logs on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Ordinary locomotion: head advanced, tail vacated
    Moved,
    /// The head landed on the food cell and the snake grew
    Ate { leveled_up: bool },
    /// The tick failed and the state has been reset
    Collided(Collision),
}

/// Advance the game by one discrete step.
pub fn tick(state: &mut GameState, input: TickInput) -> TickEvent {
    // The latch already rejects reversals; re-check so the sim is safe
    // standalone.
    if let Some(turn) = input.turn {
        if !turn.is_opposite(state.direction) {
            state.direction = turn;
        }
    }

    let head = state.head() + state.direction.delta();

    if !state.in_bounds(head) {
        state.reset();
        return TickEvent::Collided(Collision::Wall);
    }
    if state.hits_body(head) {
        state.reset();
        return TickEvent::Collided(Collision::Body);
    }

    state.snake.insert(0, head);

    if head == state.food {
        let leveled_up = state.score_food();
        state.respawn_food();
        TickEvent::Ate { leveled_up }
    } else {
        state.snake.pop();
        TickEvent::Moved
    }
}
