//! Input latch and key mapping
//!
//! Movement is tick-driven, not input-driven: a key press only records a
//! pending heading change, which the next tick consumes. Restart and quit
//! act immediately, outside the tick gate.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::sim::{Direction, TickInput};

/// A key press decoded into a game command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Request a heading change at the next tick
    Turn(Direction),
    /// Reset the game immediately
    Restart,
}

/// Map keyboard input to game commands. Anything unrecognized is ignored.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Command::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Turn(Direction::Right))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Latches the most recent valid heading request between ticks.
#[derive(Debug, Default)]
pub struct InputLatch {
    pending: Option<Direction>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a heading request unless it is the exact reverse of the
    /// current heading; a later valid request overwrites an earlier one.
    pub fn on_key(&mut self, requested: Direction, heading: Direction) {
        if !requested.is_opposite(heading) {
            self.pending = Some(requested);
        }
    }

    /// Hand the pending turn to the next tick, clearing the latch.
    pub fn take(&mut self) -> TickInput {
        TickInput {
            turn: self.pending.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(Command::Turn(Direction::Up))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('s'))),
            Some(Command::Turn(Direction::Down))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('A'))),
            Some(Command::Turn(Direction::Left))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(Command::Turn(Direction::Right))
        );
    }

    #[test]
    fn restart_key_and_unmapped_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(Command::Restart)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }

    #[test]
    fn latch_rejects_reversals() {
        let mut latch = InputLatch::new();
        latch.on_key(Direction::Left, Direction::Right);
        assert_eq!(latch.take().turn, None);
    }

    #[test]
    fn latch_keeps_the_most_recent_valid_request() {
        let mut latch = InputLatch::new();
        latch.on_key(Direction::Up, Direction::Right);
        latch.on_key(Direction::Down, Direction::Right);
        assert_eq!(latch.take().turn, Some(Direction::Down));
        // Consumed: the next tick sees nothing.
        assert_eq!(latch.take().turn, None);
    }

    #[test]
    fn reversal_does_not_clobber_an_accepted_request() {
        let mut latch = InputLatch::new();
        latch.on_key(Direction::Up, Direction::Right);
        latch.on_key(Direction::Left, Direction::Right);
        assert_eq!(latch.take().turn, Some(Direction::Up));
    }
}
