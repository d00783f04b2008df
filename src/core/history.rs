//! Undo history as an immutable stack of state snapshots.
//!
//! History is immutable — `record` and `pop` return new values rather than
//! mutating in place, following functional programming principles. Snapshots
//! are ordered oldest first; undo consumes them from the tail.

use super::robot::RobotState;
use serde::{Deserialize, Serialize};

/// Ordered snapshots of robot states taken before each state-changing
/// command.
///
/// # Example
///
/// ```rust
/// use tabletop::core::{Direction, History, RobotState};
///
/// let history = History::new();
/// let history = history.record(RobotState::Unplaced);
/// let history = history.record(RobotState::Unplaced.place(0, 0, Direction::North));
///
/// let (restored, history) = history.pop().unwrap();
/// assert!(restored.is_placed());
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<RobotState>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Record a snapshot, returning a new history.
    ///
    /// This is a pure function — the existing history is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabletop::core::{History, RobotState};
    ///
    /// let history = History::new();
    /// let grown = history.record(RobotState::Unplaced);
    ///
    /// assert_eq!(history.len(), 0); // original unchanged
    /// assert_eq!(grown.len(), 1);
    /// ```
    pub fn record(&self, snapshot: RobotState) -> Self {
        let mut snapshots = self.snapshots.clone();
        snapshots.push(snapshot);
        Self { snapshots }
    }

    /// Split off the most recent snapshot, returning it with the shortened
    /// history, or `None` when the history is empty.
    pub fn pop(&self) -> Option<(RobotState, Self)> {
        let mut snapshots = self.snapshots.clone();
        let last = snapshots.pop()?;
        Some((last, Self { snapshots }))
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether no snapshots have been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[RobotState] {
        &self.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn record_is_pure() {
        let history = History::new();
        let grown = history.record(RobotState::Unplaced);

        assert_eq!(history.len(), 0);
        assert_eq!(grown.len(), 1);
    }

    #[test]
    fn pop_returns_most_recent_snapshot() {
        let first = RobotState::Unplaced.place(0, 0, Direction::North);
        let second = RobotState::Unplaced.place(1, 1, Direction::East);
        let history = History::new().record(first).record(second);

        let (restored, rest) = history.pop().unwrap();
        assert_eq!(restored, second);
        assert_eq!(rest.snapshots(), &[first]);

        // original untouched
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn snapshots_preserve_insertion_order() {
        let states = [
            RobotState::Unplaced,
            RobotState::Unplaced.place(2, 2, Direction::South),
            RobotState::Unplaced,
        ];
        let mut history = History::new();
        for state in states {
            history = history.record(state);
        }
        assert_eq!(history.snapshots(), &states);
    }

    #[test]
    fn history_serializes_round_trip() {
        let history = History::new()
            .record(RobotState::Unplaced)
            .record(RobotState::Unplaced.place(3, 1, Direction::West));
        let json = serde_json::to_string(&history).unwrap();
        let back: History = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}
