//! Robot state and its pure transitions.
//!
//! `RobotState` is an immutable value: every transition consumes the input
//! and returns a new value rather than mutating in place. The enum encodes
//! the core invariant directly — a robot is either fully unplaced or has a
//! complete on-board position and facing. There is no partially-set state.

use super::board::is_on_board;
use super::direction::Direction;
use serde::{Deserialize, Serialize};

/// Position and facing of the robot, or the unplaced initial condition.
///
/// All transitions are pure: they enforce board bounds and the placement
/// precondition themselves, returning the input unchanged when a transition
/// does not apply.
///
/// # Example
///
/// ```rust
/// use tabletop::core::{Direction, RobotState};
///
/// let robot = RobotState::Unplaced.place(0, 0, Direction::North);
/// let (robot, moved) = robot.move_forward();
/// assert!(moved);
/// assert_eq!(robot.report(), Some("0,1,NORTH".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RobotState {
    /// Not on the board; the initial condition.
    Unplaced,
    /// On the board at `(x, y)`, facing `facing`.
    Placed { x: i32, y: i32, facing: Direction },
}

impl Default for RobotState {
    fn default() -> Self {
        Self::Unplaced
    }
}

impl RobotState {
    /// Whether the robot currently stands on the board.
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed { .. })
    }

    /// Place the robot at `(x, y)` facing `facing`.
    ///
    /// Off-board coordinates silently reject the placement and return the
    /// input unchanged. Placement is allowed at any time and discards any
    /// prior position — it is the only transition out of [`Unplaced`].
    ///
    /// [`Unplaced`]: RobotState::Unplaced
    pub fn place(self, x: i32, y: i32, facing: Direction) -> Self {
        if !is_on_board(x, y) {
            return self;
        }
        Self::Placed { x, y, facing }
    }

    /// Advance one cell in the facing direction.
    ///
    /// Returns the new state and whether the robot actually moved. Moves
    /// that would carry the robot off the table are refused, leaving the
    /// state unchanged, as are moves while unplaced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabletop::core::{Direction, RobotState};
    ///
    /// let robot = RobotState::Unplaced.place(0, 0, Direction::South);
    /// let (same, moved) = robot.move_forward();
    /// assert!(!moved); // would fall off the southern edge
    /// assert_eq!(same, robot);
    /// ```
    pub fn move_forward(self) -> (Self, bool) {
        let Self::Placed { x, y, facing } = self else {
            return (self, false);
        };
        let (dx, dy) = facing.offset();
        let (next_x, next_y) = (x + dx, y + dy);
        if !is_on_board(next_x, next_y) {
            return (self, false);
        }
        (
            Self::Placed {
                x: next_x,
                y: next_y,
                facing,
            },
            true,
        )
    }

    /// Rotate 90 degrees counter-clockwise. No-op while unplaced.
    pub fn rotate_left(self) -> Self {
        match self {
            Self::Unplaced => self,
            Self::Placed { x, y, facing } => Self::Placed {
                x,
                y,
                facing: facing.left(),
            },
        }
    }

    /// Rotate 90 degrees clockwise. No-op while unplaced.
    pub fn rotate_right(self) -> Self {
        match self {
            Self::Unplaced => self,
            Self::Placed { x, y, facing } => Self::Placed {
                x,
                y,
                facing: facing.right(),
            },
        }
    }

    /// Canonical report string `"x,y,FACING"`, or `None` while unplaced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabletop::core::{Direction, RobotState};
    ///
    /// assert_eq!(RobotState::Unplaced.report(), None);
    ///
    /// let robot = RobotState::Unplaced.place(2, 4, Direction::West);
    /// assert_eq!(robot.report(), Some("2,4,WEST".to_string()));
    /// ```
    pub fn report(&self) -> Option<String> {
        match self {
            Self::Unplaced => None,
            Self::Placed { x, y, facing } => Some(format!("{x},{y},{facing}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::BOARD_SIZE;

    #[test]
    fn place_on_board_succeeds() {
        let robot = RobotState::Unplaced.place(1, 2, Direction::East);
        assert_eq!(
            robot,
            RobotState::Placed {
                x: 1,
                y: 2,
                facing: Direction::East
            }
        );
    }

    #[test]
    fn place_off_board_returns_input_unchanged() {
        assert_eq!(
            RobotState::Unplaced.place(BOARD_SIZE, 0, Direction::North),
            RobotState::Unplaced
        );
        assert_eq!(
            RobotState::Unplaced.place(0, -1, Direction::North),
            RobotState::Unplaced
        );

        let placed = RobotState::Unplaced.place(3, 3, Direction::West);
        assert_eq!(placed.place(-2, 7, Direction::North), placed);
    }

    #[test]
    fn place_overwrites_prior_position() {
        let robot = RobotState::Unplaced
            .place(0, 0, Direction::North)
            .place(4, 4, Direction::South);
        assert_eq!(robot.report(), Some("4,4,SOUTH".to_string()));
    }

    #[test]
    fn move_advances_per_facing() {
        let cases = [
            (Direction::North, (2, 3)),
            (Direction::South, (2, 1)),
            (Direction::East, (3, 2)),
            (Direction::West, (1, 2)),
        ];
        for (facing, (ex, ey)) in cases {
            let robot = RobotState::Unplaced.place(2, 2, facing);
            let (next, moved) = robot.move_forward();
            assert!(moved);
            assert_eq!(
                next,
                RobotState::Placed {
                    x: ex,
                    y: ey,
                    facing
                }
            );
        }
    }

    #[test]
    fn move_refuses_to_fall_off_every_edge() {
        let cases = [
            (2, BOARD_SIZE - 1, Direction::North),
            (2, 0, Direction::South),
            (BOARD_SIZE - 1, 2, Direction::East),
            (0, 2, Direction::West),
        ];
        for (x, y, facing) in cases {
            let robot = RobotState::Unplaced.place(x, y, facing);
            let (same, moved) = robot.move_forward();
            assert!(!moved);
            assert_eq!(same, robot);
        }
    }

    #[test]
    fn move_while_unplaced_is_refused() {
        let (same, moved) = RobotState::Unplaced.move_forward();
        assert!(!moved);
        assert_eq!(same, RobotState::Unplaced);
    }

    #[test]
    fn rotation_preserves_position() {
        let robot = RobotState::Unplaced.place(1, 3, Direction::North);
        assert_eq!(robot.rotate_left().report(), Some("1,3,WEST".to_string()));
        assert_eq!(robot.rotate_right().report(), Some("1,3,EAST".to_string()));
    }

    #[test]
    fn rotation_while_unplaced_is_a_no_op() {
        assert_eq!(RobotState::Unplaced.rotate_left(), RobotState::Unplaced);
        assert_eq!(RobotState::Unplaced.rotate_right(), RobotState::Unplaced);
    }

    #[test]
    fn report_uses_full_direction_name() {
        let robot = RobotState::Unplaced.place(0, 1, Direction::North);
        assert_eq!(robot.report(), Some("0,1,NORTH".to_string()));
    }

    #[test]
    fn state_serializes_round_trip() {
        let robot = RobotState::Unplaced.place(2, 0, Direction::South);
        let json = serde_json::to_string(&robot).unwrap();
        let back: RobotState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, robot);
    }
}
