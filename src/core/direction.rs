//! Compass directions with cyclic rotation.
//!
//! The four directions form a fixed cycle `NORTH -> EAST -> SOUTH -> WEST`
//! (wrapping). Rotating right advances one step through the cycle, rotating
//! left retreats one step. All arithmetic is explicit match arms rather than
//! index lookup, so exhaustiveness is checked at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four compass directions a robot can face.
///
/// # Example
///
/// ```rust
/// use tabletop::core::Direction;
///
/// assert_eq!(Direction::North.right(), Direction::East);
/// assert_eq!(Direction::North.left(), Direction::West);
/// assert_eq!(Direction::North.to_string(), "NORTH");
/// assert_eq!("south".parse::<Direction>(), Ok(Direction::South));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Rotate one step counter-clockwise (backward in the cycle), wrapping.
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Rotate one step clockwise (forward in the cycle), wrapping.
    pub fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit displacement of one forward move while facing this direction.
    ///
    /// North increases `y`, south decreases it; east increases `x`, west
    /// decreases it.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::South => (0, -1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// Canonical upper-case name, as it appears in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name one of the four directions.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
#[error("Unrecognized direction '{0}'")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Case-insensitive match against the four direction names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("NORTH") {
            Ok(Self::North)
        } else if s.eq_ignore_ascii_case("EAST") {
            Ok(Self::East)
        } else if s.eq_ignore_ascii_case("SOUTH") {
            Ok(Self::South)
        } else if s.eq_ignore_ascii_case("WEST") {
            Ok(Self::West)
        } else {
            Err(ParseDirectionError(s.to_string()))
        }
    }
}
