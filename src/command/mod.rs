//! Typed commands and the text parser that produces them.
//!
//! Raw input is untrusted text; a [`Command`] is the proof that a line was
//! well-formed. Commands are only ever constructed from text through
//! [`FromStr`], so everything downstream of the parser works with a closed
//! set of variants and exhaustive matching.

mod error;

pub use error::ParseCommandError;

use crate::core::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One simulator command, parsed from a single line of text.
///
/// # Example
///
/// ```rust
/// use tabletop::command::Command;
/// use tabletop::core::Direction;
///
/// let cmd: Command = "  place 1,2,north ".parse().unwrap();
/// assert_eq!(
///     cmd,
///     Command::Place {
///         x: 1,
///         y: 2,
///         facing: Direction::North
///     }
/// );
///
/// assert!("HOP".parse::<Command>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Put the robot at `(x, y)` facing `facing`.
    Place { x: i32, y: i32, facing: Direction },
    /// Advance one cell in the facing direction.
    Move,
    /// Rotate 90 degrees counter-clockwise.
    Left,
    /// Rotate 90 degrees clockwise.
    Right,
    /// Announce the current position and facing.
    Report,
    /// Return to the unplaced initial condition.
    Reset,
    /// Revert the most recent state-changing command.
    Undo,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parse one raw line into a command.
    ///
    /// Keywords match case-insensitively after trimming surrounding
    /// whitespace. `PLACE` takes the remainder of the line as exactly three
    /// comma-separated fields — two integer coordinates and a direction
    /// name, each tolerating surrounding whitespace. The six bare keywords
    /// accept nothing after them.
    ///
    /// Negative coordinates parse successfully here; the board-bounds check
    /// in the stepper rejects them with an advisory instead.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let line = raw.trim();
        if line.is_empty() {
            return Err(ParseCommandError::Empty);
        }

        let (keyword, args) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        if keyword.eq_ignore_ascii_case("PLACE") {
            return parse_place_args(args);
        }

        let command = if keyword.eq_ignore_ascii_case("MOVE") {
            Self::Move
        } else if keyword.eq_ignore_ascii_case("LEFT") {
            Self::Left
        } else if keyword.eq_ignore_ascii_case("RIGHT") {
            Self::Right
        } else if keyword.eq_ignore_ascii_case("REPORT") {
            Self::Report
        } else if keyword.eq_ignore_ascii_case("RESET") {
            Self::Reset
        } else if keyword.eq_ignore_ascii_case("UNDO") {
            Self::Undo
        } else {
            return Err(ParseCommandError::UnknownCommand(line.to_string()));
        };

        if !args.is_empty() {
            return Err(ParseCommandError::UnexpectedArguments(
                keyword.to_ascii_uppercase(),
            ));
        }
        Ok(command)
    }
}

fn parse_place_args(args: &str) -> Result<Command, ParseCommandError> {
    if args.is_empty() {
        return Err(ParseCommandError::MissingPlaceArguments);
    }

    let fields: Vec<&str> = args.split(',').collect();
    if fields.len() != 3 {
        return Err(ParseCommandError::MalformedPlaceArguments(fields.len()));
    }

    let x = parse_coordinate(fields[0])?;
    let y = parse_coordinate(fields[1])?;
    let facing = fields[2]
        .trim()
        .parse::<Direction>()
        .map_err(|err| ParseCommandError::InvalidDirection(err.0))?;

    Ok(Command::Place { x, y, facing })
}

fn parse_coordinate(field: &str) -> Result<i32, ParseCommandError> {
    let field = field.trim();
    field
        .parse()
        .map_err(|_| ParseCommandError::InvalidCoordinate(field.to_string()))
}

impl fmt::Display for Command {
    /// Canonical textual form; round-trips through the parser.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place { x, y, facing } => write!(f, "PLACE {x},{y},{facing}"),
            Self::Move => f.write_str("MOVE"),
            Self::Left => f.write_str("LEFT"),
            Self::Right => f.write_str("RIGHT"),
            Self::Report => f.write_str("REPORT"),
            Self::Reset => f.write_str("RESET"),
            Self::Undo => f.write_str("UNDO"),
        }
    }
}
