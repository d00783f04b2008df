//! Parse errors for the command surface.

use thiserror::Error;

/// Errors that can occur when parsing a raw command line.
///
/// Any variant means "invalid command": the line never becomes a
/// [`Command`](crate::command::Command) and must not be stepped through a
/// simulation. The variants exist so hosts can explain *why* a line was
/// refused.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("PLACE requires arguments: PLACE <x>,<y>,<FACING>")]
    MissingPlaceArguments,

    #[error("PLACE requires exactly three comma-separated fields, got {0}")]
    MalformedPlaceArguments(usize),

    #[error("Invalid coordinate '{0}'")]
    InvalidCoordinate(String),

    #[error("Unrecognized direction '{0}'")]
    InvalidDirection(String),

    /// A bare keyword was followed by trailing text, e.g. `MOVE 3`.
    #[error("Command '{0}' takes no arguments")]
    UnexpectedArguments(String),
}
