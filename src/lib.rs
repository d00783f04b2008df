//! Tabletop: a pure functional toy robot simulator with linear undo.
//!
//! A single robot moves on a fixed 5x5 tabletop, driven by discrete textual
//! commands. The crate is the command interpreter and state machine only —
//! parsing raw text into typed [`Command`]s, applying them to an immutable
//! robot state under board-boundary constraints, and maintaining an undo
//! history of state snapshots. Rendering and input belong to the host.
//!
//! # Core Concepts
//!
//! - **Command**: closed set of typed commands, produced only by the parser
//! - **RobotState**: immutable position-and-facing value; transitions
//!   return new values and refuse anything that would leave the board
//! - **Simulation**: current state plus snapshot history; stepping a
//!   command yields a new simulation and its observable outputs
//!
//! # Example
//!
//! ```rust
//! use tabletop::command::Command;
//! use tabletop::core::Simulation;
//!
//! let mut sim = Simulation::new();
//! for line in ["PLACE 0,0,NORTH", "MOVE", "LEFT"] {
//!     let command: Command = line.parse().unwrap();
//!     sim = sim.step(command).sim;
//! }
//!
//! let outcome = sim.step(Command::Report);
//! assert_eq!(outcome.report, Some("0,1,WEST".to_string()));
//!
//! // Undo reverts the most recent state-changing command.
//! let outcome = sim.step(Command::Undo).sim.step(Command::Report);
//! assert_eq!(outcome.report, Some("0,1,NORTH".to_string()));
//! ```
//!
//! Every operation is a pure function over its inputs: stepping never
//! mutates the input simulation, so callers embedding the crate in a
//! concurrent host only need to serialize their own read-then-write of the
//! retained value.

pub mod command;
pub mod core;
pub mod program;

// Re-export commonly used types
pub use command::{Command, ParseCommandError};
pub use core::{Direction, RobotState, Simulation, StepResult};
pub use program::{execute_program, ProgramOutcome};
