//! The pure functional core of the simulator.
//!
//! This module contains everything with real logic:
//! - Board bounds via [`is_on_board`]
//! - Cyclic compass [`Direction`]s
//! - Immutable [`RobotState`] values and their transitions
//! - The snapshot [`History`] backing undo
//! - The [`Simulation`] stepper that applies typed commands
//!
//! All of it is pure — no I/O, no shared mutable state, no clocks. Every
//! operation maps input values to output values and nothing else.

mod board;
mod direction;
mod history;
mod robot;
mod sim;

pub use board::{is_on_board, BOARD_SIZE};
pub use direction::{Direction, ParseDirectionError};
pub use history::History;
pub use robot::RobotState;
pub use sim::{Simulation, StepResult};
