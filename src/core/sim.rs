//! The simulation state machine: command application and undo history.
//!
//! A [`Simulation`] is a persistent value — [`Simulation::step`] never
//! mutates, it returns a fresh simulation inside a [`StepResult`] and the
//! caller retains whichever value it wants to continue from. Undo needs no
//! command-reversal logic: every state-changing command first snapshots the
//! pre-transition state into the history stack, and undo pops it back.

use super::board::is_on_board;
use super::history::History;
use super::robot::RobotState;
use crate::command::Command;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A robot simulation: current state, undo history, and whether any PLACE
/// has ever succeeded.
///
/// `has_ever_been_placed` gates every command other than PLACE and a
/// history-backed UNDO; until it turns true the simulation swallows commands
/// wholesale (see [`StepResult::ignored`]). It is cleared by RESET and
/// recomputed shallowly on UNDO.
///
/// # Example
///
/// ```rust
/// use tabletop::command::Command;
/// use tabletop::core::{Direction, Simulation};
///
/// let sim = Simulation::new();
/// let sim = sim
///     .step(Command::Place {
///         x: 0,
///         y: 0,
///         facing: Direction::North,
///     })
///     .sim;
/// let sim = sim.step(Command::Move).sim;
///
/// let outcome = sim.step(Command::Report);
/// assert_eq!(outcome.report, Some("0,1,NORTH".to_string()));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Simulation {
    current: RobotState,
    history: History,
    has_ever_been_placed: bool,
}

/// Everything a host needs to render the effect of one command.
///
/// The three observable signals are checked in order: `ignored` first (the
/// command never reached the state machine), then `report` (successful
/// REPORT), then `note` (advisory for a rejected or no-op mutation). Hosts
/// must not derive additional signals by diffing simulations — `ignored` is
/// authoritative for the pre-placement guard.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StepResult {
    /// The simulation after the command; the caller's new value.
    pub sim: Simulation,
    /// Canonical `"x,y,FACING"` output of a successful REPORT.
    pub report: Option<String>,
    /// Human-readable advisory when a command was rejected or had no effect.
    pub note: Option<String>,
    /// True when the command was swallowed by the pre-placement guard.
    pub ignored: bool,
}

impl Simulation {
    /// Create a fresh simulation: unplaced robot, empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The robot state commands currently apply to.
    pub fn current(&self) -> &RobotState {
        &self.current
    }

    /// Snapshots available to UNDO, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether any PLACE has succeeded since creation or the last
    /// fully-unwound RESET.
    pub fn has_ever_been_placed(&self) -> bool {
        self.has_ever_been_placed
    }

    /// Number of UNDO steps currently available. Hosts use this to
    /// enable or disable an undo affordance.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Apply one command, producing the next simulation and its observable
    /// outputs.
    ///
    /// Before the robot has ever been placed, every command except PLACE
    /// (and an UNDO with at least one snapshot to pop) is a full no-op
    /// flagged `ignored`, so a host can suppress log noise for commands
    /// that could never apply. UNDO is exempt when history is non-empty so
    /// that a RESET can be undone even though the current state is
    /// unplaced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabletop::command::Command;
    /// use tabletop::core::Simulation;
    ///
    /// // MOVE before any PLACE is swallowed wholesale.
    /// let outcome = Simulation::new().step(Command::Move);
    /// assert!(outcome.ignored);
    /// assert_eq!(outcome.sim, Simulation::new());
    /// ```
    pub fn step(&self, command: Command) -> StepResult {
        let undo_reaches_history =
            matches!(command, Command::Undo) && !self.history.is_empty();
        if !self.has_ever_been_placed
            && !matches!(command, Command::Place { .. })
            && !undo_reaches_history
        {
            trace!(%command, "ignored before first placement");
            return StepResult {
                sim: self.clone(),
                report: None,
                note: None,
                ignored: true,
            };
        }

        let mut current = self.current;
        let mut history = self.history.clone();
        let mut has_ever_been_placed = self.has_ever_been_placed;
        let mut report = None;
        let mut note = None;

        match command {
            Command::Place { x, y, facing } => {
                if is_on_board(x, y) {
                    history = history.record(current);
                    current = current.place(x, y, facing);
                    has_ever_been_placed = true;
                } else {
                    note = Some("PLACE ignored: coordinates off the board".to_string());
                }
            }
            Command::Move => {
                let (next, moved) = current.move_forward();
                if moved {
                    history = history.record(current);
                    current = next;
                } else if current.is_placed() {
                    note = Some("MOVE ignored: would fall off table".to_string());
                } else {
                    // Reachable when UNDO restored an unplaced state while
                    // has_ever_been_placed stayed true.
                    note = Some("MOVE ignored: robot not placed".to_string());
                }
            }
            Command::Left => {
                if current.is_placed() {
                    history = history.record(current);
                    current = current.rotate_left();
                } else {
                    note = Some("LEFT ignored: robot not placed".to_string());
                }
            }
            Command::Right => {
                if current.is_placed() {
                    history = history.record(current);
                    current = current.rotate_right();
                } else {
                    note = Some("RIGHT ignored: robot not placed".to_string());
                }
            }
            Command::Report => {
                if !current.is_placed() {
                    note = Some("REPORT ignored: robot not placed".to_string());
                }
                report = current.report();
            }
            Command::Reset => {
                history = history.record(current);
                current = RobotState::Unplaced;
                has_ever_been_placed = false;
            }
            Command::Undo => match history.pop() {
                Some((restored, rest)) => {
                    history = rest;
                    current = restored;
                    // Shallow recomputation: only the restored state and
                    // emptiness of the remaining history are consulted,
                    // never the full history contents.
                    if current.is_placed() {
                        has_ever_been_placed = true;
                    } else if history.is_empty() {
                        has_ever_been_placed = false;
                    }
                }
                None => {
                    note = Some("UNDO ignored: no history".to_string());
                }
            },
        }

        match &note {
            Some(note) => debug!(%command, note = %note, "command rejected"),
            None => trace!(%command, "command applied"),
        }

        StepResult {
            sim: Simulation {
                current,
                history,
                has_ever_been_placed,
            },
            report,
            note,
            ignored: false,
        }
    }
}
