//! Batch execution of raw command lines.
//!
//! A convenience driver for tests and non-interactive hosts: it folds the
//! parser and the stepper over a sequence of lines and collects every
//! report produced along the way. Interactive hosts usually call the parser
//! and [`Simulation::step`] themselves so they can surface parse errors and
//! advisory notes per line.

use crate::command::Command;
use crate::core::Simulation;
use tracing::debug;

/// Result of running a whole program of raw lines.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProgramOutcome {
    /// The simulation after the last line.
    pub final_simulation: Simulation,
    /// Every successful REPORT output, in execution order.
    pub reports: Vec<String>,
}

/// Execute raw command lines against a fresh simulation.
///
/// Unparseable lines are skipped without touching the simulation; every
/// non-empty report is collected in order. Pure — no I/O.
///
/// # Example
///
/// ```rust
/// use tabletop::execute_program;
///
/// let outcome = execute_program([
///     "PLACE 1,2,EAST",
///     "MOVE",
///     "MOVE",
///     "LEFT",
///     "MOVE",
///     "REPORT",
/// ]);
/// assert_eq!(outcome.reports, vec!["3,3,NORTH".to_string()]);
/// ```
pub fn execute_program<I>(lines: I) -> ProgramOutcome
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut sim = Simulation::new();
    let mut reports = Vec::new();

    for line in lines {
        let line = line.as_ref();
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                debug!(line, %err, "skipping unparseable line");
                continue;
            }
        };
        let outcome = sim.step(command);
        sim = outcome.sim;
        if let Some(report) = outcome.report {
            reports.push(report);
        }
    }

    ProgramOutcome {
        final_simulation: sim,
        reports,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_reports_in_order() {
        let outcome = execute_program([
            "PLACE 0,0,NORTH",
            "REPORT",
            "MOVE",
            "REPORT",
        ]);
        assert_eq!(outcome.reports, vec!["0,0,NORTH", "0,1,NORTH"]);
    }

    #[test]
    fn unparseable_lines_are_skipped_without_side_effects() {
        let outcome = execute_program([
            "JUMP",
            "",
            "PLACE 1,1,EAST",
            "PLACE nope",
            "MOVE 2",
            "REPORT",
        ]);
        assert_eq!(outcome.reports, vec!["1,1,EAST"]);
        // the junk lines left no trace in history
        assert_eq!(outcome.final_simulation.undo_depth(), 1);
    }

    #[test]
    fn empty_program_yields_fresh_simulation() {
        let outcome = execute_program(Vec::<String>::new());
        assert_eq!(outcome.final_simulation, Simulation::new());
        assert!(outcome.reports.is_empty());
    }

    #[test]
    fn reports_before_placement_are_not_collected() {
        let outcome = execute_program(["MOVE", "REPORT"]);
        assert!(outcome.reports.is_empty());
        assert_eq!(outcome.final_simulation, Simulation::new());
    }
}
