/*!
 * Result Reporting
 * Text rendering of simulation results for the terminal
 */

use crate::process::ProcessMetrics;
use crate::scheduler::{Policy, SimulationResult};
use std::fmt::{self, Write};

const RULE: &str = "---------------------------------------------------------";

/// Table renderer for one [`SimulationResult`]
pub struct Report<'a> {
    result: &'a SimulationResult,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a SimulationResult) -> Self {
        Self { result }
    }

    /// `[ A -> B -> A ]`
    pub fn execution_order(&self) -> String {
        let names = self.result.trace.names();
        if names.is_empty() {
            return "[ ]".to_string();
        }
        format!("[ {} ]", names.join(" -> "))
    }

    /// Rows sorted by process name
    fn rows(&self) -> Vec<&'a ProcessMetrics> {
        let mut rows: Vec<&ProcessMetrics> = self.result.processes.iter().collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }

    fn write_table(&self, out: &mut impl Write) -> fmt::Result {
        let with_history = self.result.policy == Policy::Ag;

        writeln!(out, "--- {} ---", self.result.policy.title())?;
        writeln!(out, "Execution Order: {}", self.execution_order())?;
        writeln!(out, "{}", RULE)?;
        write!(out, "{:<10} {:<15} {:<15}", "Process", "Waiting", "Turnaround")?;
        if with_history {
            write!(out, " Quantum History")?;
        }
        writeln!(out)?;
        writeln!(out, "{}", RULE)?;

        for row in self.rows() {
            write!(out, "{:<10} {:<15} {:<15}", row.name, row.waiting, row.turnaround)?;
            if with_history {
                write!(out, " {:?}", row.quantum_history)?;
            }
            writeln!(out)?;
        }

        writeln!(out, "{}", RULE)?;
        writeln!(
            out,
            "{:<10} {:<15.1} {:<15.1}",
            "Average",
            self.result.average_waiting(),
            self.result.average_turnaround()
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_table(f)
    }
}
