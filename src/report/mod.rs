//! Text table output for convergence records

pub mod format;

pub use format::format_sci;

use crate::analysis::observed_rate;
use crate::console::Console;
use crate::types::ConvergenceRecord;

const RULE_WIDTH: usize = 50;

/// Render the table for one dataset
///
/// Starts with a blank line, then the label, then the column header between
/// two rules. One row per record.
pub fn format_table(label: &str, records: &[ConvergenceRecord]) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("\n{}:\n", label));
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("{:>10} {:>12} {:>15}\n", "Iteration", "DOFs", "Error Norm"));
    out.push_str(&rule);
    out.push('\n');

    for record in records {
        out.push_str(&format!(
            "{:>10} {:>12} {:>15}\n",
            record.iteration,
            record.dofs,
            format_sci(record.error, 4)
        ));
    }

    out
}

/// Print a dataset table, followed by its observed rate in verbose mode
pub fn print_table(console: &Console, label: &str, records: &[ConvergenceRecord]) {
    console.table(format_table(label, records).trim_end_matches('\n'));

    if let Some(rate) = observed_rate(records) {
        console.detail(&format!("Observed rate: {:.3}", rate));
    }
}
