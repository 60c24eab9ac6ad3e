//! Subcommand implementations and shared table rendering.

use comfy_table::Table;

use memspan_core::report::SessionReport;
use memspan_report::records::{judgment_table, recall_table, TableExport};

pub mod preview;
pub mod run;
pub mod show;

/// Print the score summary and both report tables.
pub(crate) fn print_report(report: &SessionReport) {
    println!("\nJudgment score: {} / 5", report.scores.judgment);
    println!("Recall score:   {} / 5", report.scores.recall);
    println!("Total:          {} / 10", report.scores.total());

    println!("\nJudgments");
    print_table(&judgment_table(report));
    println!("\nRecall");
    print_table(&recall_table(report));
}

fn print_table(export: &TableExport) {
    let mut table = Table::new();
    table.set_header(export.headers.clone());
    for row in &export.rows {
        table.add_row(row.clone());
    }
    println!("{table}");
}
