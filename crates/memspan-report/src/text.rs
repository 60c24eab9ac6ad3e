//! Markdown rendering of a session report.

use memspan_core::report::SessionReport;

use crate::records::{judgment_table, recall_table, TableExport};

/// Format the report as markdown: scores followed by both tables.
pub fn to_markdown(report: &SessionReport) -> String {
    let mut md = String::new();

    md.push_str(&format!(
        "**Scores:** judgment {}/5, recall {}/5, total {}/10\n\n",
        report.scores.judgment,
        report.scores.recall,
        report.scores.total()
    ));

    md.push_str("### Judgments\n\n");
    md.push_str(&markdown_table(&judgment_table(report)));
    md.push('\n');

    md.push_str("### Recall\n\n");
    md.push_str(&markdown_table(&recall_table(report)));

    md
}

fn markdown_table(table: &TableExport) -> String {
    let mut out = String::new();
    out.push_str(&format!("| {} |\n", table.headers.join(" | ")));
    out.push('|');
    for _ in &table.headers {
        out.push_str("---|");
    }
    out.push('\n');
    for row in &table.rows {
        out.push_str(&format!("| {} |\n", row.join(" | ")));
    }
    out
}
