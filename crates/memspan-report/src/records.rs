//! Flat tabular exports of a session report.
//!
//! Rows are ordered string records ready for any delimited serialization.
//! Identity columns come first on every row, defaulted to the explicit
//! placeholder when a field was not supplied.

use serde::Serialize;

use memspan_core::report::SessionReport;

/// A rendered table: ordered headers plus string rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableExport {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

fn outcome(correct: bool) -> &'static str {
    if correct {
        "correct"
    } else {
        "incorrect"
    }
}

fn identity_columns(report: &SessionReport) -> [String; 3] {
    [
        report.identity.name_or_default().to_string(),
        report.identity.class_or_default().to_string(),
        report.identity.id_or_default().to_string(),
    ]
}

/// Judgment report rows, identity-prefixed.
pub fn judgment_table(report: &SessionReport) -> TableExport {
    let identity = identity_columns(report);
    let rows = report
        .judgments
        .iter()
        .map(|row| {
            let mut out = identity.to_vec();
            out.extend([
                row.ordinal.to_string(),
                row.statement.clone(),
                row.chosen.to_string(),
                row.answer.to_string(),
                outcome(row.correct).to_string(),
            ]);
            out
        })
        .collect();
    TableExport {
        headers: vec![
            "name",
            "class",
            "id",
            "ordinal",
            "statement",
            "chosen",
            "answer",
            "outcome",
        ],
        rows,
    }
}

/// Recall report rows, identity-prefixed. Blank submissions render as the
/// "not submitted" marker.
pub fn recall_table(report: &SessionReport) -> TableExport {
    let identity = identity_columns(report);
    let rows = report
        .recall
        .iter()
        .map(|entry| {
            let mut out = identity.to_vec();
            out.extend([
                entry.ordinal.to_string(),
                entry.gold.clone(),
                entry.submitted_or_marker().to_string(),
                outcome(entry.correct).to_string(),
            ]);
            out
        })
        .collect();
    TableExport {
        headers: vec!["name", "class", "id", "ordinal", "gold", "submitted", "outcome"],
        rows,
    }
}
