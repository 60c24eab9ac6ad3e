//! The `memspan show` command: re-render a saved report.

use std::path::PathBuf;

use anyhow::Result;

use memspan_core::report::SessionReport;
use memspan_report::text::to_markdown;

pub fn execute(report_path: PathBuf, format: String) -> Result<()> {
    let report = SessionReport::load_json(&report_path)?;

    match format.as_str() {
        "markdown" | "md" => println!("{}", to_markdown(&report)),
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => super::print_report(&report),
    }

    Ok(())
}
