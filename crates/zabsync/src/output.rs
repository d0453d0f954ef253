//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders the run report in the format selected by `--output`. Table
//! uses `tabled`, structured formats use serde, plain emits one item
//! per line. The summary tally goes to stderr so piped stdout stays
//! machine-readable.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use zabsync_core::RunReport;

use crate::cli::{ColorMode, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Report rendering ─────────────────────────────────────────────────

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Detail")]
    detail: String,
}

/// Render the run report in the chosen format.
pub fn render_report(format: &OutputFormat, report: &RunReport) -> String {
    match format {
        OutputFormat::Table => {
            let rows: Vec<ReportRow> = report
                .entries()
                .iter()
                .map(|e| ReportRow {
                    item: e.item.clone(),
                    outcome: e.outcome.to_string(),
                    detail: e.detail.clone(),
                })
                .collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).expect("report serialization should not fail")
        }
        OutputFormat::JsonCompact => {
            serde_json::to_string(report).expect("report serialization should not fail")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).expect("report serialization should not fail")
        }
        OutputFormat::Plain => report
            .entries()
            .iter()
            .map(|e| format!("{}\t{}", e.item, e.outcome))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Print the report body plus the end-of-run tally and failure lines.
pub fn print_report(report: &RunReport, format: &OutputFormat, color: &ColorMode, quiet: bool) {
    print_output(&render_report(format, report), quiet);

    if quiet {
        return;
    }

    let colored = should_color(color);
    eprintln!("{}", summary_line(report, colored));
    for entry in report.failures() {
        eprintln!("  {}: {}", entry.item, entry.detail);
    }
}

/// One-line colored tally.
fn summary_line(report: &RunReport, color: bool) -> String {
    if !color {
        return report.summary();
    }
    format!(
        "{} processed: {} applied, {} skipped, {} failed",
        report.len(),
        report.applied_count().green(),
        report.skipped_count().yellow(),
        report.failed_count().red(),
    )
}
