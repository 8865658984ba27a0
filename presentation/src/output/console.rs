//! Console output formatter for research results

use colored::Colorize;
use research_domain::{BatchSummary, CompositeResult, JobOutcome, WorkflowResult};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Formats research results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Summary of one composite research call
    pub fn format_research(
        subject: &str,
        context: &str,
        result: &CompositeResult,
        elapsed: Duration,
        saved: &[PathBuf],
    ) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Deep Research: {}", subject)));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Organism:".cyan().bold(), context));
        output.push_str(&format!(
            "{} {:.1}s\n",
            "Duration:".cyan().bold(),
            elapsed.as_secs_f64()
        ));

        output.push_str(&Self::section_header("Summary"));
        let report = result.report_content();
        output.push_str(&format!(
            "  Report available: {}\n",
            if report.is_some() { "Yes" } else { "No" }
        ));
        output.push_str(&format!(
            "  Report length:    {}\n",
            report.map_or_else(|| "N/A".to_string(), |r| format!("{} chars", r.chars().count()))
        ));
        output.push_str(&format!(
            "  Visualizations:   {}\n",
            result.visualization_count()
        ));
        output.push_str(&format!("  Sources:          {}\n", result.source_count()));

        let metrics = [
            ("Overall quality:", result.overall_quality()),
            ("Completeness:", result.completeness()),
            ("Confidence:", result.confidence()),
        ];
        if metrics.iter().any(|(_, v)| v.is_some()) {
            output.push_str(&Self::section_header("Quality"));
            for (label, value) in metrics {
                output.push_str(&format!("  {:<17} {}\n", label, Self::percent(value)));
            }
        }

        let data_sources = result.data_sources();
        if !data_sources.is_empty() {
            output.push_str(&format!(
                "  {:<17} {}\n",
                "Data sources:",
                data_sources.join(", ")
            ));
        }

        if !saved.is_empty() {
            output.push_str(&Self::section_header("Saved"));
            for path in saved {
                output.push_str(&format!("  {}\n", path.display()));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Workflow result: plan, counts and the final report text
    pub fn format_workflow(query: &str, result: &WorkflowResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Research Workflow"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Query:".cyan().bold(), query));
        output.push_str(&format!(
            "{} {}\n",
            "Search tasks:".cyan().bold(),
            result.tasks.array_len().unwrap_or(0)
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Sources:".cyan().bold(),
            result.source_count()
        ));

        output.push_str(&Self::section_header("Research Plan"));
        output.push_str(&Self::indent(&result.plan, "  "));
        output.push('\n');

        output.push_str(&Self::section_header("Final Report"));
        match result.report_text() {
            Some(text) => output.push_str(text),
            None => output.push_str(&Self::format_json(result.report.as_value())),
        }
        output.push('\n');

        output.push_str(&Self::footer());
        output
    }

    /// Batch tally followed by one line per job
    pub fn format_batch(outcomes: &[JobOutcome]) -> String {
        let summary = BatchSummary::from_outcomes(outcomes);
        let mut output = String::new();

        output.push('\n');
        output.push_str(&Self::header("Batch Research Summary"));
        output.push_str("\n\n");
        output.push_str(&format!(
            "{}\n",
            format!("Successful: {}/{}", summary.succeeded, summary.total).green()
        ));
        output.push_str(&format!(
            "{}\n\n",
            format!("Failed: {}/{}", summary.failed, summary.total).red()
        ));

        for outcome in outcomes {
            match outcome {
                JobOutcome::Success { key, .. } => {
                    output.push_str(&format!("{} {}: Success\n", "v".green(), key));
                }
                JobOutcome::Failure { key, reason, kind } => {
                    output.push_str(&format!(
                        "{} {}: {} {}\n",
                        "x".red(),
                        key,
                        reason,
                        format!("[{}]", kind).dimmed()
                    ));
                }
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn percent(value: Option<f64>) -> String {
        value.map_or_else(|| "N/A".to_string(), |v| format!("{:.0}%", v * 100.0))
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
