use std::io::Write;

use crate::counter::{BatchSummary, CodeBreakdown};
use crate::error::Result;

use super::ReportFormatter;

#[derive(Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_breakdown_line(output: &mut Vec<u8>, breakdown: &CodeBreakdown) {
        let pairs: Vec<String> = breakdown
            .entries()
            .iter()
            .map(|(name, count)| format!("{name}={count}"))
            .collect();
        writeln!(output, "    {}", pairs.join(", ")).ok();
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, summary: &BatchSummary) -> Result<String> {
        let mut output = Vec::new();

        for report in &summary.reports {
            let stats = report.tally.lines;
            writeln!(
                output,
                "{}: {} lines (code={}, comment={}, blank={}) [{}]",
                report.path.display(),
                stats.total,
                stats.code,
                stats.comment,
                stats.blank,
                report.language
            )
            .ok();

            if let Some(breakdown) = &report.tally.breakdown {
                Self::write_breakdown_line(&mut output, breakdown);
            }
        }

        if !summary.failures.is_empty() {
            if !summary.reports.is_empty() {
                writeln!(output).ok();
            }
            writeln!(output, "Failed:").ok();
            for failure in &summary.failures {
                writeln!(output, "  {}: {}", failure.path.display(), failure.error).ok();
            }
        }

        writeln!(output).ok();
        writeln!(output, "Summary:").ok();
        writeln!(
            output,
            "  Files: {} counted, {} failed",
            summary.reports.len(),
            summary.failures.len()
        )
        .ok();
        writeln!(output, "  Total lines: {}", summary.totals.total).ok();
        writeln!(output, "  Code: {}", summary.totals.code).ok();
        writeln!(output, "  Comments: {}", summary.totals.comment).ok();
        writeln!(output, "  Blank: {}", summary.totals.blank).ok();

        if let Some(breakdown) = &summary.breakdown {
            writeln!(output, "  Code categories:").ok();
            for (name, count) in breakdown.entries() {
                writeln!(output, "    {name}: {count}").ok();
            }
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
