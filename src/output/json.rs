use serde::Serialize;

use crate::counter::{BatchSummary, CodeBreakdown, FileFailure, FileReport};
use crate::error::Result;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: JsonSummary,
    files: Vec<JsonFile>,
    failures: Vec<JsonFailure>,
}

#[derive(Serialize)]
struct JsonSummary {
    counted_files: usize,
    failed_files: usize,
    total: usize,
    code: usize,
    comment: usize,
    blank: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<CodeBreakdown>,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    language: String,
    total: usize,
    code: usize,
    comment: usize,
    blank: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<CodeBreakdown>,
}

#[derive(Serialize)]
struct JsonFailure {
    path: String,
    kind: String,
    error: String,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, summary: &BatchSummary) -> Result<String> {
        let output = JsonOutput {
            summary: JsonSummary {
                counted_files: summary.reports.len(),
                failed_files: summary.failures.len(),
                total: summary.totals.total,
                code: summary.totals.code,
                comment: summary.totals.comment,
                blank: summary.totals.blank,
                categories: summary.breakdown,
            },
            files: summary.reports.iter().map(convert_report).collect(),
            failures: summary.failures.iter().map(convert_failure).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_report(report: &FileReport) -> JsonFile {
    JsonFile {
        path: report.path.display().to_string(),
        language: report.language.to_string(),
        total: report.tally.lines.total,
        code: report.tally.lines.code,
        comment: report.tally.lines.comment,
        blank: report.tally.lines.blank,
        categories: report.tally.breakdown,
    }
}

fn convert_failure(failure: &FileFailure) -> JsonFailure {
    JsonFailure {
        path: failure.path.display().to_string(),
        kind: failure.error.error_type().to_string(),
        error: failure.error.to_string(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
