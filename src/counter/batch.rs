use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{LineTallyError, Result};
use crate::language::LanguageRegistry;

use super::{CodeBreakdown, CountMode, FileTally, LineCounter, LineStats};

/// File size threshold for streaming reads (10 MB)
const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

/// Counts for one successfully processed file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub language: &'static str,
    pub tally: FileTally,
}

/// A file that could not be counted, with the error that occurred.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: LineTallyError,
}

/// Outcome of counting a batch of files: per-file reports in input order,
/// per-file failures, and combined totals over the successful reports.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub reports: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
    pub totals: LineStats,
    pub breakdown: Option<CodeBreakdown>,
}

impl BatchSummary {
    #[must_use]
    pub fn new(reports: Vec<FileReport>, failures: Vec<FileFailure>) -> Self {
        let mut totals = LineStats::new();
        let mut breakdown: Option<CodeBreakdown> = None;
        for report in &reports {
            totals += report.tally.lines;
            if let Some(file_breakdown) = report.tally.breakdown {
                *breakdown.get_or_insert_with(CodeBreakdown::new) += file_breakdown;
            }
        }
        Self {
            reports,
            failures,
            totals,
            breakdown,
        }
    }
}

/// Detect the language of `path`, read it, and count its lines.
///
/// # Errors
/// Returns `UnsupportedLanguage` when the extension is not registered and
/// `FileRead` when the file is missing, unreadable, or not valid UTF-8.
pub fn count_file(
    path: &Path,
    registry: &LanguageRegistry,
    mode: CountMode,
) -> Result<FileReport> {
    let syntax = registry.detect(path)?;
    let counter = LineCounter::new(syntax, mode);

    let read_error = |source| LineTallyError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(read_error)?;
    let tally = if metadata.len() >= LARGE_FILE_THRESHOLD {
        let file = File::open(path).map_err(read_error)?;
        counter
            .count_reader(BufReader::new(file))
            .map_err(read_error)?
    } else {
        let content = fs::read_to_string(path).map_err(read_error)?;
        counter.count(&content)
    };

    Ok(FileReport {
        path: path.to_path_buf(),
        language: syntax.name(),
        tally,
    })
}

/// Count every path independently, in parallel. A failure on one file is
/// recorded against that file and never aborts the rest of the batch;
/// combined totals cover successful reports only.
#[must_use]
pub fn count_files(
    paths: &[PathBuf],
    registry: &LanguageRegistry,
    mode: CountMode,
) -> BatchSummary {
    let outcomes: Vec<_> = paths
        .par_iter()
        .map(|path| {
            count_file(path, registry, mode).map_err(|error| FileFailure {
                path: path.clone(),
                error,
            })
        })
        .collect();

    let mut reports = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(report) => reports.push(report),
            Err(failure) => failures.push(failure),
        }
    }
    BatchSummary::new(reports, failures)
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
