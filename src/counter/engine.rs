use std::io::BufRead;

use crate::language::LanguageSyntax;

use super::{CodeBreakdown, FileTally, LineStats};

/// Whether to bucket code lines into granular categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountMode {
    #[default]
    Basic,
    Granular,
}

/// Walks a file's lines once, top to bottom, bucketing each line as
/// blank, comment, or code. Block-comment state is a local of the
/// traversal, so a counter (and its syntax) can be reused across files.
pub struct LineCounter<'a> {
    syntax: &'a dyn LanguageSyntax,
    mode: CountMode,
}

impl<'a> LineCounter<'a> {
    #[must_use]
    pub const fn new(syntax: &'a dyn LanguageSyntax, mode: CountMode) -> Self {
        Self { syntax, mode }
    }

    /// Count an in-memory source. An empty source yields all-zero counts.
    #[must_use]
    pub fn count(&self, source: &str) -> FileTally {
        let mut tally = self.new_tally();
        let mut block_end = None;
        for line in source.lines() {
            self.process_line(line, &mut tally, &mut block_end);
        }
        tally
    }

    /// Count lines from a buffered reader (streaming, for large files).
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn count_reader<R: BufRead>(&self, reader: R) -> std::io::Result<FileTally> {
        let mut tally = self.new_tally();
        let mut block_end = None;
        for line_result in reader.lines() {
            let line = line_result?;
            self.process_line(&line, &mut tally, &mut block_end);
        }
        Ok(tally)
    }

    fn new_tally(&self) -> FileTally {
        FileTally {
            lines: LineStats::new(),
            breakdown: match self.mode {
                CountMode::Basic => None,
                CountMode::Granular => Some(CodeBreakdown::new()),
            },
        }
    }

    fn process_line(
        &self,
        line: &str,
        tally: &mut FileTally,
        block_end: &mut Option<&'static str>,
    ) {
        tally.lines.total += 1;

        if let Some(end) = *block_end {
            // The terminator line counts as comment even when code
            // follows the end marker on the same line.
            tally.lines.comment += 1;
            if line.contains(end) {
                *block_end = None;
            }
            return;
        }

        if self.syntax.is_blank_line(line) {
            tally.lines.blank += 1;
            return;
        }

        let unclosed = self.find_unclosed_block_open(line);
        if unclosed.is_some() || self.syntax.is_comment_line(line) {
            tally.lines.comment += 1;
            *block_end = unclosed;
            return;
        }

        tally.lines.code += 1;
        if let Some(breakdown) = tally.breakdown.as_mut() {
            breakdown.record(self.syntax.classify_code_line(line));
        }
    }

    /// End marker to wait for when the line opens a block comment without
    /// closing it. Only the earliest opener is considered; comments that
    /// close and reopen on one line are not tracked.
    fn find_unclosed_block_open(&self, line: &str) -> Option<&'static str> {
        let mut earliest: Option<(usize, &'static str, &'static str)> = None;
        for &(open, close) in self.syntax.block_comment_markers() {
            if let Some(pos) = line.find(open)
                && earliest.is_none_or(|(p, _, _)| pos < p)
            {
                earliest = Some((pos, open, close));
            }
        }
        let (pos, open, close) = earliest?;
        if line[pos + open.len()..].contains(close) {
            None
        } else {
            Some(close)
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
