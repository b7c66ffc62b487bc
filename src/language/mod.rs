mod java;
mod javascript;
mod python;
mod registry;

pub use java::JavaSyntax;
pub use javascript::JavaScriptSyntax;
pub use python::PythonSyntax;
pub use registry::LanguageRegistry;

/// Granular classification of a code line. Every code line falls into
/// exactly one category; `OtherCode` is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeCategory {
    Import,
    ClassDeclaration,
    MethodDeclaration,
    FunctionDeclaration,
    VariableDeclaration,
    FunctionCall,
    ControlFlow,
    ReturnStatement,
    Assignment,
    OtherCode,
}

/// Per-language syntax rules. Implementations are stateless: every call
/// examines only the line passed in. Multi-line comment state is owned by
/// the counting engine, never by the syntax value, so one instance can be
/// shared across files and threads.
pub trait LanguageSyntax: Send + Sync + std::fmt::Debug {
    /// Display name, e.g. "Java".
    fn name(&self) -> &'static str;

    /// File extensions (lowercase, without the dot) handled by this language.
    fn extensions(&self) -> &'static [&'static str];

    /// Markers that start a comment running to the end of the line.
    fn line_comment_markers(&self) -> &'static [&'static str];

    /// Open/close marker pairs for comments that may span lines.
    fn block_comment_markers(&self) -> &'static [(&'static str, &'static str)];

    /// A line is blank when it contains only whitespace.
    fn is_blank_line(&self, line: &str) -> bool {
        line.trim().is_empty()
    }

    /// A line is a comment when it consists entirely of a comment: it
    /// starts with a line-comment marker, starts with a block opener, or
    /// closes a block without code before an opener. A line mixing code
    /// with a trailing comment is not a comment line.
    fn is_comment_line(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return false;
        }
        if self
            .line_comment_markers()
            .iter()
            .any(|marker| trimmed.starts_with(marker))
        {
            return true;
        }
        self.block_comment_markers().iter().any(|&(open, close)| {
            trimmed.starts_with(open) || (trimmed.ends_with(close) && !trimmed.contains(open))
        })
    }

    /// Classify a line already known to be code into one granular
    /// category. Only the portion before any trailing comment marker is
    /// inspected; first matching pattern wins.
    fn classify_code_line(&self, line: &str) -> CodeCategory;
}

/// Portion of a code line before any trailing comment marker.
///
/// Marker detection is textual and does not parse string literals, so a
/// marker inside a string (e.g. `"http://"`) also truncates. Kept as a
/// known limitation of the basic comment support.
#[must_use]
pub fn code_portion<'a>(
    line: &'a str,
    line_markers: &[&str],
    block_markers: &[(&str, &str)],
) -> &'a str {
    let mut cut = line.len();
    for marker in line_markers {
        if let Some(pos) = line.find(marker)
            && pos < cut
        {
            cut = pos;
        }
    }
    for &(open, _) in block_markers {
        if let Some(pos) = line.find(open)
            && pos < cut
        {
            cut = pos;
        }
    }
    &line[..cut]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
