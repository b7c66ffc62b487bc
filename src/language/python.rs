use regex::Regex;

use super::{CodeCategory, LanguageSyntax, code_portion};

const LINE_MARKERS: &[&str] = &["#"];
const BLOCK_MARKERS: &[(&str, &str)] = &[(r#"""""#, r#"""""#), ("'''", "'''")];

/// Python syntax rules. Triple-quoted strings are treated as
/// block-comment-like markers (docstrings), matching the basic comment
/// support: a triple quote opening a plain string is indistinguishable
/// from a docstring at line granularity.
#[derive(Debug)]
pub struct PythonSyntax {
    import_re: Regex,
    class_re: Regex,
    def_re: Regex,
    control_re: Regex,
    return_re: Regex,
    variable_re: Regex,
    assignment_re: Regex,
    call_re: Regex,
}

impl PythonSyntax {
    #[must_use]
    pub fn new() -> Self {
        Self {
            import_re: Regex::new(r"^(?:import|from)\s").expect("Invalid regex"),
            class_re: Regex::new(r"^class\b").expect("Invalid regex"),
            def_re: Regex::new(r"^(?:async\s+)?def\b").expect("Invalid regex"),
            control_re: Regex::new(
                r"^(?:if|elif|else|for|while|try|except|finally|with|match|case|break|continue|pass|raise|assert)\b",
            )
            .expect("Invalid regex"),
            return_re: Regex::new(r"^return\b").expect("Invalid regex"),
            variable_re: Regex::new(r"^[\w.]+\s*:\s*\S").expect("Invalid regex"),
            assignment_re: Regex::new(
                r#"^[\w.\[\]'"]+\s*(?:(?:[-+*/%&|^@]|//|\*\*|<<|>>)=|=(?:[^=]|$))"#,
            )
            .expect("Invalid regex"),
            call_re: Regex::new(r"^[\w.]+\s*\(").expect("Invalid regex"),
        }
    }
}

impl Default for PythonSyntax {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageSyntax for PythonSyntax {
    fn name(&self) -> &'static str {
        "Python"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["py", "pyi"]
    }

    fn line_comment_markers(&self) -> &'static [&'static str] {
        LINE_MARKERS
    }

    fn block_comment_markers(&self) -> &'static [(&'static str, &'static str)] {
        BLOCK_MARKERS
    }

    fn is_comment_line(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return false;
        }
        if trimmed.starts_with('#') {
            return true;
        }
        // Docstring rule: a trimmed line starting or ending with a triple
        // quote is comment-like, including the closing line of a
        // multi-line docstring.
        self.block_comment_markers()
            .iter()
            .any(|&(open, _)| trimmed.starts_with(open) || trimmed.ends_with(open))
    }

    fn classify_code_line(&self, line: &str) -> CodeCategory {
        let code = code_portion(line, LINE_MARKERS, BLOCK_MARKERS).trim();
        if self.import_re.is_match(code) {
            return CodeCategory::Import;
        }
        if self.class_re.is_match(code) {
            return CodeCategory::ClassDeclaration;
        }
        if self.def_re.is_match(code) {
            // An indented def lives inside a class or another scope and is
            // reported as a method; a top-level def is a function.
            return if line.starts_with([' ', '\t']) {
                CodeCategory::MethodDeclaration
            } else {
                CodeCategory::FunctionDeclaration
            };
        }
        if self.control_re.is_match(code) {
            return CodeCategory::ControlFlow;
        }
        if self.return_re.is_match(code) {
            return CodeCategory::ReturnStatement;
        }
        if self.variable_re.is_match(code) {
            return CodeCategory::VariableDeclaration;
        }
        if self.assignment_re.is_match(code) {
            return CodeCategory::Assignment;
        }
        if self.call_re.is_match(code) {
            return CodeCategory::FunctionCall;
        }
        CodeCategory::OtherCode
    }
}

#[cfg(test)]
#[path = "python_tests.rs"]
mod tests;
