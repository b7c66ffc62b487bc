use regex::Regex;

use super::{CodeCategory, LanguageSyntax, code_portion};

const LINE_MARKERS: &[&str] = &["//"];
const BLOCK_MARKERS: &[(&str, &str)] = &[("/*", "*/")];

/// Java syntax rules. Classification is keyword- and pattern-based; Java
/// has no free functions, so `FunctionDeclaration` is never produced.
#[derive(Debug)]
pub struct JavaSyntax {
    import_re: Regex,
    class_re: Regex,
    control_re: Regex,
    return_re: Regex,
    variable_re: Regex,
    assignment_re: Regex,
    method_re: Regex,
    call_re: Regex,
}

impl JavaSyntax {
    #[must_use]
    pub fn new() -> Self {
        Self {
            import_re: Regex::new(r"^import\s").expect("Invalid regex"),
            class_re: Regex::new(
                r"^(?:(?:public|protected|private|abstract|final|static|strictfp)\s+)*(?:class|interface|enum|record)\s+[A-Za-z_]",
            )
            .expect("Invalid regex"),
            control_re: Regex::new(
                r"^(?:if|else|for|while|do|switch|case|default|try|catch|finally|break|continue|throw)\b",
            )
            .expect("Invalid regex"),
            return_re: Regex::new(r"^return\b").expect("Invalid regex"),
            variable_re: Regex::new(
                r"^(?:(?:public|protected|private|static|final|transient|volatile)\s+)*(?:var|byte|short|int|long|float|double|boolean|char|[A-Z][\w<>\[\],]*)(?:\[\])*\s+\w+\s*(?:=|;|,|$)",
            )
            .expect("Invalid regex"),
            assignment_re: Regex::new(
                r"^[\w.\[\]]+\s*(?:(?:[-+*/%&|^]|<<|>>>?)=|=(?:[^=]|$))",
            )
            .expect("Invalid regex"),
            method_re: Regex::new(
                r"^(?:(?:public|protected|private|static|final|abstract|synchronized|native|default)\s+)+[\w<>\[\],.\s]+\(|^(?:void|[A-Z][\w<>\[\],]*)\s+\w+\s*\(",
            )
            .expect("Invalid regex"),
            call_re: Regex::new(r"^[\w.]+\s*\(").expect("Invalid regex"),
        }
    }
}

impl Default for JavaSyntax {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageSyntax for JavaSyntax {
    fn name(&self) -> &'static str {
        "Java"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["java"]
    }

    fn line_comment_markers(&self) -> &'static [&'static str] {
        LINE_MARKERS
    }

    fn block_comment_markers(&self) -> &'static [(&'static str, &'static str)] {
        BLOCK_MARKERS
    }

    fn classify_code_line(&self, line: &str) -> CodeCategory {
        let code = code_portion(line, LINE_MARKERS, BLOCK_MARKERS).trim();
        if self.import_re.is_match(code) {
            return CodeCategory::Import;
        }
        if self.class_re.is_match(code) {
            return CodeCategory::ClassDeclaration;
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
        if self.method_re.is_match(code) {
            return CodeCategory::MethodDeclaration;
        }
        if self.call_re.is_match(code) {
            return CodeCategory::FunctionCall;
        }
        CodeCategory::OtherCode
    }
}

#[cfg(test)]
#[path = "java_tests.rs"]
mod tests;
