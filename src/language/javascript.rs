use regex::Regex;

use super::{CodeCategory, LanguageSyntax, code_portion};

const LINE_MARKERS: &[&str] = &["//"];
const BLOCK_MARKERS: &[(&str, &str)] = &[("/*", "*/")];

const JS_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs"];
const TS_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts"];

/// JavaScript syntax rules. TypeScript shares them, surfaced under its own
/// display name and extension set.
#[derive(Debug)]
pub struct JavaScriptSyntax {
    name: &'static str,
    extensions: &'static [&'static str],
    import_re: Regex,
    class_re: Regex,
    function_re: Regex,
    control_re: Regex,
    return_re: Regex,
    variable_re: Regex,
    assignment_re: Regex,
    method_re: Regex,
    call_re: Regex,
}

impl JavaScriptSyntax {
    #[must_use]
    pub fn new() -> Self {
        Self::with_identity("JavaScript", JS_EXTENSIONS)
    }

    #[must_use]
    pub fn typescript() -> Self {
        Self::with_identity("TypeScript", TS_EXTENSIONS)
    }

    fn with_identity(name: &'static str, extensions: &'static [&'static str]) -> Self {
        Self {
            name,
            extensions,
            import_re: Regex::new(
                r"^import\b|^export\s+.+\bfrom\b|^(?:const|let|var)\s+.+=\s*require\s*\(",
            )
            .expect("Invalid regex"),
            class_re: Regex::new(r"^(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\b")
                .expect("Invalid regex"),
            function_re: Regex::new(r"^(?:export\s+)?(?:default\s+)?(?:async\s+)?function\b")
                .expect("Invalid regex"),
            control_re: Regex::new(
                r"^(?:if|else|for|while|do|switch|case|default|try|catch|finally|break|continue|throw)\b",
            )
            .expect("Invalid regex"),
            return_re: Regex::new(r"^return\b").expect("Invalid regex"),
            variable_re: Regex::new(r"^(?:export\s+)?(?:let|const|var)\b").expect("Invalid regex"),
            assignment_re: Regex::new(
                r"^[\w.$\[\]]+\s*(?:(?:[-+*/%&|^]|<<|>>>?|\*\*|&&|\|\|)=|=(?:[^=>]|$))",
            )
            .expect("Invalid regex"),
            method_re: Regex::new(
                r"^(?:static\s+)?(?:async\s+)?(?:get\s+|set\s+)?[A-Za-z_$][\w$]*\s*\([^)]*\)\s*\{$",
            )
            .expect("Invalid regex"),
            call_re: Regex::new(r"^[\w.$]+\s*\(").expect("Invalid regex"),
        }
    }
}

impl Default for JavaScriptSyntax {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageSyntax for JavaScriptSyntax {
    fn name(&self) -> &'static str {
        self.name
    }

    fn extensions(&self) -> &'static [&'static str] {
        self.extensions
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
        if self.function_re.is_match(code) {
            return CodeCategory::FunctionDeclaration;
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
        // Shorthand method bodies (`name(args) {`) are only recognizable
        // after the keyword checks above have been ruled out.
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
#[path = "javascript_tests.rs"]
mod tests;
