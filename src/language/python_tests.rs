use super::*;

fn syntax() -> PythonSyntax {
    PythonSyntax::new()
}

#[test]
fn blank_line_detection() {
    let syntax = syntax();
    assert!(syntax.is_blank_line(""));
    assert!(syntax.is_blank_line("   "));
    assert!(!syntax.is_blank_line("print('hello')"));
}

#[test]
fn single_line_comment_detection() {
    let syntax = syntax();
    assert!(syntax.is_comment_line("# This is a comment"));
    assert!(syntax.is_comment_line("  # Indented comment"));
    assert!(!syntax.is_comment_line("print('hello')  # inline comment"));
}

#[test]
fn docstring_detection() {
    let syntax = syntax();
    assert!(syntax.is_comment_line(r#"""" This is a docstring """"#));
    assert!(syntax.is_comment_line(r#"  """ Indented docstring """"#));
    assert!(syntax.is_comment_line(r#"""" Start of docstring"#));
    assert!(syntax.is_comment_line(r#"End of docstring """"#));
    assert!(syntax.is_comment_line("''' Single-quoted docstring '''"));
}

#[test]
fn language_name() {
    assert_eq!(syntax().name(), "Python");
}

#[test]
fn classify_import() {
    let syntax = syntax();
    assert_eq!(syntax.classify_code_line("import os"), CodeCategory::Import);
    assert_eq!(
        syntax.classify_code_line("from typing import List"),
        CodeCategory::Import
    );
}

#[test]
fn classify_class_declaration() {
    assert_eq!(
        syntax().classify_code_line("class Parser:"),
        CodeCategory::ClassDeclaration
    );
}

#[test]
fn classify_function_and_method_declaration() {
    let syntax = syntax();
    assert_eq!(
        syntax.classify_code_line("def main():"),
        CodeCategory::FunctionDeclaration
    );
    assert_eq!(
        syntax.classify_code_line("async def fetch():"),
        CodeCategory::FunctionDeclaration
    );
    assert_eq!(
        syntax.classify_code_line("    def helper(self):"),
        CodeCategory::MethodDeclaration
    );
}

#[test]
fn classify_control_flow() {
    let syntax = syntax();
    assert_eq!(
        syntax.classify_code_line("    if count > 0:"),
        CodeCategory::ControlFlow
    );
    assert_eq!(
        syntax.classify_code_line("for item in items:"),
        CodeCategory::ControlFlow
    );
    assert_eq!(
        syntax.classify_code_line("raise ValueError(name)"),
        CodeCategory::ControlFlow
    );
}

#[test]
fn classify_return_statement() {
    assert_eq!(
        syntax().classify_code_line("    return total"),
        CodeCategory::ReturnStatement
    );
}

#[test]
fn classify_variable_declaration() {
    let syntax = syntax();
    assert_eq!(
        syntax.classify_code_line("count: int = 0"),
        CodeCategory::VariableDeclaration
    );
    assert_eq!(
        syntax.classify_code_line("name: str"),
        CodeCategory::VariableDeclaration
    );
}

#[test]
fn classify_assignment() {
    let syntax = syntax();
    assert_eq!(syntax.classify_code_line("count = 1"), CodeCategory::Assignment);
    assert_eq!(
        syntax.classify_code_line("total += n"),
        CodeCategory::Assignment
    );
    assert_eq!(
        syntax.classify_code_line("self.count = 0"),
        CodeCategory::Assignment
    );
}

#[test]
fn classify_function_call() {
    let syntax = syntax();
    assert_eq!(
        syntax.classify_code_line("print(count)"),
        CodeCategory::FunctionCall
    );
    assert_eq!(
        syntax.classify_code_line("self.reset()"),
        CodeCategory::FunctionCall
    );
}

#[test]
fn classify_other_code() {
    assert_eq!(
        syntax().classify_code_line("@app.route('/')"),
        CodeCategory::OtherCode
    );
}

#[test]
fn classify_ignores_trailing_comment() {
    assert_eq!(
        syntax().classify_code_line("count = 1  # import nothing"),
        CodeCategory::Assignment
    );
}
