use std::io::Cursor;

use super::*;
use crate::language::{JavaSyntax, PythonSyntax};

const JAVA_EXAMPLE: &str = "\
// Line counter example

public class Main {
    /* Block comment
       spanning lines */

    public static void main(String[] args) {
        int count = 5; // trailing comment
        System.out.println(count);

    }
}
";

#[test]
fn count_empty_source() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    let tally = counter.count("");

    assert_eq!(tally.lines, LineStats::new());
    assert!(tally.breakdown.is_none());
}

#[test]
fn count_code_only() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    let tally = counter.count("public class A {\n    int x = 1;\n}");

    assert_eq!(tally.lines.total, 3);
    assert_eq!(tally.lines.code, 3);
    assert_eq!(tally.lines.comment, 0);
    assert_eq!(tally.lines.blank, 0);
}

#[test]
fn count_with_blank_lines() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    let tally = counter.count("int a;\n\n   \nint b;");

    assert_eq!(tally.lines.total, 4);
    assert_eq!(tally.lines.blank, 2);
    assert_eq!(tally.lines.code, 2);
}

#[test]
fn count_with_single_line_comments() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    let tally = counter.count("// header\nint x;\n  // indented\nint y;");

    assert_eq!(tally.lines.total, 4);
    assert_eq!(tally.lines.comment, 2);
    assert_eq!(tally.lines.code, 2);
}

#[test]
fn count_block_comment_spanning_lines() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    let tally = counter.count("/* Multi\n   line\n   comment */\nint x = 5;");

    assert_eq!(tally.lines.total, 4);
    assert_eq!(tally.lines.comment, 3);
    assert_eq!(tally.lines.code, 1);
}

#[test]
fn code_inside_block_comment_counts_as_comment() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    let tally = counter.count("/* start\nint hidden = 1;\n*/\nint visible = 2;");

    assert_eq!(tally.lines.comment, 3);
    assert_eq!(tally.lines.code, 1);
}

#[test]
fn terminator_line_with_trailing_code_is_comment() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    let tally = counter.count("/* start\ndone */ int x = 5;\nint y = 1;");

    assert_eq!(tally.lines.comment, 2);
    assert_eq!(tally.lines.code, 1);
}

#[test]
fn unclosed_opener_after_code_arms_block_state() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    let tally = counter.count("int x = 5; /* note\nstill inside */\nint y;");

    assert_eq!(tally.lines.total, 3);
    assert_eq!(tally.lines.comment, 2);
    assert_eq!(tally.lines.code, 1);
}

#[test]
fn single_line_block_comment_does_not_arm_state() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    let tally = counter.count("/* single */\nint x;");

    assert_eq!(tally.lines.comment, 1);
    assert_eq!(tally.lines.code, 1);
}

#[test]
fn trailing_comment_line_is_code() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    let tally = counter.count("int x = 1; // note");

    assert_eq!(tally.lines.code, 1);
    assert_eq!(tally.lines.comment, 0);
}

#[test]
fn java_documentation_example() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    let tally = counter.count(JAVA_EXAMPLE);

    assert_eq!(tally.lines.blank, 3);
    assert_eq!(tally.lines.comment, 3);
    assert_eq!(tally.lines.code, 6);
    assert_eq!(tally.lines.total, 12);
}

#[test]
fn granular_breakdown_partitions_code() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Granular);
    let tally = counter.count(JAVA_EXAMPLE);

    let breakdown = tally.breakdown.expect("granular mode sets a breakdown");
    assert_eq!(breakdown.sum(), tally.lines.code);
    assert_eq!(breakdown.class_declaration, 1);
    assert_eq!(breakdown.method_declaration, 1);
    assert_eq!(breakdown.variable_declaration, 1);
    assert_eq!(breakdown.function_call, 1);
    assert_eq!(breakdown.other_code, 2);
}

#[test]
fn basic_mode_has_no_breakdown() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    assert!(counter.count(JAVA_EXAMPLE).breakdown.is_none());
}

#[test]
fn counting_is_idempotent() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Granular);
    assert_eq!(counter.count(JAVA_EXAMPLE), counter.count(JAVA_EXAMPLE));
}

#[test]
fn total_invariant_holds() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    let tally = counter.count(JAVA_EXAMPLE);

    let stats = tally.lines;
    assert_eq!(stats.total, stats.blank + stats.comment + stats.code);
}

#[test]
fn whitespace_only_file_is_all_blank() {
    let syntax = PythonSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    let tally = counter.count("   \n\t\n");

    assert_eq!(tally.lines.total, 2);
    assert_eq!(tally.lines.blank, 2);
    assert_eq!(tally.lines.code, 0);
    assert_eq!(tally.lines.comment, 0);
}

#[test]
fn python_docstring_block() {
    let syntax = PythonSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    let tally = counter.count("\"\"\"\nModule docs.\n\"\"\"\nx = 1");

    assert_eq!(tally.lines.total, 4);
    assert_eq!(tally.lines.comment, 3);
    assert_eq!(tally.lines.code, 1);
}

#[test]
fn python_one_line_docstring() {
    let syntax = PythonSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Basic);
    let tally = counter.count("\"\"\"One line.\"\"\"\nx = 1");

    assert_eq!(tally.lines.comment, 1);
    assert_eq!(tally.lines.code, 1);
}

#[test]
fn count_reader_matches_count() {
    let syntax = JavaSyntax::new();
    let counter = LineCounter::new(&syntax, CountMode::Granular);

    let from_str = counter.count(JAVA_EXAMPLE);
    let from_reader = counter
        .count_reader(Cursor::new(JAVA_EXAMPLE.as_bytes()))
        .unwrap();

    assert_eq!(from_str, from_reader);
}
