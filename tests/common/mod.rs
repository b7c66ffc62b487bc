#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a line-tally config file in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".line-tally.toml", content);
    }

    /// The 12-line Java example from the documentation:
    /// 3 blank, 3 comment, 6 code.
    pub fn java_example() -> &'static str {
        "\
// Line counter example

public class Main {
    /* Block comment
       spanning lines */

    public static void main(String[] args) {
        int count = 5; // trailing comment
        System.out.println(count);

    }
}
"
    }
}
