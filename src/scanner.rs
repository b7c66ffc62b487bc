use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::{LineTallyError, Result};

/// Trait for scanning directories and finding files to count.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths, sorted.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Keeps files whose extension is in the configured set and whose path
/// matches no exclude pattern. Extension matching is case-insensitive,
/// consistent with language detection.
#[derive(Debug)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
    exclude: GlobSet,
}

impl ExtensionFilter {
    /// Build a filter from an extension list and exclude glob patterns.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if any exclude pattern is not a valid glob.
    pub fn new(extensions: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|source| LineTallyError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let exclude = builder
            .build()
            .map_err(|source| LineTallyError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source,
            })?;

        Ok(Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.to_ascii_lowercase())
                .collect(),
            exclude,
        })
    }

    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        self.has_matching_extension(path) && !self.exclude.is_match(path)
    }

    fn has_matching_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext))
    }
}

/// Recursive directory walker. With `use_gitignore`, paths ignored by git
/// are skipped even outside a repository checkout.
pub struct DirectoryScanner {
    filter: ExtensionFilter,
    use_gitignore: bool,
}

impl DirectoryScanner {
    #[must_use]
    pub const fn new(filter: ExtensionFilter, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    fn scan_walkdir(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file() && self.filter.matches(entry.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }

    fn scan_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        use ignore::WalkBuilder;

        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|entry| self.filter.matches(entry.path()))
            .map(ignore::DirEntry::into_path)
            .collect()
    }
}

impl FileScanner for DirectoryScanner {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = if self.use_gitignore {
            self.scan_gitignore(root)
        } else {
            self.scan_walkdir(root)
        };
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
