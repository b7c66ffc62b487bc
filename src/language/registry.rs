use std::collections::HashMap;
use std::path::Path;

use crate::error::{LineTallyError, Result};

use super::{JavaScriptSyntax, JavaSyntax, LanguageSyntax, PythonSyntax};

/// Maps file extensions to registered language syntaxes. Extension
/// matching is case-insensitive: extensions are lowercased both at
/// registration and at lookup.
pub struct LanguageRegistry {
    languages: Vec<Box<dyn LanguageSyntax>>,
    extension_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extension_map: HashMap::new(),
        }
    }

    pub fn register(&mut self, language: Box<dyn LanguageSyntax>) {
        let idx = self.languages.len();
        for ext in language.extensions() {
            self.extension_map.insert((*ext).to_ascii_lowercase(), idx);
        }
        self.languages.push(language);
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&dyn LanguageSyntax> {
        self.extension_map
            .get(&ext.to_ascii_lowercase())
            .map(|&idx| &*self.languages[idx])
    }

    /// Detect the language of `path` from its file extension.
    ///
    /// # Errors
    /// Returns `UnsupportedLanguage` when the extension is missing or not
    /// registered. This is recoverable: batch counting records it against
    /// the file instead of aborting.
    pub fn detect(&self, path: &Path) -> Result<&dyn LanguageSyntax> {
        path.extension()
            .and_then(std::ffi::OsStr::to_str)
            .and_then(|ext| self.get_by_extension(ext))
            .ok_or_else(|| LineTallyError::UnsupportedLanguage {
                path: path.to_path_buf(),
            })
    }

    pub fn all(&self) -> impl Iterator<Item = &dyn LanguageSyntax> {
        self.languages.iter().map(|language| &**language)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(JavaSyntax::new()));
        registry.register(Box::new(JavaScriptSyntax::new()));
        registry.register(Box::new(JavaScriptSyntax::typescript()));
        registry.register(Box::new(PythonSyntax::new()));
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
