use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LineTallyError, Result};

pub const CONFIG_FILE_NAME: &str = ".line-tally.toml";

const DEFAULT_EXTENSIONS: &[&str] = &[
    "java", "js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts", "py", "pyi",
];

const DEFAULT_EXCLUDES: &[&str] = &[
    "**/node_modules/**",
    "**/.git/**",
    "**/target/**",
    "**/dist/**",
    "**/build/**",
    "**/__pycache__/**",
    "**/.venv/**",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default: DefaultConfig,
    pub exclude: ExcludeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultConfig {
    /// File extensions scanned in directories.
    pub extensions: Vec<String>,
    /// Count granular code categories by default.
    pub granular: bool,
    /// Honor .gitignore files when scanning directories.
    pub use_gitignore: bool,
}

impl Default for DefaultConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect(),
            granular: false,
            use_gitignore: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcludeConfig {
    pub patterns: Vec<String>,
}

impl Default for ExcludeConfig {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_EXCLUDES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl Config {
    /// Validate semantic correctness beyond TOML syntax.
    ///
    /// # Errors
    /// Returns an error when an exclude pattern is not a valid glob or the
    /// extension list is empty.
    pub fn validate(&self) -> Result<()> {
        if self.default.extensions.is_empty() {
            return Err(LineTallyError::Config(
                "default.extensions cannot be empty".to_string(),
            ));
        }
        for pattern in &self.exclude.patterns {
            globset::Glob::new(pattern).map_err(|source| LineTallyError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        }
        Ok(())
    }

    #[must_use]
    pub fn template() -> String {
        r#"# line-tally configuration file

[default]
# File extensions scanned in directories
extensions = ["java", "js", "jsx", "ts", "tsx", "py"]

# Count granular code categories (imports, declarations, calls, ...)
granular = false

# Honor .gitignore files when scanning directories
use_gitignore = true

# Exclude patterns (glob syntax)
[exclude]
patterns = [
    "**/node_modules/**",
    "**/.git/**",
    "**/target/**",
    "**/__pycache__/**",
]
"#
        .to_string()
    }
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to
    /// defaults when no config file exists.
    ///
    /// # Errors
    /// Returns an error if an existing config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing or cannot be parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

#[derive(Debug, Default)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let local = Path::new(CONFIG_FILE_NAME);
        if local.exists() {
            self.load_from_path(local)
        } else {
            Ok(Config::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(LineTallyError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
