use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineTallyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported language for file: {path}")]
    UnsupportedLanguage { path: PathBuf },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl LineTallyError {
    /// Stable discriminant name, used when failures are reported per file.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::UnsupportedLanguage { .. } => "UnsupportedLanguage",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, LineTallyError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
