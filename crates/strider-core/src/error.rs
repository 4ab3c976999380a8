//! Error types for Strider

use thiserror::Error;

/// The main error type for Strider operations
#[derive(Debug, Error)]
pub enum StriderError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Lane bounds inverted: lane_min {min} is greater than lane_max {max}")]
    InvertedLaneBounds { min: i32, max: i32 },

    #[error("Script error: {0}")]
    Script(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("TOML serialization error: {0}")]
    TomlSer(String),
}

/// Result type alias for Strider operations
pub type Result<T> = std::result::Result<T, StriderError>;

impl From<toml::de::Error> for StriderError {
    fn from(err: toml::de::Error) -> Self {
        StriderError::TomlParse(err.to_string())
    }
}

impl From<toml::ser::Error> for StriderError {
    fn from(err: toml::ser::Error) -> Self {
        StriderError::TomlSer(err.to_string())
    }
}
