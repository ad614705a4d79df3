//! Error types for the range codec

use std::fmt;

/// Raised when a range string contains no integer or range at all.
///
/// Garbage around valid segments is never an error; only an input with nothing usable in
/// it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    input: String,
}

impl FormatError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The text that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No integer or range found in {:?}", self.input)
    }
}

impl std::error::Error for FormatError {}

/// Errors from rendering intervals to a structured format
#[derive(Debug)]
pub enum SerializeError {
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializeError::Json(err) => write!(f, "JSON serialization error: {}", err),
            SerializeError::Yaml(err) => write!(f, "YAML serialization error: {}", err),
        }
    }
}

impl std::error::Error for SerializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerializeError::Json(err) => Some(err),
            SerializeError::Yaml(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SerializeError {
    fn from(err: serde_json::Error) -> Self {
        SerializeError::Json(err)
    }
}

impl From<serde_yaml::Error> for SerializeError {
    fn from(err: serde_yaml::Error) -> Self {
        SerializeError::Yaml(err)
    }
}
