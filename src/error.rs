//! Crate-level error types.

use std::fmt;

/// Errors produced by the vitrine crate.
#[derive(Debug)]
pub enum VitrineError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options or content parsing/serialization failure.
    OptionsParse(String),
    /// Failed to load or parse a model manifest.
    ModelLoad(String),
    /// A scroll trigger referenced an element with no layout box.
    MissingElement(String),
}

impl fmt::Display for VitrineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            Self::MissingElement(what) => {
                write!(f, "missing element: {what}")
            }
        }
    }
}

impl std::error::Error for VitrineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VitrineError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
