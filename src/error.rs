// src/error.rs

use std::path::PathBuf;

/// Errors raised while reading or analyzing a tensile test sample.
#[derive(Debug, thiserror::Error)]
pub enum TensileError {
    /// The input path does not resolve to a file.
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error other than a missing file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// A metadata or data row is malformed.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    /// A numeric precondition does not hold.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TensileError {
    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        TensileError::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        TensileError::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, TensileError>;

// src/error.rs
