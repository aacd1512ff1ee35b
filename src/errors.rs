/*!
 * Error types for the scriptsync application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while parsing the analysis transcript
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A transcript row is missing fields or carries unparseable data
    #[error("malformed analysis row at line {line}: {message}")]
    MalformedRow {
        /// 1-based line number in the transcript file
        line: usize,
        /// What was wrong with the row
        message: String,
    },

    /// The transcript contained no rows at all
    #[error("analysis transcript is empty")]
    Empty,
}

/// Per-title failures during boundary resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    /// The title's token sequence has no contiguous match in the script
    #[error("title {index} not found in script: \"{text}\"")]
    NotFound {
        /// 1-based position of the title in the script's line order
        index: usize,
        /// Raw title line text
        text: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from analysis transcript parsing
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Error from title resolution
    #[error("Title error: {0}")]
    Title(#[from] TitleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
