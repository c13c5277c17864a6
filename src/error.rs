//! Error types for sql-print-explainer

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while explaining print statements
#[derive(Error, Debug)]
pub enum ExplainError {
    #[error("Not a print statement: {statement}")]
    InvalidStatement { statement: String },

    #[error("Print statement references no tables: {statement}")]
    NoTableReferences { statement: String },

    #[error("Failed to read script file: {path}")]
    ScriptReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
