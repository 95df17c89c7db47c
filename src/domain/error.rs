use std::path::PathBuf;

use thiserror::Error;

use crate::io::SchemaError;

/// Errors produced while parsing `.env` text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvParseError {
    /// A non-comment, non-blank line had no `=` separator.
    #[error("invalid syntax at line {line}: {text}")]
    MissingSeparator { line: usize, text: String },
}

/// Errors produced by the `check` command boundary.
#[derive(Debug, Error)]
pub enum CheckError {
    /// An input path does not exist; reported before any parsing starts.
    #[error("{} not found", .path.display())]
    MissingInput { path: PathBuf },

    /// An input file exists but could not be read.
    #[error("failed to read `{path}`: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The env file contains a malformed line.
    #[error(transparent)]
    Parse(#[from] EnvParseError),

    /// The schema document could not be decoded.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
