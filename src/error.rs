use std::path::PathBuf;
use thiserror::Error;

/// A present field value that fails its required conversion.
///
/// Decoding is strict: a token that is present (not the `-` placeholder)
/// either converts to the field's type or the whole line is rejected.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid numeric value '{token}' for field '{field}'")]
    Numeric { field: &'static str, token: String },

    #[error("invalid timestamp '{value}'")]
    Timestamp { value: String },
}

/// Errors surfaced by the parsing engine.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not find file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("line {line_number}: {source}")]
    Format {
        line_number: u64,
        #[source]
        source: FormatError,
    },

    /// A file so small that `file_size / 100` truncates to zero has no
    /// meaningful percentage denominator; reported instead of clamping.
    #[error("file too small for a progress estimate ({file_size} bytes)")]
    ProgressEstimation { file_size: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
