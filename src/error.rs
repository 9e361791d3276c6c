use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ParadeError>;

/// Error type covering the failure cases that can occur while assembling or
/// delivering a parade state report.
///
/// Per-cell and per-row problems (an unrecognised status, a bad `TILL` date,
/// an out-of-range roster row) are deliberately *not* represented here: they
/// degrade locally with a warning so that one bad cell never fails the whole
/// report.
#[derive(Debug, Error)]
pub enum ParadeError {
    /// Wrapper for IO failures such as reading config or workbook files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON parsing or serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Raised when the attendance source is unreachable or misconfigured.
    #[error("sheet source unavailable: {0}")]
    SourceUnavailable(String),

    /// Raised when the requested worksheet does not exist in the workbook.
    #[error("missing sheet '{0}' in workbook")]
    MissingSheet(String),

    /// Raised when delivering the rendered report fails. Never retried here;
    /// the caller owns retry policy.
    #[error("failed to deliver report: {0}")]
    Transmission(String),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when a caller-supplied report date cannot be parsed.
    #[error("invalid date '{0}', expected DD/MM/YYYY")]
    InvalidDate(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
