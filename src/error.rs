//! Error types for the wage report engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The report pipeline itself never fails: malformed values degrade to
//! documented defaults during normalization. The only fallible surface is
//! the transport boundary, where a collaborator hands over a JSON snapshot
//! that may not be valid JSON at all.

use thiserror::Error;

/// The main error type for the wage report engine.
///
/// # Example
///
/// ```
/// use wage_report_engine::error::EngineError;
///
/// let error = EngineError::SnapshotParse {
///     message: "expected value at line 1 column 1".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Failed to parse dataset snapshot: expected value at line 1 column 1"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A dataset snapshot received from a collaborator was not valid JSON.
    #[error("Failed to parse dataset snapshot: {message}")]
    SnapshotParse {
        /// A description of the parse failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_parse_displays_message() {
        let error = EngineError::SnapshotParse {
            message: "unexpected end of input".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse dataset snapshot: unexpected end of input"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_snapshot_parse() -> EngineResult<()> {
            Err(EngineError::SnapshotParse {
                message: "bad".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_snapshot_parse()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
