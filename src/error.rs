//! Error types for the termination protection engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions in the engine. Every failure is local to one
//! call and deterministic; nothing is retried internally.

use thiserror::Error;

/// The main error type for the termination protection engine.
///
/// All operations in the engine return this error type. The variants fall
/// into two caller-visible kinds: invalid arguments (a supplied fact or
/// parameter violates a precondition, detected before any computation) and
/// invalid operations (a computation step produced a date outside the
/// representable calendar range, or an internal consistency precondition was
/// violated during a query).
///
/// # Example
///
/// ```
/// use worksafe_engine::error::EngineError;
///
/// let error = EngineError::UnrecognizedReason {
///     reason: "sabbatical".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Absence reason 'sabbatical' is not recognized"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A supplied fact or parameter violated a precondition.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The argument that was invalid.
        field: String,
        /// A description of the violated precondition.
        message: String,
    },

    /// A numeric argument was outside its permitted range.
    #[error("Argument '{field}' out of range: {message}")]
    OutOfRange {
        /// The argument that was out of range.
        field: String,
        /// A description of the permitted range.
        message: String,
    },

    /// The absence reason was not a member of the closed reason set.
    #[error("Absence reason '{reason}' is not recognized")]
    UnrecognizedReason {
        /// The reason string that failed to parse.
        reason: String,
    },

    /// The salary continuation scale was not a member of the closed scale set.
    #[error("Salary continuation scale '{scale}' is not recognized")]
    UnrecognizedScale {
        /// The scale string that failed to parse.
        scale: String,
    },

    /// A computation step violated an internal consistency precondition or
    /// produced a date outside the representable calendar range.
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// A description of the violated precondition.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Creates an [`EngineError::InvalidOperation`] for a date that left the
    /// representable calendar range.
    pub(crate) fn date_out_of_range(context: &str) -> Self {
        EngineError::InvalidOperation {
            message: format!("{context} results in a date outside the representable range"),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_displays_field_and_message() {
        let error = EngineError::InvalidArgument {
            field: "start_date".to_string(),
            message: "cannot be after the termination date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid argument 'start_date': cannot be after the termination date"
        );
    }

    #[test]
    fn test_out_of_range_displays_field_and_message() {
        let error = EngineError::OutOfRange {
            field: "sick_days".to_string(),
            message: "cannot be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Argument 'sick_days' out of range: cannot be negative"
        );
    }

    #[test]
    fn test_unrecognized_reason_displays_reason() {
        let error = EngineError::UnrecognizedReason {
            reason: "holiday".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Absence reason 'holiday' is not recognized"
        );
    }

    #[test]
    fn test_unrecognized_scale_displays_scale() {
        let error = EngineError::UnrecognizedScale {
            scale: "geneva".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Salary continuation scale 'geneva' is not recognized"
        );
    }

    #[test]
    fn test_invalid_operation_displays_message() {
        let error = EngineError::InvalidOperation {
            message: "the extended notice date exceeds the termination date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid operation: the extended notice date exceeds the termination date"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/articles.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/articles.yaml"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_out_of_range() -> EngineResult<()> {
            Err(EngineError::OutOfRange {
                field: "years_of_service".to_string(),
                message: "cannot be negative".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_out_of_range()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
