//! Error handling module for pyretui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.
//!
//! Note that a catalog lookup miss is deliberately NOT an error: the pricing
//! and scene layers treat an unresolvable id as a zero-price / invisible
//! selection so that mismatched catalog and configuration data degrades
//! gracefully instead of taking down a live session.

use crate::catalog::CatalogList;
use thiserror::Error;

/// Main error type for pyretui
#[derive(Error, Debug)]
pub enum PyreTuiError {
    /// IO errors (terminal setup/teardown, stdout)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Selection errors (invalid ids, out-of-range steps)
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for pyretui operations
pub type Result<T> = std::result::Result<T, PyreTuiError>;

impl PyreTuiError {
    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

/// Errors produced by session mutation operations.
///
/// Every rejected operation leaves the session untouched: the configuration
/// and wizard step stay valid no matter which ids or indices the caller
/// throws at them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The id does not exist in the catalog list the operation targets
    #[error("'{id}' is not a known entry in the {list} catalog")]
    InvalidSelection { list: CatalogList, id: String },

    /// Step index outside the wizard's fixed range
    #[error("step {index} is out of range (valid steps are 0..{limit})")]
    StepOutOfRange { index: usize, limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SelectionError::InvalidSelection {
            list: CatalogList::Colors,
            id: "mauve".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'mauve' is not a known entry in the colors catalog"
        );

        let err = SelectionError::StepOutOfRange { index: 6, limit: 6 };
        assert_eq!(
            err.to_string(),
            "step 6 is out of range (valid steps are 0..6)"
        );
    }

    #[test]
    fn test_selection_error_conversion() {
        let err: PyreTuiError = SelectionError::StepOutOfRange { index: 9, limit: 6 }.into();
        assert!(matches!(err, PyreTuiError::Selection(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no tty");
        let err: PyreTuiError = io_err.into();
        assert!(matches!(err, PyreTuiError::Io(_)));
    }
}
