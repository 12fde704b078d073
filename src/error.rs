//! Error type shared by every layer of the tracker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    /// Unreadable settings or no usable config directory
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed audit log line or unserializable value
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected user input (blank name, bad cost, missing cycle or category)
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The expenses document could not be read, parsed or replaced
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TrackerError {
    /// No expense with this id, e.g. `#12`
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = TrackerError::Config("no home directory".into());
        assert_eq!(err.to_string(), "Configuration error: no home directory");
    }

    #[test]
    fn test_not_found_error() {
        let err = TrackerError::expense_not_found("#12");
        assert_eq!(err.to_string(), "Expense not found: #12");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_error() {
        let err = TrackerError::Validation("Cost must be greater than zero".into());
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: Cost must be greater than zero"
        );
    }

    #[test]
    fn test_conversions_keep_the_source_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: TrackerError = io_err.into();
        assert_eq!(err.to_string(), "I/O error: read-only");

        let json_err = serde_json::from_str::<u32>("x").unwrap_err();
        assert!(matches!(TrackerError::from(json_err), TrackerError::Json(_)));
    }
}
