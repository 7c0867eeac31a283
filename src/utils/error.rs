use thiserror::Error;

#[derive(Error, Debug)]
pub enum CostingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid acquisition date '{value}': {source}")]
    DateParseError {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Inventory file not found: {path}")]
    InventoryNotFound { path: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl CostingError {
    /// Short message meant for the console rather than the log.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CostingError::IoError(e) => format!("Could not read a file: {}", e),
            CostingError::SerializationError(e) => {
                format!("The inventory file is not valid JSON: {}", e)
            }
            CostingError::DateParseError { value, .. } => {
                format!("A batch has an invalid date '{}' (expected YYYY-MM-DD)", value)
            }
            CostingError::InventoryNotFound { path } => {
                format!("ERROR: inventory file {} was not found.", path)
            }
            CostingError::ConfigError { message } => format!("Configuration problem: {}", message),
            CostingError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            CostingError::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CostingError::IoError(_) => "Check that the file is readable",
            CostingError::SerializationError(_) => {
                "Make sure the file holds a JSON array of batch objects"
            }
            CostingError::DateParseError { .. } => {
                "Fix the datum_naskladneni field, e.g. \"2024-01-31\""
            }
            CostingError::InventoryNotFound { .. } => {
                "Pass the inventory location with --inventory <PATH>"
            }
            CostingError::ConfigError { .. } | CostingError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML settings file"
            }
            CostingError::ValidationError { .. } => "Correct the input and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, CostingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_keeps_offending_value() {
        let source = chrono::NaiveDate::parse_from_str("2024-13-01", "%Y-%m-%d").unwrap_err();
        let err = CostingError::DateParseError {
            value: "2024-13-01".to_string(),
            source,
        };

        assert!(err.to_string().contains("2024-13-01"));
        assert!(err.user_friendly_message().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CostingError = io.into();
        assert!(matches!(err, CostingError::IoError(_)));
    }
}
