use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExposureError {
    #[error("No PFAS measurements supplied for '{utility}'")]
    NoMeasurements { utility: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required input: {field}")]
    MissingInput { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Profile file error: {message}")]
    ProfileFileError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),
}

impl ExposureError {
    /// True for problems with what the user supplied rather than with the
    /// environment the tool runs in.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            ExposureError::NoMeasurements { .. }
                | ExposureError::InvalidInput { .. }
                | ExposureError::MissingInput { .. }
                | ExposureError::ProfileFileError { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_usage_error() {
            2
        } else {
            1
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ExposureError::NoMeasurements { .. } => {
                "Error: At least one PFAS concentration must be provided.".to_string()
            }
            ExposureError::InvalidInput { field, reason, .. } => {
                format!("Error: {} is invalid ({})", field, reason)
            }
            ExposureError::MissingInput { field } => {
                format!("Error: {} is required", field)
            }
            ExposureError::IoError(e) => format!("Error: could not read input ({})", e),
            ExposureError::ProfileFileError { message } => {
                format!("Error: could not load profile file ({})", message)
            }
            ExposureError::SerializationError(_) | ExposureError::CsvError(_) => {
                "Error: the report could not be written".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ExposureError::NoMeasurements { .. } => {
                "Pass a concentration above zero, e.g. --pfoa 25. Use --help for usage information."
            }
            ExposureError::InvalidInput { .. } => {
                "Check the value and try again. Use --help for usage information."
            }
            ExposureError::MissingInput { .. } => {
                "Supply --population and --flow, or point --profile at a profile file."
            }
            ExposureError::IoError(_) => "Make sure the file exists and is readable.",
            ExposureError::ProfileFileError { .. } => {
                "Make sure the file is valid TOML with at least one [[utilities]] table."
            }
            ExposureError::SerializationError(_) | ExposureError::CsvError(_) => {
                "Try a different --format."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ExposureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_measurements_is_a_usage_error() {
        let err = ExposureError::NoMeasurements {
            utility: "Example Utility".to_string(),
        };
        assert!(err.is_usage_error());
        assert_eq!(err.exit_code(), 2);
        assert!(err
            .user_friendly_message()
            .contains("At least one PFAS concentration must be provided"));
    }

    #[test]
    fn test_io_error_exit_code() {
        let err = ExposureError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(!err.is_usage_error());
        assert_eq!(err.exit_code(), 1);
    }
}
