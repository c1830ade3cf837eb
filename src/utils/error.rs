use thiserror::Error;

#[derive(Error, Debug)]
pub enum RevparError {
    #[error("Invalid argument `{field}` = {value}: {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in `{field}`: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RevparError {
    pub fn invalid_argument(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        RevparError::InvalidArgument {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RevparError::InvalidArgument { .. } => ErrorCategory::Input,
            RevparError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            RevparError::IoError(_) | RevparError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RevparError::InvalidArgument { .. } => ErrorSeverity::High,
            RevparError::ConfigValidationError { .. } => ErrorSeverity::High,
            RevparError::IoError(_) => ErrorSeverity::Critical,
            RevparError::SerializationError(_) => ErrorSeverity::Medium,
        }
    }

    /// 錯誤處理建議
    pub fn recovery_suggestion(&self) -> String {
        match self {
            RevparError::InvalidArgument { field, .. } => {
                format!("Correct the value of `{}` and run the calculation again", field)
            }
            RevparError::ConfigValidationError { field, .. } => {
                format!("Fix `{}` in the settings file or remove it to use the default", field)
            }
            RevparError::IoError(_) => {
                "Check that the settings file exists and is readable".to_string()
            }
            RevparError::SerializationError(_) => {
                "Retry without --json to get plain text output".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RevparError::InvalidArgument { field, value, reason } => {
                format!("Invalid input for {} ({}): {}", field, value, reason)
            }
            RevparError::ConfigValidationError { field, message } => {
                format!("Settings problem in {}: {}", field, message)
            }
            RevparError::IoError(e) => format!("Could not read settings: {}", e),
            RevparError::SerializationError(e) => format!("Could not format output: {}", e),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RevparError::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, RevparError>;
