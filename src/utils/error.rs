use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumerologyError {
    #[error("Invalid input for {field} ('{value}'): {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Insufficient participants: at least {required} required, got {actual}")]
    InsufficientParticipants { required: usize, actual: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NumerologyError {
    pub fn invalid_input(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::InsufficientParticipants { .. } => ErrorCategory::Input,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidInput { .. } | Self::InsufficientParticipants { .. } => {
                ErrorSeverity::High
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::SerializationError(_) | Self::CsvError(_) => ErrorSeverity::Medium,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給使用者的修正建議
    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidInput { field, .. } => {
                format!("Check the value of '{}' (dates use the YYYY-MM-DD format)", field)
            }
            Self::InsufficientParticipants { required, .. } => {
                format!("Provide at least {} people for this analysis", required)
            }
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Review the TOML configuration file against the documented sections".to_string()
            }
            Self::MissingConfigError { field } => format!("Add '{}' to the configuration", field),
            Self::IoError(_) => "Make sure the file exists and is readable".to_string(),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Try a different --format or report the issue".to_string()
            }
        }
    }

    /// 依嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { field, value, .. } => {
                format!("The value '{}' given for {} is not valid", value, field)
            }
            Self::InsufficientParticipants { required, actual } => format!(
                "This analysis needs {} people but only {} were given",
                required, actual
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
