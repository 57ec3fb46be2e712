use crate::domain::model::TimeField;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("No time provided")]
    MissingInput,

    #[error("Invalid time provided: '{input}' has {fields} field(s), expected HH:MM:SS")]
    MalformedFormat { input: String, fields: usize },

    #[error("Time values must be numeric: {field} is '{value}'")]
    NonNumericField { field: TimeField, value: String },

    #[error("{field} out of bounds: {value} is not in {min}..={max}")]
    OutOfRange {
        field: TimeField,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ClockError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClockError::MissingInput
            | ClockError::MalformedFormat { .. }
            | ClockError::NonNumericField { .. }
            | ClockError::OutOfRange { .. } => ErrorCategory::Input,
            ClockError::ConfigError { .. }
            | ClockError::ConfigValidationError { .. }
            | ClockError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ClockError::IoError(_) | ClockError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI, derived from severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClockError::MissingInput => "No time provided".to_string(),
            ClockError::MalformedFormat { input, .. } => {
                format!("Invalid time provided: '{}'", input)
            }
            ClockError::NonNumericField { .. } => "Time values must be numeric.".to_string(),
            ClockError::OutOfRange { field, .. } => format!("{} out of bounds.", field),
            ClockError::IoError(e) => format!("Could not read or write a file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClockError::MissingInput => "Pass a time such as 13:17:01, or use --now",
            ClockError::MalformedFormat { .. } => {
                "Use exactly three colon-separated fields: HH:MM:SS"
            }
            ClockError::NonNumericField { .. } => "Use digits only in each field",
            ClockError::OutOfRange { field, .. } => match field {
                TimeField::Hours => "Hours must be between 0 and 24",
                TimeField::Minutes => "Minutes must be between 0 and 59",
                TimeField::Seconds => "Seconds must be between 0 and 59",
            },
            ClockError::ConfigError { .. }
            | ClockError::ConfigValidationError { .. }
            | ClockError::InvalidConfigValueError { .. } => {
                "Check the config file; line_separator is lf, crlf or native and format is text or json"
            }
            ClockError::IoError(_) => "Make sure the file exists and is readable",
            ClockError::SerializationError(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClockError>;
