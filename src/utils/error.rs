use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("Invalid input for '{field}' ('{value}'): {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Computed '{field}' is not a finite number ({value})")]
    NonFiniteResult { field: String, value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse saved data in {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Storage,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EstimatorError {
    pub fn invalid_input(field: &str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::IoError(_) => ErrorCategory::Storage,
            Self::NonFiniteResult { .. }
            | Self::ParseError { .. }
            | Self::SerializationError(_)
            | Self::CsvError(_) => ErrorCategory::Data,
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 使用者可修正的輸入錯誤
            Self::InvalidInput { .. } => ErrorSeverity::High,
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => ErrorSeverity::High,
            Self::NonFiniteResult { .. } => ErrorSeverity::High,
            // 已存檔資料損毀，可重新計算覆蓋
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::CsvError(_) => ErrorSeverity::Medium,
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { field, reason, .. } => {
                format!("The value entered for '{}' is not usable: {}", field, reason)
            }
            Self::NonFiniteResult { field, .. } => format!(
                "The computed '{}' overflowed; the inputs are too large to calculate with",
                field
            ),
            Self::IoError(e) => format!("Could not read or write the data file: {}", e),
            Self::ParseError { path, .. } => {
                format!("The saved cost data in '{}' is corrupt or unreadable", path)
            }
            Self::SerializationError(e) => format!("Could not serialize cost data: {}", e),
            Self::CsvError(e) => format!("Could not export the projection: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Enter a plain number (e.g. 42 or 12.5) for every field",
            Self::NonFiniteResult { .. } => {
                "Use smaller hours, rates or fees; nothing was saved"
            }
            Self::IoError(_) => "Check that the data file location exists and is writable",
            Self::ParseError { .. } => {
                "Delete or fix the saved data file; the next calculation will overwrite it"
            }
            Self::SerializationError(_) => "Make sure all computed values are finite numbers",
            Self::CsvError(_) => "Check the CSV output path and try again",
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Review the TOML configuration file and command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
