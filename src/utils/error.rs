use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChurnError {
    #[error("Requires customer data entry. Please enter at least one value other than 0.")]
    EmptyInput,

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Model unavailable at '{path}': {reason}")]
    ModelUnavailable { path: String, reason: String },

    #[error("Configuration error in '{field}': {message}")]
    Config { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Model,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ChurnError {
    pub fn validation(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        ChurnError::Validation {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn model_unavailable(path: &str, reason: impl Into<String>) -> Self {
        ChurnError::ModelUnavailable {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ChurnError::EmptyInput | ChurnError::Validation { .. } => ErrorCategory::Input,
            ChurnError::Config { .. } => ErrorCategory::Configuration,
            ChurnError::ModelUnavailable { .. } => ErrorCategory::Model,
            ChurnError::Io(_) | ChurnError::Serialization(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Model | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ChurnError::EmptyInput => self.to_string(),
            ChurnError::Validation { field, value, .. } => {
                format!("The value '{}' is not accepted for {}.", value, field)
            }
            ChurnError::ModelUnavailable { .. } => {
                "The prediction model could not be loaded or run.".to_string()
            }
            ChurnError::Config { field, .. } => {
                format!("The configuration setting '{}' is invalid.", field)
            }
            ChurnError::Io(e) => format!("A file could not be read: {}", e),
            ChurnError::Serialization(e) => format!("Input could not be parsed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ChurnError::EmptyInput => {
                "Fill in at least one numeric field with a non-zero value.".to_string()
            }
            ChurnError::Validation { reason, .. } => reason.clone(),
            ChurnError::ModelUnavailable { path, .. } => format!(
                "Check that '{}' exists and holds an exported decision tree.",
                path
            ),
            ChurnError::Config { message, .. } => message.clone(),
            ChurnError::Io(_) => "Check the file path and permissions.".to_string(),
            ChurnError::Serialization(_) => {
                "Check that the input file is valid JSON with the expected field names."
                    .to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ChurnError>;
