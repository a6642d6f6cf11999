use crate::domain::model::Registry;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Por favor, informe o CPF.")]
    InputMissing,

    #[error("Invalid request body: {message}")]
    InvalidRequestBody { message: String },

    #[error("{registry} lookup unavailable: {reason}")]
    LookupUnavailable { registry: Registry, reason: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Lookup,
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

impl CheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::InputMissing | CheckError::InvalidRequestBody { .. } => {
                ErrorCategory::Request
            }
            CheckError::LookupUnavailable { .. } | CheckError::HttpError(_) => {
                ErrorCategory::Lookup
            }
            CheckError::ConfigError { .. }
            | CheckError::ConfigValidationError { .. }
            | CheckError::InvalidConfigValueError { .. }
            | CheckError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CheckError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Errors caused by the caller's request rather than by this service.
    pub fn is_client_error(&self) -> bool {
        self.category() == ErrorCategory::Request
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CheckError::InputMissing => "Send a JSON body such as {\"cpf\": \"123.456.789-09\"}",
            CheckError::InvalidRequestBody { .. } => {
                "The request body must be a JSON object with a string 'cpf' field"
            }
            CheckError::LookupUnavailable { .. } | CheckError::HttpError(_) => {
                "Check that the registry endpoint is reachable or raise lookup_timeout_ms"
            }
            CheckError::ConfigError { .. }
            | CheckError::ConfigValidationError { .. }
            | CheckError::InvalidConfigValueError { .. }
            | CheckError::MissingConfigError { .. } => {
                "Review the configuration file and referenced environment variables"
            }
            CheckError::IoError(_) => "Check file paths and permissions",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::InputMissing => self.to_string(),
            CheckError::InvalidRequestBody { .. } => {
                "O corpo da requisição não é um JSON válido.".to_string()
            }
            CheckError::LookupUnavailable { registry, .. } => {
                format!("The {} registry could not be queried", registry)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
