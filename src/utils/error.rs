use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Record source returned status {status} for {endpoint}: {message}")]
    SourceStatusError {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Malformed payload from {origin}: {message}")]
    MalformedPayloadError { origin: String, message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Data,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::ApiError(_) | DirectoryError::SourceStatusError { .. } => {
                ErrorCategory::Source
            }
            DirectoryError::MalformedPayloadError { .. }
            | DirectoryError::CsvError(_)
            | DirectoryError::SerializationError(_) => ErrorCategory::Data,
            DirectoryError::IoError(_) => ErrorCategory::Io,
            DirectoryError::ConfigError { .. }
            | DirectoryError::InvalidConfigValueError { .. }
            | DirectoryError::ValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 來源暫時不可用，可稍後重試
            ErrorCategory::Source => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Source | ErrorCategory::Data => "Failed to fetch advocates.".to_string(),
            ErrorCategory::Io => format!("File system error: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DirectoryError::ApiError(_) => {
                "Check that the advocates endpoint is reachable and try again"
            }
            DirectoryError::SourceStatusError { status, .. } if *status >= 500 => {
                "The advocates service reported an internal error, try again later"
            }
            DirectoryError::SourceStatusError { .. } => {
                "Verify the endpoint URL and any required headers"
            }
            DirectoryError::MalformedPayloadError { .. }
            | DirectoryError::SerializationError(_) => {
                "The record source must return a JSON document of the form {\"data\": [...]}"
            }
            DirectoryError::CsvError(_) | DirectoryError::IoError(_) => {
                "Check file paths and permissions"
            }
            DirectoryError::InvalidConfigValueError { field, .. } if field == "experience_range" => {
                "Run with --ranges to list the accepted experience ranges"
            }
            DirectoryError::ConfigError { .. }
            | DirectoryError::InvalidConfigValueError { .. }
            | DirectoryError::ValidationError { .. } => {
                "Review the command-line flags and configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
