use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{provider} responded with {status} for {url}")]
    UnexpectedStatus {
        provider: String,
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SurveyError {
    /// Short message meant for the terminal rather than the log.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SurveyError::ApiError(e) if e.is_timeout() => {
                "The job board did not answer in time".to_string()
            }
            SurveyError::ApiError(_) => "Could not reach the job board".to_string(),
            SurveyError::UnexpectedStatus {
                provider, status, ..
            } => format!("{} rejected the request ({})", provider, status),
            SurveyError::IoError(e) => format!("File access failed: {}", e),
            SurveyError::SerializationError(_) => {
                "Received malformed JSON from the job board".to_string()
            }
            SurveyError::ConfigError { message } => format!("Configuration problem: {}", message),
            SurveyError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            SurveyError::MissingConfigError { field } => {
                format!("'{}' is not set", field)
            }
            SurveyError::InvalidConfigValueError { field, reason, .. } => {
                format!("'{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SurveyError::ApiError(_) => "Check your network connection and run again",
            SurveyError::UnexpectedStatus { status, .. }
                if *status == reqwest::StatusCode::UNAUTHORIZED
                    || *status == reqwest::StatusCode::FORBIDDEN =>
            {
                "Check that SUPERJOB_KEY holds a valid application secret key"
            }
            SurveyError::UnexpectedStatus { .. } => {
                "The provider may be throttling requests; wait a bit and run again"
            }
            SurveyError::IoError(_) => "Make sure the file exists and is readable",
            SurveyError::SerializationError(_) => "The provider API may have changed its format",
            SurveyError::MissingConfigError { .. } => {
                "Export the variable, add it to .env, or pass it on the command line"
            }
            SurveyError::ConfigError { .. }
            | SurveyError::ConfigValidationError { .. }
            | SurveyError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line arguments"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SurveyError>;
