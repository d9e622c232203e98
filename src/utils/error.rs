use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScopeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("XML parse error: {0}")]
    XmlError(#[from] roxmltree::Error),

    #[error("GitHub API returned {status}: {message}")]
    GitHubApiError { status: u16, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Input required and not supplied: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Descriptor error: {message}")]
    DescriptorError { message: String },
}

pub type Result<T> = std::result::Result<T, ScopeError>;
