use thiserror::Error;

pub const MSG_FILE_NOT_FOUND: &str = "File not found";
pub const MSG_LIST_FAILED: &str = "Failed to fetch files from external API";
pub const MSG_DOWNLOAD_FAILED: &str = "Failed to download file from external API";

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("File not found: {name}")]
    NotFound { name: String },

    #[error("Upstream unavailable: {message}")]
    UpstreamUnavailable { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl GatewayError {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Message safe to hand back to an API caller for a failed file download.
    pub fn download_message(&self) -> &'static str {
        if self.is_not_found() {
            MSG_FILE_NOT_FOUND
        } else {
            MSG_DOWNLOAD_FAILED
        }
    }
}

// Transport failures never distinguish status at this level; callers that
// care about 404 inspect the response before converting.
impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::upstream(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
