use thiserror::Error;

#[derive(Error, Debug)]
pub enum TmsError {
    #[error("Invalid tenant management url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to build http client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Request to tenant management service failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Tenant management service returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response from tenant management service: {0}")]
    Decode(#[source] reqwest::Error),
}

impl TmsError {
    /// HTTP status of the failed call, when the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            TmsError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
