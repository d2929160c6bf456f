// CLI error types
use thiserror::Error;

use crate::config::ConfigError;
use crate::tms::TmsError;

/// Coarse classification of a [`CliError`], stable across message wording changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidUuid,
    EmptyRoles,
    InvalidRole,
    Config,
    Api,
    Serialization,
    Io,
}

/// Everything that can stop a command before it reports success
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid tenant id provided: {0}")]
    InvalidTenantId(#[source] uuid::Error),

    #[error("Invalid user id provided: {0}")]
    InvalidUserId(#[source] uuid::Error),

    #[error("User role cannot be empty")]
    EmptyRoles,

    #[error(transparent)]
    InvalidRole(#[from] crate::types::InvalidRole),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] TmsError),

    #[error("Failed to format response: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CliError::InvalidTenantId(_) | CliError::InvalidUserId(_) => ErrorKind::InvalidUuid,
            CliError::EmptyRoles => ErrorKind::EmptyRoles,
            CliError::InvalidRole(_) => ErrorKind::InvalidRole,
            CliError::Config(_) => ErrorKind::Config,
            CliError::Api(_) => ErrorKind::Api,
            CliError::Serialization(_) => ErrorKind::Serialization,
            CliError::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
