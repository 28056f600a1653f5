use thiserror::Error;

use crate::features::verification::ImeiError;

#[derive(Debug, Error)]
pub enum HynsError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {field} = {value}")]
    Configuration { field: String, value: String },

    #[error("Seed data error: {message}")]
    SeedData { message: String },
}

/// Failures surfaced by a device registry backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("{reason}")]
    Rejected { reason: String },

    #[error("Invalid IMEI: {0}")]
    InvalidImei(#[from] ImeiError),
}

impl From<ImeiError> for HynsError {
    fn from(error: ImeiError) -> Self {
        HynsError::Registry(RegistryError::InvalidImei(error))
    }
}

pub type HynsResult<T> = Result<T, HynsError>;

impl HynsError {
    /// Short text suitable for an inline alert.
    pub fn user_message(&self) -> String {
        match self {
            HynsError::Registry(RegistryError::Rejected { reason }) => reason.clone(),
            other => other.to_string(),
        }
    }
}
