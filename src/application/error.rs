// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Domain(DomainError::Validation(_))
        )
    }

    pub fn is_remote_call(&self) -> bool {
        matches!(self, Self::Domain(DomainError::RemoteCall { .. }))
    }

    /// Procedure whose call failed, when this is a remote call error.
    pub fn failed_procedure(&self) -> Option<&'static str> {
        match self {
            Self::Domain(DomainError::RemoteCall { procedure, .. }) => Some(*procedure),
            _ => None,
        }
    }
}
