// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("remote call {procedure} failed: {message}")]
    RemoteCall {
        procedure: &'static str,
        message: String,
    },
}

impl DomainError {
    pub fn remote_call(procedure: &'static str, message: impl Into<String>) -> Self {
        Self::RemoteCall {
            procedure,
            message: message.into(),
        }
    }
}
