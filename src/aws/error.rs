//! Errors raised by the EC2 list queries.

use aws_sdk_ec2::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use std::error::Error as StdError;
use std::fmt::Debug;
use thiserror::Error;

/// Why a list query produced no records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The service answered with a structured error (permission, throttling, fault).
    #[error("{message} ({code})")]
    Provider { code: String, message: String },
    /// A returned item lacked a field the report reads.
    #[error("{resource} response is missing {field}")]
    MissingField {
        resource: &'static str,
        field: &'static str,
    },
    /// Anything else: transport, timeout, credentials, request construction.
    #[error("{0}")]
    Unexpected(String),
}

impl FetchError {
    pub fn is_provider(&self) -> bool {
        matches!(self, FetchError::Provider { .. })
    }

    /// Classify an SDK failure: service errors keep their code and message.
    pub fn from_sdk<E, R>(err: SdkError<E, R>) -> FetchError
    where
        E: ProvideErrorMetadata + StdError + Send + Sync + 'static,
        R: Debug,
    {
        match err.as_service_error() {
            Some(service_err) => FetchError::Provider {
                code: service_err.code().unwrap_or("Unknown").to_string(),
                message: service_err
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| service_err.to_string()),
            },
            None => FetchError::Unexpected(DisplayErrorContext(&err).to_string()),
        }
    }
}
