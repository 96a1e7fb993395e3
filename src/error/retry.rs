use sea_orm::DbErr;

use crate::provider::ProviderError;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with backoff (transient provider/connection errors)
    Retry,
    /// Failed permanently (bad request, bad data, constraint violation)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::ProviderError(provider_err) => match provider_err {
                // Provider is temporarily unavailable or throttling, back off
                // and retry.
                ProviderError::Status { status, .. } => {
                    if status.is_server_error() || *status == reqwest::StatusCode::TOO_MANY_REQUESTS
                    {
                        ErrorRetryStrategy::Retry
                    } else {
                        // Client errors mean we are making invalid requests,
                        // a flaw in the code that retrying will not fix.
                        ErrorRetryStrategy::Fail
                    }
                }
                ProviderError::Request(reqwest_error) => {
                    if reqwest_error.is_decode() {
                        // Payload did not match the expected shape, permanent
                        ErrorRetryStrategy::Fail
                    } else {
                        // Network error or connection issue - should retry
                        ErrorRetryStrategy::Retry
                    }
                }
                ProviderError::InvalidBaseUrl(_) => ErrorRetryStrategy::Fail,
            },

            Self::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition errors - transient, should retry
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    // Connection errors - transient, should retry
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // All other database errors are permanent failures:
                    // constraint violations, type conversion errors, record
                    // not found/inserted/updated. These indicate bugs or data
                    // issues that won't resolve with retry.
                    _ => ErrorRetryStrategy::Fail,
                }
            }
        }
    }
}
