//! Error types for the fastbreak sync service.
//!
//! One unified [`Error`] aggregates provider client failures and database
//! failures. `thiserror`'s `#[from]` conversions keep the `?` operator usable
//! across the repositories and services, and [`retry::ErrorRetryStrategy`]
//! classifies each error for the retry wrapper.
//!
//! Malformed provider field values never surface here; the stat helpers
//! default them to zero instead.

pub mod retry;

use thiserror::Error;

use crate::provider::ProviderError;

#[derive(Error, Debug)]
pub enum Error {
    /// Stats provider error (HTTP transport, non-2xx responses, bad payloads).
    #[error(transparent)]
    ProviderError(#[from] ProviderError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
