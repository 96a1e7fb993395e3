//! Test fixture modules for provider payloads and mock HTTP endpoints.

pub mod provider;
