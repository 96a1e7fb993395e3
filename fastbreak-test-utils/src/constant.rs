//! Shared constant values for test setup.

/// User agent string for mock provider requests.
pub static TEST_USER_AGENT: &str = "fastbreak-tests/1.0";

/// Season string passed to every mock provider endpoint.
pub static TEST_SEASON: &str = "2024-25";
