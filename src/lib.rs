pub mod config;
pub mod data;
pub mod error;
pub mod provider;
pub mod service;
pub mod startup;
pub mod util;

pub use error::Error;
