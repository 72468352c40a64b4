//! Configuration utilities.

pub mod config;

pub use config::{ClientConfig, API_URL_ENV, DEFAULT_API_URL};
