//! Infrastructure - process-level concerns (configuration, CORS).

pub mod config;
pub mod cors;

pub use config::AppConfig;
