//! Application state and composition.

use crate::infrastructure::AppConfig;
use crate::use_cases::UseCases;

/// Main application state.
///
/// Immutable after construction; shared with HTTP handlers via Axum state.
pub struct App {
    pub config: AppConfig,
    pub use_cases: UseCases,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let use_cases = UseCases::new(config.max_elements);
        Self { config, use_cases }
    }
}
