//! Use cases - request orchestration over the pure domain functions.

pub mod export;
pub mod narration;

pub use export::{safe_filename, ExportScreenplay, FdxExport};
pub use narration::PrepareNarration;

use screenplay_domain::DomainError;

/// Failure of a use case
#[derive(Debug, thiserror::Error)]
pub enum UseCaseError {
    /// The screenplay violates a domain rule
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Container for all use cases.
pub struct UseCases {
    pub export: ExportScreenplay,
    pub narration: PrepareNarration,
}

impl UseCases {
    pub fn new(max_elements: usize) -> Self {
        Self {
            export: ExportScreenplay::new(max_elements),
            narration: PrepareNarration::new(max_elements),
        }
    }
}
