//! Screenplay Shared - wire types for the editor clients
//!
//! This crate contains the JSON shapes exchanged with the Google Docs add-on
//! and the browser extension:
//! - Request bodies and their conversion into domain entities
//! - Success and error response envelopes
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain crate
//! 2. **No business logic** - Pure data types and serialization

pub mod requests;
pub mod responses;

pub use requests::{CharacterData, ExportFdxRequest, PrepareNarrationRequest, ScriptElementData};
pub use responses::{
    ErrorResponse, FdxExportResponse, HealthResponse, NarratedElementData, NarrationResponse,
    ServiceInfo, FDX_CONTENT_TYPE,
};
