//! Screenplay Engine library.
//!
//! HTTP backend for the screenplay editor: FDX export and narration
//! preparation.
//!
//! ## Structure
//!
//! - `use_cases/` - Request orchestration over the domain functions
//! - `infrastructure/` - Configuration and CORS
//! - `api/` - HTTP entry points, extractors and error rendering
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
