//! # Screenplay Domain Types
//!
//! Shared vocabulary types used by both the domain layer and the wire DTOs.
//!
//! ## Design Principles
//!
//! 1. **Pure data types** - No I/O, no async, no side effects
//! 2. **Closed sets** - Unknown values degrade to a fallback variant
//! 3. **Serializable** - All types derive Serialize/Deserialize

// Element classification
mod element_category;
pub use element_category::ElementCategory;

// Voice selection
mod gender;
pub use gender::Gender;

mod voice_type;
pub use voice_type::VoiceType;
