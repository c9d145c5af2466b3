//! Screenplay Domain - element classification, FDX serialization and
//! narration voice rules.
//!
//! Everything in this crate is pure: no I/O, no async, no shared state.
//! Classification, serialization and voice resolution are independent
//! functions over the same [`Screenplay`] input.

pub mod entities;
pub mod error;
pub mod fdx;
pub mod narration;
pub mod types;
pub mod value_objects;

pub use entities::{normalize_cue_name, Character, CharacterRoster, Screenplay, ScreenplayElement};
pub use error::DomainError;
pub use narration::NarratedElement;
pub use types::{ElementCategory, Gender, VoiceType};
pub use value_objects::VoiceProfile;
