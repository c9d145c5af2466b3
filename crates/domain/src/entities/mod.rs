//! Domain entities - Core business objects

mod character;
mod screenplay;

pub use character::{normalize_cue_name, Character, CharacterRoster};
pub use screenplay::{Screenplay, ScreenplayElement};
