//! Character entity and the roster used to match character cues

use std::collections::HashMap;

use serde::Serialize;

use crate::types::Gender;

/// A character declared by the client for narration.
///
/// Built from request data, never read from the wire directly, so gender
/// labels are parsed in one place ([`Gender::from_label`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub name: String,
    /// Declared gender. `None` means "guess from the name".
    pub gender: Option<Gender>,
    /// Age bracket (young, adult, old). Carried for clients, not used by the voice tables.
    pub age: Option<String>,
    /// Preferred client-side voice identifier
    pub voice_id: Option<String>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: None,
            age: None,
            voice_id: None,
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Declared gender, or a guess from the first name when none was given
    pub fn effective_gender(&self) -> Gender {
        self.gender
            .unwrap_or_else(|| Gender::guess_from_name(&self.name))
    }
}

/// Normalize a character cue or roster name for matching.
///
/// Upper-cases, drops a trailing extension such as `(V.O.)` or `(CONT'D)`,
/// and trims whitespace. Returns `None` when nothing is left.
pub fn normalize_cue_name(text: &str) -> Option<String> {
    let upper = text.to_uppercase();
    let name = upper.split('(').next().unwrap_or_default().trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Characters keyed by normalized name.
///
/// When two characters normalize to the same name, the later one wins.
#[derive(Debug, Clone, Default)]
pub struct CharacterRoster {
    by_name: HashMap<String, Character>,
}

impl CharacterRoster {
    pub fn new(characters: impl IntoIterator<Item = Character>) -> Self {
        let by_name = characters
            .into_iter()
            .filter_map(|character| {
                normalize_cue_name(&character.name).map(|name| (name, character))
            })
            .collect();
        Self { by_name }
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Look up a character by cue name (normalized before matching)
    pub fn get(&self, cue_name: &str) -> Option<&Character> {
        normalize_cue_name(cue_name).and_then(|name| self.by_name.get(&name))
    }

    /// Effective gender of a known character, `None` for unknown names
    pub fn gender_of(&self, cue_name: &str) -> Option<Gender> {
        self.get(cue_name).map(Character::effective_gender)
    }
}
