//! Request bodies accepted by the HTTP API
//!
//! These mirror the JSON sent by the Google Docs add-on and the browser
//! extension. Conversion into domain entities is infallible: unknown element
//! types and blank genders are resolved later by the domain rules.

use serde::{Deserialize, Serialize};

use screenplay_domain::{Character, Gender, Screenplay, ScreenplayElement};

/// One screenplay element on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptElementData {
    /// SCENE_HEADING, ACTION, CHARACTER, DIALOGUE, PARENTHETICAL, TRANSITION
    #[serde(rename = "type")]
    pub element_type: String,
    pub text: String,
}

impl From<ScriptElementData> for ScreenplayElement {
    fn from(data: ScriptElementData) -> Self {
        ScreenplayElement::new(data.element_type, data.text)
    }
}

/// Body of `POST /export/fdx` and `POST /export/fdx/json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportFdxRequest {
    pub title: String,
    pub elements: Vec<ScriptElementData>,
}

impl ExportFdxRequest {
    pub fn into_screenplay(self) -> Screenplay {
        Screenplay::new(
            self.title,
            self.elements.into_iter().map(Into::into).collect(),
        )
    }
}

/// A character declared for narration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterData {
    pub name: String,
    /// male, female, neutral; anything else counts as neutral, blank means unknown
    #[serde(default)]
    pub gender: Option<String>,
    /// young, adult, old
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub voice_id: Option<String>,
}

impl From<CharacterData> for Character {
    fn from(data: CharacterData) -> Self {
        Character {
            name: data.name,
            gender: data.gender.as_deref().and_then(Gender::from_label),
            age: data.age,
            voice_id: data.voice_id,
        }
    }
}

/// Body of `POST /tts/prepare`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareNarrationRequest {
    pub title: String,
    pub elements: Vec<ScriptElementData>,
    #[serde(default)]
    pub characters: Option<Vec<CharacterData>>,
}

impl PrepareNarrationRequest {
    /// Split into the screenplay and its declared characters
    pub fn into_parts(self) -> (Screenplay, Vec<Character>) {
        let characters = self
            .characters
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect();
        let screenplay = Screenplay::new(
            self.title,
            self.elements.into_iter().map(Into::into).collect(),
        );
        (screenplay, characters)
    }
}
