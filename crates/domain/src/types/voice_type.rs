use serde::{Deserialize, Serialize};
use std::fmt;

use super::Gender;

/// Voice category a client-side synthesizer should pick for an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceType {
    /// Reads headings, action and transitions
    Narrator,
    /// Default voice for speakers without a known gender
    Neutral,
    Male,
    Female,
}

impl VoiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceType::Narrator => "narrator",
            VoiceType::Neutral => "neutral",
            VoiceType::Male => "male",
            VoiceType::Female => "female",
        }
    }
}

impl From<Gender> for VoiceType {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => VoiceType::Male,
            Gender::Female => VoiceType::Female,
            Gender::Neutral => VoiceType::Neutral,
        }
    }
}

impl fmt::Display for VoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
