//! Voice profile - synthesis parameters attached to one narrated element
//!
//! Values target the Web Speech API: `rate` ranges 0.1..=10 (1.0 normal),
//! `pitch` ranges 0..=2 (1.0 normal), `volume` ranges 0..=1.

use serde::{Deserialize, Serialize};

use crate::types::{ElementCategory, Gender, VoiceType};

/// Synthesis parameters for a single element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceProfile {
    pub rate: f64,
    pub pitch: f64,
    pub voice_type: VoiceType,
    /// Silence after the element, in milliseconds
    pub pause_after: u32,
    /// Element should not be read aloud (character cues)
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub skip: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl VoiceProfile {
    const fn new(rate: f64, pitch: f64, voice_type: VoiceType, pause_after: u32) -> Self {
        Self {
            rate,
            pitch,
            voice_type,
            pause_after,
            skip: false,
            volume: None,
        }
    }

    /// Static base profile for a category, before any speaker override.
    pub fn base_for(category: ElementCategory) -> Self {
        match category {
            // Slower and lower, long pause to mark the new scene
            ElementCategory::SceneHeading => Self::new(0.9, 0.8, VoiceType::Narrator, 1000),
            ElementCategory::Action => Self::new(1.0, 1.0, VoiceType::Narrator, 500),
            // The cue only tells us who speaks next
            ElementCategory::Character => Self {
                skip: true,
                ..Self::new(1.0, 1.0, VoiceType::Neutral, 0)
            },
            ElementCategory::Dialogue => Self::new(1.1, 1.0, VoiceType::Neutral, 300),
            // Softer, quicker aside
            ElementCategory::Parenthetical => Self {
                volume: Some(0.7),
                ..Self::new(1.2, 1.1, VoiceType::Narrator, 200)
            },
            ElementCategory::Transition => Self::new(0.8, 0.7, VoiceType::Narrator, 1500),
            ElementCategory::Other => Self::new(1.0, 1.0, VoiceType::Narrator, 0),
        }
    }

    /// Apply a speaker's gender: voice type and pitch change, rate and pause stay.
    pub fn with_gender(self, gender: Gender) -> Self {
        let pitch = match gender {
            Gender::Male => 0.8,
            Gender::Female => 1.3,
            Gender::Neutral => 1.0,
        };
        Self {
            pitch,
            voice_type: VoiceType::from(gender),
            ..self
        }
    }
}
