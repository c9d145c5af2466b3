//! Narration - voice parameters for reading a screenplay aloud
//!
//! Walks the elements in reading order and attaches a [`VoiceProfile`] to
//! each one. Character cues set the current speaker; dialogue lines take
//! that speaker's gendered voice when the speaker is in the roster.
//! Parentheticals are attributed to the speaker but keep the soft narrator
//! voice.
//!
//! Unknown tags, unknown speakers and dialogue before any cue all fall back
//! to the static base profiles. Nothing here fails.

use serde::Serialize;

use crate::entities::{normalize_cue_name, CharacterRoster, Screenplay, ScreenplayElement};
use crate::types::ElementCategory;
use crate::value_objects::VoiceProfile;

/// An element together with the voice that should read it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarratedElement {
    pub element: ScreenplayElement,
    pub voice: VoiceProfile,
    /// Speaker of a dialogue or parenthetical line, if a cue preceded it
    pub speaker: Option<String>,
}

/// Resolve voice parameters for every element, in order.
///
/// Output has exactly one entry per input element.
pub fn resolve(screenplay: &Screenplay, roster: &CharacterRoster) -> Vec<NarratedElement> {
    let mut speaker: Option<String> = None;

    screenplay
        .elements
        .iter()
        .map(|element| {
            let category = element.category();
            if category == ElementCategory::Character {
                speaker = normalize_cue_name(&element.text);
            }

            NarratedElement {
                element: element.clone(),
                voice: voice_for(category, speaker.as_deref(), roster),
                speaker: if category.is_spoken() {
                    speaker.clone()
                } else {
                    None
                },
            }
        })
        .collect()
}

/// Voice for one element given the current speaker.
pub fn voice_for(
    category: ElementCategory,
    speaker: Option<&str>,
    roster: &CharacterRoster,
) -> VoiceProfile {
    let base = VoiceProfile::base_for(category);
    match category {
        ElementCategory::Character | ElementCategory::Dialogue => speaker
            .and_then(|name| roster.gender_of(name))
            .map_or(base, |gender| base.with_gender(gender)),
        _ => base,
    }
}
