//! Narration preparation use case.

use screenplay_domain::{narration, Character, CharacterRoster, NarratedElement, Screenplay};

use super::UseCaseError;

/// Attach voice parameters to every element of a screenplay.
pub struct PrepareNarration {
    max_elements: usize,
}

impl PrepareNarration {
    pub fn new(max_elements: usize) -> Self {
        Self { max_elements }
    }

    pub fn execute(
        &self,
        screenplay: &Screenplay,
        characters: Vec<Character>,
    ) -> Result<Vec<NarratedElement>, UseCaseError> {
        screenplay.ensure_element_limit(self.max_elements)?;

        let roster = CharacterRoster::new(characters);
        let narrated = narration::resolve(screenplay, &roster);
        tracing::debug!(
            elements = narrated.len(),
            characters = roster.len(),
            "Prepared narration"
        );

        Ok(narrated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screenplay_domain::{Gender, ScreenplayElement, VoiceType};

    #[test]
    fn test_execute_matches_characters() {
        let screenplay = Screenplay::new(
            "T",
            vec![
                ScreenplayElement::new("CHARACTER", "JULES"),
                ScreenplayElement::new("DIALOGUE", "Salut."),
            ],
        );
        let narrated = PrepareNarration::new(10)
            .execute(
                &screenplay,
                vec![Character::new("JULES").with_gender(Gender::Male)],
            )
            .unwrap();
        assert_eq!(narrated.len(), 2);
        assert_eq!(narrated[1].voice.voice_type, VoiceType::Male);
    }

    #[test]
    fn test_execute_rejects_oversized_screenplay() {
        let screenplay = Screenplay::new(
            "T",
            vec![ScreenplayElement::new("ACTION", "x"); 3],
        );
        assert!(PrepareNarration::new(2)
            .execute(&screenplay, Vec::new())
            .is_err());
    }
}
