//! Character gender used to pick a narration voice

use serde::{Deserialize, Serialize};
use std::fmt;

/// Common female first names (French and English), upper-case
const FEMALE_NAMES: &[&str] = &[
    "MARIE", "SOPHIE", "JULIE", "EMMA", "LÉA", "CHLOÉ", "CAMILLE", "SARAH", "LAURA", "CLARA",
    "ALICE", "ANNA", "EVA", "LISA", "MARY", "JANE", "OLIVIA", "AVA", "MIA", "EMILY", "ELLA",
    "LUCY", "GRACE",
];

/// Common male first names (French and English), upper-case
const MALE_NAMES: &[&str] = &[
    "JEAN", "PIERRE", "PAUL", "JACQUES", "MICHEL", "MARC", "LUC", "THOMAS", "NICOLAS", "ANTOINE",
    "LOUIS", "HUGO", "LUCAS", "JOHN", "JAMES", "DAVID", "MICHAEL", "WILLIAM", "RICHARD", "ROBERT",
    "CHARLES", "JOSEPH",
];

/// Gender of a character, as far as voice selection is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    /// Other, unspecified or unknown
    #[default]
    #[serde(other)]
    Neutral,
}

impl Gender {
    /// Parse a client-supplied gender label.
    ///
    /// Blank labels mean "not provided" and return `None`. Any non-blank label
    /// other than male/female is treated as neutral.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        Some(match label.to_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            _ => Gender::Neutral,
        })
    }

    /// Guess a gender from the first word of a character name.
    ///
    /// Only a short list of common first names is known; everything else is
    /// neutral.
    pub fn guess_from_name(name: &str) -> Self {
        let Some(first) = name.split_whitespace().next() else {
            return Gender::Neutral;
        };
        let first = first.to_uppercase();

        if FEMALE_NAMES.contains(&first.as_str()) {
            Gender::Female
        } else if MALE_NAMES.contains(&first.as_str()) {
            Gender::Male
        } else {
            Gender::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(Gender::from_label("male"), Some(Gender::Male));
        assert_eq!(Gender::from_label(" Female "), Some(Gender::Female));
        assert_eq!(Gender::from_label("other"), Some(Gender::Neutral));
        assert_eq!(Gender::from_label("neutral"), Some(Gender::Neutral));
        assert_eq!(Gender::from_label(""), None);
        assert_eq!(Gender::from_label("   "), None);
    }

    #[test]
    fn test_guess_from_name() {
        assert_eq!(Gender::guess_from_name("MARIE"), Gender::Female);
        assert_eq!(Gender::guess_from_name("léa"), Gender::Female);
        assert_eq!(Gender::guess_from_name("Jean Dupont"), Gender::Male);
        assert_eq!(Gender::guess_from_name("JULES"), Gender::Neutral);
        assert_eq!(Gender::guess_from_name(""), Gender::Neutral);
    }

    #[test]
    fn test_serde_lenient() {
        let parsed: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(parsed, Gender::Female);
        let parsed: Gender = serde_json::from_str("\"unspecified\"").unwrap();
        assert_eq!(parsed, Gender::Neutral);
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
    }
}
