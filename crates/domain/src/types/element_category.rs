//! Element categories - the semantic bucket for a screenplay element type tag
//!
//! Every element of a screenplay carries a free-form type tag supplied by the
//! client. The classifier maps that tag onto a closed set of categories which
//! then drive both FDX serialization and narration voice selection.
//!
//! Classification is total: unknown tags degrade to [`ElementCategory::Other`]
//! instead of failing, so one malformed element never aborts a whole document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category of a screenplay element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementCategory {
    /// Slugline, e.g. "INT. CAFÉ - JOUR"
    SceneHeading,
    /// Description of what happens on screen
    Action,
    /// Character cue introducing a speaker
    Character,
    /// Spoken line
    Dialogue,
    /// Actor direction inside a speech, e.g. "(softly)"
    Parenthetical,
    /// Editing transition, e.g. "CUT TO:"
    Transition,
    /// Any unrecognized tag
    #[serde(other)]
    Other,
}

impl ElementCategory {
    /// All recognized categories (excludes Other)
    pub fn all() -> &'static [ElementCategory] {
        &[
            ElementCategory::SceneHeading,
            ElementCategory::Action,
            ElementCategory::Character,
            ElementCategory::Dialogue,
            ElementCategory::Parenthetical,
            ElementCategory::Transition,
        ]
    }

    /// Classify a raw element type tag.
    ///
    /// Matching is exact on the upper-case wire tags. Anything else yields
    /// [`ElementCategory::Other`].
    pub fn classify(tag: &str) -> Self {
        match tag {
            "SCENE_HEADING" => ElementCategory::SceneHeading,
            "ACTION" => ElementCategory::Action,
            "CHARACTER" => ElementCategory::Character,
            "DIALOGUE" => ElementCategory::Dialogue,
            "PARENTHETICAL" => ElementCategory::Parenthetical,
            "TRANSITION" => ElementCategory::Transition,
            _ => ElementCategory::Other,
        }
    }

    /// Canonical wire tag for this category
    pub fn tag(&self) -> &'static str {
        match self {
            ElementCategory::SceneHeading => "SCENE_HEADING",
            ElementCategory::Action => "ACTION",
            ElementCategory::Character => "CHARACTER",
            ElementCategory::Dialogue => "DIALOGUE",
            ElementCategory::Parenthetical => "PARENTHETICAL",
            ElementCategory::Transition => "TRANSITION",
            ElementCategory::Other => "OTHER",
        }
    }

    /// Final Draft paragraph `Type` attribute for this category.
    ///
    /// Unrecognized elements are written as action lines, which every FDX
    /// reader accepts.
    pub fn fdx_paragraph_type(&self) -> &'static str {
        match self {
            ElementCategory::SceneHeading => "Scene Heading",
            ElementCategory::Action => "Action",
            ElementCategory::Character => "Character",
            ElementCategory::Dialogue => "Dialogue",
            ElementCategory::Parenthetical => "Parenthetical",
            ElementCategory::Transition => "Transition",
            ElementCategory::Other => "Action",
        }
    }

    /// Whether elements of this category belong to the current speaker
    pub fn is_spoken(&self) -> bool {
        matches!(
            self,
            ElementCategory::Dialogue | ElementCategory::Parenthetical
        )
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_recognized_tags() {
        assert_eq!(
            ElementCategory::classify("SCENE_HEADING"),
            ElementCategory::SceneHeading
        );
        assert_eq!(ElementCategory::classify("ACTION"), ElementCategory::Action);
        assert_eq!(
            ElementCategory::classify("CHARACTER"),
            ElementCategory::Character
        );
        assert_eq!(
            ElementCategory::classify("DIALOGUE"),
            ElementCategory::Dialogue
        );
        assert_eq!(
            ElementCategory::classify("PARENTHETICAL"),
            ElementCategory::Parenthetical
        );
        assert_eq!(
            ElementCategory::classify("TRANSITION"),
            ElementCategory::Transition
        );
    }

    #[test]
    fn test_classify_unknown_falls_back_to_other() {
        assert_eq!(ElementCategory::classify("FOO"), ElementCategory::Other);
        assert_eq!(ElementCategory::classify(""), ElementCategory::Other);
        // Tags are matched exactly
        assert_eq!(ElementCategory::classify("dialogue"), ElementCategory::Other);
    }

    #[test]
    fn test_tag_roundtrips_through_classify() {
        for category in ElementCategory::all() {
            assert_eq!(ElementCategory::classify(category.tag()), *category);
        }
    }

    #[test]
    fn test_fdx_paragraph_types() {
        assert_eq!(
            ElementCategory::SceneHeading.fdx_paragraph_type(),
            "Scene Heading"
        );
        assert_eq!(ElementCategory::Character.fdx_paragraph_type(), "Character");
        assert_eq!(ElementCategory::Dialogue.fdx_paragraph_type(), "Dialogue");
        assert_eq!(
            ElementCategory::Parenthetical.fdx_paragraph_type(),
            "Parenthetical"
        );
        assert_eq!(
            ElementCategory::Transition.fdx_paragraph_type(),
            "Transition"
        );
        assert_eq!(ElementCategory::Action.fdx_paragraph_type(), "Action");
        assert_eq!(ElementCategory::Other.fdx_paragraph_type(), "Action");
    }

    #[test]
    fn test_spoken_categories() {
        assert!(ElementCategory::Dialogue.is_spoken());
        assert!(ElementCategory::Parenthetical.is_spoken());
        assert!(!ElementCategory::Character.is_spoken());
        assert!(!ElementCategory::Action.is_spoken());
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        let json = serde_json::to_string(&ElementCategory::SceneHeading).unwrap();
        assert_eq!(json, "\"SCENE_HEADING\"");
        let parsed: ElementCategory = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(parsed, ElementCategory::Other);
    }
}
