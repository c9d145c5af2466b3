//! Screenplay entity - a title plus an ordered list of elements

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::types::ElementCategory;

/// One paragraph-level unit of a screenplay.
///
/// The raw type tag is kept exactly as received so it can be echoed back to
/// clients; use [`ScreenplayElement::category`] for the classified value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenplayElement {
    #[serde(rename = "type")]
    pub element_type: String,
    pub text: String,
}

impl ScreenplayElement {
    pub fn new(element_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            text: text.into(),
        }
    }

    /// Classified category of this element's type tag
    pub fn category(&self) -> ElementCategory {
        ElementCategory::classify(&self.element_type)
    }
}

/// A screenplay document.
///
/// Element order is the reading order of the document and is preserved by
/// every transformation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Screenplay {
    pub title: String,
    pub elements: Vec<ScreenplayElement>,
}

impl Screenplay {
    pub fn new(title: impl Into<String>, elements: Vec<ScreenplayElement>) -> Self {
        Self {
            title: title.into(),
            elements,
        }
    }

    /// Number of elements in the document
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Reject documents with more than `max` elements.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TooMany` when the element count exceeds `max`.
    pub fn ensure_element_limit(&self, max: usize) -> Result<(), DomainError> {
        if self.elements.len() > max {
            return Err(DomainError::too_many("elements", self.elements.len(), max));
        }
        Ok(())
    }
}
