//! JSON response envelopes
//!
//! Every JSON endpoint answers with a `success` flag. Failures always use
//! [`ErrorResponse`], so script clients can branch on `success` without
//! looking at the HTTP status.

use serde::{Deserialize, Serialize};

use screenplay_domain::{NarratedElement, VoiceProfile};

/// MIME type of FDX documents
pub const FDX_CONTENT_TYPE: &str = "application/xml";

// =============================================================================
// Errors
// =============================================================================

/// `{ "success": false, "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

// =============================================================================
// FDX export
// =============================================================================

/// FDX document returned as JSON, for clients that cannot handle file downloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FdxExportResponse {
    pub success: bool,
    pub filename: String,
    /// The FDX document as text
    pub content: String,
    pub content_type: String,
}

impl FdxExportResponse {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            success: true,
            filename: filename.into(),
            content: content.into(),
            content_type: FDX_CONTENT_TYPE.to_string(),
        }
    }
}

// =============================================================================
// Narration
// =============================================================================

/// One element annotated with its voice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarratedElementData {
    #[serde(rename = "type")]
    pub element_type: String,
    pub text: String,
    pub voice: VoiceProfile,
    /// Speaker for dialogue and parenthetical lines, null otherwise
    pub character: Option<String>,
}

impl From<NarratedElement> for NarratedElementData {
    fn from(narrated: NarratedElement) -> Self {
        Self {
            element_type: narrated.element.element_type,
            text: narrated.element.text,
            voice: narrated.voice,
            character: narrated.speaker,
        }
    }
}

/// Response of `POST /tts/prepare`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrationResponse {
    pub success: bool,
    pub title: String,
    pub elements: Vec<NarratedElementData>,
    pub total_elements: usize,
}

impl NarrationResponse {
    pub fn new(title: impl Into<String>, narrated: Vec<NarratedElement>) -> Self {
        let elements: Vec<NarratedElementData> = narrated.into_iter().map(Into::into).collect();
        Self {
            success: true,
            title: title.into(),
            total_elements: elements.len(),
            elements,
        }
    }
}

// =============================================================================
// Service info
// =============================================================================

/// Response of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub status: String,
}

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use screenplay_domain::{ElementCategory, ScreenplayElement};

    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "boom"}));
    }

    #[test]
    fn test_fdx_export_response_shape() {
        let json = serde_json::to_value(FdxExportResponse::new("A.fdx", "<x/>")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "filename": "A.fdx",
                "content": "<x/>",
                "content_type": "application/xml"
            })
        );
    }

    #[test]
    fn test_narration_response_shape() {
        let narrated = vec![NarratedElement {
            element: ScreenplayElement::new("DIALOGUE", "Salut."),
            voice: VoiceProfile::base_for(ElementCategory::Dialogue),
            speaker: Some("JULES".to_string()),
        }];
        let json = serde_json::to_value(NarrationResponse::new("T", narrated)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["total_elements"], 1);
        assert_eq!(json["elements"][0]["type"], "DIALOGUE");
        assert_eq!(json["elements"][0]["character"], "JULES");
        assert_eq!(json["elements"][0]["voice"]["voice_type"], "neutral");
        assert_eq!(json["elements"][0]["voice"]["pause_after"], 300);
    }
}
