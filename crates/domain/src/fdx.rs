//! Final Draft XML (FDX) serialization
//!
//! Produces the plain FDX layout Final Draft and compatible readers import:
//! one `<Paragraph Type="...">` per screenplay element inside the document
//! `<Content>`. The title is carried as the `Title` attribute of that
//! container, so paragraphs map one-to-one onto elements.
//!
//! Element text is free-form user input, so every text node goes through
//! [`escape_text`]. The output is well-formed XML for any input string.

use std::borrow::Cow;

use quick_xml::escape::escape;

use crate::entities::Screenplay;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const ROOT_OPEN: &str = r#"<FinalDraft DocumentType="Script" Template="No" Version="3">"#;
const ROOT_CLOSE: &str = "</FinalDraft>";

/// Serialize a screenplay to FDX text.
///
/// Paragraphs appear in element order, one per element. A blank title
/// leaves the `Title` attribute out.
pub fn serialize(screenplay: &Screenplay) -> String {
    let mut lines = Vec::with_capacity(screenplay.elements.len() * 3 + 5);
    lines.push(XML_DECLARATION.to_string());
    lines.push(ROOT_OPEN.to_string());

    let title = screenplay.title.trim();
    if title.is_empty() {
        lines.push("<Content>".to_string());
    } else {
        lines.push(format!(r#"<Content Title="{}">"#, escape_text(title)));
    }
    for element in &screenplay.elements {
        lines.push(format!(
            r#"  <Paragraph Type="{}">"#,
            element.category().fdx_paragraph_type()
        ));
        lines.push(format!("    <Text>{}</Text>", escape_text(&element.text)));
        lines.push("  </Paragraph>".to_string());
    }
    lines.push("</Content>".to_string());

    lines.push(ROOT_CLOSE.to_string());
    lines.join("\n")
}

/// Escape text for use in XML content or attribute values.
///
/// Drops characters XML 1.0 does not allow at all (C0 controls other than
/// tab, line feed and carriage return, U+FFFE and U+FFFF), then replaces the
/// five XML special characters with their entities.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_forbidden) {
        return escape(text);
    }

    let allowed: String = text.chars().filter(|&c| !is_forbidden(c)).collect();
    Cow::Owned(escape(allowed.as_str()).into_owned())
}

fn is_forbidden(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}
