//! FDX export use case.

use screenplay_domain::{fdx, Screenplay};

use super::UseCaseError;

/// File extension of Final Draft documents
const FDX_EXTENSION: &str = "fdx";

/// Name used when the title yields no usable filename
const FALLBACK_STEM: &str = "screenplay";

/// A serialized FDX document and its download name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FdxExport {
    pub filename: String,
    pub content: String,
}

impl FdxExport {
    /// `Content-Disposition` value for downloading this document.
    ///
    /// Carries an ASCII fallback name plus the UTF-8 name (RFC 6266).
    pub fn content_disposition(&self) -> String {
        let ascii: String = self
            .filename
            .chars()
            .map(|c| if c.is_ascii() { c } else { '_' })
            .collect();
        format!(
            "attachment; filename=\"{ascii}\"; filename*=UTF-8''{}",
            percent_encode(&self.filename)
        )
    }
}

/// Export a screenplay as Final Draft XML.
pub struct ExportScreenplay {
    max_elements: usize,
}

impl ExportScreenplay {
    pub fn new(max_elements: usize) -> Self {
        Self { max_elements }
    }

    pub fn execute(&self, screenplay: &Screenplay) -> Result<FdxExport, UseCaseError> {
        screenplay.ensure_element_limit(self.max_elements)?;

        let content = fdx::serialize(screenplay);
        let filename = safe_filename(&screenplay.title);
        tracing::debug!(
            elements = screenplay.len(),
            bytes = content.len(),
            filename = %filename,
            "Serialized screenplay to FDX"
        );

        Ok(FdxExport { filename, content })
    }
}

/// Turn a title into a safe `.fdx` filename.
///
/// Whitespace runs become `_`, path separators and characters reserved on
/// common filesystems become `_`, and an empty result falls back to
/// `screenplay.fdx`.
pub fn safe_filename(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for c in title.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => stem.push('_'),
            c if c.is_control() => stem.push('_'),
            c => stem.push(c),
        }
    }

    // Leading dots would hide the file or walk up directories
    let stem = stem.trim_start_matches('.');
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem };
    format!("{stem}.{FDX_EXTENSION}")
}

fn percent_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(char::from(byte))
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
