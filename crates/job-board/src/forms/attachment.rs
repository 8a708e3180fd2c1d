use std::path::Path;

use mime::Mime;
use serde::{Deserialize, Serialize};

const WORD_DOCUMENT: &str = "application/msword";
const WORD_OPEN_XML: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A file picked in a form. Only the reference is captured; no bytes are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl FileReference {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            size_bytes: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn is_blank(&self) -> bool {
        self.file_name.trim().is_empty()
    }

    /// Declared content type, falling back to a guess from the extension.
    pub fn media_type(&self) -> Mime {
        self.content_type
            .as_deref()
            .and_then(|declared| declared.parse::<Mime>().ok())
            .unwrap_or_else(|| {
                mime_guess::from_path(Path::new(self.file_name.trim())).first_or_octet_stream()
            })
    }

    /// PDF or Word.
    pub fn is_document(&self) -> bool {
        let media = self.media_type();
        media == mime::APPLICATION_PDF
            || matches!(media.essence_str(), WORD_DOCUMENT | WORD_OPEN_XML)
    }

    pub fn is_image(&self) -> bool {
        self.media_type().type_() == mime::IMAGE
    }
}
