//! In-memory document staged for upload

/// A file ready to be sent as a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl DocumentFile {
    /// Build a document, guessing the content type from the file name.
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = if file_name.to_ascii_lowercase().ends_with(".xml") {
            "application/xml"
        } else {
            "application/octet-stream"
        };
        Self { file_name, content_type: content_type.to_string(), content }
    }

    /// Case-insensitive suffix check (`extension` includes the dot).
    pub fn has_extension(&self, extension: &str) -> bool {
        self.file_name.to_ascii_lowercase().ends_with(&extension.to_ascii_lowercase())
    }
}
