//! Document staging before upload

use cargas_domain::DocumentFile;

/// Files split by the extension check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedDocuments {
    pub accepted: Vec<DocumentFile>,
    pub rejected: Vec<String>,
}

impl StagedDocuments {
    pub fn has_accepted(&self) -> bool {
        !self.accepted.is_empty()
    }
}

/// Keep files whose name ends with `extension` (case-insensitive, dot
/// included); collect the names of the rest. Order is preserved on both
/// sides.
pub fn partition_documents(files: Vec<DocumentFile>, extension: &str) -> StagedDocuments {
    let (accepted, rejected): (Vec<_>, Vec<_>) =
        files.into_iter().partition(|file| file.has_extension(extension));

    StagedDocuments {
        accepted,
        rejected: rejected.into_iter().map(|file| file.file_name).collect(),
    }
}
