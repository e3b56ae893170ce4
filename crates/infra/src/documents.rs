//! Loading documents from disk for upload

use std::path::Path;

use cargas_domain::{CargasError, DocumentFile, Result};

use crate::errors::InfraError;

/// Read `path` into a [`DocumentFile`] named after the file's last
/// component.
///
/// # Errors
/// Returns `CargasError::InvalidInput` when the path has no file name, or
/// `CargasError::Storage` when the file cannot be read.
pub async fn read_document(path: &Path) -> Result<DocumentFile> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CargasError::InvalidInput(format!("not a file: {}", path.display())))?;

    let content = tokio::fs::read(path).await.map_err(InfraError::from)?;
    Ok(DocumentFile::new(file_name, content))
}
