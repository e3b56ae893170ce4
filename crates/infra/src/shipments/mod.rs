//! Domain services, one per integration
//!
//! Each service resolves its integration through the registry and asks the
//! factory for a client on every call, so a logout (which resets the
//! factory) never leaves a service holding a stale client.

mod centauro;
mod nike;

use cargas_core::{partition_documents, StagedDocuments};
use cargas_domain::constants::DOCUMENT_EXTENSION;
use cargas_domain::{CargasError, DocumentFile, IntegrationConfig, Result};
use reqwest::multipart::Part;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

pub use centauro::CentauroShipmentService;
pub use nike::NikeShipmentService;

/// Result of a document upload: the backend payload plus what was filtered
/// out before sending.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutcome<T> {
    pub response: T,
    pub uploaded: Vec<String>,
    pub rejected: Vec<String>,
}

/// Capability switches checked before a request is built.
#[derive(Debug, Clone, Copy)]
enum Feature {
    DocumentUpload,
    StatusUpdate,
    Tracking,
}

impl Feature {
    fn enabled_for(self, integration: &IntegrationConfig) -> bool {
        match self {
            Self::DocumentUpload => integration.features.document_upload,
            Self::StatusUpdate => integration.features.status_update,
            Self::Tracking => integration.features.tracking,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::DocumentUpload => "document upload",
            Self::StatusUpdate => "status update",
            Self::Tracking => "tracking",
        }
    }
}

fn ensure_feature(integration: &IntegrationConfig, feature: Feature) -> Result<()> {
    if feature.enabled_for(integration) {
        Ok(())
    } else {
        Err(CargasError::InvalidInput(format!(
            "{} is disabled for {}",
            feature.name(),
            integration.display_name
        )))
    }
}

/// Decode a list endpoint that answers either a bare array or
/// `{ "data": [...] }`.
///
/// Any other shape yields an empty list. Items that do not decode are skipped.
/// Both cases are logged, neither is an error.
pub fn normalize_list<T: DeserializeOwned>(body: Value, resource: &str) -> Vec<T> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut fields) => match fields.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                warn!(resource, "list response has no data array, treating as empty");
                return Vec::new();
            }
        },
        other => {
            warn!(resource, kind = value_kind(&other), "unexpected list response shape, treating as empty");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                warn!(resource, index, error = %err, "skipping undecodable list item");
                None
            }
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Apply the document extension rule; refuse when nothing survives.
fn stage_documents(files: Vec<DocumentFile>) -> Result<StagedDocuments> {
    let staged = partition_documents(files, DOCUMENT_EXTENSION);

    if !staged.rejected.is_empty() {
        warn!(rejected = ?staged.rejected, "dropping files without {DOCUMENT_EXTENSION} extension");
    }

    if !staged.has_accepted() {
        let dropped = if staged.rejected.is_empty() {
            "no files given".to_string()
        } else {
            format!("dropped: {}", staged.rejected.join(", "))
        };
        return Err(CargasError::InvalidInput(format!(
            "no {DOCUMENT_EXTENSION} documents to upload ({dropped})"
        )));
    }

    Ok(staged)
}

fn file_part(file: DocumentFile) -> Result<Part> {
    Part::bytes(file.content)
        .file_name(file.file_name)
        .mime_str(&file.content_type)
        .map_err(|err| CargasError::InvalidInput(format!("invalid content type: {err}")))
}

/// Split attachments into the one the status endpoints accept and the
/// ignored rest.
fn single_attachment(mut attachments: Vec<DocumentFile>) -> Option<DocumentFile> {
    if attachments.is_empty() {
        return None;
    }
    let first = attachments.remove(0);
    if !attachments.is_empty() {
        let ignored: Vec<&str> = attachments.iter().map(|file| file.file_name.as_str()).collect();
        warn!(?ignored, "status endpoint accepts a single attachment, extra files not sent");
    }
    Some(first)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn bare_array_and_wrapped_array_decode_the_same() {
        let bare: Vec<Item> = normalize_list(json!([{ "id": 1 }, { "id": 2 }]), "items");
        let wrapped: Vec<Item> =
            normalize_list(json!({ "data": [{ "id": 1 }, { "id": 2 }], "count": 2 }), "items");

        assert_eq!(bare, wrapped);
        assert_eq!(bare.len(), 2);
    }

    #[test]
    fn other_shapes_are_empty() {
        for body in [json!({ "items": [] }), json!({ "data": {} }), json!("x"), Value::Null] {
            let items: Vec<Item> = normalize_list(body, "items");
            assert!(items.is_empty());
        }
    }

    #[test]
    fn undecodable_items_are_skipped() {
        let items: Vec<Item> = normalize_list(json!([{ "id": 1 }, { "id": "x" }, 3]), "items");
        assert_eq!(items, vec![Item { id: 1 }]);
    }

    #[test]
    fn staging_refuses_when_nothing_is_xml() {
        let err = stage_documents(vec![DocumentFile::new("a.pdf", vec![])]).unwrap_err();
        match err {
            CargasError::InvalidInput(msg) => assert!(msg.contains("a.pdf")),
            other => panic!("expected invalid input, got {other:?}"),
        }
        assert!(stage_documents(Vec::new()).is_err());
    }

    #[test]
    fn single_attachment_keeps_first() {
        let first = single_attachment(vec![
            DocumentFile::new("a.jpg", vec![1]),
            DocumentFile::new("b.jpg", vec![2]),
        ]);
        assert_eq!(first.unwrap().file_name, "a.jpg");
        assert!(single_attachment(Vec::new()).is_none());
    }
}
