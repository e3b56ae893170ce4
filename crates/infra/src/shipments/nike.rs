use std::sync::Arc;

use cargas_core::IntegrationRegistry;
use cargas_domain::constants::INTEGRATION_NIKE;
use cargas_domain::{
    CargasError, DocumentFile, NikeShipment, NikeStatusUpdate, Result, XmlUploadResponse,
};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::{
    ensure_feature, file_part, normalize_list, single_attachment, stage_documents, Feature,
    UploadOutcome,
};
use crate::api::{ApiClient, ApiClientFactory};

/// Shipments of the auth-provider backend (`/cargas`).
pub struct NikeShipmentService {
    registry: Arc<IntegrationRegistry>,
    factory: Arc<ApiClientFactory>,
}

impl NikeShipmentService {
    pub fn new(registry: Arc<IntegrationRegistry>, factory: Arc<ApiClientFactory>) -> Self {
        Self { registry, factory }
    }

    fn client(&self) -> Result<Arc<ApiClient>> {
        self.factory.client_for(&self.registry.get(INTEGRATION_NIKE))
    }

    /// # Errors
    /// Transport and status errors from [`ApiClient`]. An unexpected list
    /// shape is not an error.
    #[instrument(skip(self))]
    pub async fn list_shipments(&self) -> Result<Vec<NikeShipment>> {
        let body: Value = self.client()?.get(&["cargas", ""]).await?;
        let shipments = normalize_list(body, "cargas");
        debug!(count = shipments.len(), "shipments listed");
        Ok(shipments)
    }

    /// # Errors
    /// `NotFound` when the id does not exist.
    #[instrument(skip(self))]
    pub async fn get_shipment(&self, id: &str) -> Result<NikeShipment> {
        self.client()?.get(&["cargas", id]).await
    }

    /// Post a new status. Without attachments the fields go as JSON; with
    /// attachments they go as the `new_status` JSON string next to a single
    /// `attachment` file part.
    ///
    /// # Errors
    /// - `InvalidInput` when status updates are disabled for the integration
    /// - `Validation` when the backend refuses the transition
    /// - `NotFound`, `Unauthorized` and transport errors from [`ApiClient`]
    #[instrument(skip(self, update, attachments), fields(code = %update.code, attachments = attachments.len()))]
    pub async fn update_status(
        &self,
        id: &str,
        update: &NikeStatusUpdate,
        attachments: Vec<DocumentFile>,
    ) -> Result<Value> {
        let client = self.client()?;
        ensure_feature(client.integration(), Feature::StatusUpdate)?;
        let path = ["cargas", id, "status"];

        let response = match single_attachment(attachments) {
            None => client.post_json(&path, update).await?,
            Some(file) => {
                let status = serde_json::to_string(update).map_err(|err| {
                    CargasError::Internal(format!("failed to encode status update: {err}"))
                })?;
                let form = Form::new()
                    .part("new_status", Part::text(status))
                    .part("attachment", file_part(file)?);
                client.post_multipart(&path, form).await?
            }
        };

        info!(shipment = id, code = %update.code, "status updated");
        Ok(response)
    }

    /// Upload XML documents for an invoice as repeated `xmls` parts.
    ///
    /// # Errors
    /// - `InvalidInput` when uploads are disabled or no file has the `.xml`
    ///   extension (nothing is sent)
    /// - status and transport errors from [`ApiClient`]
    #[instrument(skip(self, files), fields(files = files.len()))]
    pub async fn upload_documents(
        &self,
        invoice_id: &str,
        files: Vec<DocumentFile>,
    ) -> Result<UploadOutcome<XmlUploadResponse>> {
        let client = self.client()?;
        ensure_feature(client.integration(), Feature::DocumentUpload)?;
        let staged = stage_documents(files)?;

        let uploaded: Vec<String> =
            staged.accepted.iter().map(|file| file.file_name.clone()).collect();
        let mut form = Form::new();
        for file in staged.accepted {
            form = form.part("xmls", file_part(file)?);
        }

        let response: XmlUploadResponse =
            client.post_multipart(&["cargas", invoice_id, "upload-xml"], form).await?;

        info!(invoice = invoice_id, uploaded = uploaded.len(), sucesso = response.sucesso, "documents uploaded");
        Ok(UploadOutcome { response, uploaded, rejected: staged.rejected })
    }
}
