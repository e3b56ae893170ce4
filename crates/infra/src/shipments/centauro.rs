use std::sync::Arc;

use cargas_core::IntegrationRegistry;
use cargas_domain::constants::INTEGRATION_CENTAURO;
use cargas_domain::{
    CargasError, CentauroShipment, CentauroShipmentDraft, CentauroStatusUpdate,
    CentauroTrackingEvent, DocumentFile, Result,
};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::{
    ensure_feature, file_part, normalize_list, single_attachment, stage_documents, Feature,
    UploadOutcome,
};
use crate::api::{ApiClient, ApiClientFactory};

/// Shipments of the second backend (`/api/v2/shipments`).
pub struct CentauroShipmentService {
    registry: Arc<IntegrationRegistry>,
    factory: Arc<ApiClientFactory>,
}

impl CentauroShipmentService {
    pub fn new(registry: Arc<IntegrationRegistry>, factory: Arc<ApiClientFactory>) -> Self {
        Self { registry, factory }
    }

    fn client(&self) -> Result<Arc<ApiClient>> {
        self.factory.client_for(&self.registry.get(INTEGRATION_CENTAURO))
    }

    /// # Errors
    /// Transport and status errors from [`ApiClient`]. An unexpected list
    /// shape is not an error.
    #[instrument(skip(self))]
    pub async fn list_shipments(&self) -> Result<Vec<CentauroShipment>> {
        let body: Value = self.client()?.get(&["shipments", ""]).await?;
        let shipments = normalize_list(body, "shipments");
        debug!(count = shipments.len(), "shipments listed");
        Ok(shipments)
    }

    /// # Errors
    /// `NotFound` when the id does not exist.
    #[instrument(skip(self))]
    pub async fn get_shipment(&self, id: &str) -> Result<CentauroShipment> {
        self.client()?.get(&["shipments", id]).await
    }

    /// Post a new status. Without attachments the fields go as JSON; with
    /// attachments they go as the `status_data` JSON string next to a single
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
        update: &CentauroStatusUpdate,
        attachments: Vec<DocumentFile>,
    ) -> Result<Value> {
        let client = self.client()?;
        ensure_feature(client.integration(), Feature::StatusUpdate)?;
        let path = ["shipments", id, "status"];

        let response = match single_attachment(attachments) {
            None => client.post_json(&path, update).await?,
            Some(file) => {
                let status = serde_json::to_string(update).map_err(|err| {
                    CargasError::Internal(format!("failed to encode status update: {err}"))
                })?;
                let form = Form::new()
                    .part("status_data", Part::text(status))
                    .part("attachment", file_part(file)?);
                client.post_multipart(&path, form).await?
            }
        };

        info!(shipment = id, code = %update.code, "status updated");
        Ok(response)
    }

    /// Upload client CT-e XMLs as repeated `xml` parts.
    ///
    /// # Errors
    /// - `InvalidInput` when uploads are disabled or no file has the `.xml`
    ///   extension (nothing is sent)
    /// - status and transport errors from [`ApiClient`]
    #[instrument(skip(self, files), fields(files = files.len()))]
    pub async fn upload_documents(
        &self,
        id: &str,
        files: Vec<DocumentFile>,
    ) -> Result<UploadOutcome<Value>> {
        let client = self.client()?;
        ensure_feature(client.integration(), Feature::DocumentUpload)?;
        let staged = stage_documents(files)?;

        let uploaded: Vec<String> =
            staged.accepted.iter().map(|file| file.file_name.clone()).collect();
        let mut form = Form::new();
        for file in staged.accepted {
            form = form.part("xml", file_part(file)?);
        }

        let response: Value =
            client.post_multipart(&["shipments", id, "client-ctes"], form).await?;

        info!(shipment = id, uploaded = uploaded.len(), "client CT-es uploaded");
        Ok(UploadOutcome { response, uploaded, rejected: staged.rejected })
    }

    /// Tracking events recorded for a shipment.
    ///
    /// # Errors
    /// `InvalidInput` when tracking is disabled; otherwise as
    /// [`CentauroShipmentService::list_shipments`].
    #[instrument(skip(self))]
    pub async fn tracking_events(&self, id: &str) -> Result<Vec<CentauroTrackingEvent>> {
        let client = self.client()?;
        ensure_feature(client.integration(), Feature::Tracking)?;
        let body: Value = client.get(&["shipments", id, "tracking"]).await?;
        Ok(normalize_list(body, "tracking"))
    }

    /// # Errors
    /// `Validation` when the backend refuses the draft.
    #[instrument(skip(self, draft))]
    pub async fn create_shipment(&self, draft: &CentauroShipmentDraft) -> Result<CentauroShipment> {
        let shipment: CentauroShipment = self.client()?.post_json(&["shipments", ""], draft).await?;
        info!(shipment = %shipment.id, "shipment created");
        Ok(shipment)
    }

    /// # Errors
    /// `NotFound` when the id does not exist.
    #[instrument(skip(self))]
    pub async fn delete_shipment(&self, id: &str) -> Result<()> {
        self.client()?.delete(&["shipments", id]).await?;
        info!(shipment = id, "shipment deleted");
        Ok(())
    }
}
