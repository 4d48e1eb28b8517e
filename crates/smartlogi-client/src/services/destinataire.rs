//! 수취인 엔드포인트.

use std::sync::Arc;

use smartlogi_core::{CreateDestinataire, Destinataire};

use crate::error::ApiError;
use crate::http::ApiClient;

/// 수취인 API.
pub struct DestinataireApi {
    client: Arc<ApiClient>,
}

impl DestinataireApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Destinataire>, ApiError> {
        self.client.get("/api/destinataires").await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Destinataire, ApiError> {
        self.client.get(&format!("/api/destinataires/{}", id)).await
    }

    pub async fn create(&self, data: &CreateDestinataire) -> Result<Destinataire, ApiError> {
        self.client.post("/api/destinataires", data).await
    }

    pub async fn update(
        &self,
        id: &str,
        data: &CreateDestinataire,
    ) -> Result<Destinataire, ApiError> {
        self.client
            .put(&format!("/api/destinataires/{}", id), data)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/api/destinataires/{}", id))
            .await
    }
}
