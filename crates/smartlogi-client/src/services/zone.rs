//! 배송 존 엔드포인트.

use std::sync::Arc;

use smartlogi_core::{CreateZone, Zone};

use crate::error::ApiError;
use crate::http::ApiClient;

/// 존 API.
pub struct ZoneApi {
    client: Arc<ApiClient>,
}

impl ZoneApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Zone>, ApiError> {
        self.client.get("/api/zones").await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Zone, ApiError> {
        self.client.get(&format!("/api/zones/{}", id)).await
    }

    pub async fn create(&self, data: &CreateZone) -> Result<Zone, ApiError> {
        self.client.post("/api/zones", data).await
    }

    pub async fn update(&self, id: &str, data: &CreateZone) -> Result<Zone, ApiError> {
        self.client.put(&format!("/api/zones/{}", id), data).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/api/zones/{}", id)).await
    }
}
