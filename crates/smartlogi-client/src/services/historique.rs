//! 배송 이력 엔드포인트.

use std::sync::Arc;

use smartlogi_core::HistoriqueLivraison;

use crate::error::ApiError;
use crate::http::ApiClient;

/// 배송 이력 API.
pub struct HistoriqueApi {
    client: Arc<ApiClient>,
}

impl HistoriqueApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 특정 콜리의 이력 조회.
    pub async fn for_colis(&self, colis_id: &str) -> Result<Vec<HistoriqueLivraison>, ApiError> {
        self.client
            .get(&format!("/api/colis/{}/historique", colis_id))
            .await
    }

    /// 전체 이력 조회.
    pub async fn get_all(&self) -> Result<Vec<HistoriqueLivraison>, ApiError> {
        self.client.get("/api/historiques").await
    }

    /// 이력 단건 조회.
    pub async fn get_by_id(&self, id: &str) -> Result<HistoriqueLivraison, ApiError> {
        self.client.get(&format!("/api/historiques/{}", id)).await
    }
}
