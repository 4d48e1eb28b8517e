//! 관리자 통계 엔드포인트.

use std::sync::Arc;

use smartlogi_core::StatistiquesOverview;

use crate::error::ApiError;
use crate::http::ApiClient;

/// 통계 API.
pub struct StatistiquesApi {
    client: Arc<ApiClient>,
}

impl StatistiquesApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 전체 통계 개요 조회.
    pub async fn overview(&self) -> Result<StatistiquesOverview, ApiError> {
        self.client.get("/api/gestionnaires/statistiques").await
    }

    /// 필터가 적용된 통계 조회.
    pub async fn filtered(
        &self,
        livreur_id: Option<&str>,
        zone_id: Option<&str>,
    ) -> Result<serde_json::Value, ApiError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(livreur_id) = livreur_id {
            query.push(("livreurId", livreur_id));
        }
        if let Some(zone_id) = zone_id {
            query.push(("zoneId", zone_id));
        }

        self.client
            .get_query("/api/gestionnaires/statistiques", &query)
            .await
    }
}
