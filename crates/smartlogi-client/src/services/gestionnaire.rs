//! 관리자 전용 엔드포인트.

use std::sync::Arc;

use serde_json::json;

use smartlogi_core::{Colis, ColisStatut, Priorite};

use crate::error::ApiError;
use crate::http::ApiClient;

/// 관리자 API.
pub struct GestionnaireApi {
    client: Arc<ApiClient>,
}

impl GestionnaireApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 전체 콜리 목록 조회 (관리자 시점).
    pub async fn get_all_colis(&self) -> Result<Vec<Colis>, ApiError> {
        self.client.get("/api/gestionnaires/colis").await
    }

    /// 콜리에 배송원 배정.
    pub async fn assigner_livreur(
        &self,
        colis_id: &str,
        livreur_id: &str,
    ) -> Result<(), ApiError> {
        self.client
            .post_query(
                &format!("/api/gestionnaires/colis/{}/assigner", colis_id),
                &[("livreurId", livreur_id)],
            )
            .await
    }

    /// 조건별 콜리 검색.
    pub async fn rechercher_colis(
        &self,
        statut: Option<ColisStatut>,
        ville: Option<&str>,
        priorite: Option<Priorite>,
    ) -> Result<Vec<Colis>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(statut) = statut {
            query.push(("statut", statut.to_string()));
        }
        if let Some(ville) = ville {
            query.push(("ville", ville.to_string()));
        }
        if let Some(priorite) = priorite {
            query.push(("priorite", priorite.to_string()));
        }

        self.client
            .get_query("/api/gestionnaires/colis/recherche", &query)
            .await
    }

    /// 필드별 콜리 그룹 집계.
    pub async fn group_colis_by(&self, field: &str) -> Result<serde_json::Value, ApiError> {
        self.client
            .get(&format!("/api/gestionnaires/colis/group-by/{}", field))
            .await
    }

    /// 콜리 처리 (상태 변경 + 코멘트).
    pub async fn traiter_colis(
        &self,
        colis_id: &str,
        statut: ColisStatut,
        commentaire: Option<&str>,
    ) -> Result<Colis, ApiError> {
        self.client
            .put(
                &format!("/api/gestionnaires/colis/{}/traiter", colis_id),
                &json!({ "statut": statut, "commentaire": commentaire }),
            )
            .await
    }
}
