//! 콜리 엔드포인트.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use smartlogi_core::{Colis, ColisRequest, ColisStatut, Page};

use crate::error::ApiError;
use crate::http::ApiClient;

/// 클라이언트 콜리 목록 응답.
///
/// 백엔드는 페이지네이션된 `Page`를 반환하지만, 배포에 따라 평탄한 배열을
/// 반환하기도 하므로 두 형태를 모두 받습니다.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColisListing {
    Page(Page<Colis>),
    List(Vec<Colis>),
}

impl ColisListing {
    fn into_vec(self) -> Vec<Colis> {
        match self {
            ColisListing::Page(page) => page.content,
            ColisListing::List(list) => list,
        }
    }
}

/// 콜리 API.
pub struct ColisApi {
    client: Arc<ApiClient>,
}

impl ColisApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 전체 콜리 목록 조회.
    pub async fn get_all(&self) -> Result<Vec<Colis>, ApiError> {
        self.client.get("/api/colis").await
    }

    /// 인증된 클라이언트의 콜리 목록 조회.
    ///
    /// 클라이언트 식별은 JWT로 수행되므로 별도 파라미터가 없습니다.
    pub async fn get_by_client(&self) -> Result<Vec<Colis>, ApiError> {
        let listing: ColisListing = self.client.get("/api/clients/colis").await?;
        Ok(listing.into_vec())
    }

    /// 특정 배송원에게 배정된 콜리 목록 조회.
    pub async fn get_by_livreur(&self, livreur_id: &str) -> Result<Vec<Colis>, ApiError> {
        self.client
            .get(&format!("/api/colis/livreur/{}", livreur_id))
            .await
    }

    /// 콜리 단건 조회.
    pub async fn get_by_id(&self, id: &str) -> Result<Colis, ApiError> {
        self.client.get(&format!("/api/colis/{}", id)).await
    }

    /// 상태별 콜리 목록 조회.
    pub async fn get_by_statut(&self, statut: ColisStatut) -> Result<Vec<Colis>, ApiError> {
        self.client
            .get_query("/api/colis", &[("statut", statut.to_string())])
            .await
    }

    /// 새 콜리 생성 (클라이언트 배송 의뢰).
    pub async fn create(&self, request: &ColisRequest) -> Result<Colis, ApiError> {
        self.client.post("/api/clients/colis", request).await
    }

    /// 콜리 수정.
    pub async fn update(&self, id: &str, request: &ColisRequest) -> Result<Colis, ApiError> {
        self.client
            .put(&format!("/api/colis/{}", id), request)
            .await
    }

    /// 콜리 삭제.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/api/colis/{}", id)).await
    }

    /// 콜리에 배송원 배정.
    pub async fn assigner_livreur(
        &self,
        colis_id: &str,
        livreur_id: &str,
    ) -> Result<Colis, ApiError> {
        self.client
            .put(
                &format!("/api/colis/{}/assigner-livreur", colis_id),
                &json!({ "livreurId": livreur_id }),
            )
            .await
    }

    /// 콜리 상태 갱신.
    pub async fn update_statut(
        &self,
        colis_id: &str,
        statut: ColisStatut,
    ) -> Result<Colis, ApiError> {
        self.client
            .put(
                &format!("/api/colis/{}/statut", colis_id),
                &json!({ "statut": statut }),
            )
            .await
    }
}
