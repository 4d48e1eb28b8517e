//! 상품 엔드포인트.

use std::sync::Arc;

use smartlogi_core::{CreateProduit, Produit};

use crate::error::ApiError;
use crate::http::ApiClient;

/// 상품 API.
pub struct ProduitApi {
    client: Arc<ApiClient>,
}

impl ProduitApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Produit>, ApiError> {
        self.client.get("/api/produits").await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Produit, ApiError> {
        self.client.get(&format!("/api/produits/{}", id)).await
    }

    pub async fn create(&self, data: &CreateProduit) -> Result<Produit, ApiError> {
        self.client.post("/api/produits", data).await
    }

    pub async fn update(&self, id: &str, data: &CreateProduit) -> Result<Produit, ApiError> {
        self.client
            .put(&format!("/api/produits/{}", id), data)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/api/produits/{}", id)).await
    }
}
