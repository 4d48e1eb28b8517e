//! 인증 엔드포인트.

use std::sync::Arc;

use serde::Deserialize;

use smartlogi_core::{LoginCredentials, RegisterRequest, User};

use crate::error::ApiError;
use crate::http::ApiClient;

/// 로그인 응답.
///
/// 이 배포의 백엔드는 로그인 시 토큰만 반환하므로, 사용자 정보는 토큰
/// 클레임에서 추출해야 합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// 가입 응답 (토큰 + 전체 사용자 객체).
#[derive(Debug, Clone, Deserialize)]
pub struct JwtResponse {
    pub token: String,
    /// 토큰 타입 (예: "Bearer")
    #[serde(default, rename = "type")]
    pub token_type: Option<String>,
    pub user: User,
}

/// 인증 API.
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 로그인. Bearer 헤더가 부착되지 않는 유일한 호출입니다.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        self.client.post("/auth/login", credentials).await
    }

    /// 신규 클라이언트 가입.
    pub async fn register(&self, data: &RegisterRequest) -> Result<JwtResponse, ApiError> {
        self.client.post("/auth/register", data).await
    }
}
