//! HTTP 클라이언트.
//!
//! 모든 아웃바운드 요청에 대해:
//! - 로그인 요청을 제외하고, 만료되지 않은 토큰이 있으면 Bearer 헤더 부착
//! - 실패 응답을 [`ApiError`]로 번역하고, 401/403은 세션 관찰자에게 통지
//!
//! 번역된 에러는 항상 호출자에게 반환되므로 호출 측에서 추가로 반응할 수
//! 있습니다.

use std::sync::{RwLock, Weak};
use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use smartlogi_core::ApiConfig;

use crate::error::ApiError;
use crate::token::TokenStore;

/// 세션 관련 HTTP 장애 관찰자.
///
/// 장애 번역기가 세션 계층에 통지하기 위한 훅입니다. 세션 매니저가 구현해
/// Weak 참조로 등록되므로 클라이언트와 세션 계층 사이에 참조 순환이
/// 생기지 않습니다.
pub trait SessionFaultObserver: Send + Sync {
    /// 401 수신 - 세션 강제 종료 필요.
    fn on_unauthorized(&self);

    /// 403 수신 - 접근 거부 페이지로 이동 필요.
    fn on_forbidden(&self);
}

/// SmartLogi 백엔드 HTTP 클라이언트.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
    fault_observer: RwLock<Option<Weak<dyn SessionFaultObserver>>>,
}

impl ApiClient {
    /// 새 클라이언트 생성.
    ///
    /// # Errors
    /// HTTP 클라이언트 생성에 실패하면 `ApiError::Network`를 반환합니다.
    pub fn new(config: &ApiConfig, tokens: TokenStore) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(format!("HTTP client 생성 실패: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
            fault_observer: RwLock::new(None),
        })
    }

    /// 세션 장애 관찰자 등록.
    pub fn bind_fault_observer(&self, observer: Weak<dyn SessionFaultObserver>) {
        let mut slot = self.fault_observer.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(observer);
    }

    /// 토큰 저장소 반환.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// 설정된 기본 URL 반환.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET 요청.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.http.get(self.url(path));
        self.dispatch(path, request).await
    }

    /// 쿼리 파라미터가 포함된 GET 요청.
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.http.get(self.url(path)).query(query);
        self.dispatch(path, request).await
    }

    /// JSON 본문이 포함된 POST 요청.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.http.post(self.url(path)).json(body);
        self.dispatch(path, request).await
    }

    /// 본문 없이 쿼리 파라미터만 포함된 POST 요청.
    pub async fn post_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.http.post(self.url(path)).query(query);
        self.dispatch(path, request).await
    }

    /// JSON 본문이 포함된 PUT 요청.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.http.put(self.url(path)).json(body);
        self.dispatch(path, request).await
    }

    /// JSON 본문이 포함된 PATCH 요청.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.http.patch(self.url(path)).json(body);
        self.dispatch(path, request).await
    }

    /// DELETE 요청.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.http.delete(self.url(path));
        self.dispatch(path, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 요청에 Bearer 자격 증명 부착.
    ///
    /// 로그인 요청은 제외합니다. 새 토큰을 발급하는 유일한 엔드포인트에
    /// 만료된 토큰을 보내는 것을 방지하기 위함입니다.
    fn authorize(&self, path: &str, request: RequestBuilder) -> RequestBuilder {
        if path.contains("/auth/login") {
            return request;
        }

        match self.tokens.retrieve() {
            Some(token) if !TokenStore::is_expired(&token) => request.bearer_auth(token),
            _ => request,
        }
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.authorize(path, request).send().await.map_err(|e| {
            debug!(path, "요청 전송 실패: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.translate_fault(path, status, &body));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        // 본문 없는 응답 (204, void 엔드포인트)은 null로 처리
        let trimmed = text.trim();
        let source = if trimmed.is_empty() { "null" } else { trimmed };
        serde_json::from_str(source).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 실패 응답 번역 및 세션 관찰자 통지.
    fn translate_fault(&self, path: &str, status: StatusCode, body: &str) -> ApiError {
        let error = ApiError::from_status(status, body);

        match &error {
            ApiError::Unauthorized { .. } => {
                warn!(path, "401 수신, 세션 종료 통지");
                self.notify(|observer| observer.on_unauthorized());
            }
            ApiError::Forbidden { .. } => {
                warn!(path, "403 수신, 접근 거부 통지");
                self.notify(|observer| observer.on_forbidden());
            }
            _ => {
                debug!(path, status = status.as_u16(), "요청 실패");
            }
        }

        error
    }

    fn notify(&self, f: impl Fn(&dyn SessionFaultObserver)) {
        let slot = self.fault_observer.read().unwrap_or_else(|e| e.into_inner());
        if let Some(observer) = slot.as_ref().and_then(Weak::upgrade) {
            f(observer.as_ref());
        }
    }
}
