//! JWT 토큰 저장 및 클레임 읽기.
//!
//! 디코딩은 의도적으로 서명을 검증하지 않습니다. TLS로 백엔드에서 받은
//! 클레임을 읽기 위한 좁은 범위의 "claims peek"이며, 검증 권한은 모든 API
//! 호출에서 백엔드에 있습니다. 토큰 검증 용도로 사용하면 안 됩니다.

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use crate::storage::{StorageError, TokenStorage};

/// JWT 페이로드에서 읽어낸 클레임.
///
/// 백엔드 구성에 따라 기본 클레임명과 대체 클레임명이 섞여 올 수 있으므로
/// (sub/username, roles/authorities) 모두 선택 필드로 받고 접근자가 대체
/// 순서를 처리합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenClaims {
    /// Subject - 사용자명
    #[serde(default)]
    pub sub: Option<String>,
    /// 대체 사용자명 클레임
    #[serde(default)]
    pub username: Option<String>,
    /// 사용자 역할
    #[serde(default)]
    pub roles: Option<Vec<String>>,
    /// 대체 역할 클레임 (Spring Security 형식)
    #[serde(default)]
    pub authorities: Option<Vec<String>>,
    /// Expiration - 만료 시각 (Unix timestamp, 초)
    #[serde(default)]
    pub exp: Option<i64>,
    /// Issued At - 발급 시각 (Unix timestamp, 초)
    #[serde(default)]
    pub iat: Option<i64>,
}

impl TokenClaims {
    /// 사용자명 반환 (`sub` 우선, 없으면 `username`).
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().or(self.username.as_deref())
    }

    /// 역할 문자열 목록 반환 (`roles` 우선, 없으면 `authorities`).
    pub fn role_names(&self) -> &[String] {
        self.roles
            .as_deref()
            .or(self.authorities.as_deref())
            .unwrap_or(&[])
    }
}

/// 토큰 저장소.
///
/// 내구 저장소 위에 클레임 읽기 연산을 얹은 래퍼입니다.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn TokenStorage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    /// 원시 토큰 저장. 쓰기 시점에 검증하지 않습니다.
    pub fn persist(&self, token: &str) -> Result<(), StorageError> {
        self.storage.persist(token)
    }

    /// 저장된 원시 토큰 반환.
    pub fn retrieve(&self) -> Option<String> {
        self.storage.retrieve()
    }

    /// 저장된 토큰 삭제.
    pub fn remove(&self) -> Result<(), StorageError> {
        self.storage.remove()
    }

    /// 토큰 존재 여부 확인.
    pub fn has_token(&self) -> bool {
        self.retrieve().is_some()
    }

    /// 서명 검증 없이 페이로드 클레임 디코딩.
    ///
    /// 형식이 잘못된 입력은 `None`을 반환하며, 이 경계를 넘어 에러가
    /// 전파되지 않습니다. 호출자는 `None`을 "클레임 없음"으로 취급해야
    /// 합니다.
    pub fn decode(token: &str) -> Option<TokenClaims> {
        let payload = token.split('.').nth(1)?;

        let bytes = match URL_SAFE_NO_PAD.decode(payload) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("토큰 페이로드 디코딩 실패: {}", e);
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(claims) => Some(claims),
            Err(e) => {
                debug!("토큰 클레임 파싱 실패: {}", e);
                None
            }
        }
    }

    /// 토큰 만료 여부 확인.
    ///
    /// Fail-closed: 디코딩에 실패하거나 `exp` 클레임이 없으면 만료로
    /// 간주합니다.
    pub fn is_expired(token: &str) -> bool {
        match Self::decode(token).and_then(|claims| claims.exp) {
            Some(exp) => exp <= Utc::now().timestamp(),
            None => true,
        }
    }

    /// 저장된 토큰에서 역할 문자열 목록 추출.
    ///
    /// 토큰 부재, 디코딩 실패, 역할 클레임 부재 모두 빈 목록을 반환합니다.
    pub fn roles_from_token(&self) -> Vec<String> {
        self.retrieve()
            .and_then(|token| Self::decode(&token))
            .map(|claims| claims.role_names().to_vec())
            .unwrap_or_default()
    }

    /// 저장된 토큰에서 사용자명 추출.
    pub fn username_from_token(&self) -> Option<String> {
        self.retrieve()
            .and_then(|token| Self::decode(&token))
            .and_then(|claims| claims.subject().map(str::to_owned))
    }
}
