//! 사용자 및 인증 요청 모델.

use serde::{Deserialize, Serialize};

use super::Role;

/// 애플리케이션 사용자.
///
/// 백엔드가 반환하는 사용자 객체 구조와 일치합니다. 로그인 응답은 토큰만
/// 포함하므로, 그 경우 [`User::from_claims`]로 최소 사용자를 합성합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prenom: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
}

impl User {
    /// 토큰 클레임에서 최소 사용자 합성.
    ///
    /// id는 0, 이메일은 빈 문자열로 채워집니다. 역할 확인은 사용자 객체가
    /// 아닌 토큰 클레임을 읽으므로 이 최소 표현으로 충분합니다.
    pub fn from_claims(username: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            id: 0,
            username: username.into(),
            email: String::new(),
            nom: None,
            prenom: None,
            roles,
            telephone: None,
            adresse: None,
        }
    }
}

/// 로그인 자격 증명.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// 신규 클라이언트 가입 요청.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub nom: String,
    pub prenom: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
}
