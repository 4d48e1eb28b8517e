//! 역할 기반 접근 제어 (RBAC).
//!
//! 사용자 역할 및 백엔드 역할 식별자 매핑 정의.

use serde::{Deserialize, Serialize};

/// 사용자 역할.
///
/// 백엔드(Spring Security)가 정의한 역할 식별자와 정확히 일치해야 합니다.
/// 문자열 변환은 [`Role::backend_name`]과 [`Role::parse`] 한 곳에서만
/// 수행하므로, 백엔드 명명 변경 시 이 모듈만 수정하면 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// 관리자 - 콜리/배송원/클라이언트 관리
    #[serde(rename = "GESTIONNAIRE")]
    Manager,
    /// 배송원 - 배정된 콜리 배송
    #[serde(rename = "LIVREUR")]
    Courier,
    /// 클라이언트 - 배송 의뢰 및 추적
    #[serde(rename = "CLIENT")]
    Client,
    /// 수취인 - 수신 콜리 추적
    #[serde(rename = "DESTINATAIRE")]
    Recipient,
}

impl Role {
    /// 역할 리다이렉트 우선순위.
    ///
    /// 여러 역할을 가진 사용자는 이 순서에서 먼저 일치하는 역할의
    /// 홈 라우트로 이동합니다. 의도된 정책이며 우연한 순서가 아닙니다.
    pub const PRIORITY: [Role; 4] = [Role::Manager, Role::Courier, Role::Client, Role::Recipient];

    /// 백엔드 역할 식별자 반환.
    pub fn backend_name(self) -> &'static str {
        match self {
            Role::Manager => "GESTIONNAIRE",
            Role::Courier => "LIVREUR",
            Role::Client => "CLIENT",
            Role::Recipient => "DESTINATAIRE",
        }
    }

    /// 백엔드 역할 식별자에서 역할 파싱.
    ///
    /// 대소문자를 포함해 정확히 일치해야 하며, 알 수 없는 문자열은
    /// `None`을 반환합니다 (권한 확인 시 조용히 실패하는 대신 이 지점에서
    /// 걸러집니다).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GESTIONNAIRE" => Some(Role::Manager),
            "LIVREUR" => Some(Role::Courier),
            "CLIENT" => Some(Role::Client),
            "DESTINATAIRE" => Some(Role::Recipient),
            _ => None,
        }
    }

    /// 역할별 홈 라우트 반환.
    pub fn home_route(self) -> &'static str {
        match self {
            Role::Manager => "/gestionnaire/dashboard",
            Role::Courier => "/livreur/mes-colis",
            Role::Client => "/client/mes-colis",
            Role::Recipient => "/destinataire/suivi-colis",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.backend_name())
    }
}
