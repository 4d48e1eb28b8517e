//! 라우트 테이블 및 인가 요구 사항.

use smartlogi_core::Role;

/// 로그인 진입점.
pub const LOGIN_ROUTE: &str = "/auth/login";
/// 접근 거부 페이지.
pub const ACCESS_DENIED_ROUTE: &str = "/access-denied";
/// 애플리케이션 루트.
pub const ROOT_ROUTE: &str = "/";

/// 라우트에 부착되는 인가 요구 사항.
///
/// 빈 역할 목록은 "인증만 필요"를 의미합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteRequirement {
    pub roles: Vec<Role>,
}

impl RouteRequirement {
    /// 인증만 요구하는 요구 사항.
    pub fn authenticated_only() -> Self {
        Self::default()
    }

    /// 나열된 역할 중 하나를 요구하는 요구 사항.
    pub fn any_of(roles: impl Into<Vec<Role>>) -> Self {
        Self {
            roles: roles.into(),
        }
    }

    /// 역할 제약 없이 인증만 요구하는지 확인.
    pub fn is_authenticated_only(&self) -> bool {
        self.roles.is_empty()
    }
}

/// 보호 라우트 테이블.
///
/// 경로 접두사에 요구 사항을 부착합니다. 조회는 가장 긴 일치 접두사를
/// 선택합니다.
pub struct RouteTable {
    entries: Vec<(String, RouteRequirement)>,
}

impl RouteTable {
    /// 빈 테이블 생성.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 접두사에 요구 사항 부착.
    pub fn protect(mut self, prefix: impl Into<String>, requirement: RouteRequirement) -> Self {
        self.entries.push((prefix.into(), requirement));
        self
    }

    /// 경로에 해당하는 요구 사항 조회 (가장 긴 일치 접두사).
    ///
    /// 접두사는 세그먼트 경계에서만 일치합니다 (`/client`는 `/clientele`과
    /// 일치하지 않음).
    pub fn requirement_for(&self, path: &str) -> Option<&RouteRequirement> {
        self.entries
            .iter()
            .filter(|(prefix, _)| {
                path == prefix || path.starts_with(&format!("{}/", prefix))
            })
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, requirement)| requirement)
    }
}

impl Default for RouteTable {
    /// 애플리케이션 라우트 테이블.
    ///
    /// 각 역할 모듈은 해당 역할만 접근할 수 있습니다.
    fn default() -> Self {
        Self::new()
            .protect("/gestionnaire", RouteRequirement::any_of([Role::Manager]))
            .protect("/livreur", RouteRequirement::any_of([Role::Courier]))
            .protect("/client", RouteRequirement::any_of([Role::Client]))
            .protect("/destinataire", RouteRequirement::any_of([Role::Recipient]))
    }
}
