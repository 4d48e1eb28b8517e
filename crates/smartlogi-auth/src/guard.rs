//! 라우트 가드.
//!
//! 가드 결정 자체는 순수 함수입니다 ([`evaluate`]). 라우터는 결정을 받아
//! 진입을 허용하거나 반환된 대상으로 이동합니다. 내비게이션 상태에 대한
//! 유일한 부수 효과는 스냅샷 생성 시 `is_authenticated()`에 내장된 만료
//! 로그아웃입니다.

use std::sync::Arc;

use tracing::warn;

use smartlogi_core::Role;

use crate::manager::AuthSessionManager;
use crate::navigator::NavigationTarget;
use crate::routes::{RouteRequirement, RouteTable, ACCESS_DENIED_ROUTE, LOGIN_ROUTE};

/// 내비게이션 시점의 인증 상태 스냅샷.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSnapshot {
    pub authenticated: bool,
    pub roles: Vec<Role>,
}

/// 가드 결정.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    /// 진입 허용
    Allow,
    /// 진입 거부, 대상으로 리다이렉트
    Redirect(NavigationTarget),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// 순수 가드 결정 함수.
///
/// `(authenticated, roles, requirement)`만으로 결정하며 IO와 패닉이
/// 없습니다. 동일 입력은 항상 동일 결정을 냅니다.
///
/// - 비인증 → 로그인으로 리다이렉트. 로그인 후 이어서 이동할 수 있도록
///   요청 경로를 `returnUrl`로 전달합니다.
/// - 역할 요구가 없으면 인증만으로 허용.
/// - 요구 역할 중 하나라도 보유하면 허용, 아니면 접근 거부 페이지로
///   리다이렉트. 같은 라우트 재시도는 다시 실패할 것이므로 `returnUrl`을
///   전달하지 않습니다.
pub fn evaluate(
    snapshot: &AuthSnapshot,
    requirement: &RouteRequirement,
    requested_path: &str,
) -> GuardDecision {
    if !snapshot.authenticated {
        return GuardDecision::Redirect(
            NavigationTarget::to(LOGIN_ROUTE).with_query("returnUrl", requested_path),
        );
    }

    if requirement.is_authenticated_only() {
        return GuardDecision::Allow;
    }

    if requirement
        .roles
        .iter()
        .any(|role| snapshot.roles.contains(role))
    {
        GuardDecision::Allow
    } else {
        warn!(path = requested_path, "접근 거부: 역할 부족");
        GuardDecision::Redirect(NavigationTarget::to(ACCESS_DENIED_ROUTE))
    }
}

/// 라우터가 보호 라우트 진입 전에 호출하는 가드.
pub struct RouteGuard {
    manager: Arc<AuthSessionManager>,
    table: RouteTable,
}

impl RouteGuard {
    pub fn new(manager: Arc<AuthSessionManager>, table: RouteTable) -> Self {
        Self { manager, table }
    }

    /// 보호 라우트 진입 가능 여부 결정.
    ///
    /// 테이블에 요구 사항이 없는 보호 라우트는 "인증만 필요"로 취급합니다.
    pub fn check(&self, requested_path: &str) -> GuardDecision {
        let requirement = self
            .table
            .requirement_for(requested_path)
            .cloned()
            .unwrap_or_default();
        self.check_with(requested_path, &requirement)
    }

    /// 명시된 요구 사항으로 결정 (라우터가 라우트 데이터를 직접 전달하는
    /// 경우).
    pub fn check_with(
        &self,
        requested_path: &str,
        requirement: &RouteRequirement,
    ) -> GuardDecision {
        // 만료된 토큰은 여기서 정리됨 (is_authenticated의 로그아웃 부수 효과)
        let snapshot = self.manager.snapshot();
        evaluate(&snapshot, requirement, requested_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticated(roles: Vec<Role>) -> AuthSnapshot {
        AuthSnapshot {
            authenticated: true,
            roles,
        }
    }

    fn anonymous() -> AuthSnapshot {
        AuthSnapshot {
            authenticated: false,
            roles: vec![],
        }
    }

    #[test]
    fn test_unauthenticated_redirects_to_login_with_return_url() {
        let decision = evaluate(
            &anonymous(),
            &RouteRequirement::any_of([Role::Client]),
            "/client/mes-colis",
        );

        let GuardDecision::Redirect(target) = decision else {
            panic!("expected redirect");
        };
        assert_eq!(target.to_string(), "/auth/login?returnUrl=/client/mes-colis");
    }

    #[test]
    fn test_role_mismatch_redirects_to_access_denied() {
        let decision = evaluate(
            &authenticated(vec![Role::Client]),
            &RouteRequirement::any_of([Role::Manager]),
            "/gestionnaire/dashboard",
        );

        let GuardDecision::Redirect(target) = decision else {
            panic!("expected redirect");
        };
        // 재시도해도 실패하므로 returnUrl 없음
        assert_eq!(target.to_string(), "/access-denied");
    }

    #[test]
    fn test_matching_role_allows() {
        let decision = evaluate(
            &authenticated(vec![Role::Client]),
            &RouteRequirement::any_of([Role::Client]),
            "/client/mes-colis",
        );
        assert!(decision.is_allowed());
    }

    #[test]
    fn test_empty_requirement_needs_authentication_only() {
        let requirement = RouteRequirement::authenticated_only();

        assert!(evaluate(&authenticated(vec![]), &requirement, "/profil").is_allowed());
        assert!(!evaluate(&anonymous(), &requirement, "/profil").is_allowed());
    }

    #[test]
    fn test_any_of_multiple_roles() {
        let requirement = RouteRequirement::any_of([Role::Manager, Role::Courier]);

        assert!(evaluate(&authenticated(vec![Role::Courier]), &requirement, "/x").is_allowed());
        assert!(!evaluate(&authenticated(vec![Role::Recipient]), &requirement, "/x").is_allowed());
    }

    #[test]
    fn test_decision_is_idempotent() {
        let snapshot = authenticated(vec![Role::Client]);
        let requirement = RouteRequirement::any_of([Role::Manager]);

        let first = evaluate(&snapshot, &requirement, "/gestionnaire/colis");
        let second = evaluate(&snapshot, &requirement, "/gestionnaire/colis");
        assert_eq!(first, second);
    }
}
