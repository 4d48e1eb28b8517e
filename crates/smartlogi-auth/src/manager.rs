//! 인증 세션 매니저.
//!
//! 로그인, 가입, 로그아웃, 초기 세션 복구를 조율하고 세션 상태를
//! 갱신합니다. 역할 조회는 캐시된 사용자 객체가 아닌 토큰 클레임을 읽으므로
//! 세션 사용자가 오래되었거나 최소 상태여도 항상 정확합니다.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use tracing::{info, warn};

use smartlogi_client::{
    ApiClient, AuthApi, SessionFaultObserver, TokenStore,
};
use smartlogi_core::{LoginCredentials, RegisterRequest, Role, User};

use crate::error::AuthError;
use crate::guard::AuthSnapshot;
use crate::navigator::{NavigationTarget, Navigator};
use crate::routes::{ACCESS_DENIED_ROUTE, LOGIN_ROUTE, ROOT_ROUTE};
use crate::session::SessionState;

/// 인증 세션 매니저.
///
/// 세션 상태에 대한 유일한 쓰기 경로입니다.
pub struct AuthSessionManager {
    auth_api: AuthApi,
    tokens: TokenStore,
    session: Arc<SessionState>,
    navigator: Arc<dyn Navigator>,
    /// 진행 중인 로그인 시도 표시 (중복 로그인 차단)
    login_pending: AtomicBool,
}

/// 로그인 진행 플래그를 스코프 종료 시 해제하는 가드.
struct PendingReset<'a>(&'a AtomicBool);

impl Drop for PendingReset<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl AuthSessionManager {
    /// 구성 요소를 연결하고 초기 세션 복구를 수행합니다.
    ///
    /// 매니저는 API 클라이언트에 세션 장애 관찰자로 등록되어 401이 강제
    /// 로그아웃으로, 403이 접근 거부 이동으로 이어집니다. Weak 참조로
    /// 등록되므로 참조 순환은 없습니다.
    pub fn wire(
        client: Arc<ApiClient>,
        session: Arc<SessionState>,
        navigator: Arc<dyn Navigator>,
    ) -> Arc<Self> {
        let manager = Arc::new(Self {
            tokens: client.tokens().clone(),
            auth_api: AuthApi::new(client.clone()),
            session,
            navigator,
            login_pending: AtomicBool::new(false),
        });

        let manager_dyn: Arc<dyn SessionFaultObserver> = manager.clone();
        let observer: Weak<dyn SessionFaultObserver> = Arc::downgrade(&manager_dyn);
        client.bind_fault_observer(observer);

        manager.recover_session();
        manager
    }

    /// 프로세스 시작 시 저장된 토큰에서 세션 재계산.
    ///
    /// 유효한 토큰이 있으면 인증 플래그만 복구합니다. 사용자 객체는
    /// 미설정으로 두며 백엔드 왕복은 하지 않습니다 (역할 조회는 어차피
    /// 클레임을 읽음).
    fn recover_session(&self) {
        if let Some(token) = self.tokens.retrieve() {
            if !TokenStore::is_expired(&token) {
                self.session.establish(None);
                info!("Session recovered from stored token");
            }
        }
    }

    /// 로그인.
    ///
    /// 이 배포의 로그인 응답은 토큰만 포함하므로, 사용자명과 역할을 토큰
    /// 클레임에서 추출해 최소 사용자를 합성합니다. 백엔드 실패는 그대로
    /// 전파됩니다 (인증 실패는 일시적 장애가 아니므로 재시도 없음).
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<(), AuthError> {
        if self.login_pending.swap(true, Ordering::SeqCst) {
            return Err(AuthError::LoginInProgress);
        }
        let _pending = PendingReset(&self.login_pending);

        let response = self.auth_api.login(credentials).await?;
        self.tokens.persist(&response.token)?;

        let roles = self.user_roles();
        let username = self.tokens.username_from_token().unwrap_or_default();
        let user = User::from_claims(username, roles);

        info!(username = %user.username, "Login succeeded");
        self.session.establish(Some(user));
        Ok(())
    }

    /// 신규 클라이언트 가입.
    ///
    /// 가입 응답은 전체 사용자 객체를 포함하므로 클레임 합성 없이 그대로
    /// 세션에 반영합니다.
    pub async fn register(&self, data: &RegisterRequest) -> Result<User, AuthError> {
        let response = self.auth_api.register(data).await?;
        self.tokens.persist(&response.token)?;

        info!(username = %response.user.username, "Registration succeeded");
        self.session.establish(Some(response.user.clone()));
        Ok(response.user)
    }

    /// 로그아웃.
    ///
    /// 토큰 제거, 세션 초기화, 로그인 진입점으로 이동. 세션이 없어도
    /// 안전합니다 (멱등).
    pub fn logout(&self) {
        if let Err(e) = self.tokens.remove() {
            warn!("토큰 제거 실패: {}", e);
        }
        self.session.clear();
        self.navigator.navigate(NavigationTarget::to(LOGIN_ROUTE));
    }

    /// 인증 여부 확인.
    ///
    /// 캐시하지 않고 매 호출마다 저장소에서 재계산합니다. 만료된 토큰이
    /// 발견되면 즉시 로그아웃을 수행해 오래된 플래그가 남지 않도록 합니다.
    pub fn is_authenticated(&self) -> bool {
        let Some(token) = self.tokens.retrieve() else {
            return false;
        };

        if TokenStore::is_expired(&token) {
            warn!("Stored token expired, forcing logout");
            self.logout();
            return false;
        }

        true
    }

    /// 토큰 클레임에서 역할 목록 추출.
    ///
    /// 알 수 없는 역할 문자열은 매핑 지점([`Role::parse`])에서 걸러집니다.
    pub fn user_roles(&self) -> Vec<Role> {
        self.tokens
            .roles_from_token()
            .iter()
            .filter_map(|name| Role::parse(name))
            .collect()
    }

    /// 특정 역할 보유 여부 확인.
    pub fn has_role(&self, role: Role) -> bool {
        self.user_roles().contains(&role)
    }

    /// 나열된 역할 중 하나라도 보유하는지 확인.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        let held = self.user_roles();
        roles.iter().any(|role| held.contains(role))
    }

    /// 역할에 따라 홈 라우트로 이동.
    ///
    /// 여러 역할을 가진 사용자는 [`Role::PRIORITY`] 순서에서 먼저 일치하는
    /// 역할의 홈으로 이동합니다. 알려진 역할이 없으면 루트로 이동합니다.
    pub fn redirect_by_role(&self) {
        let held = self.user_roles();
        let target = Role::PRIORITY
            .iter()
            .find(|role| held.contains(role))
            .map(|role| role.home_route())
            .unwrap_or(ROOT_ROUTE);

        self.navigator.navigate(NavigationTarget::to(target));
    }

    /// 현재 사용자 반환.
    pub fn current_user(&self) -> Option<User> {
        self.session.current_user()
    }

    /// 세션 상태 반환.
    pub fn session(&self) -> Arc<SessionState> {
        self.session.clone()
    }

    /// 가드 평가용 인증 상태 스냅샷.
    ///
    /// `is_authenticated()`를 경유하므로 만료 로그아웃 부수 효과가
    /// 적용됩니다.
    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            authenticated: self.is_authenticated(),
            roles: self.user_roles(),
        }
    }
}

impl SessionFaultObserver for AuthSessionManager {
    fn on_unauthorized(&self) {
        warn!("Session expired (401), forcing logout");
        self.logout();
    }

    fn on_forbidden(&self) {
        self.navigator
            .navigate(NavigationTarget::to(ACCESS_DENIED_ROUTE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::RecordingNavigator;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;
    use smartlogi_client::MemoryTokenStore;
    use smartlogi_core::ApiConfig;

    struct Fixture {
        manager: Arc<AuthSessionManager>,
        session: Arc<SessionState>,
        navigator: Arc<RecordingNavigator>,
        tokens: TokenStore,
    }

    fn make_token(claims: &serde_json::Value) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(b"test-secret-key-for-manager-tests"),
        )
        .unwrap()
    }

    fn token_with_roles(roles: &[&str], exp_offset: i64) -> String {
        make_token(&json!({
            "sub": "amine",
            "roles": roles,
            "exp": chrono::Utc::now().timestamp() + exp_offset
        }))
    }

    fn fixture(server: &mockito::Server, stored_token: Option<&str>) -> Fixture {
        let tokens = TokenStore::new(Arc::new(MemoryTokenStore::new("smartlogi_token")));
        if let Some(token) = stored_token {
            tokens.persist(token).unwrap();
        }

        let config = ApiConfig {
            base_url: server.url(),
            timeout_secs: 5,
        };
        let client = Arc::new(ApiClient::new(&config, tokens.clone()).unwrap());
        let session = Arc::new(SessionState::new());
        let navigator = Arc::new(RecordingNavigator::new());

        let manager = AuthSessionManager::wire(client, session.clone(), navigator.clone());
        Fixture {
            manager,
            session,
            navigator,
            tokens,
        }
    }

    #[tokio::test]
    async fn test_login_synthesizes_user_from_claims() {
        let mut server = mockito::Server::new_async().await;
        let token = token_with_roles(&["CLIENT"], 3600);

        server
            .mock("POST", "/auth/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "token": token }).to_string())
            .create_async()
            .await;

        let fx = fixture(&server, None);
        fx.manager
            .login(&LoginCredentials::new("amine", "secret"))
            .await
            .unwrap();

        assert!(fx.session.is_authenticated());
        let user = fx.session.current_user().unwrap();
        assert_eq!(user.id, 0);
        assert_eq!(user.username, "amine");
        assert_eq!(user.roles, vec![Role::Client]);
        assert_eq!(fx.tokens.retrieve().as_deref(), Some(token.as_str()));
    }

    #[tokio::test]
    async fn test_login_failure_propagates_unchanged() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(401)
            .create_async()
            .await;

        let fx = fixture(&server, None);
        let error = fx
            .manager
            .login(&LoginCredentials::new("amine", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(error.status(), Some(401));
        assert!(!fx.session.is_authenticated());
        assert_eq!(fx.tokens.retrieve(), None);
    }

    #[tokio::test]
    async fn test_login_rejected_while_another_is_pending() {
        let server = mockito::Server::new_async().await;
        let fx = fixture(&server, None);

        fx.manager.login_pending.store(true, Ordering::SeqCst);

        let error = fx
            .manager
            .login(&LoginCredentials::new("amine", "secret"))
            .await
            .unwrap_err();
        assert!(matches!(error, AuthError::LoginInProgress));
    }

    #[tokio::test]
    async fn test_pending_flag_resets_after_failed_login() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(500)
            .expect(2)
            .create_async()
            .await;

        let fx = fixture(&server, None);
        let _ = fx
            .manager
            .login(&LoginCredentials::new("amine", "secret"))
            .await;

        // 실패한 시도가 매니저를 잠그지 않음
        let error = fx
            .manager
            .login(&LoginCredentials::new("amine", "secret"))
            .await
            .unwrap_err();
        assert!(!matches!(error, AuthError::LoginInProgress));
    }

    #[tokio::test]
    async fn test_register_uses_full_user_from_response() {
        let mut server = mockito::Server::new_async().await;
        let token = token_with_roles(&["CLIENT"], 3600);

        server
            .mock("POST", "/auth/register")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "token": token,
                    "user": {
                        "id": 7,
                        "username": "amine",
                        "email": "amine@example.com",
                        "nom": "Benali",
                        "prenom": "Amine",
                        "roles": ["CLIENT"]
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let fx = fixture(&server, None);
        let request = RegisterRequest {
            username: "amine".to_string(),
            email: "amine@example.com".to_string(),
            password: "secret".to_string(),
            nom: "Benali".to_string(),
            prenom: "Amine".to_string(),
            telephone: None,
            adresse: None,
        };

        let user = fx.manager.register(&request).await.unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(fx.session.current_user().unwrap().nom.as_deref(), Some("Benali"));
        assert!(fx.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_recovery_from_valid_stored_token() {
        let server = mockito::Server::new_async().await;
        let token = token_with_roles(&["LIVREUR"], 3600);

        let fx = fixture(&server, Some(&token));

        // 인증 플래그는 복구되지만 사용자는 미설정
        assert!(fx.session.is_authenticated());
        assert!(fx.session.current_user().is_none());
        assert!(fx.manager.has_role(Role::Courier));
    }

    #[tokio::test]
    async fn test_recovery_ignores_expired_token() {
        let server = mockito::Server::new_async().await;
        let token = token_with_roles(&["CLIENT"], -3600);

        let fx = fixture(&server, Some(&token));
        assert!(!fx.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_expired_token_triggers_logout_on_check() {
        let server = mockito::Server::new_async().await;
        let token = token_with_roles(&["CLIENT"], -10);

        let fx = fixture(&server, Some(&token));

        assert!(!fx.manager.is_authenticated());
        // 로그아웃 부수 효과: 토큰이 제거되고 로그인으로 이동
        assert_eq!(fx.tokens.retrieve(), None);
        assert_eq!(fx.navigator.last().unwrap().path, LOGIN_ROUTE);
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let server = mockito::Server::new_async().await;
        let fx = fixture(&server, None);

        fx.manager.logout();
        fx.manager.logout();

        assert!(!fx.session.is_authenticated());
        assert_eq!(fx.navigator.history().len(), 2);
    }

    #[tokio::test]
    async fn test_role_queries_read_token_claims() {
        let server = mockito::Server::new_async().await;
        let token = token_with_roles(&["CLIENT"], 3600);
        let fx = fixture(&server, Some(&token));

        assert!(fx.manager.has_role(Role::Client));
        assert!(!fx.manager.has_role(Role::Manager));
        assert!(fx.manager.has_any_role(&[Role::Manager, Role::Client]));
        assert!(!fx.manager.has_any_role(&[Role::Manager, Role::Courier]));
    }

    #[tokio::test]
    async fn test_unknown_role_strings_are_dropped_at_mapping() {
        let server = mockito::Server::new_async().await;
        let token = token_with_roles(&["ADMIN", "CLIENT"], 3600);
        let fx = fixture(&server, Some(&token));

        assert_eq!(fx.manager.user_roles(), vec![Role::Client]);
    }

    #[tokio::test]
    async fn test_redirect_by_role_prefers_manager() {
        let server = mockito::Server::new_async().await;
        // 관리자 + 클라이언트 역할 동시 보유 → 관리자 우선
        let token = token_with_roles(&["CLIENT", "GESTIONNAIRE"], 3600);
        let fx = fixture(&server, Some(&token));

        fx.manager.redirect_by_role();
        assert_eq!(fx.navigator.last().unwrap().path, "/gestionnaire/dashboard");
    }

    #[tokio::test]
    async fn test_redirect_by_role_without_known_role_goes_to_root() {
        let server = mockito::Server::new_async().await;
        let token = token_with_roles(&[], 3600);
        let fx = fixture(&server, Some(&token));

        fx.manager.redirect_by_role();
        assert_eq!(fx.navigator.last().unwrap().path, ROOT_ROUTE);
    }

    #[tokio::test]
    async fn test_observer_unauthorized_forces_logout() {
        let server = mockito::Server::new_async().await;
        let token = token_with_roles(&["CLIENT"], 3600);
        let fx = fixture(&server, Some(&token));

        fx.manager.on_unauthorized();

        assert!(!fx.session.is_authenticated());
        assert_eq!(fx.tokens.retrieve(), None);
        assert_eq!(fx.navigator.last().unwrap().path, LOGIN_ROUTE);
    }

    #[tokio::test]
    async fn test_observer_forbidden_redirects_without_teardown() {
        let server = mockito::Server::new_async().await;
        let token = token_with_roles(&["CLIENT"], 3600);
        let fx = fixture(&server, Some(&token));

        fx.manager.on_forbidden();

        // 세션은 그대로, 이동만 발생
        assert!(fx.session.is_authenticated());
        assert!(fx.tokens.retrieve().is_some());
        assert_eq!(fx.navigator.last().unwrap().path, ACCESS_DENIED_ROUTE);
    }
}
