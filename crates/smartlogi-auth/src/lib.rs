//! # SmartLogi Auth
//!
//! 클라이언트 측 인증 및 세션 수명 주기 서브시스템.
//!
//! # 구성 요소
//!
//! - [`SessionState`]: 관찰 가능한 프로세스 전역 세션 상태
//! - [`AuthSessionManager`]: 로그인/가입/로그아웃 및 초기 세션 복구
//! - [`RouteGuard`] / [`evaluate`]: 역할 기반 라우트 가드 결정
//! - [`Navigator`]: 실제 내비게이션을 수행하는 외부 라우터 경계
//!
//! # 사용 예시
//!
//! ```rust,ignore
//! let session = Arc::new(SessionState::new());
//! let manager = AuthSessionManager::wire(client, session, navigator);
//!
//! manager.login(&LoginCredentials::new("amine", "secret")).await?;
//! manager.redirect_by_role();
//!
//! let guard = RouteGuard::new(manager, RouteTable::default());
//! match guard.check("/client/mes-colis") {
//!     GuardDecision::Allow => { /* 라우터가 진입 */ }
//!     GuardDecision::Redirect(target) => { /* 라우터가 이동 */ }
//! }
//! ```

pub mod error;
pub mod guard;
pub mod manager;
pub mod navigator;
pub mod routes;
pub mod session;

pub use error::AuthError;
pub use guard::{evaluate, AuthSnapshot, GuardDecision, RouteGuard};
pub use manager::AuthSessionManager;
pub use navigator::{NavigationTarget, Navigator, RecordingNavigator};
pub use routes::{RouteRequirement, RouteTable, ACCESS_DENIED_ROUTE, LOGIN_ROUTE, ROOT_ROUTE};
pub use session::SessionState;
