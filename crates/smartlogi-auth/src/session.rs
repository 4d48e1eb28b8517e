//! 관찰 가능한 세션 상태.

use tokio::sync::watch;

use smartlogi_core::User;

/// 프로세스 전역 세션 상태.
///
/// 인증 플래그와 현재 사용자를 각각 독립적으로 구독할 수 있어 UI가 폴링
/// 없이 반응할 수 있습니다. 세션은 저장된 토큰 상태의 투영일 뿐이며 별도로
/// 영속화되지 않습니다.
///
/// 모든 변경은 세션 매니저를 거칩니다. 다른 구성 요소는 쓰지 않습니다.
pub struct SessionState {
    authenticated: watch::Sender<bool>,
    current_user: watch::Sender<Option<User>>,
}

impl SessionState {
    /// 비인증 상태로 세션 생성.
    ///
    /// 프로세스 시작 시 한 번 생성되며, 저장된 토큰으로부터의 복구는
    /// 매니저의 연결 단계에서 수행됩니다 (가정하지 않고 재계산).
    pub fn new() -> Self {
        let (authenticated, _) = watch::channel(false);
        let (current_user, _) = watch::channel(None);
        Self {
            authenticated,
            current_user,
        }
    }

    /// 인증 플래그 변경 구독.
    pub fn subscribe_authenticated(&self) -> watch::Receiver<bool> {
        self.authenticated.subscribe()
    }

    /// 현재 사용자 변경 구독.
    pub fn subscribe_user(&self) -> watch::Receiver<Option<User>> {
        self.current_user.subscribe()
    }

    /// 현재 인증 플래그 반환.
    pub fn is_authenticated(&self) -> bool {
        *self.authenticated.borrow()
    }

    /// 현재 사용자 반환.
    pub fn current_user(&self) -> Option<User> {
        self.current_user.borrow().clone()
    }

    /// 인증된 세션 수립.
    ///
    /// 로그인 응답이 토큰만 포함하는 경우 user는 `None`일 수 있습니다
    /// (초기 복구 경로).
    pub(crate) fn establish(&self, user: Option<User>) {
        self.current_user.send_replace(user);
        self.authenticated.send_replace(true);
    }

    /// 세션 초기화 (로그아웃).
    pub(crate) fn clear(&self) {
        self.current_user.send_replace(None);
        self.authenticated.send_replace(false);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
