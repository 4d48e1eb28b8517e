//! 인증 에러 타입.

use thiserror::Error;

use smartlogi_client::{ApiError, StorageError};

/// 인증/세션 관련 에러.
#[derive(Debug, Error)]
pub enum AuthError {
    /// 백엔드 인증 실패.
    ///
    /// 재시도나 로컬 복구 없이 그대로 전파됩니다. 사용자가 다시 제출해야
    /// 합니다.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// 토큰 영속화 실패
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// 이미 진행 중인 로그인 시도 존재.
    ///
    /// 응답이 순서를 어기고 도착했을 때 이전 시도가 새 세션을 덮어쓰는
    /// 경쟁을 차단합니다.
    #[error("Une connexion est déjà en cours.")]
    LoginInProgress,
}

impl AuthError {
    /// 백엔드가 반환한 HTTP 상태 코드 (있는 경우).
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::Api(err) => err.status(),
            _ => None,
        }
    }
}
