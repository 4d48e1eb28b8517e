//! API 호출 에러 타입.

use thiserror::Error;

/// API 관련 에러.
///
/// 실패한 응답은 상태 코드별로 사용자 노출용 메시지(제품 언어인 프랑스어)로
/// 번역된 뒤, 호출자가 직접 반응할 수 있도록 그대로 전달됩니다.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 - 유효하지 않거나 만료된 토큰
    #[error("Session expirée. Veuillez vous reconnecter.")]
    Unauthorized { detail: String },

    /// 403 - 권한 부족
    #[error("Accès refusé. Vous n'avez pas les permissions nécessaires.")]
    Forbidden { detail: String },

    /// 404 - 리소스 없음
    #[error("Ressource non trouvée.")]
    NotFound { detail: String },

    /// 500 - 서버 내부 에러
    #[error("Erreur serveur. Veuillez réessayer plus tard.")]
    Server { detail: String },

    /// 서버 연결 불가 (상태 코드 없음)
    #[error("Impossible de se connecter au serveur. Vérifiez votre connexion.")]
    Network(String),

    /// 기타 상태 코드 - 백엔드 제공 메시지 또는 일반 메시지
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 응답 본문 파싱 실패
    #[error("Réponse du serveur invalide: {0}")]
    Decode(String),
}

/// 백엔드 에러 응답 본문.
#[derive(Debug, serde::Deserialize)]
struct BackendErrorBody {
    message: String,
}

impl ApiError {
    /// 상태 코드와 응답 본문에서 에러 번역.
    pub(crate) fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let detail = body.to_string();
        match status.as_u16() {
            401 => ApiError::Unauthorized { detail },
            403 => ApiError::Forbidden { detail },
            404 => ApiError::NotFound { detail },
            500 => ApiError::Server { detail },
            code => {
                // 백엔드가 메시지를 제공하면 그대로 노출
                let message = serde_json::from_str::<BackendErrorBody>(body)
                    .map(|b| b.message)
                    .unwrap_or_else(|_| {
                        format!(
                            "Erreur {}: {}",
                            code,
                            status.canonical_reason().unwrap_or("Unknown")
                        )
                    });
                ApiError::Status {
                    status: code,
                    message,
                }
            }
        }
    }

    /// HTTP 상태 코드 반환 (전송 실패는 None).
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Forbidden { .. } => Some(403),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Server { .. } => Some(500),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// 세션 종료가 필요한 인증 에러인지 확인.
    pub fn is_auth_fault(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// 사용자에게 표시할 메시지 반환.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
