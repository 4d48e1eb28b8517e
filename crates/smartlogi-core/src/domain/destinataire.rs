//! 수취인 도메인 모델.

use serde::{Deserialize, Serialize};

/// 수취인.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destinataire {
    pub id: String,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub adresse: String,
}

/// 수취인 생성/수정 요청.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDestinataire {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub adresse: String,
}
