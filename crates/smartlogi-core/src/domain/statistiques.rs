//! 관리자 통계 DTO.

use serde::{Deserialize, Serialize};

/// 전체 콜리 통계 개요.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatistiquesOverview {
    pub total_colis: i64,
    pub colis_en_attente: i64,
    pub colis_en_cours: i64,
    pub colis_livres: i64,
}
