//! 콜리(배송물) 도메인 모델.

use serde::{Deserialize, Serialize};

/// 콜리 배송 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColisStatut {
    /// 생성됨
    Cree,
    /// 수거됨
    Collecte,
    /// 창고 보관 중
    EnStock,
    /// 배송 중
    EnTransit,
    /// 배송 완료
    Livre,
}

impl std::fmt::Display for ColisStatut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ColisStatut::Cree => "CREE",
            ColisStatut::Collecte => "COLLECTE",
            ColisStatut::EnStock => "EN_STOCK",
            ColisStatut::EnTransit => "EN_TRANSIT",
            ColisStatut::Livre => "LIVRE",
        };
        write!(f, "{}", s)
    }
}

/// 콜리 우선순위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priorite {
    Haute,
    Moyenne,
    Basse,
}

impl std::fmt::Display for Priorite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Priorite::Haute => "HAUTE",
            Priorite::Moyenne => "MOYENNE",
            Priorite::Basse => "BASSE",
        };
        write!(f, "{}", s)
    }
}

/// 배송 이력 항목.
///
/// 백엔드의 statut 필드는 자유 문자열이므로 그대로 유지합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoriqueLivraison {
    pub id: String,
    #[serde(default)]
    pub colis_id: Option<String>,
    pub statut: String,
    pub date_changement: String,
    #[serde(default)]
    pub commentaire: String,
    #[serde(default)]
    pub statut_libelle: Option<String>,
}

/// 콜리(배송물).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colis {
    pub id: String,
    pub description: String,
    pub poids: f64,
    pub priorite: Priorite,
    pub ville_destination: String,
    pub statut: ColisStatut,
    #[serde(default)]
    pub livreur_id: Option<String>,
    pub client_expediteur_id: String,
    pub destinataire_id: String,
    #[serde(default)]
    pub zone_id: Option<String>,
    #[serde(default)]
    pub historique: Vec<HistoriqueLivraison>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_creation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modification: Option<String>,
}

/// 콜리 생성 요청에 포함되는 발송 클라이언트 정보.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientExpediteurDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prenom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
}

/// 콜리 생성 요청에 포함되는 수취인 정보.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinataireDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub adresse: String,
}

/// 콜리 생성 요청에 포함되는 배송 존 정보.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nom: String,
    pub code_postal: String,
}

/// 콜리 생성 요청에 포함되는 상품 정보.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProduitDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nom: String,
    pub categorie: String,
    pub poids: f64,
    pub prix: f64,
}

/// 콜리-상품 연결 (상품 + 수량).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColisProduitDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produit: Option<ProduitDto>,
    pub quantite: u32,
}

/// 콜리 생성 요청.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColisRequest {
    pub description: String,
    pub poids: f64,
    pub priorite: Priorite,
    pub ville_destination: String,
    pub client_expediteur: ClientExpediteurDto,
    pub destinataire: DestinataireDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneDto>,
    pub produits: Vec<ColisProduitDto>,
}

/// 백엔드 페이지네이션 응답 래퍼 (Spring `Page`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: Option<i64>,
    #[serde(default)]
    pub total_pages: Option<i64>,
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub size: Option<i64>,
}
