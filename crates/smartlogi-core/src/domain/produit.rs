//! 상품 도메인 모델.

use serde::{Deserialize, Serialize};

/// 상품.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produit {
    pub id: String,
    pub nom: String,
    pub categorie: String,
    pub poids: f64,
    pub prix: f64,
}

/// 상품 생성/수정 요청.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProduit {
    pub nom: String,
    pub categorie: String,
    pub poids: f64,
    pub prix: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_produit_deserialization() {
        let json = r#"{"id": "p-1", "nom": "Livre", "categorie": "Papeterie", "poids": 0.8, "prix": 120.0}"#;

        let produit: Produit = serde_json::from_str(json).unwrap();
        assert_eq!(produit.nom, "Livre");
        assert_eq!(produit.prix, 120.0);
    }
}
