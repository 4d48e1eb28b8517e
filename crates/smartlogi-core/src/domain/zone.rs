//! 배송 존 도메인 모델.

use serde::{Deserialize, Serialize};

/// 배송 존.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    pub nom: String,
    pub code_postal: String,
}

/// 존 생성/수정 요청.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZone {
    pub nom: String,
    pub code_postal: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_camel_case_fields() {
        let json = r#"{"id": "z-1", "nom": "Centre-ville", "codePostal": "20000"}"#;

        let zone: Zone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.code_postal, "20000");

        let out = serde_json::to_value(&zone).unwrap();
        assert_eq!(out["codePostal"], "20000");
    }
}
