use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One payment toward a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseRecord {
    /// Assigned by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Lowercased `0x` address of the paying wallet.
    pub wallet_address: String,
    pub product_id: String,
    pub amount_cents: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PurchaseRecord {
    pub fn new(wallet_address: &str, product_id: &str, amount_cents: u64, tx_hash: Option<String>) -> Self {
        Self {
            id: None,
            wallet_address: wallet_address.to_lowercase(),
            product_id: product_id.to_string(),
            amount_cents,
            tx_hash,
            created_at: Utc::now(),
        }
    }
}

/// Error body returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_normalized() {
        let record = PurchaseRecord::new("0xABCdef", "3", 2500, None);
        assert_eq!(record.wallet_address, "0xabcdef");
        assert_eq!(record.id, None);
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let record = PurchaseRecord::new("0xabc", "3", 2500, None);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("tx_hash").is_none());
        assert_eq!(json["amount_cents"], 2500);
    }

    #[test]
    fn test_backend_row_parses() {
        let row = r#"{
            "id": "7f1c",
            "wallet_address": "0xabc",
            "product_id": "5",
            "amount_cents": 1000,
            "tx_hash": "0xdead",
            "created_at": "2024-05-01T12:00:00+00:00"
        }"#;
        let record: PurchaseRecord = serde_json::from_str(row).unwrap();
        assert_eq!(record.id.as_deref(), Some("7f1c"));
        assert_eq!(record.tx_hash.as_deref(), Some("0xdead"));
    }

    #[test]
    fn test_error_response_parses() {
        let body = r#"{"message":"permission denied","code":"42501","details":null,"hint":null}"#;
        let err: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(err.message, "permission denied");
        assert_eq!(err.code.as_deref(), Some("42501"));
    }
}
