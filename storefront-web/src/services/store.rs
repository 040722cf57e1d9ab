//! Purchase history on the hosted backend (PostgREST over HTTP).

use gloo_net::http::{Request, Response};
use thiserror::Error;

use shared::config::BackendConfig;
use shared::dto::{ErrorResponse, PurchaseRecord};

use crate::utils::constants::PURCHASES_TABLE;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Could not read backend response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for StoreError {
    fn from(err: gloo_net::Error) -> Self {
        StoreError::Network(err.to_string())
    }
}

/// Records of one wallet, newest first.
fn purchases_url(backend: &BackendConfig, wallet_address: &str) -> String {
    format!(
        "{}?wallet_address=eq.{}&order=created_at.desc",
        backend.table_url(PURCHASES_TABLE),
        urlencoding::encode(&wallet_address.to_lowercase())
    )
}

async fn check(response: Response) -> Result<Response, StoreError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => response.status_text(),
    };
    Err(StoreError::Status { status, message })
}

pub async fn fetch_purchases(backend: &BackendConfig, wallet_address: &str) -> Result<Vec<PurchaseRecord>, StoreError> {
    let response = Request::get(&purchases_url(backend, wallet_address))
        .header("apikey", &backend.anon_key)
        .header("Authorization", &format!("Bearer {}", backend.anon_key))
        .send()
        .await?;

    check(response)
        .await?
        .json::<Vec<PurchaseRecord>>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

/// Insert a record and return it as stored.
pub async fn record_purchase(backend: &BackendConfig, record: &PurchaseRecord) -> Result<PurchaseRecord, StoreError> {
    let response = Request::post(&backend.table_url(PURCHASES_TABLE))
        .header("apikey", &backend.anon_key)
        .header("Authorization", &format!("Bearer {}", backend.anon_key))
        .header("Prefer", "return=representation")
        .json(record)?
        .send()
        .await?;

    let mut rows = check(response)
        .await?
        .json::<Vec<PurchaseRecord>>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))?;
    rows.pop()
        .ok_or_else(|| StoreError::Decode("empty insert response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchases_url() {
        let backend = BackendConfig::new("https://xyz.supabase.co", "anon").unwrap();
        assert_eq!(
            purchases_url(&backend, "0xABC"),
            "https://xyz.supabase.co/rest/v1/purchases?wallet_address=eq.0xabc&order=created_at.desc"
        );
    }
}
