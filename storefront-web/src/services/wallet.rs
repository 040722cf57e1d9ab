//! Base Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for EIP-1193 wallets (Coinbase Smart Wallet first,
//! any injected provider otherwise). The JS side keeps the last known
//! account and chain so the Rust side can read them synchronously.

use async_trait::async_trait;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use shared::error::WalletError;
use shared::eth::to_hex_quantity;
use shared::wallet::{Account, WalletPort};

/// Connector used by the "Connect Base Wallet" button.
pub const COINBASE_CONNECTOR: &str = "coinbaseWalletSDK";

// ============================================================================
// EIP-1193 BRIDGE (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
const state = { address: null, chainId: 0, connected: false, connector: 'coinbaseWalletSDK' };

function provider(connectorId) {
    const eth = window.ethereum;
    if (!eth) {
        return null;
    }
    if (Array.isArray(eth.providers) && eth.providers.length > 0) {
        if (connectorId === 'coinbaseWalletSDK') {
            return eth.providers.find(p => p.isCoinbaseWallet) || eth.providers[0];
        }
        return eth.providers[0];
    }
    return eth;
}

function normalize(error) {
    const code = error && error.code;
    const message = error instanceof Error ? error.message : (error && error.message) || String(error);
    if (code === 4001) {
        return { kind: 'rejected', message };
    }
    if (code === 4902) {
        return { kind: 'unsupported', message };
    }
    return { kind: 'provider', message };
}

function setAccounts(accounts) {
    state.address = Array.isArray(accounts) && accounts.length > 0 ? accounts[0] : null;
    state.connected = state.address !== null;
}

async function readChain(eth) {
    const hex = await eth.request({ method: 'eth_chainId' });
    state.chainId = parseInt(hex, 16) || 0;
}

export function hasWallet() {
    return provider(state.connector) !== null;
}

export function walletAddress() {
    return state.address;
}

export function walletConnected() {
    return state.connected;
}

export function walletChainId() {
    return state.chainId;
}

export async function connectWallet(connectorId) {
    const eth = provider(connectorId);
    if (!eth) {
        throw { kind: 'unavailable', message: connectorId };
    }
    try {
        state.connector = connectorId;
        const accounts = await eth.request({ method: 'eth_requestAccounts' });
        setAccounts(accounts);
        await readChain(eth);
        return { address: state.address, isConnected: state.connected };
    } catch (error) {
        throw normalize(error);
    }
}

export async function restoreWallet() {
    const eth = provider(state.connector);
    if (!eth) {
        return false;
    }
    try {
        const accounts = await eth.request({ method: 'eth_accounts' });
        setAccounts(accounts);
        await readChain(eth);
        return state.connected;
    } catch (error) {
        throw normalize(error);
    }
}

export async function disconnectWallet() {
    const eth = provider(state.connector);
    setAccounts([]);
    if (!eth) {
        return;
    }
    try {
        await eth.request({ method: 'wallet_revokePermissions', params: [{ eth_accounts: {} }] });
    } catch (error) {
        throw normalize(error);
    }
}

export async function switchChain(chainIdHex) {
    const eth = provider(state.connector);
    if (!eth) {
        throw { kind: 'unavailable', message: state.connector };
    }
    try {
        await eth.request({ method: 'wallet_switchEthereumChain', params: [{ chainId: chainIdHex }] });
        state.chainId = parseInt(chainIdHex, 16);
    } catch (error) {
        throw normalize(error);
    }
}

export async function sendTransaction(from, to, valueHex) {
    const eth = provider(state.connector);
    if (!eth) {
        throw { kind: 'unavailable', message: state.connector };
    }
    try {
        return await eth.request({ method: 'eth_sendTransaction', params: [{ from, to, value: valueHex }] });
    } catch (error) {
        throw normalize(error);
    }
}

export function watchWallet(callback) {
    const eth = provider(state.connector);
    if (!eth || typeof eth.on !== 'function') {
        return;
    }
    eth.on('accountsChanged', accounts => { setAccounts(accounts); callback(); });
    eth.on('chainChanged', hex => { state.chainId = parseInt(hex, 16) || 0; callback(); });
    eth.on('disconnect', () => { setAccounts([]); callback(); });
}
")]
extern "C" {
    /// True if an EIP-1193 provider is injected into the page
    #[wasm_bindgen(js_name = hasWallet)]
    pub fn has_wallet() -> bool;

    #[wasm_bindgen(js_name = walletAddress)]
    fn wallet_address() -> Option<String>;

    #[wasm_bindgen(js_name = walletConnected)]
    fn wallet_connected() -> bool;

    #[wasm_bindgen(js_name = walletChainId)]
    fn wallet_chain_id() -> f64;

    #[wasm_bindgen(catch, js_name = connectWallet)]
    async fn connect_wallet(connector_id: &str) -> Result<JsValue, JsValue>;

    /// Silently re-read accounts the user already granted (no prompt)
    #[wasm_bindgen(catch, js_name = restoreWallet)]
    async fn restore_wallet() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = disconnectWallet)]
    async fn disconnect_wallet() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = switchChain)]
    async fn switch_chain(chain_id_hex: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = sendTransaction)]
    async fn send_transaction(from: &str, to: &str, value_hex: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = watchWallet)]
    fn watch_wallet(callback: &Closure<dyn Fn()>);
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Error object thrown by the bridge.
#[derive(Debug, Deserialize)]
struct BridgeError {
    kind: String,
    #[serde(default)]
    message: String,
}

/// Map a bridge error kind to a [`WalletError`].
fn classify(kind: &str, message: String, chain_id: Option<u64>) -> WalletError {
    match (kind, chain_id) {
        ("rejected", _) => WalletError::Rejected,
        ("unavailable", _) => WalletError::Unavailable(message),
        ("unsupported", Some(id)) => WalletError::UnsupportedChain(id),
        _ => WalletError::Provider(message),
    }
}

fn to_wallet_error(value: JsValue, chain_id: Option<u64>) -> WalletError {
    match serde_wasm_bindgen::from_value::<BridgeError>(value.clone()) {
        Ok(err) => classify(&err.kind, err.message, chain_id),
        Err(_) => WalletError::Provider(value.as_string().unwrap_or_else(|| format!("{:?}", value))),
    }
}

/// Re-read a previously authorized session after a page load.
pub async fn restore() -> Result<bool, WalletError> {
    let restored = restore_wallet().await.map_err(|e| to_wallet_error(e, None))?;
    Ok(restored.as_bool().unwrap_or(false))
}

/// The injected browser wallet.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserWallet;

#[async_trait(?Send)]
impl WalletPort for BrowserWallet {
    async fn connect(&self, connector_id: &str) -> Result<Account, WalletError> {
        connect_wallet(connector_id)
            .await
            .map_err(|e| to_wallet_error(e, None))?;
        Ok(self.current_account())
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        disconnect_wallet().await.map_err(|e| to_wallet_error(e, None))?;
        Ok(())
    }

    fn current_account(&self) -> Account {
        Account {
            address: wallet_address(),
            is_connected: wallet_connected(),
        }
    }

    fn current_chain_id(&self) -> u64 {
        wallet_chain_id() as u64
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), WalletError> {
        switch_chain(&format!("{:#x}", chain_id))
            .await
            .map_err(|e| to_wallet_error(e, Some(chain_id)))?;
        Ok(())
    }

    async fn send_transaction(&self, to: &str, value_wei: u128) -> Result<String, WalletError> {
        let from = wallet_address().ok_or_else(|| WalletError::Provider("Wallet is not connected".to_string()))?;
        let hash = send_transaction(&from, to, &to_hex_quantity(value_wei))
            .await
            .map_err(|e| to_wallet_error(e, None))?;
        hash.as_string()
            .ok_or_else(|| WalletError::Provider("Transaction hash is not a string".to_string()))
    }

    fn watch(&self, on_change: Box<dyn Fn()>) {
        let closure = Closure::<dyn Fn()>::new(move || on_change());
        watch_wallet(&closure);
        // The provider holds the listener for the lifetime of the page.
        closure.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("rejected", "User rejected".into(), None), WalletError::Rejected);
        assert_eq!(
            classify("unavailable", COINBASE_CONNECTOR.into(), None),
            WalletError::Unavailable(COINBASE_CONNECTOR.to_string())
        );
        assert_eq!(
            classify("unsupported", "Unrecognized chain".into(), Some(84532)),
            WalletError::UnsupportedChain(84532)
        );
        assert_eq!(
            classify("unsupported", "Unrecognized chain".into(), None),
            WalletError::Provider("Unrecognized chain".to_string())
        );
        assert_eq!(
            classify("provider", "boom".into(), None),
            WalletError::Provider("boom".to_string())
        );
    }
}
