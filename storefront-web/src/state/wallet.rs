//! Wallet state management

use leptos::prelude::*;
use leptos::task::spawn_local;

use shared::auth::{AuthError, AuthSession, AuthState, AuthTransition};
use shared::config::app_config;
use shared::error::WalletError;
use shared::network::{ChainInfo, Network, BASE_MAINNET};
use shared::wallet::{SessionStore, SwitchOutcome, WalletAuth};

use crate::services::wallet::{self, BrowserWallet, COINBASE_CONNECTOR};
use crate::state::notice::{use_notices, NoticeContext, NoticeKind};

/// Keeps the [`AuthSession`] in a signal so views re-render on every change.
#[derive(Debug, Clone, Copy)]
pub struct SignalStore(RwSignal<AuthSession>);

impl SessionStore for SignalStore {
    fn load(&self) -> AuthSession {
        self.0.get_untracked()
    }

    fn store(&self, session: AuthSession) {
        self.0.set(session);
    }
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    session: RwSignal<AuthSession>,
    auth: WalletAuth<BrowserWallet, SignalStore>,
    notices: NoticeContext,
    /// A connect request is waiting on the wallet.
    pub connecting: RwSignal<bool>,
}

impl WalletContext {
    pub fn new(notices: NoticeContext) -> Self {
        let session = RwSignal::new(AuthSession::new(app_config().policy.clone()));
        Self {
            session,
            auth: WalletAuth::new(BrowserWallet, SignalStore(session)),
            notices,
            connecting: RwSignal::new(false),
        }
    }

    pub fn auth(&self) -> WalletAuth<BrowserWallet, SignalStore> {
        self.auth
    }

    pub fn state(&self) -> AuthState {
        self.session.with(|s| s.state().clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.state().is_authenticated)
    }

    pub fn is_connected(&self) -> bool {
        self.session.with(|s| s.signal().is_connected)
    }

    pub fn address(&self) -> Option<String> {
        self.session.with(|s| s.address().map(str::to_string))
    }

    pub fn chain_id(&self) -> u64 {
        self.session.with(|s| s.chain_id())
    }

    pub fn switch_pending(&self) -> Option<Network> {
        self.session.with(|s| s.pending_switch())
    }

    /// Chain details of the connected network, if it is a known one.
    pub fn chain_info(&self) -> Option<&'static ChainInfo> {
        Network::from_chain_id(self.chain_id()).map(Network::info)
    }

    /// Native currency symbol; Base networks all settle in ETH.
    pub fn currency_symbol(&self) -> &'static str {
        self.chain_info().map_or(BASE_MAINNET.currency_symbol, |info| info.currency_symbol)
    }

    pub fn network_name(&self) -> &'static str {
        self.session.with(|s| s.policy().network_name(s.chain_id()))
    }

    /// Block explorer page of the connected address.
    pub fn explorer_url(&self) -> Option<String> {
        self.session.with(|s| {
            s.address()
                .map(|addr| s.policy().explorer_address_url(s.chain_id(), addr))
        })
    }

    /// Open a wallet session and hand the outcome to `on_done` for a notice.
    pub fn connect(&self, on_done: impl FnOnce(Result<AuthTransition, WalletError>) + 'static) {
        let this = *self;
        this.connecting.set(true);
        spawn_local(async move {
            let result = this.auth.connect(COINBASE_CONNECTOR).await;
            this.connecting.set(false);
            on_done(result);
        });
    }

    pub fn disconnect(&self) {
        let auth = self.auth;
        spawn_local(async move {
            auth.disconnect().await;
        });
    }

    /// Request a switch to `target`; the outcome is announced as a notice.
    pub fn switch_network(&self, target: Network) {
        let auth = self.auth;
        let notices = self.notices;
        spawn_local(async move {
            let outcome = auth.switch_network(target).await;
            if outcome == SwitchOutcome::Switched {
                log::info!("Switched to {}", target.info().name);
            }
            if let Some((kind, title, description)) = switch_notice(target, outcome) {
                notices.push(kind, title, description);
            }
        });
    }

    /// Restore a previously granted session, then follow wallet events.
    fn start(&self) {
        let auth = self.auth;
        spawn_local(async move {
            match wallet::restore().await {
                Ok(true) => log::info!("Restored wallet session"),
                Ok(false) => {}
                Err(e) => log::warn!("Could not restore wallet session: {}", e),
            }
            auth.subscribe();
        });
    }
}

/// Notice for a finished switch request. A request ignored because another
/// one is in flight gets none.
fn switch_notice(target: Network, outcome: SwitchOutcome) -> Option<(NoticeKind, &'static str, String)> {
    match outcome {
        SwitchOutcome::Switched => Some((
            NoticeKind::Success,
            "Network Switched",
            format!("Now connected to {}", target.info().name),
        )),
        SwitchOutcome::Failed => Some((
            NoticeKind::Error,
            "Network Switch Failed",
            AuthError::SwitchFailed(target).message(),
        )),
        SwitchOutcome::AlreadyPending => None,
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new(use_notices());
    provide_context(context);
    context.start();
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_notice() {
        let (kind, title, description) = switch_notice(Network::Testnet, SwitchOutcome::Failed).unwrap();
        assert_eq!(kind, NoticeKind::Error);
        assert_eq!(title, "Network Switch Failed");
        assert_eq!(description, "Failed to switch to Base Sepolia network");

        let (kind, _, description) = switch_notice(Network::Mainnet, SwitchOutcome::Switched).unwrap();
        assert_eq!(kind, NoticeKind::Success);
        assert_eq!(description, "Now connected to Base Mainnet");

        assert!(switch_notice(Network::Testnet, SwitchOutcome::AlreadyPending).is_none());
    }
}
