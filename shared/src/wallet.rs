//! # Wallet Port and Session Driver
//!
//! [`WalletPort`] is the seam to the wallet collaborator: connection
//! transport, chain switching and transaction broadcast live behind it.
//! [`WalletAuth`] drives an [`AuthSession`] from that port. The session
//! itself lives in a [`SessionStore`], so the browser can keep it in a
//! reactive signal while tests keep it in a `RefCell`.
//!
//! Every store write happens synchronously between awaits; nothing holds
//! the session across a suspension point.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::auth::{AuthSession, AuthState, AuthTransition, ConnectionSignal};
use crate::error::WalletError;
use crate::network::Network;

/// Account as reported by the wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub address: Option<String>,
    pub is_connected: bool,
}

/// Capabilities consumed from the wallet collaborator.
///
/// Futures are `?Send`: browser wallets resolve on the JS event loop.
#[async_trait(?Send)]
pub trait WalletPort {
    /// Open a session with the given connector.
    async fn connect(&self, connector_id: &str) -> Result<Account, WalletError>;

    /// Terminate the session.
    async fn disconnect(&self) -> Result<(), WalletError>;

    fn current_account(&self) -> Account;

    fn current_chain_id(&self) -> u64;

    /// Ask the wallet to move to `chain_id`.
    async fn switch_chain(&self, chain_id: u64) -> Result<(), WalletError>;

    /// Broadcast a native-currency transfer. Returns the transaction hash.
    async fn send_transaction(&self, to: &str, value_wei: u128) -> Result<String, WalletError>;

    /// Register a callback fired whenever account or chain changes.
    fn watch(&self, on_change: Box<dyn Fn()>);
}

#[async_trait(?Send)]
impl<P: WalletPort + ?Sized> WalletPort for Rc<P> {
    async fn connect(&self, connector_id: &str) -> Result<Account, WalletError> {
        (**self).connect(connector_id).await
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        (**self).disconnect().await
    }

    fn current_account(&self) -> Account {
        (**self).current_account()
    }

    fn current_chain_id(&self) -> u64 {
        (**self).current_chain_id()
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), WalletError> {
        (**self).switch_chain(chain_id).await
    }

    async fn send_transaction(&self, to: &str, value_wei: u128) -> Result<String, WalletError> {
        (**self).send_transaction(to, value_wei).await
    }

    fn watch(&self, on_change: Box<dyn Fn()>) {
        (**self).watch(on_change)
    }
}

/// Owner of the live [`AuthSession`].
pub trait SessionStore {
    fn load(&self) -> AuthSession;
    fn store(&self, session: AuthSession);

    /// Read-modify-write in one synchronous step.
    fn modify<R>(&self, f: impl FnOnce(&mut AuthSession) -> R) -> R {
        let mut session = self.load();
        let out = f(&mut session);
        self.store(session);
        out
    }
}

impl SessionStore for RefCell<AuthSession> {
    fn load(&self) -> AuthSession {
        self.borrow().clone()
    }

    fn store(&self, session: AuthSession) {
        *self.borrow_mut() = session;
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Rc<S> {
    fn load(&self) -> AuthSession {
        (**self).load()
    }

    fn store(&self, session: AuthSession) {
        (**self).store(session)
    }
}

/// Result of a switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    Switched,
    Failed,
    /// Another switch was still in flight; nothing was sent to the wallet.
    AlreadyPending,
}

/// Drives an [`AuthSession`] from a [`WalletPort`].
#[derive(Debug, Clone, Copy)]
pub struct WalletAuth<P, S> {
    port: P,
    store: S,
}

impl<P: WalletPort, S: SessionStore> WalletAuth<P, S> {
    pub fn new(port: P, store: S) -> Self {
        Self { port, store }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn state(&self) -> AuthState {
        self.store.load().state().clone()
    }

    /// Read the wallet and recompute.
    pub fn refresh(&self) -> AuthTransition {
        let account = self.port.current_account();
        let signal = ConnectionSignal {
            address: account.address,
            is_connected: account.is_connected,
            chain_id: self.port.current_chain_id(),
        };
        self.store.modify(|session| session.apply(signal))
    }

    /// Recompute on every wallet notification.
    pub fn subscribe(&self)
    where
        P: Clone + 'static,
        S: Clone + 'static,
    {
        let this = self.clone();
        self.port.watch(Box::new(move || {
            this.refresh();
        }));
        self.refresh();
    }

    /// Connection failures are returned so the caller can show a notice.
    pub async fn connect(&self, connector_id: &str) -> Result<AuthTransition, WalletError> {
        info!(connector_id, "connecting wallet");
        match self.port.connect(connector_id).await {
            Ok(_) => Ok(self.refresh()),
            Err(e) => {
                warn!(error = %e, "wallet connection failed");
                self.refresh();
                Err(e)
            }
        }
    }

    /// Never fails: a collaborator error is logged and the local error cleared anyway.
    pub async fn disconnect(&self) {
        if let Err(e) = self.port.disconnect().await {
            warn!(error = %e, "error disconnecting wallet");
        }
        self.refresh();
        self.store.modify(AuthSession::clear_error);
    }

    /// Switch to `target`, rejecting the request if another switch is in flight.
    pub async fn switch_network(&self, target: Network) -> SwitchOutcome {
        if !self.store.modify(|session| session.begin_switch(target)) {
            warn!(%target, "network switch already in progress, ignoring request");
            return SwitchOutcome::AlreadyPending;
        }

        debug!(%target, chain_id = target.chain_id(), "requesting network switch");
        let result = self.port.switch_chain(target.chain_id()).await;
        if let Err(e) = &result {
            warn!(%target, error = %e, "error switching network");
        }

        self.refresh();
        self.store.modify(|session| session.finish_switch(target, &result));

        match result {
            Ok(()) => SwitchOutcome::Switched,
            Err(_) => SwitchOutcome::Failed,
        }
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::cell::Cell;

    /// In-memory wallet used across the crate's tests.
    #[derive(Default)]
    pub struct MockWallet {
        pub account: RefCell<Account>,
        pub chain_id: Cell<u64>,
        pub fail_connect: Cell<bool>,
        pub fail_disconnect: Cell<bool>,
        pub fail_switch: Cell<bool>,
        pub disconnect_calls: Cell<u32>,
        pub switch_calls: Cell<u32>,
        pub sent: RefCell<Vec<(String, u128)>>,
        watchers: RefCell<Vec<Box<dyn Fn()>>>,
    }

    impl MockWallet {
        pub fn on_chain(chain_id: u64) -> Rc<Self> {
            let wallet = Self::default();
            wallet.chain_id.set(chain_id);
            Rc::new(wallet)
        }

        /// Simulate the wallet pushing an account/chain change.
        pub fn emit(&self, account: Account, chain_id: u64) {
            *self.account.borrow_mut() = account;
            self.chain_id.set(chain_id);
            for watcher in self.watchers.borrow().iter() {
                watcher();
            }
        }
    }

    #[async_trait(?Send)]
    impl WalletPort for MockWallet {
        async fn connect(&self, _connector_id: &str) -> Result<Account, WalletError> {
            if self.fail_connect.get() {
                return Err(WalletError::Rejected);
            }
            let account = Account {
                address: Some("0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_string()),
                is_connected: true,
            };
            *self.account.borrow_mut() = account.clone();
            Ok(account)
        }

        async fn disconnect(&self) -> Result<(), WalletError> {
            self.disconnect_calls.set(self.disconnect_calls.get() + 1);
            if self.fail_disconnect.get() {
                return Err(WalletError::Provider("transport closed".to_string()));
            }
            *self.account.borrow_mut() = Account::default();
            Ok(())
        }

        fn current_account(&self) -> Account {
            self.account.borrow().clone()
        }

        fn current_chain_id(&self) -> u64 {
            self.chain_id.get()
        }

        async fn switch_chain(&self, chain_id: u64) -> Result<(), WalletError> {
            self.switch_calls.set(self.switch_calls.get() + 1);
            tokio::task::yield_now().await;
            if self.fail_switch.get() {
                return Err(WalletError::Rejected);
            }
            self.chain_id.set(chain_id);
            Ok(())
        }

        async fn send_transaction(&self, to: &str, value_wei: u128) -> Result<String, WalletError> {
            self.sent.borrow_mut().push((to.to_string(), value_wei));
            Ok(format!("0x{:064x}", self.sent.borrow().len()))
        }

        fn watch(&self, on_change: Box<dyn Fn()>) {
            self.watchers.borrow_mut().push(on_change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockWallet;
    use super::*;
    use crate::auth::AuthError;
    use crate::network::{NetworkPolicy, BASE_MAINNET_ID, BASE_SEPOLIA_ID};

    type TestAuth = WalletAuth<Rc<MockWallet>, Rc<RefCell<AuthSession>>>;

    fn setup(chain_id: u64) -> (Rc<MockWallet>, TestAuth) {
        let wallet = MockWallet::on_chain(chain_id);
        let store = Rc::new(RefCell::new(AuthSession::new(NetworkPolicy::base())));
        (wallet.clone(), WalletAuth::new(wallet, store))
    }

    #[tokio::test]
    async fn test_connect_authenticates() {
        let (_wallet, auth) = setup(BASE_MAINNET_ID);
        let edge = auth.connect("coinbaseWalletSDK").await.unwrap();
        assert_eq!(edge, AuthTransition::Authenticated);
        assert!(auth.state().is_authenticated);
    }

    #[tokio::test]
    async fn test_connect_failure_is_returned() {
        let (wallet, auth) = setup(BASE_MAINNET_ID);
        wallet.fail_connect.set(true);
        assert_eq!(auth.connect("coinbaseWalletSDK").await, Err(WalletError::Rejected));
        assert!(!auth.state().is_authenticated);
    }

    #[tokio::test]
    async fn test_disconnect_is_idempotent() {
        let (wallet, auth) = setup(BASE_MAINNET_ID);
        auth.refresh();
        let before = auth.state();

        auth.disconnect().await;
        auth.disconnect().await;

        assert_eq!(auth.state(), before);
        assert_eq!(auth.state(), AuthState::default());
        assert_eq!(wallet.disconnect_calls.get(), 2);
    }

    #[tokio::test]
    async fn test_disconnect_swallows_collaborator_failure() {
        let (wallet, auth) = setup(1);
        auth.connect("coinbaseWalletSDK").await.ok();
        assert_eq!(auth.state().error, Some(AuthError::WrongNetwork));

        wallet.fail_disconnect.set(true);
        auth.disconnect().await;
        assert_eq!(auth.state().error, None);
    }

    #[tokio::test]
    async fn test_switch_network_success() {
        let (_wallet, auth) = setup(1);
        auth.connect("coinbaseWalletSDK").await.ok();
        assert!(!auth.state().is_authenticated);

        assert_eq!(auth.switch_network(Network::Testnet).await, SwitchOutcome::Switched);
        let state = auth.state();
        assert!(state.is_authenticated);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_switch_failure_while_authenticated() {
        let (wallet, auth) = setup(BASE_MAINNET_ID);
        auth.connect("coinbaseWalletSDK").await.unwrap();
        wallet.fail_switch.set(true);

        assert_eq!(auth.switch_network(Network::Testnet).await, SwitchOutcome::Failed);
        let state = auth.state();
        assert!(state.is_authenticated);
        assert_eq!(state.error.map(|e| e.to_string()).as_deref(), Some("switch-failed:testnet"));
    }

    #[tokio::test]
    async fn test_switch_allowed_while_disconnected() {
        let (wallet, auth) = setup(1);
        assert_eq!(auth.switch_network(Network::Mainnet).await, SwitchOutcome::Switched);
        assert_eq!(wallet.current_chain_id(), BASE_MAINNET_ID);
        assert!(!auth.state().is_authenticated);
    }

    #[tokio::test]
    async fn test_concurrent_switch_is_rejected() {
        let (wallet, auth) = setup(BASE_MAINNET_ID);
        auth.connect("coinbaseWalletSDK").await.unwrap();

        let (first, second) = tokio::join!(
            auth.switch_network(Network::Testnet),
            auth.switch_network(Network::Mainnet)
        );
        assert_eq!(first, SwitchOutcome::Switched);
        assert_eq!(second, SwitchOutcome::AlreadyPending);
        assert_eq!(wallet.switch_calls.get(), 1);
        assert_eq!(wallet.current_chain_id(), BASE_SEPOLIA_ID);
    }

    #[tokio::test]
    async fn test_subscription_recomputes_on_push() {
        let (wallet, auth) = setup(BASE_MAINNET_ID);
        auth.subscribe();
        assert!(!auth.state().is_authenticated);

        wallet.emit(
            Account {
                address: Some("0xabc".to_string()),
                is_connected: true,
            },
            BASE_SEPOLIA_ID,
        );
        assert!(auth.state().is_authenticated);

        wallet.emit(
            Account {
                address: Some("0xabc".to_string()),
                is_connected: true,
            },
            1,
        );
        let state = auth.state();
        assert!(!state.is_authenticated);
        assert_eq!(state.error, Some(AuthError::WrongNetwork));
    }

    #[tokio::test]
    async fn test_switch_failure_survives_repeated_signal() {
        let (wallet, auth) = setup(1);
        auth.subscribe();
        auth.connect("coinbaseWalletSDK").await.ok();
        wallet.fail_switch.set(true);

        assert_eq!(auth.switch_network(Network::Testnet).await, SwitchOutcome::Failed);
        assert_eq!(auth.state().error, Some(AuthError::SwitchFailed(Network::Testnet)));

        // The wallet re-announces the same account and chain.
        let account = wallet.current_account();
        wallet.emit(account, 1);
        assert_eq!(auth.state().error, Some(AuthError::SwitchFailed(Network::Testnet)));

        // A real change recomputes the error.
        wallet.emit(Account::default(), 1);
        assert_eq!(auth.state().error, None);
    }
}
