//! # Wallet Authentication State
//!
//! A wallet counts as authenticated when it is connected, exposes an
//! address, and sits on a chain accepted by the [`NetworkPolicy`]. The
//! wallet pushes raw [`ConnectionSignal`]s in any order; [`AuthSession`]
//! folds each one into a fresh [`AuthState`] and reports the edge, if any.
//!
//! ```rust
//! use shared::auth::{AuthSession, AuthTransition, ConnectionSignal};
//! use shared::network::NetworkPolicy;
//!
//! let mut session = AuthSession::new(NetworkPolicy::base());
//! let edge = session.apply(ConnectionSignal::connected("0xabc", 8453));
//! assert_eq!(edge, AuthTransition::Authenticated);
//! assert!(session.state().is_authenticated);
//! ```

use std::fmt;

use tracing::{debug, info};

use crate::error::WalletError;
use crate::network::{Network, NetworkPolicy};

/// Raw facts read from the wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionSignal {
    pub address: Option<String>,
    pub is_connected: bool,
    pub chain_id: u64,
}

impl ConnectionSignal {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(address: impl Into<String>, chain_id: u64) -> Self {
        Self {
            address: Some(address.into()),
            is_connected: true,
            chain_id,
        }
    }
}

/// Errors surfaced through [`AuthState::error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Connected to a chain outside the policy.
    WrongNetwork,
    /// An explicit switch to this network did not complete.
    SwitchFailed(Network),
}

impl AuthError {
    /// Text shown to the user.
    pub fn message(&self) -> String {
        match self {
            AuthError::WrongNetwork => "Please switch to Base network".to_string(),
            AuthError::SwitchFailed(network) => {
                format!("Failed to switch to {} network", network.info().name)
            }
        }
    }
}

/// Stable machine-readable codes: `wrong-network`, `switch-failed:<network>`.
impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::WrongNetwork => f.write_str("wrong-network"),
            AuthError::SwitchFailed(network) => write!(f, "switch-failed:{}", network),
        }
    }
}

/// Derived authentication view. Never stored outside the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_correct_network: bool,
    pub error: Option<AuthError>,
}

impl AuthState {
    /// Recompute from a signal. `previous` only influences the error field:
    /// the error is cleared on the false -> true edge of `is_authenticated`,
    /// and a switch failure raised while authenticated is kept.
    pub fn derive(signal: &ConnectionSignal, policy: &NetworkPolicy, previous: &AuthState) -> Self {
        let is_correct_network = policy.contains(signal.chain_id);
        let is_authenticated = signal.is_connected && signal.address.is_some() && is_correct_network;

        let error = if is_authenticated {
            if previous.is_authenticated {
                previous.error
            } else {
                None
            }
        } else if signal.is_connected && !is_correct_network {
            Some(AuthError::WrongNetwork)
        } else if !signal.is_connected {
            None
        } else {
            // Connected on a good chain but the address has not arrived yet.
            previous.error.filter(|e| *e != AuthError::WrongNetwork)
        };

        Self {
            is_authenticated,
            is_correct_network,
            error,
        }
    }
}

/// Edge observed while applying a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTransition {
    Unchanged,
    Authenticated,
    Deauthenticated,
}

impl AuthTransition {
    fn between(before: bool, after: bool) -> Self {
        match (before, after) {
            (false, true) => AuthTransition::Authenticated,
            (true, false) => AuthTransition::Deauthenticated,
            _ => AuthTransition::Unchanged,
        }
    }
}

/// Latest signal, derived state, and the pending network switch, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    policy: NetworkPolicy,
    signal: ConnectionSignal,
    state: AuthState,
    pending_switch: Option<Network>,
}

impl AuthSession {
    pub fn new(policy: NetworkPolicy) -> Self {
        Self {
            policy,
            signal: ConnectionSignal::disconnected(),
            state: AuthState::default(),
            pending_switch: None,
        }
    }

    pub fn policy(&self) -> &NetworkPolicy {
        &self.policy
    }

    pub fn signal(&self) -> &ConnectionSignal {
        &self.signal
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn address(&self) -> Option<&str> {
        self.signal.address.as_deref()
    }

    pub fn chain_id(&self) -> u64 {
        self.signal.chain_id
    }

    pub fn pending_switch(&self) -> Option<Network> {
        self.pending_switch
    }

    /// Fold a new signal into the session. A repeat of the current signal
    /// is not a state change and leaves the error untouched.
    pub fn apply(&mut self, signal: ConnectionSignal) -> AuthTransition {
        if signal == self.signal {
            debug!("wallet signal unchanged");
            return AuthTransition::Unchanged;
        }

        let next = AuthState::derive(&signal, &self.policy, &self.state);
        let transition = AuthTransition::between(self.state.is_authenticated, next.is_authenticated);

        match transition {
            AuthTransition::Authenticated => info!(chain_id = signal.chain_id, "wallet authenticated"),
            AuthTransition::Deauthenticated => info!(chain_id = signal.chain_id, "wallet no longer authenticated"),
            AuthTransition::Unchanged => debug!(?signal, "wallet signal applied"),
        }

        self.signal = signal;
        self.state = next;
        transition
    }

    /// Mark a switch as in flight. Returns `false` if one already is.
    pub fn begin_switch(&mut self, target: Network) -> bool {
        if self.pending_switch.is_some() {
            return false;
        }
        self.pending_switch = Some(target);
        true
    }

    /// Record the outcome of the in-flight switch.
    pub fn finish_switch(&mut self, target: Network, result: &Result<(), WalletError>) {
        self.pending_switch = None;
        match result {
            Ok(()) => {
                self.state.error = None;
                // A successful switch does not excuse a chain still outside the policy.
                self.state = AuthState::derive(&self.signal, &self.policy, &self.state);
            }
            Err(_) => self.state.error = Some(AuthError::SwitchFailed(target)),
        }
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{BASE_MAINNET_ID, BASE_SEPOLIA_ID};

    fn derive(signal: &ConnectionSignal) -> AuthState {
        AuthState::derive(signal, &NetworkPolicy::base(), &AuthState::default())
    }

    #[test]
    fn test_authenticated_iff_all_three_conditions() {
        let addresses = [None, Some("0x1111111111111111111111111111111111111111".to_string())];
        let chains = [0, 1, 137, BASE_MAINNET_ID, BASE_SEPOLIA_ID, u64::MAX];

        for address in &addresses {
            for is_connected in [false, true] {
                for chain_id in chains {
                    let signal = ConnectionSignal {
                        address: address.clone(),
                        is_connected,
                        chain_id,
                    };
                    let state = derive(&signal);
                    let expected = is_connected
                        && address.is_some()
                        && (chain_id == BASE_MAINNET_ID || chain_id == BASE_SEPOLIA_ID);
                    assert_eq!(state.is_authenticated, expected, "{:?}", signal);
                    assert_eq!(
                        state.is_correct_network,
                        chain_id == BASE_MAINNET_ID || chain_id == BASE_SEPOLIA_ID
                    );
                }
            }
        }
    }

    #[test]
    fn test_wrong_network() {
        let state = derive(&ConnectionSignal::connected("0xabc", 1));
        assert!(!state.is_correct_network);
        assert!(!state.is_authenticated);
        assert_eq!(state.error, Some(AuthError::WrongNetwork));
        assert_eq!(state.error.map(|e| e.to_string()).as_deref(), Some("wrong-network"));
    }

    #[test]
    fn test_wrong_network_without_address() {
        let signal = ConnectionSignal {
            address: None,
            is_connected: true,
            chain_id: 1,
        };
        assert_eq!(derive(&signal).error, Some(AuthError::WrongNetwork));
    }

    #[test]
    fn test_disconnected_has_no_error() {
        let state = derive(&ConnectionSignal::disconnected());
        assert_eq!(state, AuthState::default());
    }

    #[test]
    fn test_error_cleared_when_authentication_begins() {
        let mut session = AuthSession::new(NetworkPolicy::base());
        session.apply(ConnectionSignal::connected("0xabc", 1));
        assert_eq!(session.state().error, Some(AuthError::WrongNetwork));

        let edge = session.apply(ConnectionSignal::connected("0xabc", BASE_MAINNET_ID));
        assert_eq!(edge, AuthTransition::Authenticated);
        assert_eq!(session.state().error, None);
    }

    #[test]
    fn test_address_race_window() {
        let mut session = AuthSession::new(NetworkPolicy::base());
        let edge = session.apply(ConnectionSignal {
            address: None,
            is_connected: true,
            chain_id: BASE_MAINNET_ID,
        });
        assert_eq!(edge, AuthTransition::Unchanged);
        assert!(!session.state().is_authenticated);
        assert_eq!(session.state().error, None);

        let edge = session.apply(ConnectionSignal::connected("0xabc", BASE_MAINNET_ID));
        assert_eq!(edge, AuthTransition::Authenticated);
    }

    #[test]
    fn test_deauthentication_edge() {
        let mut session = AuthSession::new(NetworkPolicy::base());
        session.apply(ConnectionSignal::connected("0xabc", BASE_SEPOLIA_ID));
        assert_eq!(
            session.apply(ConnectionSignal::connected("0xabc", BASE_SEPOLIA_ID)),
            AuthTransition::Unchanged
        );
        assert_eq!(
            session.apply(ConnectionSignal::disconnected()),
            AuthTransition::Deauthenticated
        );
    }

    #[test]
    fn test_switch_failure_keeps_authentication() {
        let mut session = AuthSession::new(NetworkPolicy::base());
        session.apply(ConnectionSignal::connected("0xabc", BASE_MAINNET_ID));

        assert!(session.begin_switch(Network::Testnet));
        session.finish_switch(Network::Testnet, &Err(WalletError::Rejected));

        assert!(session.state().is_authenticated);
        assert_eq!(
            session.state().error.map(|e| e.to_string()).as_deref(),
            Some("switch-failed:testnet")
        );

        // Still authenticated on a later signal: the failure stays visible.
        session.apply(ConnectionSignal::connected("0xabc", BASE_MAINNET_ID));
        assert_eq!(session.state().error, Some(AuthError::SwitchFailed(Network::Testnet)));
    }

    #[test]
    fn test_only_one_switch_in_flight() {
        let mut session = AuthSession::new(NetworkPolicy::base());
        assert!(session.begin_switch(Network::Mainnet));
        assert!(!session.begin_switch(Network::Testnet));
        assert_eq!(session.pending_switch(), Some(Network::Mainnet));

        session.finish_switch(Network::Mainnet, &Ok(()));
        assert_eq!(session.pending_switch(), None);
        assert!(session.begin_switch(Network::Testnet));
    }

    #[test]
    fn test_successful_switch_on_wrong_chain_still_reports_wrong_network() {
        let mut session = AuthSession::new(NetworkPolicy::base());
        session.apply(ConnectionSignal::connected("0xabc", 1));
        session.begin_switch(Network::Mainnet);
        session.finish_switch(Network::Mainnet, &Ok(()));
        assert_eq!(session.state().error, Some(AuthError::WrongNetwork));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(AuthError::WrongNetwork.message(), "Please switch to Base network");
        assert_eq!(
            AuthError::SwitchFailed(Network::Testnet).message(),
            "Failed to switch to Base Sepolia network"
        );
    }
}
