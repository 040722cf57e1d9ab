//! # Network Policy
//!
//! The storefront only accepts wallets connected to Base. Two chains are
//! allowed: the production network and its public testnet.
//!
//! ```rust
//! use shared::network::{NetworkPolicy, BASE_MAINNET_ID};
//!
//! let policy = NetworkPolicy::base();
//! assert!(policy.contains(BASE_MAINNET_ID));
//! assert!(!policy.contains(1));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const BASE_MAINNET_ID: u64 = 8453;
pub const BASE_SEPOLIA_ID: u64 = 84532;

/// Static description of a chain, used for display and RPC routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    pub id: u64,
    pub name: &'static str,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
    pub currency_symbol: &'static str,
}

pub const BASE_MAINNET: ChainInfo = ChainInfo {
    id: BASE_MAINNET_ID,
    name: "Base Mainnet",
    rpc_url: "https://mainnet.base.org",
    explorer_url: "https://basescan.org",
    currency_symbol: "ETH",
};

pub const BASE_SEPOLIA: ChainInfo = ChainInfo {
    id: BASE_SEPOLIA_ID,
    name: "Base Sepolia",
    rpc_url: "https://sepolia.base.org",
    explorer_url: "https://sepolia.basescan.org",
    currency_symbol: "ETH",
};

/// Switch targets offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Mainnet, Network::Testnet];

    pub fn info(self) -> &'static ChainInfo {
        match self {
            Network::Mainnet => &BASE_MAINNET,
            Network::Testnet => &BASE_SEPOLIA,
        }
    }

    pub fn chain_id(self) -> u64 {
        self.info().id
    }

    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.chain_id() == chain_id)
    }

    /// Stable lowercase code, used in error codes such as `switch-failed:testnet`.
    pub fn code(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Immutable set of accepted chains. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkPolicy {
    chains: Vec<ChainInfo>,
}

impl NetworkPolicy {
    /// Build a policy, rejecting empty or duplicated chain lists.
    pub fn new(chains: Vec<ChainInfo>) -> Result<Self, ConfigError> {
        if chains.is_empty() {
            return Err(ConfigError::EmptyPolicy);
        }
        for (i, chain) in chains.iter().enumerate() {
            if chains[..i].iter().any(|c| c.id == chain.id) {
                return Err(ConfigError::DuplicateChain(chain.id));
            }
        }
        Ok(Self { chains })
    }

    /// Base Mainnet + Base Sepolia.
    pub fn base() -> Self {
        Self {
            chains: vec![BASE_MAINNET, BASE_SEPOLIA],
        }
    }

    pub fn contains(&self, chain_id: u64) -> bool {
        self.chains.iter().any(|c| c.id == chain_id)
    }

    pub fn chain(&self, chain_id: u64) -> Option<&ChainInfo> {
        self.chains.iter().find(|c| c.id == chain_id)
    }

    pub fn chains(&self) -> &[ChainInfo] {
        &self.chains
    }

    /// Display name for any chain id, accepted or not.
    pub fn network_name(&self, chain_id: u64) -> &'static str {
        self.chain(chain_id).map_or("Unknown Network", |c| c.name)
    }

    /// Explorer page for an address, falling back to the first accepted chain.
    pub fn explorer_address_url(&self, chain_id: u64, address: &str) -> String {
        let chain = self.chain(chain_id).unwrap_or(&self.chains[0]);
        format!("{}/address/{}", chain.explorer_url, address)
    }
}

impl Default for NetworkPolicy {
    fn default() -> Self {
        Self::base()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_policy_accepts_both_networks() {
        let policy = NetworkPolicy::base();
        assert!(policy.contains(8453));
        assert!(policy.contains(84532));
        assert!(!policy.contains(1));
        assert!(!policy.contains(0));
    }

    #[test]
    fn test_policy_rejects_empty_and_duplicates() {
        assert_eq!(NetworkPolicy::new(vec![]), Err(ConfigError::EmptyPolicy));
        assert_eq!(
            NetworkPolicy::new(vec![BASE_MAINNET, BASE_MAINNET]),
            Err(ConfigError::DuplicateChain(8453))
        );
        assert!(NetworkPolicy::new(vec![BASE_SEPOLIA]).is_ok());
    }

    #[test]
    fn test_network_names() {
        let policy = NetworkPolicy::base();
        assert_eq!(policy.network_name(8453), "Base Mainnet");
        assert_eq!(policy.network_name(84532), "Base Sepolia");
        assert_eq!(policy.network_name(137), "Unknown Network");
    }

    #[test]
    fn test_explorer_url() {
        let policy = NetworkPolicy::base();
        assert_eq!(
            policy.explorer_address_url(84532, "0xabc"),
            "https://sepolia.basescan.org/address/0xabc"
        );
        assert_eq!(
            policy.explorer_address_url(1, "0xabc"),
            "https://basescan.org/address/0xabc"
        );
    }

    #[test]
    fn test_network_codes() {
        assert_eq!(Network::Testnet.to_string(), "testnet");
        assert_eq!(Network::from_chain_id(8453), Some(Network::Mainnet));
        assert_eq!(Network::from_chain_id(10), None);
    }

    #[test]
    fn test_chain_details() {
        assert_eq!(Network::Mainnet.info().rpc_url, "https://mainnet.base.org");
        assert_eq!(Network::Testnet.info().rpc_url, "https://sepolia.base.org");
        assert!(Network::ALL.iter().all(|n| n.info().currency_symbol == "ETH"));
    }
}
