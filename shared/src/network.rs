//! # Cluster Selection
//!
//! Resolves a Solana cluster to its public JSON-RPC endpoint, mirroring the
//! wallet-adapter's `clusterApiUrl`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Solana cluster the page talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    #[default]
    Devnet,
    Testnet,
    MainnetBeta,
}

impl Network {
    /// Cluster name as used in endpoint hostnames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Devnet => "devnet",
            Network::Testnet => "testnet",
            Network::MainnetBeta => "mainnet-beta",
        }
    }

    /// Public HTTPS RPC endpoint for this cluster.
    pub fn cluster_url(&self) -> String {
        format!("https://api.{}.solana.com", self.as_str())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "devnet" => Ok(Network::Devnet),
            "testnet" => Ok(Network::Testnet),
            "mainnet" | "mainnet-beta" => Ok(Network::MainnetBeta),
            other => Err(format!("unknown network: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_url() {
        assert_eq!(Network::Devnet.cluster_url(), "https://api.devnet.solana.com");
        assert_eq!(Network::Testnet.cluster_url(), "https://api.testnet.solana.com");
        assert_eq!(Network::MainnetBeta.cluster_url(), "https://api.mainnet-beta.solana.com");
    }

    #[test]
    fn test_default_is_devnet() {
        assert_eq!(Network::default(), Network::Devnet);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Devnet".parse::<Network>(), Ok(Network::Devnet));
        assert_eq!("mainnet".parse::<Network>(), Ok(Network::MainnetBeta));
        assert!("localnet".parse::<Network>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Network::MainnetBeta).unwrap();
        assert_eq!(json, "\"mainnet-beta\"");
    }
}
