//! # Application Configuration
//!
//! The wasm bundle has no process environment, so overrides are read at build
//! time through `option_env!`. Everything else is fixed: the page always talks to
//! one cluster, chosen once at startup.
//!
//! | Variable                 | Default                         |
//! |--------------------------|---------------------------------|
//! | `HELLO_SOLANA_NETWORK`   | `devnet`                        |
//! | `HELLO_SOLANA_RPC_URL`   | cluster URL of the network      |
//! | `HELLO_SOLANA_AUTOCONNECT` | `true`                        |

use shared::Network;

use crate::services::wallet::WalletProvider;

/// Runtime configuration for the landing page.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Cluster the balance queries go to
    pub network: Network,

    /// JSON-RPC endpoint; defaults to the public cluster URL of `network`
    pub rpc_endpoint: String,

    /// Reconnect the previously selected wallet on page load
    pub auto_connect: bool,

    /// Wallets offered in the selection modal, in display order
    pub wallets: Vec<WalletProvider>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let network = Network::Devnet;
        Self {
            network,
            rpc_endpoint: network.cluster_url(),
            auto_connect: true,
            wallets: vec![WalletProvider::Phantom, WalletProvider::Solflare],
        }
    }
}

impl AppConfig {
    /// Load configuration from build-time environment variables.
    pub fn from_env() -> Result<Self, String> {
        Self::from_values(
            option_env!("HELLO_SOLANA_NETWORK"),
            option_env!("HELLO_SOLANA_RPC_URL"),
            option_env!("HELLO_SOLANA_AUTOCONNECT"),
        )
    }

    /// Build a configuration from optional raw values, applying defaults.
    pub fn from_values(
        network: Option<&str>,
        rpc_endpoint: Option<&str>,
        auto_connect: Option<&str>,
    ) -> Result<Self, String> {
        let defaults = Self::default();

        let network = match network {
            Some(raw) => raw.parse::<Network>()?,
            None => defaults.network,
        };

        let rpc_endpoint = rpc_endpoint
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| network.cluster_url());

        let auto_connect = match auto_connect {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .map_err(|e| format!("HELLO_SOLANA_AUTOCONNECT must be true or false: {}", e))?,
            None => defaults.auto_connect,
        };

        Ok(Self {
            network,
            rpc_endpoint,
            auto_connect,
            wallets: defaults.wallets,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.rpc_endpoint.starts_with("https://") || self.rpc_endpoint.starts_with("http://")) {
            return Err(format!(
                "RPC endpoint must be an http(s) URL, got {}",
                self.rpc_endpoint
            ));
        }

        if self.wallets.is_empty() {
            return Err("At least one wallet must be offered".to_string());
        }

        Ok(())
    }

    /// Load and validate in one step, falling back to defaults on error.
    pub fn load() -> Self {
        match Self::from_env().and_then(|config| config.validate().map(|_| config)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid configuration, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
