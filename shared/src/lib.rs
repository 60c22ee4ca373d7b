//! # Shared Types for HelloSolana
//!
//! Browser-independent building blocks used by the `hello-solana-web` app and its
//! static file server. Nothing in here touches `web_sys`, so everything is testable
//! on the host.
//!
//! ## Structure
//!
//! - **[`dto`]**: JSON-RPC request/response types for the Solana cluster API
//!   - **[`dto::rpc`]**: `getBalance` request envelope and response decoding
//! - **[`network`]**: Cluster selection and endpoint resolution
//! - **[`utils`]**: Address and amount formatting
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::lamports_to_sol`]**: Convert the chain's smallest unit to SOL
//!
//! ## Usage
//!
//! ```rust
//! use shared::network::Network;
//! use shared::utils::{format_address, format_sol, lamports_to_sol};
//!
//! let endpoint = Network::Devnet.cluster_url();
//! assert_eq!(endpoint, "https://api.devnet.solana.com");
//!
//! let sol = lamports_to_sol(1_500_000_000);
//! assert_eq!(format_sol(sol), "1.5000");
//!
//! let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
//! assert_eq!(format_address(addr, 8, 8), "8W6Qgink...fSKuJKAL");
//! ```

pub mod dto;
pub mod network;
pub mod utils;

pub use dto::*;
pub use network::Network;
pub use utils::*;
