//! # Shared Utility Functions
//!
//! Address and amount helpers used by the landing page widget.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the widget's 8/8 split
//! - [`parse_address`] - Decode a base58 address into its 32 raw bytes
//!
//! ## Amounts
//!
//! - [`lamports_to_sol`] - Convert lamports to SOL
//! - [`format_sol`] - Render a SOL amount with fixed 4-decimal precision
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
//! let formatted = format_address(address, 4, 4);
//! assert_eq!(formatted, "8W6Q...JKAL");
//! ```

/// Number of lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Characters kept on each side of a truncated address in the wallet panel.
pub const ADDRESS_DISPLAY_CHARS: usize = 8;

/// Decimal places used when displaying a SOL balance.
pub const SOL_DISPLAY_DECIMALS: usize = 4;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(format_address(addr, 4, 4), "8W6Q...JKAL");
/// assert_eq!(format_address(addr, 6, 6), "8W6Qgi...KuJKAL");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();

    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    // Base58 is ASCII, but count chars so arbitrary input cannot split a code point
    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address the way the connected panel shows it (8 + 8 characters).
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(truncate_address(addr), "8W6Qgink...fSKuJKAL");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, ADDRESS_DISPLAY_CHARS, ADDRESS_DISPLAY_CHARS)
}

/// Decode a base58 Solana address into its 32-byte public key.
///
/// Returns `None` for anything that is not valid base58 or not exactly 32 bytes.
pub fn parse_address(address: &str) -> Option<[u8; 32]> {
    let bytes = bs58::decode(address).into_vec().ok()?;
    bytes.try_into().ok()
}

/// Convert lamports to SOL.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Render a SOL amount with [`SOL_DISPLAY_DECIMALS`] decimals, e.g. `1.5` -> `"1.5000"`.
pub fn format_sol(sol: f64) -> String {
    format!("{:.prec$}", sol, prec = SOL_DISPLAY_DECIMALS)
}
