//! Browser Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for the injected Solana wallets the page supports
//! (Phantom and Solflare). The wallets own keys and the connect handshake;
//! this module asks them to connect and disconnect, and relays the
//! `disconnect` / `accountChanged` events they emit.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::{js_error_message, WalletError};

/// localStorage key holding the last selected wallet, shared with wallet-adapter.
pub const WALLET_STORAGE_KEY: &str = "walletName";

/// Supported wallet provider types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    Phantom,
    Solflare,
}

impl WalletProvider {
    pub const ALL: [WalletProvider; 2] = [WalletProvider::Phantom, WalletProvider::Solflare];

    pub fn name(&self) -> &'static str {
        match self {
            WalletProvider::Phantom => "Phantom",
            WalletProvider::Solflare => "Solflare",
        }
    }

    /// Identifier passed to the JS bindings
    pub fn id(&self) -> &'static str {
        match self {
            WalletProvider::Phantom => "phantom",
            WalletProvider::Solflare => "solflare",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(id) || p.name().eq_ignore_ascii_case(id))
    }

    pub fn install_url(&self) -> &'static str {
        match self {
            WalletProvider::Phantom => "https://phantom.app",
            WalletProvider::Solflare => "https://solflare.com",
        }
    }
}

// ============================================================================
// WALLET DETECTION AND CONNECTION (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function adapterFor(provider) {
    switch (provider) {
        case 'phantom':
            if (window.phantom && window.phantom.solana && window.phantom.solana.isPhantom) {
                return window.phantom.solana;
            }
            return window.solana && window.solana.isPhantom ? window.solana : null;
        case 'solflare':
            if (window.solflare && window.solflare.isSolflare !== false) {
                return window.solflare;
            }
            return window.solana && window.solana.isSolflare ? window.solana : null;
        default:
            return null;
    }
}

export function isWalletInstalled(provider) {
    return adapterFor(provider) !== null;
}

export async function connectWallet(provider, onlyIfTrusted) {
    const adapter = adapterFor(provider);
    if (!adapter) {
        throw new Error(provider + ' wallet not found');
    }
    const response = onlyIfTrusted
        ? await adapter.connect({ onlyIfTrusted: true })
        : await adapter.connect();
    const key = (response && response.publicKey) || adapter.publicKey;
    if (!key) {
        throw new Error('Connected but could not retrieve public key');
    }
    return key.toString();
}

const subscriptions = {};

export function subscribeWalletEvents(provider, onDisconnect, onAccountChanged) {
    const adapter = adapterFor(provider);
    if (!adapter || typeof adapter.on !== 'function') {
        return false;
    }
    unsubscribeWalletEvents(provider);
    const handlers = {
        disconnect: () => onDisconnect(),
        accountChanged: (publicKey) => onAccountChanged(publicKey ? publicKey.toString() : null),
    };
    adapter.on('disconnect', handlers.disconnect);
    adapter.on('accountChanged', handlers.accountChanged);
    subscriptions[provider] = { adapter, handlers };
    return true;
}

export function unsubscribeWalletEvents(provider) {
    const sub = subscriptions[provider];
    if (!sub) {
        return;
    }
    const off = sub.adapter.off || sub.adapter.removeListener;
    if (typeof off === 'function') {
        off.call(sub.adapter, 'disconnect', sub.handlers.disconnect);
        off.call(sub.adapter, 'accountChanged', sub.handlers.accountChanged);
    }
    delete subscriptions[provider];
}

export async function disconnectWallet(provider) {
    const adapter = adapterFor(provider);
    if (adapter && typeof adapter.disconnect === 'function') {
        await adapter.disconnect();
    }
}
")]
extern "C" {
    /// Whether the provider's extension has injected itself into `window`
    #[wasm_bindgen(js_name = isWalletInstalled)]
    fn is_wallet_installed_js(provider: &str) -> bool;

    /// Connect and return the base58 public key
    #[wasm_bindgen(js_name = connectWallet, catch)]
    async fn connect_wallet_js(provider: &str, only_if_trusted: bool) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = disconnectWallet, catch)]
    async fn disconnect_wallet_js(provider: &str) -> Result<JsValue, JsValue>;

    /// Register `disconnect` / `accountChanged` listeners, replacing earlier ones
    #[wasm_bindgen(js_name = subscribeWalletEvents)]
    fn subscribe_wallet_events_js(
        provider: &str,
        on_disconnect: &js_sys::Function,
        on_account_changed: &js_sys::Function,
    ) -> bool;

    #[wasm_bindgen(js_name = unsubscribeWalletEvents)]
    fn unsubscribe_wallet_events_js(provider: &str);
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Session change reported by the wallet extension itself
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalletEvent {
    Disconnected,
    /// New public key, or `None` when the selected account has not approved this site
    AccountChanged(Option<String>),
}

/// Wallet connection state with provider information
#[derive(Clone, Debug, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting(WalletProvider),
    Connected { address: String, provider: WalletProvider },
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, WalletState::Connecting(_))
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    pub fn provider(&self) -> Option<WalletProvider> {
        match self {
            WalletState::Connected { provider, .. } | WalletState::Connecting(provider) => {
                Some(*provider)
            }
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WalletState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// State after `provider` emitted `event`, or `None` if the event does not apply.
    ///
    /// Events from a wallet other than the connected one are ignored, as are
    /// account changes carrying a malformed key.
    pub fn apply_event(&self, provider: WalletProvider, event: WalletEvent) -> Option<WalletState> {
        let WalletState::Connected { address, provider: current } = self else {
            return None;
        };
        if *current != provider {
            return None;
        }

        match event {
            WalletEvent::Disconnected | WalletEvent::AccountChanged(None) => {
                Some(WalletState::Disconnected)
            }
            WalletEvent::AccountChanged(Some(next)) => {
                if next == *address || shared::parse_address(&next).is_none() {
                    return None;
                }
                Some(WalletState::Connected { address: next, provider })
            }
        }
    }
}

/// Short address shown in the page header while a wallet is connected
pub fn header_badge(state: &WalletState) -> Option<String> {
    state
        .address()
        .map(|address| shared::utils::format_address(address, 4, 4))
}

/// Check if a specific wallet is installed
pub fn is_wallet_installed(provider: WalletProvider) -> bool {
    is_wallet_installed_js(provider.id())
}

/// Connect to a wallet provider.
///
/// With `only_if_trusted` the wallet connects silently if the site was approved
/// before, and rejects otherwise without prompting the user.
pub async fn connect_wallet_provider(
    provider: WalletProvider,
    only_if_trusted: bool,
) -> Result<String, WalletError> {
    if !is_wallet_installed(provider) {
        return Err(WalletError::NotInstalled(provider.name().to_string()));
    }

    let result = connect_wallet_js(provider.id(), only_if_trusted)
        .await
        .map_err(|e| WalletError::Connect(js_error_message(&e)))?;

    let address = result
        .as_string()
        .ok_or_else(|| WalletError::InvalidPublicKey(format!("{:?}", result)))?;

    if shared::parse_address(&address).is_none() {
        return Err(WalletError::InvalidPublicKey(address));
    }

    Ok(address)
}

/// Ask the wallet to end the session
pub async fn disconnect_wallet_provider(provider: WalletProvider) -> Result<(), WalletError> {
    disconnect_wallet_js(provider.id())
        .await
        .map(|_| ())
        .map_err(|e| WalletError::Disconnect(js_error_message(&e)))
}

/// Forward the wallet's own session events to `on_event`.
///
/// Returns `false` if the wallet exposes no event emitter.
pub fn subscribe_wallet_events(
    provider: WalletProvider,
    on_event: impl Fn(WalletEvent) + Clone + 'static,
) -> bool {
    let on_disconnect = {
        let on_event = on_event.clone();
        Closure::<dyn FnMut()>::new(move || on_event(WalletEvent::Disconnected))
    };
    let on_account_changed = Closure::<dyn FnMut(JsValue)>::new(move |key: JsValue| {
        on_event(WalletEvent::AccountChanged(key.as_string()))
    });

    // Ownership moves to JS; the listeners live as long as the wallet holds them
    subscribe_wallet_events_js(
        provider.id(),
        on_disconnect.into_js_value().unchecked_ref(),
        on_account_changed.into_js_value().unchecked_ref(),
    )
}

pub fn unsubscribe_wallet_events(provider: WalletProvider) {
    unsubscribe_wallet_events_js(provider.id());
}

// ============================================================================
// REMEMBERED WALLET (localStorage)
// ============================================================================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Wallet selected on a previous visit, if any
pub fn remembered_wallet() -> Option<WalletProvider> {
    let raw = local_storage()?.get_item(WALLET_STORAGE_KEY).ok().flatten()?;
    // wallet-adapter stores the name JSON-encoded ("\"Phantom\"")
    let name = serde_json::from_str::<String>(&raw).unwrap_or(raw);
    WalletProvider::from_id(&name)
}

pub fn remember_wallet(provider: WalletProvider) {
    let Some(storage) = local_storage() else { return };
    let value = serde_json::to_string(provider.name()).unwrap_or_default();
    if let Err(e) = storage.set_item(WALLET_STORAGE_KEY, &value) {
        log::warn!("Could not persist wallet selection: {}", js_error_message(&e));
    }
}

pub fn forget_wallet() {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.remove_item(WALLET_STORAGE_KEY) {
            log::warn!("Could not clear wallet selection: {}", js_error_message(&e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_ids() {
        assert_eq!(WalletProvider::Phantom.id(), "phantom");
        assert_eq!(WalletProvider::Solflare.name(), "Solflare");
        assert_eq!(WalletProvider::from_id("Phantom"), Some(WalletProvider::Phantom));
        assert_eq!(WalletProvider::from_id("solflare"), Some(WalletProvider::Solflare));
        assert_eq!(WalletProvider::from_id("backpack"), None);
    }

    #[test]
    fn test_wallet_state_accessors() {
        let state = WalletState::Connected {
            address: "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL".to_string(),
            provider: WalletProvider::Solflare,
        };
        assert!(state.is_connected());
        assert_eq!(state.address(), Some("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL"));
        assert_eq!(state.provider(), Some(WalletProvider::Solflare));

        let connecting = WalletState::Connecting(WalletProvider::Phantom);
        assert!(!connecting.is_connected());
        assert!(connecting.is_connecting());
        assert_eq!(connecting.address(), None);

        assert_eq!(WalletState::Error("nope".into()).error(), Some("nope"));
        assert_eq!(WalletState::Disconnected.provider(), None);
    }

    const ADDR: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
    const OTHER: &str = "So11111111111111111111111111111111111111112";

    fn connected(provider: WalletProvider) -> WalletState {
        WalletState::Connected {
            address: ADDR.to_string(),
            provider,
        }
    }

    #[test]
    fn test_wallet_disconnect_event_clears_identity() {
        let next = connected(WalletProvider::Phantom)
            .apply_event(WalletProvider::Phantom, WalletEvent::Disconnected)
            .unwrap();
        assert_eq!(next, WalletState::Disconnected);
        assert_eq!(next.address(), None);
    }

    #[test]
    fn test_account_changed_switches_identity() {
        let state = connected(WalletProvider::Solflare);
        let next = state
            .apply_event(
                WalletProvider::Solflare,
                WalletEvent::AccountChanged(Some(OTHER.to_string())),
            )
            .unwrap();
        assert_eq!(next.address(), Some(OTHER));
        assert_eq!(next.provider(), Some(WalletProvider::Solflare));

        // Switching to an account that never approved the site ends the session
        assert_eq!(
            state.apply_event(WalletProvider::Solflare, WalletEvent::AccountChanged(None)),
            Some(WalletState::Disconnected)
        );
    }

    #[test]
    fn test_irrelevant_events_are_ignored() {
        let state = connected(WalletProvider::Phantom);
        assert_eq!(
            state.apply_event(WalletProvider::Solflare, WalletEvent::Disconnected),
            None
        );
        assert_eq!(
            state.apply_event(
                WalletProvider::Phantom,
                WalletEvent::AccountChanged(Some(ADDR.to_string()))
            ),
            None
        );
        assert_eq!(
            state.apply_event(
                WalletProvider::Phantom,
                WalletEvent::AccountChanged(Some("garbage!".to_string()))
            ),
            None
        );
        assert_eq!(
            WalletState::Disconnected.apply_event(WalletProvider::Phantom, WalletEvent::Disconnected),
            None
        );
    }

    #[test]
    fn test_header_badge_follows_connection() {
        let state = connected(WalletProvider::Phantom);
        assert_eq!(header_badge(&state), Some("8W6Q...JKAL".to_string()));

        let after = state
            .apply_event(WalletProvider::Phantom, WalletEvent::Disconnected)
            .unwrap();
        assert_eq!(header_badge(&after), None);
        assert_eq!(header_badge(&WalletState::Connecting(WalletProvider::Phantom)), None);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&WalletProvider::Phantom).unwrap(),
            "\"phantom\""
        );
    }
}
