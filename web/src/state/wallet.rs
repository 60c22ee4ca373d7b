//! Wallet state management

use leptos::prelude::*;

use crate::services::wallet::{
    connect_wallet_provider, disconnect_wallet_provider, forget_wallet, remember_wallet,
    remembered_wallet, subscribe_wallet_events, unsubscribe_wallet_events, WalletEvent,
    WalletProvider, WalletState,
};

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
    /// Whether the wallet selection modal is open
    pub modal_open: RwSignal<bool>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
            modal_open: RwSignal::new(false),
        }
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(|s| s.to_string()))
    }

    pub fn provider(&self) -> Option<WalletProvider> {
        self.wallet.with(|state| state.provider())
    }

    pub fn set_connecting(&self, provider: WalletProvider) {
        self.wallet.set(WalletState::Connecting(provider));
    }

    pub fn set_connected(&self, address: String, provider: WalletProvider) {
        self.wallet.set(WalletState::Connected { address, provider });
    }

    pub fn set_error(&self, error: String) {
        self.wallet.set(WalletState::Error(error));
    }

    pub fn open_modal(&self) {
        self.modal_open.set(true);
    }

    pub fn close_modal(&self) {
        self.modal_open.set(false);
    }

    /// Prompt the user's wallet to connect.
    pub fn connect(&self, provider: WalletProvider) {
        let ctx = *self;
        ctx.close_modal();
        ctx.set_connecting(provider);

        leptos::task::spawn_local(async move {
            match connect_wallet_provider(provider, false).await {
                Ok(address) => {
                    log::info!("{} connected: {}", provider.name(), address);
                    remember_wallet(provider);
                    ctx.set_connected(address, provider);
                    ctx.watch(provider);
                }
                Err(e) => {
                    log::warn!("{} connection failed: {}", provider.name(), e);
                    ctx.set_error(e.to_string());
                }
            }
        });
    }

    /// Silently reconnect the wallet chosen on a previous visit, if it trusts this site.
    pub fn auto_connect(&self) {
        let Some(provider) = remembered_wallet() else {
            return;
        };
        let ctx = *self;
        ctx.set_connecting(provider);

        leptos::task::spawn_local(async move {
            match connect_wallet_provider(provider, true).await {
                Ok(address) => {
                    log::info!("{} reconnected: {}", provider.name(), address);
                    ctx.set_connected(address, provider);
                    ctx.watch(provider);
                }
                Err(e) => {
                    log::debug!("Auto-connect to {} skipped: {}", provider.name(), e);
                    ctx.wallet.set(WalletState::Disconnected);
                }
            }
        });
    }

    /// Follow disconnects and account switches made inside the wallet itself.
    fn watch(&self, provider: WalletProvider) {
        let ctx = *self;
        if !subscribe_wallet_events(provider, move |event| ctx.handle_event(provider, event)) {
            log::debug!("{} exposes no wallet events", provider.name());
        }
    }

    fn handle_event(&self, provider: WalletProvider, event: WalletEvent) {
        let Some(next) = self.wallet.with_untracked(|state| state.apply_event(provider, event)) else {
            return;
        };

        match next.address() {
            Some(address) => log::info!("{} switched account: {}", provider.name(), address),
            None => {
                log::info!("{} disconnected from the wallet", provider.name());
                unsubscribe_wallet_events(provider);
                forget_wallet();
            }
        }
        self.wallet.set(next);
    }

    /// End the wallet session. Local state is cleared whether or not the wallet
    /// acknowledges the disconnect.
    pub fn disconnect(&self) {
        let provider = self.provider();
        self.wallet.set(WalletState::Disconnected);
        forget_wallet();

        if let Some(provider) = provider {
            unsubscribe_wallet_events(provider);
            leptos::task::spawn_local(async move {
                match disconnect_wallet_provider(provider).await {
                    Ok(()) => log::info!("{} disconnected", provider.name()),
                    Err(e) => log::warn!("{}", e),
                }
            });
        }
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
