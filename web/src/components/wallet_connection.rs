//! Wallet connection widget
//!
//! Shows the connect prompt until a wallet reports a public key, then the
//! connected panel with the truncated address, SOL balance, and refresh /
//! disconnect actions.

use leptos::prelude::*;
use std::sync::Arc;

use super::wallet_button::WalletMultiButton;
use crate::services::rpc::RpcConnection;
use crate::state::connection::use_connection_context;
use crate::state::wallet::use_wallet_context;
use crate::widget::{fetch_balance, FetchTicket, IdentityChange, WidgetState, WidgetView};

fn spawn_fetch(connection: Arc<RpcConnection>, widget: RwSignal<WidgetState>, ticket: FetchTicket) {
    leptos::task::spawn_local(async move {
        let outcome = fetch_balance(connection.as_ref(), ticket).await;
        widget.update(|w| {
            w.complete(outcome);
        });
    });
}

#[component]
pub fn WalletConnection(#[prop(into)] on_connect: Callback<String>) -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let connection = StoredValue::new(use_connection_context().connection);
    let widget = RwSignal::new(WidgetState::new());

    // Follow the wallet: notify and fetch once per newly seen identity
    Effect::new(move |_| {
        let identity = wallet_ctx.address();
        let change = widget.try_update(|w| w.observe_identity(identity.as_deref()));

        if let Some(IdentityChange::Connected(address)) = change {
            on_connect.run(address);
            if let Some(ticket) = widget.try_update(|w| w.begin_fetch()).flatten() {
                spawn_fetch(connection.get_value(), widget, ticket);
            }
        }
    });

    let on_refresh = move |_| {
        if let Some(ticket) = widget.try_update(|w| w.refresh()).flatten() {
            spawn_fetch(connection.get_value(), widget, ticket);
        }
    };

    let on_disconnect = move |_| {
        widget.update(|w| w.disconnect());
        wallet_ctx.disconnect();
    };

    move || match widget.with(|w| w.view()) {
        WidgetView::ConnectPrompt => view! {
            <div class="bg-white rounded-lg p-6 border border-purple-200 shadow-sm">
                <h3 class="text-lg font-semibold text-gray-900 mb-4">"Connect Your Wallet"</h3>
                <p class="text-gray-600 mb-6">"Connect your Solana wallet to get started with HelloSolana"</p>
                <WalletMultiButton/>
            </div>
        }
        .into_any(),
        WidgetView::Connected {
            address_short,
            balance_label,
            refresh_label,
            refresh_disabled,
        } => view! {
            <div class="bg-purple-100 rounded-lg p-6 border border-purple-200">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-lg font-semibold text-purple-900">"Wallet Connected"</h3>
                    <button
                        on:click=on_disconnect
                        class="text-sm text-purple-600 hover:text-purple-800 transition-colors"
                    >
                        "Disconnect"
                    </button>
                </div>
                <div class="space-y-2">
                    <p class="text-sm text-purple-700">
                        <span class="font-medium">"Address: "</span>
                        <span class="font-mono">{address_short}</span>
                    </p>
                    <p class="text-sm text-purple-700">
                        <span class="font-medium">"Balance: "</span>
                        {balance_label}
                    </p>
                </div>
                <button
                    on:click=on_refresh
                    disabled=refresh_disabled
                    class="mt-4 w-full bg-purple-600 text-white py-2 px-4 rounded-lg hover:bg-purple-700 transition-colors disabled:opacity-50"
                >
                    {refresh_label}
                </button>
            </div>
        }
        .into_any(),
    }
}
