//! Wallet selection button and modal

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::services::wallet::{is_wallet_installed, WalletProvider};
use crate::state::wallet::use_wallet_context;

/// Opens the wallet picker, or shows progress while a wallet is connecting.
#[component]
pub fn WalletMultiButton() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <div>
            {move || wallet_ctx.wallet.with(|state| state.error().map(|err| err.to_string())).map(|err| view! {
                <p class="text-sm text-red-600 mb-4">{err}</p>
            })}
            <button
                class="w-full bg-purple-600 hover:bg-purple-700 text-white font-semibold py-2 px-4 rounded-lg transition-colors disabled:opacity-50"
                disabled=move || wallet_ctx.wallet.with(|state| state.is_connecting())
                on:click=move |_| wallet_ctx.open_modal()
            >
                {move || match wallet_ctx.wallet.with(|state| state.is_connecting().then(|| state.provider()).flatten()) {
                    Some(provider) => format!("Connecting to {}...", provider.name()),
                    None => "Select Wallet".to_string(),
                }}
            </button>
            {move || wallet_ctx.modal_open.get().then(|| view! { <WalletModal/> })}
        </div>
    }
}

#[component]
fn WalletModal() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let wallets = use_context::<AppConfig>()
        .map(|config| config.wallets)
        .unwrap_or_else(|| WalletProvider::ALL.to_vec());

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50" on:click=move |_| wallet_ctx.close_modal()>
            <div class="bg-white rounded-lg p-6 w-full max-w-sm shadow-lg" on:click=|ev| ev.stop_propagation()>
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-lg font-semibold text-gray-900">"Connect a wallet on Solana"</h3>
                    <button class="text-gray-400 hover:text-gray-600" on:click=move |_| wallet_ctx.close_modal()>
                        "\u{2715}"
                    </button>
                </div>
                <div class="flex flex-col gap-3">
                    {wallets.into_iter().map(move |provider| {
                        if is_wallet_installed(provider) {
                            view! {
                                <button
                                    class="flex items-center justify-between border border-purple-200 rounded-lg px-4 py-3 hover:bg-purple-50 transition-colors"
                                    on:click=move |_| wallet_ctx.connect(provider)
                                >
                                    <span class="font-semibold text-gray-900">{provider.name()}</span>
                                    <span class="text-xs text-purple-600">"Detected"</span>
                                </button>
                            }.into_any()
                        } else {
                            view! {
                                <a
                                    class="flex items-center justify-between border border-gray-200 rounded-lg px-4 py-3 hover:bg-gray-50 transition-colors"
                                    href=provider.install_url()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <span class="font-semibold text-gray-500">{provider.name()}</span>
                                    <span class="text-xs text-gray-400">"Install"</span>
                                </a>
                            }.into_any()
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
