//! Page header with brand mark and section links

use leptos::prelude::*;
use crate::services::wallet::header_badge;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{APP_TITLE, NAV_LINKS};

/// "H" square used in the header and footer
#[component]
pub fn BrandMark() -> impl IntoView {
    view! {
        <div class="w-8 h-8 bg-purple-600 rounded-lg flex items-center justify-center">
            <span class="text-white font-bold text-lg">"H"</span>
        </div>
    }
}

/// Header; shows the connected address while a wallet session is live
#[component]
pub fn Navbar() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let badge = Signal::derive(move || wallet_ctx.wallet.with(header_badge));

    view! {
        <header class="bg-white shadow-sm border-b border-purple-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-6">
                    <div class="flex items-center">
                        <BrandMark/>
                        <h1 class="ml-3 text-2xl font-bold text-gray-900">{APP_TITLE}</h1>
                    </div>
                    <nav class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS.iter().map(|(label, href)| view! {
                            <a href=*href class="text-gray-600 hover:text-purple-600 transition-colors">{*label}</a>
                        }).collect::<Vec<_>>()}
                        {move || badge.get().map(|address| view! {
                            <span class="text-xs font-mono bg-purple-100 text-purple-700 px-3 py-1 rounded-full">
                                {address}
                            </span>
                        })}
                    </nav>
                </div>
            </div>
        </header>
    }
}
