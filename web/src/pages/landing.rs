//! Landing page: static sections around the wallet connection widget

use leptos::prelude::*;

use crate::components::{CallToAction, Features, Footer, Hero, Navbar, Stats, WalletConnection};

#[component]
pub fn LandingPage() -> impl IntoView {
    let handle_wallet_connect = Callback::new(move |address: String| {
        log::info!("Wallet connected: {}", address);
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-purple-50 to-white">
            <Navbar/>
            <Hero/>

            <section id="wallet" class="py-16 px-4 sm:px-6 lg:px-8 bg-white">
                <div class="max-w-4xl mx-auto">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl font-bold text-gray-900 mb-4">"Connect Your Wallet"</h2>
                        <p class="text-gray-600">"Start your Solana journey by connecting your wallet"</p>
                    </div>
                    <div class="max-w-md mx-auto">
                        <WalletConnection on_connect=handle_wallet_connect/>
                    </div>
                </div>
            </section>

            <Features/>
            <Stats/>
            <CallToAction/>
            <Footer/>
        </div>
    }
}
