//! Hero banner

use leptos::prelude::*;

use super::icons::{HeroIcon, Icon};
use crate::utils::constants::APP_TITLE;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="text-center">
                    <h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-6">
                        "Welcome to "
                        <span class="text-purple-600">{APP_TITLE}</span>
                    </h1>
                    <p class="text-xl text-gray-600 mb-8 max-w-3xl mx-auto">
                        "Your gateway to the Solana ecosystem. Connect your wallet, explore decentralized applications, \
                        and experience the future of blockchain technology."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href="#wallet"
                            class="bg-purple-600 text-white px-8 py-3 rounded-lg font-semibold hover:bg-purple-700 transition-colors flex items-center justify-center"
                        >
                            "Get Started"
                            <Icon icon=HeroIcon::ChevronRight classes="ml-2 w-5 h-5"/>
                        </a>
                        <a
                            href="#features"
                            class="border border-purple-600 text-purple-600 px-8 py-3 rounded-lg font-semibold hover:bg-purple-50 transition-colors"
                        >
                            "Learn More"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
