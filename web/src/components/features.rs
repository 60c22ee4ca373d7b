//! "Why Choose HelloSolana?" feature cards

use leptos::prelude::*;

use super::icons::{HeroIcon, Icon};

pub struct Feature {
    pub icon: HeroIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: HeroIcon::Wallet,
        title: "Wallet Integration",
        description: "Seamlessly connect with popular Solana wallets like Phantom and Solflare",
    },
    Feature {
        icon: HeroIcon::CubeTransparent,
        title: "Smart Contracts",
        description: "Interact with Solana programs and smart contracts with ease",
    },
    Feature {
        icon: HeroIcon::ShieldCheck,
        title: "Secure & Fast",
        description: "Built on Solana's high-performance blockchain for security and speed",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                        "Why Choose HelloSolana?"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                        "Built with modern technologies and best practices for the Solana ecosystem"
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    {FEATURES.iter().map(|feature| view! {
                        <div class="bg-white p-8 rounded-lg shadow-sm border border-purple-100 hover:shadow-md transition-shadow">
                            <div class="w-12 h-12 bg-purple-100 rounded-lg flex items-center justify-center mb-6">
                                <Icon icon=feature.icon classes="w-6 h-6 text-purple-600"/>
                            </div>
                            <h3 class="text-xl font-semibold text-gray-900 mb-4">{feature.title}</h3>
                            <p class="text-gray-600">{feature.description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
