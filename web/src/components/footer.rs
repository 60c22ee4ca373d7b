//! Site footer

use leptos::prelude::*;

use super::navbar::BrandMark;
use crate::utils::constants::{APP_TITLE, COPYRIGHT_YEAR, FOOTER_COLUMNS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="bg-gray-900 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="grid md:grid-cols-4 gap-8">
                    <div>
                        <div class="flex items-center mb-4">
                            <BrandMark/>
                            <span class="ml-3 text-xl font-bold text-white">{APP_TITLE}</span>
                        </div>
                        <p class="text-gray-400">
                            "Building the future of decentralized applications on Solana."
                        </p>
                    </div>
                    {FOOTER_COLUMNS.iter().map(|(heading, links)| view! {
                        <div>
                            <h3 class="text-white font-semibold mb-4">{*heading}</h3>
                            <ul class="space-y-2 text-gray-400">
                                {links.iter().map(|link| view! {
                                    <li><a href="#" class="hover:text-white transition-colors">{*link}</a></li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
                <div class="border-t border-gray-800 mt-8 pt-8 text-center text-gray-400">
                    <p>{format!("\u{a9} {} {}. All rights reserved.", COPYRIGHT_YEAR, APP_TITLE)}</p>
                </div>
            </div>
        </footer>
    }
}
