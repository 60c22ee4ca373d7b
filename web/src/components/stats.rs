//! Headline numbers band

use leptos::prelude::*;

use crate::utils::constants::STATS;

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section id="about" class="py-16 px-4 sm:px-6 lg:px-8 bg-purple-600">
            <div class="max-w-7xl mx-auto">
                <div class="grid md:grid-cols-3 gap-8 text-center">
                    {STATS.iter().map(|(value, label)| view! {
                        <div>
                            <div class="text-4xl font-bold text-white mb-2">{*value}</div>
                            <div class="text-purple-100">{*label}</div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
