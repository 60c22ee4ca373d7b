use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex justify-center items-center bg-purple-50">
            <div class="bg-white rounded-lg p-8 border border-purple-200 shadow-sm max-w-md text-center">
                <h1 class="text-3xl font-bold text-gray-900 mb-4">"404 - Page Not Found"</h1>
                <p class="text-gray-600 mb-6">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="inline-block bg-purple-600 text-white px-6 py-2 rounded-lg font-semibold hover:bg-purple-700 transition-colors">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
