//! HelloSolana Web App - Leptos Frontend
//!
//! Wires the connection and wallet contexts around the landing page.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::config::AppConfig;
use crate::pages::{LandingPage, NotFound};
use crate::state::connection::provide_connection_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_connection_context(config.rpc_endpoint.clone());
    let wallet_ctx = provide_wallet_context();

    let auto_connect = config.auto_connect;
    provide_context(config);

    if auto_connect {
        // Runs once after mount, when the wallet extensions have injected themselves
        Effect::new(move |_| wallet_ctx.auto_connect());
    }

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}
