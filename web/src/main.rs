//! HelloSolana landing page
//!
//! Client-side rendered Leptos app: static marketing sections plus a wallet
//! widget that shows the connected account's devnet SOL balance.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;
pub mod widget;

use app::App;
use config::AppConfig;
use utils::constants::{APP_DESCRIPTION, APP_TITLE, LOADING_ELEMENT_ID};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("{} starting", APP_TITLE);

    let config = AppConfig::load();
    log::info!("Network: {} ({})", config.network, config.rpc_endpoint);

    apply_document_metadata();
    hide_loading_screen();

    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}

fn apply_document_metadata() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(APP_TITLE);
    if let Ok(Some(meta)) = document.query_selector("meta[name=\"description\"]") {
        if let Err(e) = meta.set_attribute("content", APP_DESCRIPTION) {
            log::warn!("Could not set page description: {:?}", e);
        }
    }
}

/// Hide the static loading overlay from index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };

    match document.get_element_by_id(LOADING_ELEMENT_ID) {
        Some(element) => {
            if let Err(e) = element.class_list().add_1("hidden") {
                log::warn!("Could not hide loading screen: {:?}", e);
            }
            if let Err(e) = element.set_attribute("style", "display: none !important;") {
                log::warn!("Could not hide loading screen: {:?}", e);
            }
        }
        None => log::debug!("Loading element not found"),
    }
}
