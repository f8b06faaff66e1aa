/// TS_switcher - switch between rating.chgk.info, its mirrors and rating.maii.li
/// Built with Rust + WASM + Yew

mod background;
pub mod config;
pub mod error;
pub mod icon;
pub mod operations;
pub mod platform;
pub mod session;
pub mod site;
pub mod tab_data;
pub mod translate;
pub mod ui;

use platform::BrowserApi;
use tab_data::TabChange;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Background event entry points, called from the listeners in background.js

#[wasm_bindgen]
pub fn on_installed(reason: String) {
    spawn_local(async move {
        background::on_installed(&BrowserApi::detect(), &reason).await;
    });
}

#[wasm_bindgen]
pub fn on_tab_activated(tab_id: i32) {
    spawn_local(async move {
        background::on_tab_activated(&BrowserApi::detect(), tab_id).await;
    });
}

#[wasm_bindgen]
pub fn on_tab_updated(tab_id: i32, change_info: JsValue) {
    let change: TabChange = match serde_wasm_bindgen::from_value(change_info) {
        Ok(change) => change,
        Err(e) => {
            log::error!("Failed to parse changeInfo for tab {}: {}", tab_id, e);
            return;
        }
    };

    spawn_local(async move {
        background::on_tab_updated(&BrowserApi::detect(), tab_id, &change).await;
    });
}

// Re-export the path translation for JavaScript access

#[wasm_bindgen]
pub fn to_alternate_scheme(path: &str) -> Option<String> {
    translate::to_alternate_scheme(path)
}

#[wasm_bindgen]
pub fn to_primary_scheme(path: &str) -> Option<String> {
    translate::to_primary_scheme(path)
}

#[wasm_bindgen]
pub fn is_home_path(path: &str) -> bool {
    translate::is_home_path(path)
}
