use leptos::*;
use leptos_router::*;

mod api;
pub mod components;
pub mod config;
mod pages;
pub mod utils;

#[cfg(test)]
mod test_support;

use pages::dashboard::DashboardPage;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting cashdesk frontend (wasm)");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__CASHDESK_CONFIG is present, it takes precedence.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("runtime config initialized");
    });

    mount_to_body(|| {
        view! {
            <Router>
                <Routes>
                    <Route path="/" view=DashboardPage/>
                    <Route path="/dashboard" view=DashboardPage/>
                </Routes>
            </Router>
        }
    });
}
