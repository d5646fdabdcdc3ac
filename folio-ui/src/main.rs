use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;
use gloo_timers::future::TimeoutFuture;

use folio_ui::Desktop;

/// Boot splash duration before the desktop mounts.
const BOOT_SPLASH_MS: u32 = 2_000;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    let mut booted = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            TimeoutFuture::new(BOOT_SPLASH_MS).await;
            booted.set(true);
        });
    });

    if !booted() {
        return rsx! {
            BootSplash {}
        };
    }

    rsx! {
        Desktop {}
    }
}

#[component]
fn BootSplash() -> Element {
    rsx! {
        style {
            "html, body, #main {{ width: 100%; height: 100%; margin: 0; }} \
             @keyframes spin {{ to {{ transform: rotate(360deg); }} }}"
        }
        div {
            style: "width: 100%; height: 100%; display: flex; align-items: center; justify-content: center; background: #0f172a; color: #f8fafc; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            div {
                style: "text-align: center;",
                div {
                    style: "width: 48px; height: 48px; margin: 0 auto 1rem auto; border: 4px solid #3b82f6; border-top-color: transparent; border-radius: 50%; animation: spin 0.8s linear infinite;",
                }
                h2 { style: "margin: 0 0 0.5rem 0; font-size: 1.25rem;", "Initializing FolioOS" }
                p { style: "margin: 0; color: #94a3b8;", "Loading your digital workspace..." }
            }
        }
    }
}
