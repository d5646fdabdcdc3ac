use dioxus::prelude::{Signal, WritableExt};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::desktop::theme::{apply_theme_to_document, get_cached_theme_preference, DEFAULT_THEME};

pub async fn track_viewport(mut viewport: Signal<(u32, u32)>) {
    if let Some((w, h)) = current_viewport_size() {
        viewport.set((w, h));
    }

    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some((w, h)) = current_viewport_size() {
            viewport.set((w, h));
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
    let _ = window
        .add_event_listener_with_callback("orientationchange", callback.as_ref().unchecked_ref());

    // Keep listener alive for app lifetime.
    callback.forget();
}

fn current_viewport_size() -> Option<(u32, u32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;

    if width > 0.0 && height > 0.0 {
        return Some((width.round() as u32, height.round() as u32));
    }

    let document = window.document()?;
    let root = document.document_element()?;
    let width = root.client_width().max(0) as u32;
    let height = root.client_height().max(0) as u32;
    Some((width, height))
}

/// Global keyboard shortcuts, captured at the document level:
/// - Cmd/Ctrl+K opens the command palette from anywhere
/// - "/" opens it while no text input has focus
/// - Escape closes whichever overlay is open
pub fn install_global_shortcuts(
    mut show_start_menu: Signal<bool>,
    mut show_command_palette: Signal<bool>,
) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        let key = event.key();

        if (event.meta_key() || event.ctrl_key()) && key == "k" {
            event.prevent_default();
            show_command_palette.set(true);
            return;
        }

        if key == "/" && !target_is_text_input(&event) {
            event.prevent_default();
            show_command_palette.set(true);
            return;
        }

        if key == "Escape" {
            show_start_menu.set(false);
            show_command_palette.set(false);
        }
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

    let _ = document.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());

    // Keep listener alive for app lifetime.
    callback.forget();
}

fn target_is_text_input(event: &web_sys::KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| matches!(element.tag_name().as_str(), "INPUT" | "TEXTAREA"))
        .unwrap_or(false)
}

/// Apply the cached theme preference (or the default) to the document root.
pub fn initialize_theme(mut current_theme: Signal<String>) {
    let theme = get_cached_theme_preference().unwrap_or_else(|| DEFAULT_THEME.to_string());
    apply_theme_to_document(&theme);
    current_theme.set(theme);
}
