use dioxus::prelude::*;

use crate::api::api_base;
use crate::desktop::theme::{
    apply_theme_to_document, get_cached_theme_preference, set_cached_theme_preference,
    DEFAULT_THEME,
};

#[component]
pub fn SettingsView() -> Element {
    let mut theme = use_signal(|| {
        get_cached_theme_preference().unwrap_or_else(|| DEFAULT_THEME.to_string())
    });

    let mut pick_theme = move |next: &str| {
        apply_theme_to_document(next);
        set_cached_theme_preference(next);
        theme.set(next.to_string());
    };

    let button_style = |selected: bool| {
        if selected {
            "flex: 1; padding: 0.75rem; background: var(--accent-bg, #3b82f6); color: var(--accent-text, white); border: none; border-radius: var(--radius-md, 8px); font-weight: 600; cursor: pointer;"
        } else {
            "flex: 1; padding: 0.75rem; background: var(--hover-bg, rgba(255,255,255,0.1)); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); font-weight: 600; cursor: pointer;"
        }
    };

    rsx! {
        div {
            style: "height: 100%; overflow-y: auto; padding: 1.5rem; display: flex; flex-direction: column; gap: 1.25rem;",

            div {
                h1 { style: "margin: 0 0 0.25rem 0; font-size: 1.4rem; color: var(--text-primary, white);", "Settings" }
                p { style: "margin: 0; font-size: 0.85rem; color: var(--text-secondary, #94a3b8);", "Customize your desktop" }
            }

            div {
                h4 { style: "margin: 0 0 0.5rem 0; font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.06em; color: var(--text-muted, #64748b);", "Theme" }
                div {
                    style: "display: flex; gap: 0.75rem;",
                    button {
                        style: button_style(theme() == "dark"),
                        onclick: move |_| pick_theme("dark"),
                        "🌙 Dark"
                    }
                    button {
                        style: button_style(theme() == "light"),
                        onclick: move |_| pick_theme("light"),
                        "☀️ Light"
                    }
                }
                p {
                    style: "margin: 0.5rem 0 0 0; font-size: 0.75rem; color: var(--text-muted, #64748b);",
                    "Saved locally in your browser."
                }
            }

            div {
                h4 { style: "margin: 0 0 0.5rem 0; font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.06em; color: var(--text-muted, #64748b);", "Backend" }
                p {
                    style: "margin: 0; font-size: 0.85rem; color: var(--text-secondary, #94a3b8); font-family: monospace;",
                    "{api_base()}"
                }
            }
        }
    }
}
