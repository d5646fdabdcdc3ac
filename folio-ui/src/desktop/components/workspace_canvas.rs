use dioxus::prelude::*;
use shared_types::DesktopState;

use crate::desktop_window::FloatingWindow;

#[component]
pub fn WorkspaceCanvas(
    state: Signal<DesktopState>,
    viewport: Signal<(u32, u32)>,
    on_explore: Callback<()>,
    on_quick_search: Callback<()>,
    on_close: Callback<String>,
    on_focus: Callback<String>,
    on_move: Callback<(String, i32, i32)>,
    on_resize: Callback<(String, i32, i32)>,
    on_minimize: Callback<String>,
    on_maximize: Callback<String>,
) -> Element {
    let state_value = state.read().clone();
    let viewport_value = *viewport.read();

    rsx! {
        div {
            class: "window-canvas",
            style: "flex: 1; position: relative; overflow: hidden;",

            if state_value.windows.is_empty() {
                HeroPanel {
                    on_explore,
                    on_quick_search,
                }
            }

            // Minimized windows stay in the collection (and on the taskbar)
            // but are excluded from the canvas.
            for window in state_value.windows.iter().filter(|w| !w.is_minimized()) {
                FloatingWindow {
                    key: "{window.id}",
                    window: window.clone(),
                    is_active: state_value.active_window.as_ref() == Some(&window.id),
                    viewport: viewport_value,
                    on_close,
                    on_focus,
                    on_move,
                    on_resize,
                    on_minimize,
                    on_maximize,
                }
            }
        }
    }
}

/// Landing panel shown while no windows are open.
#[component]
fn HeroPanel(on_explore: Callback<()>, on_quick_search: Callback<()>) -> Element {
    rsx! {
        div {
            class: "hero-panel",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100%; text-align: center; padding: 2rem; gap: 1rem;",

            h1 {
                style: "font-size: 3.5rem; margin: 0; color: var(--text-primary, #f8fafc);",
                "FolioOS"
            }
            p {
                style: "font-size: 1.25rem; margin: 0; max-width: 36rem; color: var(--text-secondary, #94a3b8);",
                "Projects. Writing. Tools. Welcome to my digital desktop."
            }

            div {
                style: "display: flex; gap: 1rem; margin-top: 1rem;",
                button {
                    style: "padding: 0.75rem 2rem; background: var(--accent-bg, #3b82f6); color: var(--accent-text, white); border: none; border-radius: var(--radius-md, 8px); font-size: 1rem; font-weight: 600; cursor: pointer;",
                    onclick: move |_| on_explore.call(()),
                    "Explore Apps"
                }
                button {
                    style: "padding: 0.75rem 2rem; background: var(--hover-bg, rgba(255,255,255,0.1)); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); font-size: 1rem; font-weight: 600; cursor: pointer;",
                    onclick: move |_| on_quick_search.call(()),
                    "Quick Search"
                }
            }

            p {
                style: "margin-top: 2rem; font-size: 0.875rem; color: var(--text-muted, #64748b);",
                "Press "
                kbd { "Ctrl+K" }
                " or "
                kbd { "/" }
                " to search"
            }
        }
    }
}
