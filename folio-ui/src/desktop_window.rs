use dioxus::prelude::*;
use dioxus_web::WebEventExt;
use shared_types::WindowState;
use wasm_bindgen::JsCast;

use crate::desktop::TASKBAR_HEIGHT_PX;
use crate::views::{AboutView, ContactView, JournalView, PortfolioView, SettingsView, ShopView};

const MIN_WINDOW_WIDTH: i32 = 320;
const MIN_WINDOW_HEIGHT: i32 = 240;

/// Clamp a window's top-left so it stays inside the workspace:
/// `[0, viewport_w - width]` x `[0, viewport_h - height - taskbar]`.
fn clamp_position(x: i32, y: i32, width: i32, height: i32, viewport: (u32, u32)) -> (i32, i32) {
    let (vw, vh) = (viewport.0 as i32, viewport.1 as i32);
    let max_x = (vw - width).max(0);
    let max_y = (vh - height - TASKBAR_HEIGHT_PX).max(0);
    (x.clamp(0, max_x), y.clamp(0, max_y))
}

fn clamp_size(width: i32, height: i32) -> (i32, i32) {
    (width.max(MIN_WINDOW_WIDTH), height.max(MIN_WINDOW_HEIGHT))
}

/// An in-flight pointer interaction on this window.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Interaction {
    /// Pointer offset from the window's top-left, recorded at pointer-down.
    Drag {
        pointer_id: i32,
        offset_x: i32,
        offset_y: i32,
    },
    /// Pointer-down point and the size it started from.
    Resize {
        pointer_id: i32,
        start_x: i32,
        start_y: i32,
        start_width: i32,
        start_height: i32,
    },
}

impl Interaction {
    fn pointer_id(&self) -> i32 {
        match *self {
            Interaction::Drag { pointer_id, .. } | Interaction::Resize { pointer_id, .. } => {
                pointer_id
            }
        }
    }
}

fn pointer_point(e: &PointerEvent) -> (i32, i32) {
    if let Some((x, y)) = e.data().try_as_web_event().and_then(|event| {
        event
            .dyn_ref::<web_sys::PointerEvent>()
            .map(|pointer| (pointer.client_x(), pointer.client_y()))
    }) {
        return (x, y);
    }

    let point = e.data().client_coordinates();
    (point.x as i32, point.y as i32)
}

fn pointer_target_is_window_control(e: &PointerEvent) -> bool {
    e.data()
        .try_as_web_event()
        .and_then(|event| event.target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| {
            element.closest("button").ok().flatten().is_some()
                || element.closest(".window-controls").ok().flatten().is_some()
        })
        .unwrap_or(false)
}

fn capture_window_pointer(e: &PointerEvent, pointer_id: i32) {
    let _ = e
        .data()
        .try_as_web_event()
        .and_then(|event| event.current_target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".floating-window").ok().flatten())
        .map(|window| window.set_pointer_capture(pointer_id));
}

fn release_window_pointer(e: &PointerEvent, pointer_id: i32) {
    let _ = e
        .data()
        .try_as_web_event()
        .and_then(|event| event.current_target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".floating-window").ok().flatten())
        .map(|window| window.release_pointer_capture(pointer_id));
}

#[component]
pub fn FloatingWindow(
    window: WindowState,
    is_active: bool,
    viewport: (u32, u32),
    on_close: Callback<String>,
    on_focus: Callback<String>,
    on_move: Callback<(String, i32, i32)>,
    on_resize: Callback<(String, i32, i32)>,
    on_minimize: Callback<String>,
    on_maximize: Callback<String>,
) -> Element {
    let window_id = window.id.clone();
    let maximized = window.is_maximized();

    let mut interaction = use_signal(|| None::<Interaction>);

    let window_id_for_focus = window_id.clone();
    let window_id_for_pointer_move = window_id.clone();
    let window_id_for_title_pointer = window_id.clone();
    let window_id_for_resize_pointer = window_id.clone();
    let window_id_for_controls = window_id.clone();

    // Active windows stack above the rest by flag, not by stored order.
    let z_index = if is_active { 50 } else { 40 };
    let active_outline = if is_active && !maximized {
        "1px solid var(--accent-bg, #3b82f6)"
    } else {
        "none"
    };
    let window_style = if maximized {
        let height = (viewport.1 as i32 - TASKBAR_HEIGHT_PX).max(0);
        format!(
            "position: absolute; top: 0; left: 0; width: 100%; height: {height}px; z-index: \
             {z_index}; display: flex; flex-direction: column; background: var(--window-bg, \
             #1f2937); border: none; border-radius: 0; overflow: hidden; box-shadow: none;"
        )
    } else {
        format!(
            "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; z-index: \
             {z_index}; display: flex; flex-direction: column; background: var(--window-bg, \
             #1f2937); border: 1px solid var(--border-color, #374151); border-radius: \
             var(--radius-lg, 12px); overflow: hidden; box-shadow: var(--shadow-lg, 0 10px 40px \
             rgba(0,0,0,0.5)); outline: {active_outline};",
            window.x, window.y, window.width, window.height
        )
    };

    let window_x = window.x;
    let window_y = window.y;
    let window_width = window.width;
    let window_height = window.height;

    rsx! {
        div {
            class: if is_active { "floating-window active" } else { "floating-window" },
            role: "dialog",
            "aria-label": window.title.clone(),
            tabindex: "0",
            style: "{window_style}",
            onclick: move |_| on_focus.call(window_id_for_focus.clone()),
            onpointermove: move |e| {
                let Some(active) = interaction() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id() {
                    return;
                }

                let (client_x, client_y) = pointer_point(&e);
                match active {
                    Interaction::Drag { offset_x, offset_y, .. } => {
                        let (x, y) = clamp_position(
                            client_x - offset_x,
                            client_y - offset_y,
                            window_width,
                            window_height,
                            viewport,
                        );
                        on_move.call((window_id_for_pointer_move.clone(), x, y));
                    }
                    Interaction::Resize {
                        start_x,
                        start_y,
                        start_width,
                        start_height,
                        ..
                    } => {
                        let (width, height) = clamp_size(
                            start_width + (client_x - start_x),
                            start_height + (client_y - start_y),
                        );
                        on_resize.call((window_id_for_pointer_move.clone(), width, height));
                    }
                }
            },
            onpointerup: move |e| {
                let Some(active) = interaction() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id() {
                    return;
                }
                release_window_pointer(&e, active.pointer_id());
                interaction.set(None);
            },
            onpointercancel: move |e| {
                let Some(active) = interaction() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id() {
                    return;
                }
                release_window_pointer(&e, active.pointer_id());
                interaction.set(None);
            },

            div {
                class: "window-titlebar",
                style: if maximized {
                    "display: flex; align-items: center; justify-content: space-between; padding: 0.6rem 1rem; background: var(--titlebar-bg, #111827); border-bottom: 1px solid var(--border-color, #374151); user-select: none;"
                } else {
                    "display: flex; align-items: center; justify-content: space-between; padding: 0.6rem 1rem; background: var(--titlebar-bg, #111827); border-bottom: 1px solid var(--border-color, #374151); cursor: grab; user-select: none; touch-action: none;"
                },
                onpointerdown: move |e| {
                    if maximized {
                        return;
                    }
                    if pointer_target_is_window_control(&e) {
                        return;
                    }
                    if !is_active {
                        on_focus.call(window_id_for_title_pointer.clone());
                    }
                    e.prevent_default();
                    capture_window_pointer(&e, e.data().pointer_id());

                    let (client_x, client_y) = pointer_point(&e);
                    interaction.set(Some(Interaction::Drag {
                        pointer_id: e.data().pointer_id(),
                        offset_x: client_x - window_x,
                        offset_y: client_y - window_y,
                    }));
                },

                div {
                    style: "display: flex; align-items: center; gap: 0.5rem; min-width: 0;",
                    span { style: "font-size: 1rem;", "{window.icon}" }
                    span {
                        style: "font-weight: 500; color: var(--text-primary, white); white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                        "{window.title}"
                    }
                }

                WindowControls {
                    maximized,
                    window_id: window_id_for_controls,
                    on_minimize,
                    on_maximize,
                    on_close,
                }
            }

            div {
                class: "window-content",
                style: "flex: 1; overflow: auto;",

                match window.app_id.as_str() {
                    "portfolio" => rsx! { PortfolioView { key: "{window.id}" } },
                    "shop" => rsx! { ShopView { key: "{window.id}" } },
                    "journal" => rsx! { JournalView { key: "{window.id}" } },
                    "contact" => rsx! { ContactView { key: "{window.id}" } },
                    "about" => rsx! { AboutView { key: "{window.id}" } },
                    "settings" => rsx! { SettingsView { key: "{window.id}" } },
                    _ => rsx! {
                        div {
                            style: "display: flex; align-items: center; justify-content: center; height: 100%; color: var(--text-muted, #6b7280); padding: 1rem;",
                            "App not yet implemented"
                        }
                    }
                }
            }

            if !maximized {
                // Only the corner handle commits resizes; the edge handles are
                // visual affordances.
                div {
                    class: "resize-handle",
                    style: "position: absolute; right: 0; bottom: 0; width: 16px; height: 16px; cursor: se-resize;",
                    onpointerdown: move |e| {
                        if !is_active {
                            on_focus.call(window_id_for_resize_pointer.clone());
                        }
                        e.prevent_default();
                        capture_window_pointer(&e, e.data().pointer_id());

                        let (client_x, client_y) = pointer_point(&e);
                        interaction.set(Some(Interaction::Resize {
                            pointer_id: e.data().pointer_id(),
                            start_x: client_x,
                            start_y: client_y,
                            start_width: window_width,
                            start_height: window_height,
                        }));
                    },
                }
                div {
                    class: "resize-handle",
                    style: "position: absolute; top: 0; left: 16px; right: 16px; height: 4px; cursor: n-resize;",
                }
                div {
                    class: "resize-handle",
                    style: "position: absolute; bottom: 0; left: 16px; right: 16px; height: 4px; cursor: s-resize;",
                }
                div {
                    class: "resize-handle",
                    style: "position: absolute; left: 0; top: 16px; bottom: 16px; width: 4px; cursor: w-resize;",
                }
                div {
                    class: "resize-handle",
                    style: "position: absolute; right: 0; top: 16px; bottom: 16px; width: 4px; cursor: e-resize;",
                }
            }
        }
    }
}

#[component]
fn WindowControls(
    maximized: bool,
    window_id: String,
    on_minimize: Callback<String>,
    on_maximize: Callback<String>,
    on_close: Callback<String>,
) -> Element {
    let window_id_for_minimize = window_id.clone();
    let window_id_for_maximize = window_id.clone();
    let window_id_for_close = window_id;

    rsx! {
        div {
            class: "window-controls",
            style: "display: flex; align-items: center; gap: 0.25rem;",

            button {
                style: "width: 24px; height: 24px; display: flex; align-items: center; justify-content: center; background: transparent; color: #facc15; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer;",
                onpointerdown: move |e| e.stop_propagation(),
                "aria-label": "Minimize",
                onclick: move |e| {
                    e.stop_propagation();
                    on_minimize.call(window_id_for_minimize.clone());
                },
                "−"
            }
            button {
                style: "width: 24px; height: 24px; display: flex; align-items: center; justify-content: center; background: transparent; color: #22c55e; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer;",
                onpointerdown: move |e| e.stop_propagation(),
                "aria-label": if maximized { "Restore" } else { "Maximize" },
                onclick: move |e| {
                    e.stop_propagation();
                    on_maximize.call(window_id_for_maximize.clone());
                },
                if maximized { "❐" } else { "□" }
            }
            button {
                class: "window-close",
                style: "width: 24px; height: 24px; display: flex; align-items: center; justify-content: center; background: transparent; color: #ef4444; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer; font-size: 1.25rem; line-height: 1;",
                onpointerdown: move |e| e.stop_propagation(),
                "aria-label": "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(window_id_for_close.clone());
                },
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_top_left_inside_workspace() {
        let viewport = (1280, 720);

        assert_eq!(clamp_position(-50, -50, 800, 600, viewport), (0, 0));
        // Right edge: 1280 - 800 = 480; bottom edge: 720 - 600 - 80 = 40.
        assert_eq!(clamp_position(9999, 9999, 800, 600, viewport), (480, 40));
        assert_eq!(clamp_position(120, 30, 800, 600, viewport), (120, 30));
    }

    #[test]
    fn clamp_degenerates_to_origin_when_window_exceeds_viewport() {
        let clamped = clamp_position(200, 200, 2000, 2000, (1280, 720));
        assert_eq!(clamped, (0, 0));
    }

    #[test]
    fn clamp_size_respects_minimums() {
        assert_eq!(clamp_size(10, 10), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
        assert_eq!(clamp_size(900, 700), (900, 700));
    }
}
