use dioxus::prelude::*;
use shared_types::{AppDefinition, DesktopState};

use crate::desktop::apps::core_apps;
use crate::desktop::components::command_palette::CommandPalette;
use crate::desktop::components::start_menu::StartMenu;
use crate::desktop::components::taskbar::Taskbar;
use crate::desktop::components::workspace_canvas::WorkspaceCanvas;
use crate::desktop::effects;
use crate::desktop::state;
use crate::desktop::theme::{
    apply_theme_to_document, next_theme, set_cached_theme_preference, DEFAULT_THEME,
};
use crate::interop::get_viewport_size;

#[component]
pub fn DesktopShell() -> Element {
    let mut desktop_state = use_signal(DesktopState::default);
    let mut show_start_menu = use_signal(|| false);
    let mut show_command_palette = use_signal(|| false);
    let viewport = use_signal(get_viewport_size);
    let mut current_theme = use_signal(|| DEFAULT_THEME.to_string());

    use_effect(move || {
        spawn(async move {
            effects::track_viewport(viewport).await;
        });
    });

    use_effect(move || {
        effects::install_global_shortcuts(show_start_menu, show_command_palette);
    });

    use_effect(move || {
        effects::initialize_theme(current_theme);
    });

    let toggle_theme = use_callback(move |_: ()| {
        let next = next_theme(&current_theme());
        current_theme.set(next.clone());
        apply_theme_to_document(&next);
        set_cached_theme_preference(&next);
    });

    let open_app_window = use_callback(move |app: AppDefinition| {
        state::open_window(&mut desktop_state.write(), &app);
        show_start_menu.set(false);
        show_command_palette.set(false);
    });

    let close_window_cb = use_callback(move |window_id: String| {
        state::close_window(&mut desktop_state.write(), &window_id);
    });

    let focus_window_cb = use_callback(move |window_id: String| {
        state::focus_window(&mut desktop_state.write(), &window_id);
    });

    let minimize_window_cb = use_callback(move |window_id: String| {
        state::minimize_window(&mut desktop_state.write(), &window_id);
    });

    let maximize_window_cb = use_callback(move |window_id: String| {
        state::toggle_maximize(&mut desktop_state.write(), &window_id);
    });

    let move_window_cb = use_callback(move |(window_id, x, y): (String, i32, i32)| {
        state::move_window(&mut desktop_state.write(), &window_id, x, y);
    });

    let resize_window_cb = use_callback(move |(window_id, width, height): (String, i32, i32)| {
        state::resize_window(&mut desktop_state.write(), &window_id, width, height);
    });

    let toggle_start_menu = use_callback(move |_: ()| {
        show_start_menu.set(!show_start_menu());
    });

    let open_start_menu = use_callback(move |_: ()| {
        show_start_menu.set(true);
    });

    let open_command_palette = use_callback(move |_: ()| {
        show_command_palette.set(true);
    });

    let close_start_menu = use_callback(move |_: ()| {
        show_start_menu.set(false);
    });

    let close_command_palette = use_callback(move |_: ()| {
        show_command_palette.set(false);
    });

    let apps = core_apps();
    let state_snapshot = desktop_state.read().clone();

    rsx! {
        style { {DEFAULT_TOKENS} }

        div {
            class: "desktop-shell",
            style: "width: 100vw; height: 100dvh; min-height: 100dvh; max-height: 100dvh; display: flex; flex-direction: column; overflow: hidden; background: var(--bg-primary);",

            WorkspaceCanvas {
                state: desktop_state,
                viewport,
                on_explore: open_start_menu,
                on_quick_search: open_command_palette,
                on_close: close_window_cb,
                on_focus: focus_window_cb,
                on_move: move_window_cb,
                on_resize: resize_window_cb,
                on_minimize: minimize_window_cb,
                on_maximize: maximize_window_cb,
            }

            Taskbar {
                windows: state_snapshot.windows.clone(),
                active_window: state_snapshot.active_window.clone(),
                start_menu_open: show_start_menu(),
                on_start_menu_toggle: toggle_start_menu,
                on_window_click: focus_window_cb,
                on_quick_search: open_command_palette,
                current_theme: current_theme(),
                on_toggle_theme: toggle_theme,
            }
        }

        if show_start_menu() {
            StartMenu {
                apps: apps.clone(),
                on_close: close_start_menu,
                on_open_app: open_app_window,
            }
        }

        if show_command_palette() {
            CommandPalette {
                apps,
                on_close: close_command_palette,
                on_open_app: open_app_window,
            }
        }
    }
}

const DEFAULT_TOKENS: &str = r#"
:root {
    /* Colors */
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --accent-bg: #3b82f6;
    --accent-bg-hover: #2563eb;
    --accent-text: #ffffff;
    --border-color: #334155;

    /* Semantic colors */
    --window-bg: var(--bg-secondary);
    --titlebar-bg: var(--bg-primary);
    --taskbar-bg: rgba(15, 23, 42, 0.92);
    --overlay-bg: rgba(0, 0, 0, 0.5);
    --panel-bg: #0b1220;
    --input-bg: var(--bg-secondary);
    --hover-bg: rgba(255, 255, 255, 0.1);
    --danger-bg: #ef4444;
    --danger-text: #ef4444;
    --success-bg: #10b981;
    --warning-bg: #f59e0b;

    /* Spacing & Radius */
    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;

    /* Shadows */
    --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.3);
    --shadow-md: 0 4px 6px rgba(0, 0, 0, 0.4);
    --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.5);
}

:root[data-theme="dark"] {
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --accent-bg: #3b82f6;
    --accent-bg-hover: #2563eb;
    --border-color: #334155;
    --window-bg: var(--bg-secondary);
    --titlebar-bg: var(--bg-primary);
    --taskbar-bg: rgba(15, 23, 42, 0.92);
    --panel-bg: #0b1220;
    --input-bg: var(--bg-secondary);
    --hover-bg: rgba(255, 255, 255, 0.1);
}

:root[data-theme="light"] {
    --bg-primary: #f8fafc;
    --bg-secondary: #ffffff;
    --text-primary: #0f172a;
    --text-secondary: #475569;
    --text-muted: #64748b;
    --accent-bg: #2563eb;
    --accent-bg-hover: #1d4ed8;
    --border-color: #cbd5e1;
    --window-bg: var(--bg-secondary);
    --titlebar-bg: #e2e8f0;
    --taskbar-bg: rgba(255, 255, 255, 0.92);
    --panel-bg: #f1f5f9;
    --input-bg: #ffffff;
    --hover-bg: rgba(15, 23, 42, 0.08);
}

* {
    box-sizing: border-box;
}

html, body, #main {
    width: 100%;
    height: 100%;
    overflow: hidden;
    overscroll-behavior: none;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
}

.desktop-icon:hover,
.taskbar-entry:hover,
.start-menu-entry:hover {
    background: var(--hover-bg, rgba(255, 255, 255, 0.1));
}

.palette-result:hover {
    background: var(--hover-bg, rgba(255, 255, 255, 0.06));
}

.app-card:hover {
    border-color: var(--accent-bg, #3b82f6);
}

kbd {
    padding: 0.1rem 0.4rem;
    background: var(--hover-bg, rgba(255, 255, 255, 0.1));
    border-radius: var(--radius-sm, 4px);
    font-size: 0.75rem;
}

@keyframes spin {
    to {
        transform: rotate(360deg);
    }
}
"#;
