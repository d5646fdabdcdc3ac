//! Desktop shell: window manager, taskbar, start menu, command palette.

use dioxus::prelude::*;

mod apps;
mod components;
mod effects;
mod shell;
pub mod state;
pub mod theme;

pub use apps::core_apps;
pub use shell::DesktopShell;

/// Height of the taskbar strip pinned to the bottom of the viewport. The
/// workspace (and maximized windows) end above it.
pub const TASKBAR_HEIGHT_PX: i32 = 80;

#[component]
pub fn Desktop() -> Element {
    rsx! {
        DesktopShell {}
    }
}
