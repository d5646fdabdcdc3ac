//! Window-manager reducer.
//!
//! All desktop mutations go through the functions here so the window
//! lifecycle is testable without a rendering environment. The shell owns the
//! single `DesktopState` signal and calls these from its event handlers.

use shared_types::{AppDefinition, DesktopState, WindowMode, WindowState};

/// Offset of the first window from the workspace origin.
pub const CASCADE_BASE_PX: i32 = 100;
/// Stride added per already-open window so new windows never exactly overlap.
pub const CASCADE_STEP_PX: i32 = 30;

/// Create a window for `app`, cascade-offset from the workspace origin by the
/// number of windows currently open, append it and make it active. Returns
/// the new window id. There is no upper bound on open windows.
pub fn open_window(state: &mut DesktopState, app: &AppDefinition) -> String {
    let offset = state.windows.len() as i32 * CASCADE_STEP_PX;
    let window = WindowState::new(app, CASCADE_BASE_PX + offset, CASCADE_BASE_PX + offset);
    let window_id = window.id.clone();

    state.windows.push(window);
    state.active_window = Some(window_id.clone());
    window_id
}

/// Remove a window. If it was active, the most-recently-opened remaining
/// window (last in creation order) becomes active; closing a non-active
/// window leaves the active window unchanged.
pub fn close_window(state: &mut DesktopState, window_id: &str) {
    state.windows.retain(|w| w.id != window_id);

    if state.active_window.as_deref() == Some(window_id) {
        state.active_window = state.windows.last().map(|w| w.id.clone());
    }
}

/// Minimize a window. It stays in the collection (so its taskbar entry
/// persists) but is excluded from rendering. Whether it was maximized is
/// remembered so focus can restore the pre-minimize layout.
pub fn minimize_window(state: &mut DesktopState, window_id: &str) {
    if let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) {
        window.mode = WindowMode::Minimized {
            from_maximized: window.is_maximized(),
        };
    }
}

/// Toggle maximized layout. A minimized window comes back maximized.
pub fn toggle_maximize(state: &mut DesktopState, window_id: &str) {
    if let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) {
        window.mode = match window.mode {
            WindowMode::Maximized => WindowMode::Normal,
            WindowMode::Normal | WindowMode::Minimized { .. } => WindowMode::Maximized,
        };
    }
}

/// Make a window active, restoring it from minimization if needed. The
/// collection is not reordered; the active window stacks above the others
/// purely by virtue of the active flag.
pub fn focus_window(state: &mut DesktopState, window_id: &str) {
    let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) else {
        return;
    };

    if let WindowMode::Minimized { from_maximized } = window.mode {
        window.mode = if from_maximized {
            WindowMode::Maximized
        } else {
            WindowMode::Normal
        };
    }

    state.active_window = Some(window_id.to_string());
}

/// Unconditional position overwrite. Clamping to the workspace is the drag
/// handler's responsibility, not the reducer's.
pub fn move_window(state: &mut DesktopState, window_id: &str, x: i32, y: i32) {
    if let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) {
        window.x = x;
        window.y = y;
    }
}

/// Unconditional size overwrite.
pub fn resize_window(state: &mut DesktopState, window_id: &str, width: i32, height: i32) {
    if let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) {
        window.width = width;
        window.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppCategory;

    fn app(id: &str) -> AppDefinition {
        AppDefinition {
            id: id.to_string(),
            name: id.to_string(),
            icon: "📁".to_string(),
            description: String::new(),
            keywords: Vec::new(),
            category: AppCategory::Main,
            default_width: 800,
            default_height: 600,
        }
    }

    fn active_is_present(state: &DesktopState) -> bool {
        match &state.active_window {
            None => true,
            Some(id) => state.windows.iter().any(|w| &w.id == id),
        }
    }

    #[test]
    fn open_appends_and_activates() {
        let mut state = DesktopState::default();

        let a = open_window(&mut state, &app("portfolio"));
        assert_eq!(state.active_window.as_deref(), Some(a.as_str()));

        let b = open_window(&mut state, &app("shop"));
        assert_eq!(state.active_window.as_deref(), Some(b.as_str()));
        assert_eq!(state.windows.len(), 2);
        assert!(active_is_present(&state));
    }

    #[test]
    fn open_cascades_position_by_stride() {
        let mut state = DesktopState::default();
        open_window(&mut state, &app("a"));
        open_window(&mut state, &app("b"));
        open_window(&mut state, &app("c"));

        assert_eq!((state.windows[0].x, state.windows[0].y), (100, 100));
        assert_eq!((state.windows[1].x, state.windows[1].y), (130, 130));
        assert_eq!((state.windows[2].x, state.windows[2].y), (160, 160));
    }

    #[test]
    fn closing_active_promotes_last_opened_remaining() {
        let mut state = DesktopState::default();
        let a = open_window(&mut state, &app("a"));
        let b = open_window(&mut state, &app("b"));
        let c = open_window(&mut state, &app("c"));

        // C is active (last opened); closing B leaves C active.
        close_window(&mut state, &b);
        assert_eq!(state.active_window.as_deref(), Some(c.as_str()));

        // Closing active C falls back to A, the last-opened survivor.
        close_window(&mut state, &c);
        assert_eq!(state.active_window.as_deref(), Some(a.as_str()));

        close_window(&mut state, &a);
        assert_eq!(state.active_window, None);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn closing_non_active_window_keeps_active() {
        let mut state = DesktopState::default();
        let a = open_window(&mut state, &app("a"));
        let b = open_window(&mut state, &app("b"));

        focus_window(&mut state, &a);
        close_window(&mut state, &b);
        assert_eq!(state.active_window.as_deref(), Some(a.as_str()));
    }

    #[test]
    fn active_window_always_present_across_random_open_close() {
        let mut state = DesktopState::default();
        let mut ids = Vec::new();

        for i in 0..8 {
            ids.push(open_window(&mut state, &app(&format!("app-{i}"))));
        }
        // Interleave closes from the middle, the front, and the back.
        for id in [&ids[3], &ids[0], &ids[7], &ids[5], &ids[1]] {
            close_window(&mut state, id);
            assert!(active_is_present(&state));
        }
    }

    #[test]
    fn minimize_keeps_window_in_collection() {
        let mut state = DesktopState::default();
        let a = open_window(&mut state, &app("a"));

        minimize_window(&mut state, &a);
        assert_eq!(state.windows.len(), 1);
        assert!(state.windows[0].is_minimized());
        // Minimize alone does not reassign the active window.
        assert_eq!(state.active_window.as_deref(), Some(a.as_str()));
    }

    #[test]
    fn focus_restores_minimized_window_only() {
        let mut state = DesktopState::default();
        let a = open_window(&mut state, &app("a"));
        let b = open_window(&mut state, &app("b"));

        minimize_window(&mut state, &a);
        minimize_window(&mut state, &b);

        focus_window(&mut state, &a);
        assert_eq!(state.active_window.as_deref(), Some(a.as_str()));
        assert_eq!(state.windows[0].mode, WindowMode::Normal);
        // The other window's mode is untouched.
        assert!(state.windows[1].is_minimized());
    }

    #[test]
    fn focus_restores_pre_minimize_maximized_layout() {
        let mut state = DesktopState::default();
        let a = open_window(&mut state, &app("a"));

        toggle_maximize(&mut state, &a);
        minimize_window(&mut state, &a);
        assert_eq!(
            state.windows[0].mode,
            WindowMode::Minimized {
                from_maximized: true
            }
        );

        focus_window(&mut state, &a);
        assert_eq!(state.windows[0].mode, WindowMode::Maximized);
    }

    #[test]
    fn maximize_toggles_and_restores_from_minimized() {
        let mut state = DesktopState::default();
        let a = open_window(&mut state, &app("a"));

        toggle_maximize(&mut state, &a);
        assert!(state.windows[0].is_maximized());

        toggle_maximize(&mut state, &a);
        assert_eq!(state.windows[0].mode, WindowMode::Normal);

        minimize_window(&mut state, &a);
        toggle_maximize(&mut state, &a);
        assert!(state.windows[0].is_maximized());
    }

    #[test]
    fn move_and_resize_overwrite_unconditionally() {
        let mut state = DesktopState::default();
        let a = open_window(&mut state, &app("a"));

        move_window(&mut state, &a, -500, 9999);
        assert_eq!((state.windows[0].x, state.windows[0].y), (-500, 9999));

        resize_window(&mut state, &a, 12, 7);
        assert_eq!((state.windows[0].width, state.windows[0].height), (12, 7));
    }

    #[test]
    fn ops_on_unknown_ids_are_no_ops() {
        let mut state = DesktopState::default();
        let a = open_window(&mut state, &app("a"));

        focus_window(&mut state, "missing");
        minimize_window(&mut state, "missing");
        toggle_maximize(&mut state, "missing");
        move_window(&mut state, "missing", 1, 1);
        close_window(&mut state, "missing");

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.active_window.as_deref(), Some(a.as_str()));
    }
}
