use web_sys::window;

/// Get the browser viewport dimensions, falling back to a sane default when
/// the DOM is not available yet.
pub fn get_viewport_size() -> (u32, u32) {
    let Some(window) = window() else {
        return (1280, 720);
    };

    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0) as u32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(720.0) as u32;

    (width.max(1), height.max(1))
}
