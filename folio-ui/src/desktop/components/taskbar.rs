use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::WindowState;

use crate::desktop::TASKBAR_HEIGHT_PX;

#[component]
pub fn Taskbar(
    windows: Vec<WindowState>,
    active_window: Option<String>,
    start_menu_open: bool,
    on_start_menu_toggle: Callback<()>,
    on_window_click: Callback<String>,
    on_quick_search: Callback<()>,
    current_theme: String,
    on_toggle_theme: Callback<()>,
) -> Element {
    let mut clock = use_signal(current_clock_text);
    let clock_alive = use_hook(|| Rc::new(Cell::new(true)));

    {
        let clock_alive = clock_alive.clone();
        use_drop(move || {
            clock_alive.set(false);
        });
    }

    {
        let clock_alive = clock_alive.clone();
        use_effect(move || {
            let clock_alive = clock_alive.clone();
            spawn(async move {
                while clock_alive.get() {
                    TimeoutFuture::new(1_000).await;
                    clock.set(current_clock_text());
                }
            });
        });
    }

    let (time_text, date_text) = clock();
    let start_style = if start_menu_open {
        "display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem 1rem; background: var(--hover-bg, rgba(255,255,255,0.15)); color: var(--text-primary, white); border: none; border-radius: var(--radius-md, 8px); cursor: pointer; font-weight: 600;"
    } else {
        "display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem 1rem; background: transparent; color: var(--text-secondary, #94a3b8); border: none; border-radius: var(--radius-md, 8px); cursor: pointer; font-weight: 600;"
    };

    rsx! {
        div {
            class: "taskbar",
            style: "height: {TASKBAR_HEIGHT_PX}px; flex-shrink: 0; display: flex; align-items: center; justify-content: space-between; gap: 0.75rem; padding: 0 1rem; background: var(--taskbar-bg, rgba(15,23,42,0.92)); border-top: 1px solid var(--border-color, #334155); backdrop-filter: blur(12px);",

            button {
                class: "taskbar-entry",
                style: "{start_style}",
                onclick: move |_| on_start_menu_toggle.call(()),
                span { style: "font-size: 1.1rem;", "☰" }
                span { "Start" }
            }

            div {
                class: "taskbar-windows",
                style: "display: flex; align-items: center; gap: 0.5rem; flex: 1; justify-content: center; min-width: 0; overflow: hidden;",

                for window in windows.iter() {
                    TaskbarEntry {
                        key: "{window.id}",
                        window: window.clone(),
                        is_active: active_window.as_ref() == Some(&window.id),
                        on_click: on_window_click,
                    }
                }
            }

            div {
                style: "display: flex; align-items: center; gap: 0.75rem; flex-shrink: 0;",

                button {
                    class: "taskbar-entry",
                    style: "width: 32px; height: 32px; display: flex; align-items: center; justify-content: center; background: transparent; color: var(--text-secondary, #94a3b8); border: none; border-radius: var(--radius-md, 8px); cursor: pointer;",
                    title: "Search (Ctrl+K)",
                    onclick: move |_| on_quick_search.call(()),
                    "🔍"
                }

                button {
                    class: "taskbar-entry",
                    style: "width: 32px; height: 32px; display: flex; align-items: center; justify-content: center; background: transparent; color: var(--text-secondary, #94a3b8); border: none; border-radius: var(--radius-md, 8px); cursor: pointer;",
                    title: "Toggle theme",
                    onclick: move |_| on_toggle_theme.call(()),
                    if current_theme == "dark" { "☀️" } else { "🌙" }
                }

                div {
                    style: "display: flex; flex-direction: column; align-items: flex-end;",
                    span {
                        style: "font-size: 0.875rem; font-weight: 500; color: var(--text-primary, white);",
                        "{time_text}"
                    }
                    span {
                        style: "font-size: 0.75rem; color: var(--text-muted, #64748b);",
                        "{date_text}"
                    }
                }

                div {
                    style: "display: flex; align-items: center; gap: 0.25rem;",
                    span { style: "display: inline-block; width: 8px; height: 8px; background: var(--success-bg, #10b981); border-radius: 50%;" }
                    span { style: "font-size: 0.75rem; color: var(--text-muted, #64748b);", "Online" }
                }
            }
        }
    }
}

#[component]
fn TaskbarEntry(window: WindowState, is_active: bool, on_click: Callback<String>) -> Element {
    let window_id = window.id.clone();

    // Minimized windows keep their entry, rendered dimmed.
    let opacity = if window.is_minimized() { "0.6" } else { "1.0" };
    let style = if is_active {
        format!(
            "display: flex; align-items: center; gap: 0.5rem; padding: 0.4rem 0.75rem; max-width: 12rem; background: var(--hover-bg, rgba(255,255,255,0.15)); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); cursor: pointer; opacity: {opacity};"
        )
    } else {
        format!(
            "display: flex; align-items: center; gap: 0.5rem; padding: 0.4rem 0.75rem; max-width: 12rem; background: transparent; color: var(--text-secondary, #94a3b8); border: 1px solid transparent; border-radius: var(--radius-md, 8px); cursor: pointer; opacity: {opacity};"
        )
    };

    rsx! {
        button {
            class: if is_active { "taskbar-entry active" } else { "taskbar-entry" },
            style: "{style}",
            title: "{window.title}",
            onclick: move |_| on_click.call(window_id.clone()),
            span { style: "font-size: 1rem;", "{window.icon}" }
            span {
                style: "font-size: 0.8rem; font-weight: 500; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                "{window.title}"
            }
        }
    }
}

fn current_clock_text() -> (String, String) {
    let now = js_sys::Date::new_0();
    (
        format_clock(now.get_hours(), now.get_minutes()),
        format_date(now.get_month(), now.get_date()),
    )
}

/// 12-hour clock, e.g. `2:05 PM`.
fn format_clock(hours: u32, minutes: u32) -> String {
    let meridiem = if hours < 12 { "AM" } else { "PM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hours}:{minutes:02} {meridiem}")
}

/// Short month + day, e.g. `Aug 7`. `month` is zero-based as in JS dates.
fn format_date(month: u32, day: u32) -> String {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let name = MONTHS.get(month as usize).copied().unwrap_or("???");
    format!("{name} {day}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_uses_twelve_hour_time() {
        assert_eq!(format_clock(0, 5), "12:05 AM");
        assert_eq!(format_clock(9, 30), "9:30 AM");
        assert_eq!(format_clock(12, 0), "12:00 PM");
        assert_eq!(format_clock(14, 5), "2:05 PM");
        assert_eq!(format_clock(23, 59), "11:59 PM");
    }

    #[test]
    fn date_uses_short_month_names() {
        assert_eq!(format_date(0, 1), "Jan 1");
        assert_eq!(format_date(7, 7), "Aug 7");
        assert_eq!(format_date(11, 31), "Dec 31");
        assert_eq!(format_date(99, 1), "??? 1");
    }
}
