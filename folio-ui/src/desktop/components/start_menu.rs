use dioxus::prelude::*;
use shared_types::{AppCategory, AppDefinition};

#[component]
pub fn StartMenu(
    apps: Vec<AppDefinition>,
    on_close: Callback<()>,
    on_open_app: Callback<AppDefinition>,
) -> Element {
    let main_apps: Vec<AppDefinition> = apps
        .iter()
        .filter(|app| app.category == AppCategory::Main)
        .cloned()
        .collect();
    let secondary_apps: Vec<AppDefinition> = apps
        .iter()
        .filter(|app| app.category == AppCategory::Secondary)
        .cloned()
        .collect();

    rsx! {
        div {
            class: "start-menu-backdrop",
            style: "position: fixed; inset: 0; background: var(--overlay-bg, rgba(0,0,0,0.5)); z-index: 60;",
            onclick: move |_| on_close.call(()),

            div {
                class: "start-menu",
                style: "position: absolute; bottom: 96px; left: 1rem; width: 24rem; background: var(--panel-bg, #0b1220); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-lg, 12px); box-shadow: var(--shadow-lg, 0 10px 40px rgba(0,0,0,0.5)); overflow: hidden;",
                onclick: move |e| e.stop_propagation(),

                div {
                    style: "display: flex; align-items: center; gap: 0.75rem; padding: 1.25rem; background: var(--titlebar-bg, #111827); border-bottom: 1px solid var(--border-color, #334155);",
                    div {
                        style: "width: 2.5rem; height: 2.5rem; display: flex; align-items: center; justify-content: center; background: var(--accent-bg, #3b82f6); border-radius: 50%; font-size: 1.25rem;",
                        "👋"
                    }
                    div {
                        h3 { style: "margin: 0; font-size: 1rem; color: var(--text-primary, white);", "FolioOS" }
                        p { style: "margin: 0; font-size: 0.8rem; color: var(--text-secondary, #94a3b8);", "Full Stack Developer" }
                    }
                }

                div {
                    style: "padding: 1rem;",
                    h4 {
                        style: "margin: 0 0 0.75rem 0; font-size: 0.7rem; text-transform: uppercase; letter-spacing: 0.08em; color: var(--text-muted, #64748b);",
                        "Applications"
                    }
                    div {
                        style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.5rem;",
                        for app in main_apps {
                            StartMenuEntry {
                                key: "{app.id}",
                                app: app.clone(),
                                on_open_app,
                            }
                        }
                    }
                }

                div {
                    style: "display: flex; gap: 0.5rem; padding: 0 1rem 1rem 1rem;",
                    for app in secondary_apps {
                        StartMenuSmallEntry {
                            key: "{app.id}",
                            app: app.clone(),
                            on_open_app,
                        }
                    }
                }

                div {
                    style: "display: flex; align-items: center; gap: 0.5rem; padding: 0.75rem 1rem; background: var(--titlebar-bg, #111827); border-top: 1px solid var(--border-color, #334155);",
                    a {
                        class: "start-menu-entry",
                        style: "padding: 0.4rem 0.6rem; border-radius: var(--radius-md, 8px); color: var(--text-secondary, #94a3b8); text-decoration: none; font-size: 0.8rem;",
                        href: "https://github.com",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "GitHub"
                    }
                    a {
                        class: "start-menu-entry",
                        style: "padding: 0.4rem 0.6rem; border-radius: var(--radius-md, 8px); color: var(--text-secondary, #94a3b8); text-decoration: none; font-size: 0.8rem;",
                        href: "https://linkedin.com",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "LinkedIn"
                    }
                }
            }
        }
    }
}

#[component]
fn StartMenuEntry(app: AppDefinition, on_open_app: Callback<AppDefinition>) -> Element {
    let app_for_click = app.clone();

    rsx! {
        button {
            class: "start-menu-entry",
            style: "display: flex; flex-direction: column; align-items: center; gap: 0.35rem; padding: 0.9rem 0.5rem; background: transparent; border: none; border-radius: var(--radius-md, 8px); cursor: pointer;",
            onclick: move |_| on_open_app.call(app_for_click.clone()),

            span { style: "font-size: 1.5rem;", "{app.icon}" }
            span { style: "font-size: 0.85rem; font-weight: 500; color: var(--text-primary, white);", "{app.name}" }
            span { style: "font-size: 0.7rem; color: var(--text-muted, #64748b); text-align: center;", "{app.description}" }
        }
    }
}

#[component]
fn StartMenuSmallEntry(app: AppDefinition, on_open_app: Callback<AppDefinition>) -> Element {
    let app_for_click = app.clone();

    rsx! {
        button {
            class: "start-menu-entry",
            style: "display: flex; align-items: center; gap: 0.5rem; flex: 1; padding: 0.5rem 0.75rem; background: transparent; border: none; border-radius: var(--radius-md, 8px); cursor: pointer; color: var(--text-primary, white); font-size: 0.85rem;",
            onclick: move |_| on_open_app.call(app_for_click.clone()),

            span { "{app.icon}" }
            span { "{app.name}" }
        }
    }
}
