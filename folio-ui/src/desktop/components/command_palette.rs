use dioxus::prelude::*;
use shared_types::AppDefinition;

/// Case-insensitive match against an app's name, description and keywords.
pub fn filter_apps(apps: &[AppDefinition], query: &str) -> Vec<AppDefinition> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return apps.to_vec();
    }

    apps.iter()
        .filter(|app| {
            app.name.to_lowercase().contains(&query)
                || app.description.to_lowercase().contains(&query)
                || app
                    .keywords
                    .iter()
                    .any(|keyword| keyword.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

#[component]
pub fn CommandPalette(
    apps: Vec<AppDefinition>,
    on_close: Callback<()>,
    on_open_app: Callback<AppDefinition>,
) -> Element {
    let mut query = use_signal(String::new);
    let mut selected_index = use_signal(|| 0usize);

    let results = filter_apps(&apps, &query());
    let result_count = results.len();
    let selected = selected_index().min(result_count.saturating_sub(1));

    let results_for_keys = results.clone();
    let on_input_keydown = move |e: KeyboardEvent| match e.key() {
        Key::ArrowDown => {
            e.prevent_default();
            if result_count > 0 {
                selected_index.set(if selected < result_count - 1 {
                    selected + 1
                } else {
                    0
                });
            }
        }
        Key::ArrowUp => {
            e.prevent_default();
            if result_count > 0 {
                selected_index.set(if selected > 0 {
                    selected - 1
                } else {
                    result_count - 1
                });
            }
        }
        Key::Enter => {
            e.prevent_default();
            if let Some(app) = results_for_keys.get(selected) {
                on_open_app.call(app.clone());
                on_close.call(());
            }
        }
        Key::Escape => {
            on_close.call(());
        }
        _ => {}
    };

    rsx! {
        div {
            class: "palette-backdrop",
            style: "position: fixed; inset: 0; background: var(--overlay-bg, rgba(0,0,0,0.5)); z-index: 70; display: flex; align-items: flex-start; justify-content: center; padding-top: 8rem;",
            onclick: move |_| on_close.call(()),

            div {
                class: "command-palette",
                style: "width: 100%; max-width: 40rem; margin: 0 1rem; background: var(--panel-bg, #0b1220); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-lg, 12px); box-shadow: var(--shadow-lg, 0 10px 40px rgba(0,0,0,0.5)); overflow: hidden;",
                onclick: move |e| e.stop_propagation(),

                div {
                    style: "display: flex; align-items: center; gap: 0.75rem; padding: 1rem; border-bottom: 1px solid var(--border-color, #334155);",
                    span { style: "color: var(--text-muted, #64748b);", "🔍" }
                    input {
                        class: "palette-input",
                        style: "flex: 1; background: transparent; border: none; outline: none; color: var(--text-primary, white); font-size: 1.1rem;",
                        placeholder: "Search for apps, projects, or anything...",
                        autofocus: true,
                        value: "{query}",
                        oninput: move |e| {
                            query.set(e.value());
                            selected_index.set(0);
                        },
                        onkeydown: on_input_keydown,
                    }
                    span {
                        style: "display: flex; align-items: center; gap: 0.25rem; font-size: 0.75rem; color: var(--text-muted, #64748b);",
                        kbd { "↑↓" }
                        "navigate"
                        kbd { "↵" }
                        "select"
                    }
                }

                div {
                    style: "max-height: 24rem; overflow-y: auto;",

                    if results.is_empty() {
                        div {
                            style: "display: flex; flex-direction: column; align-items: center; padding: 3rem 1rem; color: var(--text-muted, #64748b);",
                            p { style: "margin: 0; font-size: 1.1rem;", "No results found" }
                            p { style: "margin: 0.25rem 0 0 0; font-size: 0.85rem;", "Try searching for something else" }
                        }
                    }

                    for (index, app) in results.iter().enumerate() {
                        PaletteResult {
                            key: "{app.id}",
                            app: app.clone(),
                            highlighted: index == selected,
                            on_open_app,
                            on_close,
                        }
                    }
                }

                div {
                    style: "display: flex; align-items: center; justify-content: space-between; padding: 0.6rem 1rem; background: var(--titlebar-bg, #111827); border-top: 1px solid var(--border-color, #334155); font-size: 0.75rem; color: var(--text-muted, #64748b);",
                    span { "Command Palette · {result_count} results" }
                    span {
                        style: "display: flex; align-items: center; gap: 0.25rem;",
                        kbd { "Esc" }
                        "to close"
                    }
                }
            }
        }
    }
}

#[component]
fn PaletteResult(
    app: AppDefinition,
    highlighted: bool,
    on_open_app: Callback<AppDefinition>,
    on_close: Callback<()>,
) -> Element {
    let app_for_click = app.clone();
    let row_style = if highlighted {
        "display: flex; align-items: center; gap: 0.75rem; width: 100%; padding: 0.75rem 1rem; background: var(--hover-bg, rgba(255,255,255,0.1)); border: none; border-left: 2px solid var(--accent-bg, #3b82f6); cursor: pointer; text-align: left;"
    } else {
        "display: flex; align-items: center; gap: 0.75rem; width: 100%; padding: 0.75rem 1rem; background: transparent; border: none; border-left: 2px solid transparent; cursor: pointer; text-align: left;"
    };

    rsx! {
        button {
            class: "palette-result",
            style: "{row_style}",
            onclick: move |_| {
                on_open_app.call(app_for_click.clone());
                on_close.call(());
            },

            span { style: "font-size: 1.25rem;", "{app.icon}" }
            div {
                style: "flex: 1; min-width: 0;",
                div { style: "font-weight: 500; color: var(--text-primary, white);", "{app.name}" }
                div { style: "font-size: 0.8rem; color: var(--text-secondary, #94a3b8);", "{app.description}" }
            }
            span { style: "color: var(--text-muted, #64748b);", "→" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppCategory;

    fn app(name: &str, description: &str, keywords: &[&str]) -> AppDefinition {
        AppDefinition {
            id: name.to_lowercase(),
            name: name.to_string(),
            icon: "📱".to_string(),
            description: description.to_string(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            category: AppCategory::Main,
            default_width: 800,
            default_height: 600,
        }
    }

    fn sample() -> Vec<AppDefinition> {
        vec![
            app("Portfolio", "View my projects and work", &["projects", "showcase"]),
            app("Shop", "Digital products and templates", &["store", "buy"]),
            app("Journal", "Blog posts and articles", &["blog", "writing"]),
        ]
    }

    #[test]
    fn empty_query_returns_everything() {
        let apps = sample();
        assert_eq!(filter_apps(&apps, ""), apps);
        assert_eq!(filter_apps(&apps, "   "), apps);
    }

    #[test]
    fn matches_name_description_and_keywords_case_insensitively() {
        let apps = sample();

        let by_name = filter_apps(&apps, "SHOP");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Shop");

        let by_description = filter_apps(&apps, "articles");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "Journal");

        let by_keyword = filter_apps(&apps, "showcase");
        assert_eq!(by_keyword.len(), 1);
        assert_eq!(by_keyword[0].name, "Portfolio");
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_apps(&sample(), "terminal").is_empty());
    }
}
