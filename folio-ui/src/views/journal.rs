//! Journal: published blog posts with client-side search and category
//! filtering. Opening a card fetches the full post by slug, which also
//! bumps its server-side view counter.

use dioxus::prelude::*;
use shared_types::BlogPost;

use crate::api::{self, ListQuery};
use crate::views::status::{ErrorState, LoadingState};

/// `"all"` plus the distinct categories of published posts, in source order.
pub fn categories(posts: &[BlogPost]) -> Vec<String> {
    let mut out = vec!["all".to_string()];
    for post in posts.iter().filter(|p| p.published) {
        if !out.contains(&post.category) {
            out.push(post.category.clone());
        }
    }
    out
}

/// Published posts only, newest first (publication date, falling back to
/// creation date), filtered by category and search.
pub fn visible_posts(posts: &[BlogPost], category: &str, query: &str) -> Vec<BlogPost> {
    let query = query.trim().to_lowercase();

    let mut filtered: Vec<BlogPost> = posts
        .iter()
        .filter(|p| p.published)
        .filter(|p| category == "all" || p.category == category)
        .filter(|p| {
            query.is_empty()
                || p.title.to_lowercase().contains(&query)
                || p.excerpt
                    .as_deref()
                    .is_some_and(|excerpt| excerpt.to_lowercase().contains(&query))
                || p.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        })
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        let a_key = a.published_at.or(a.created_at);
        let b_key = b.published_at.or(b.created_at);
        b_key.cmp(&a_key)
    });

    filtered
}

async fn load_posts(
    mut posts: Signal<Vec<BlogPost>>,
    mut loading: Signal<bool>,
    mut error: Signal<Option<String>>,
) {
    loading.set(true);

    match api::fetch_posts(&ListQuery::default()).await {
        Ok(list) => {
            posts.set(list);
            error.set(None);
        }
        Err(e) => {
            error.set(Some(e));
        }
    }

    loading.set(false);
}

#[component]
pub fn JournalView() -> Element {
    let posts = use_signal(Vec::<BlogPost>::new);
    let loading = use_signal(|| true);
    let error = use_signal(|| None::<String>);
    let mut search = use_signal(String::new);
    let mut category = use_signal(|| "all".to_string());
    let mut selected = use_signal(|| None::<BlogPost>);
    let mut notice = use_signal(|| None::<String>);

    let reload = use_callback(move |_: ()| {
        spawn(async move {
            load_posts(posts, loading, error).await;
        });
    });

    use_effect(move || {
        reload.call(());
    });

    // Re-fetch by slug so the server counts the read and we get full content.
    let open_post = use_callback(move |slug: String| {
        let mut selected = selected;
        spawn(async move {
            match api::fetch_post_by_slug(&slug).await {
                Ok(post) => {
                    notice.set(None);
                    selected.set(Some(post));
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to load post {}: {}", slug, e);
                    notice.set(Some(format!("Could not open post: {e}")));
                }
            }
        });
    });

    let close_modal = use_callback(move |_: ()| {
        selected.set(None);
    });

    let source = posts.read().clone();
    let visible = visible_posts(&source, &category(), &search());
    let category_options: Vec<(String, String)> = categories(&source)
        .into_iter()
        .map(|c| {
            let label = if c == "all" {
                "All Categories".to_string()
            } else {
                c.clone()
            };
            (c, label)
        })
        .collect();
    let post_count = source.iter().filter(|p| p.published).count();

    rsx! {
        div {
            style: "height: 100%; display: flex; flex-direction: column;",

            div {
                style: "padding: 1.25rem 1.5rem; border-bottom: 1px solid var(--border-color, #334155);",
                div {
                    style: "display: flex; align-items: baseline; justify-content: space-between; margin-bottom: 1rem;",
                    div {
                        h1 { style: "margin: 0 0 0.25rem 0; font-size: 1.4rem; color: var(--text-primary, white);", "Developer Journal" }
                        p { style: "margin: 0; font-size: 0.85rem; color: var(--text-secondary, #94a3b8);", "Posts, tutorials, and notes" }
                    }
                    span { style: "font-size: 0.85rem; color: var(--text-muted, #64748b);", "{post_count} posts" }
                }

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 0.75rem;",
                    input {
                        style: "flex: 1; min-width: 12rem; padding: 0.5rem 0.75rem; background: var(--input-bg, #1f2937); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); outline: none;",
                        placeholder: "Search posts...",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                    }
                    select {
                        style: "padding: 0.5rem 0.75rem; background: var(--input-bg, #1f2937); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px);",
                        onchange: move |e| category.set(e.value()),
                        for (value, label) in category_options {
                            option {
                                value: "{value}",
                                selected: value == category(),
                                "{label}"
                            }
                        }
                    }
                }
            }

            if let Some(message) = notice.read().clone() {
                div {
                    style: "padding: 0.6rem 1.5rem; border-bottom: 1px solid var(--border-color, #334155); font-size: 0.85rem; color: var(--danger-text, #ef4444);",
                    "{message}"
                }
            }

            div {
                style: "flex: 1; overflow-y: auto; padding: 1.5rem;",

                if loading() && post_count == 0 {
                    LoadingState { label: "Loading posts...".to_string() }
                } else if let Some(err) = error.read().clone() {
                    ErrorState { error: "Error loading posts: {err}", on_retry: reload }
                } else if visible.is_empty() {
                    div {
                        style: "text-align: center; padding: 3rem 1rem; color: var(--text-muted, #64748b);",
                        p { style: "margin: 0; font-size: 1.1rem;", "No posts found" }
                        p { style: "margin: 0.25rem 0 0 0; font-size: 0.85rem;", "Try adjusting your search or filters" }
                    }
                } else {
                    div {
                        style: "display: flex; flex-direction: column; gap: 0.75rem;",
                        for post in visible.iter() {
                            PostCard {
                                key: "{post.id}",
                                post: post.clone(),
                                on_open: open_post,
                            }
                        }
                    }
                }
            }

            if let Some(post) = selected() {
                PostModal {
                    post,
                    on_close: close_modal,
                }
            }
        }
    }
}

#[component]
fn PostCard(post: BlogPost, on_open: Callback<String>) -> Element {
    let slug = post.slug.clone();
    let excerpt = post.excerpt.clone().unwrap_or_default();
    let reading_time = post
        .reading_time
        .map(|minutes| format!("{minutes} min read"))
        .unwrap_or_default();

    rsx! {
        div {
            class: "app-card",
            style: "display: flex; flex-direction: column; gap: 0.4rem; padding: 1rem; background: var(--window-bg, #1f2937); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-lg, 12px); cursor: pointer;",
            onclick: move |_| on_open.call(slug.clone()),

            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 0.5rem;",
                h3 { style: "margin: 0; font-size: 1rem; color: var(--text-primary, white);", "{post.title}" }
                span {
                    style: "flex-shrink: 0; padding: 0.15rem 0.5rem; background: var(--hover-bg, rgba(255,255,255,0.1)); border-radius: 999px; font-size: 0.7rem; color: var(--text-secondary, #94a3b8);",
                    "{post.category}"
                }
            }

            if !excerpt.is_empty() {
                p { style: "margin: 0; font-size: 0.85rem; color: var(--text-secondary, #94a3b8);", "{excerpt}" }
            }

            div {
                style: "display: flex; align-items: center; gap: 1rem; font-size: 0.75rem; color: var(--text-muted, #64748b);",
                if !reading_time.is_empty() {
                    span { "⏱ {reading_time}" }
                }
                span { "👁 {post.views} views" }
            }
        }
    }
}

#[component]
fn PostModal(post: BlogPost, on_close: Callback<()>) -> Element {
    let reading_time = post
        .reading_time
        .map(|minutes| format!("{minutes} min read"))
        .unwrap_or_default();

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: var(--overlay-bg, rgba(0,0,0,0.5)); z-index: 80; display: flex; align-items: center; justify-content: center; padding: 1.5rem;",
            onclick: move |_| on_close.call(()),

            div {
                style: "width: 100%; max-width: 44rem; max-height: 90vh; overflow-y: auto; background: var(--panel-bg, #0b1220); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-lg, 12px); padding: 1.5rem;",
                onclick: move |e| e.stop_propagation(),

                div {
                    style: "display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 0.5rem;",
                    h2 { style: "margin: 0; color: var(--text-primary, white);", "{post.title}" }
                    button {
                        style: "padding: 0.25rem 0.6rem; background: var(--hover-bg, rgba(255,255,255,0.1)); color: var(--text-secondary, #94a3b8); border: none; border-radius: var(--radius-md, 8px); cursor: pointer; font-size: 1rem;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div {
                    style: "display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; font-size: 0.8rem; color: var(--text-muted, #64748b);",
                    span { "{post.category}" }
                    if !reading_time.is_empty() {
                        span { "⏱ {reading_time}" }
                    }
                    span { "👁 {post.views} views" }
                }

                p {
                    style: "margin: 0 0 1rem 0; line-height: 1.7; color: var(--text-secondary, #94a3b8); white-space: pre-wrap;",
                    "{post.content}"
                }

                if !post.tags.is_empty() {
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 0.4rem;",
                        for tag in post.tags.iter() {
                            span {
                                style: "padding: 0.2rem 0.6rem; background: var(--hover-bg, rgba(255,255,255,0.1)); border-radius: 999px; font-size: 0.75rem; color: var(--text-secondary, #94a3b8);",
                                "{tag}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(id: i64, title: &str, category: &str, published: bool, day: u32) -> BlogPost {
        BlogPost {
            id,
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            content: format!("{title} content"),
            excerpt: Some(format!("{title} excerpt")),
            category: category.to_string(),
            tags: vec!["notes".to_string()],
            featured_image: None,
            published,
            featured: false,
            reading_time: Some(4),
            views: 10,
            created_at: NaiveDate::from_ymd_opt(2025, 3, day)
                .and_then(|d| d.and_hms_opt(8, 0, 0)),
            published_at: NaiveDate::from_ymd_opt(2025, 4, day)
                .and_then(|d| d.and_hms_opt(8, 0, 0)),
        }
    }

    fn sample() -> Vec<BlogPost> {
        vec![
            post(1, "First Post", "rust", true, 1),
            post(2, "Draft Post", "rust", false, 2),
            post(3, "Latest Post", "web", true, 3),
        ]
    }

    #[test]
    fn drafts_are_never_listed() {
        let shown = visible_posts(&sample(), "all", "");
        assert_eq!(shown.len(), 2);
        assert!(shown.iter().all(|p| p.published));
    }

    #[test]
    fn newest_published_first() {
        let shown = visible_posts(&sample(), "all", "");
        assert_eq!(shown[0].title, "Latest Post");
        assert_eq!(shown[1].title, "First Post");
    }

    #[test]
    fn falls_back_to_created_at_without_publication_date() {
        let mut posts = sample();
        posts[0].published_at = None;
        let shown = visible_posts(&posts, "all", "");
        // "First Post" now sorts by its (older) created_at and stays last.
        assert_eq!(shown.last().map(|p| p.title.clone()), Some("First Post".to_string()));
    }

    #[test]
    fn search_matches_title_excerpt_and_tags() {
        let shown = visible_posts(&sample(), "all", "latest");
        assert_eq!(shown.len(), 1);

        let by_excerpt = visible_posts(&sample(), "all", "first post excerpt");
        assert_eq!(by_excerpt.len(), 1);

        let by_tag = visible_posts(&sample(), "all", "notes");
        assert_eq!(by_tag.len(), 2);
    }

    #[test]
    fn category_filter_applies_to_published_only() {
        assert_eq!(categories(&sample()), vec!["all", "rust", "web"]);
        let shown = visible_posts(&sample(), "rust", "");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "First Post");
    }
}
