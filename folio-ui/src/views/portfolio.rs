//! Portfolio gallery: fetched projects with client-side search, category
//! filter and sorting. The displayed list is a pure function of the source
//! collection and the filters; see `visible_projects`.

use chrono::Datelike;
use dioxus::prelude::*;
use shared_types::Project;

use crate::api::{self, ListQuery};
use crate::views::status::{ErrorState, LoadingState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectSort {
    #[default]
    Newest,
    Oldest,
    Name,
    FeaturedFirst,
}

impl ProjectSort {
    pub fn from_key(key: &str) -> Self {
        match key {
            "oldest" => Self::Oldest,
            "name" => Self::Name,
            "featured" => Self::FeaturedFirst,
            _ => Self::Newest,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Name => "name",
            Self::FeaturedFirst => "featured",
        }
    }
}

/// `"all"` plus the distinct categories in source order.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut out = vec!["all".to_string()];
    for project in projects {
        if !out.contains(&project.category) {
            out.push(project.category.clone());
        }
    }
    out
}

/// Filter then sort. Sorting is stable, so "featured first" preserves the
/// source order within the featured and non-featured partitions.
pub fn visible_projects(
    projects: &[Project],
    category: &str,
    query: &str,
    sort: ProjectSort,
) -> Vec<Project> {
    let query = query.trim().to_lowercase();

    let mut filtered: Vec<Project> = projects
        .iter()
        .filter(|p| category == "all" || p.category == category)
        .filter(|p| {
            query.is_empty()
                || p.title.to_lowercase().contains(&query)
                || p.description.to_lowercase().contains(&query)
                || p.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        })
        .cloned()
        .collect();

    match sort {
        ProjectSort::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        ProjectSort::Oldest => filtered.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        ProjectSort::Name => {
            filtered.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        ProjectSort::FeaturedFirst => filtered.sort_by_key(|p| !p.featured),
    }

    filtered
}

async fn load_projects(
    mut projects: Signal<Vec<Project>>,
    mut loading: Signal<bool>,
    mut error: Signal<Option<String>>,
) {
    loading.set(true);

    match api::fetch_projects(&ListQuery::default()).await {
        Ok(list) => {
            projects.set(list);
            error.set(None);
        }
        Err(e) => {
            // Keep whatever collection we already had.
            error.set(Some(e));
        }
    }

    loading.set(false);
}

#[component]
pub fn PortfolioView() -> Element {
    let projects = use_signal(Vec::<Project>::new);
    let loading = use_signal(|| true);
    let error = use_signal(|| None::<String>);
    let mut search = use_signal(String::new);
    let mut category = use_signal(|| "all".to_string());
    let mut sort = use_signal(ProjectSort::default);
    let mut selected = use_signal(|| None::<Project>);

    let reload = use_callback(move |_: ()| {
        spawn(async move {
            load_projects(projects, loading, error).await;
        });
    });

    use_effect(move || {
        reload.call(());
    });

    let source = projects.read().clone();
    let visible = visible_projects(&source, &category(), &search(), sort());
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
    let project_count = source.len();

    let select_project = use_callback(move |project: Project| {
        selected.set(Some(project));
    });

    let close_modal = use_callback(move |_: ()| {
        selected.set(None);
    });

    rsx! {
        div {
            style: "height: 100%; display: flex; flex-direction: column;",

            div {
                style: "padding: 1.25rem 1.5rem; border-bottom: 1px solid var(--border-color, #334155);",
                div {
                    style: "display: flex; align-items: baseline; justify-content: space-between; margin-bottom: 1rem;",
                    div {
                        h1 { style: "margin: 0 0 0.25rem 0; font-size: 1.4rem; color: var(--text-primary, white);", "Portfolio" }
                        p { style: "margin: 0; font-size: 0.85rem; color: var(--text-secondary, #94a3b8);", "Selected projects and experiments" }
                    }
                    span { style: "font-size: 0.85rem; color: var(--text-muted, #64748b);", "{project_count} projects" }
                }

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 0.75rem;",
                    input {
                        style: "flex: 1; min-width: 12rem; padding: 0.5rem 0.75rem; background: var(--input-bg, #1f2937); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); outline: none;",
                        placeholder: "Search projects...",
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
                    select {
                        style: "padding: 0.5rem 0.75rem; background: var(--input-bg, #1f2937); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px);",
                        onchange: move |e| sort.set(ProjectSort::from_key(&e.value())),
                        option { value: "newest", selected: sort() == ProjectSort::Newest, "Newest" }
                        option { value: "oldest", selected: sort() == ProjectSort::Oldest, "Oldest" }
                        option { value: "name", selected: sort() == ProjectSort::Name, "Name" }
                        option { value: "featured", selected: sort() == ProjectSort::FeaturedFirst, "Featured" }
                    }
                }
            }

            div {
                style: "flex: 1; overflow-y: auto; padding: 1.5rem;",

                if loading() && project_count == 0 {
                    LoadingState { label: "Loading projects...".to_string() }
                } else if let Some(err) = error.read().clone() {
                    ErrorState { error: "Error loading projects: {err}", on_retry: reload }
                } else if visible.is_empty() {
                    div {
                        style: "text-align: center; padding: 3rem 1rem; color: var(--text-muted, #64748b);",
                        p { style: "margin: 0; font-size: 1.1rem;", "No projects found" }
                        p { style: "margin: 0.25rem 0 0 0; font-size: 0.85rem;", "Try adjusting your search or filters" }
                    }
                } else {
                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem;",
                        for project in visible.iter() {
                            ProjectCard {
                                key: "{project.id}",
                                project: project.clone(),
                                on_select: select_project,
                            }
                        }
                    }
                }
            }

            if let Some(project) = selected() {
                ProjectModal {
                    project,
                    on_close: close_modal,
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, on_select: Callback<Project>) -> Element {
    let project_for_click = project.clone();
    let year = project
        .created_at
        .map(|d| d.year().to_string())
        .unwrap_or_default();
    let status_label = project.status.replace('_', " ");
    let summary = project
        .short_description
        .clone()
        .unwrap_or_else(|| project.description.clone());
    let extra_tags = project.tags.len().saturating_sub(3);

    rsx! {
        div {
            class: "app-card",
            style: "display: flex; flex-direction: column; gap: 0.6rem; padding: 1rem; background: var(--window-bg, #1f2937); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-lg, 12px); cursor: pointer;",
            onclick: move |_| on_select.call(project_for_click.clone()),

            div {
                style: "display: flex; align-items: flex-start; justify-content: space-between; gap: 0.5rem;",
                h3 { style: "margin: 0; font-size: 1rem; color: var(--text-primary, white);", "{project.title}" }
                span {
                    style: "flex-shrink: 0; padding: 0.15rem 0.5rem; background: var(--hover-bg, rgba(255,255,255,0.1)); border-radius: 999px; font-size: 0.7rem; color: var(--text-secondary, #94a3b8);",
                    "{status_label}"
                }
            }

            if project.featured {
                span {
                    style: "align-self: flex-start; padding: 0.15rem 0.5rem; background: var(--warning-bg, #f59e0b); color: #111827; border-radius: var(--radius-sm, 4px); font-size: 0.7rem; font-weight: 700;",
                    "★ FEATURED"
                }
            }

            p {
                style: "margin: 0; font-size: 0.85rem; color: var(--text-secondary, #94a3b8);",
                "{summary}"
            }

            if !project.tags.is_empty() {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 0.35rem;",
                    for tag in project.tags.iter().take(3) {
                        span {
                            style: "padding: 0.15rem 0.5rem; background: var(--hover-bg, rgba(255,255,255,0.1)); border-radius: 999px; font-size: 0.7rem; color: var(--text-secondary, #94a3b8);",
                            "{tag}"
                        }
                    }
                    if extra_tags > 0 {
                        span {
                            style: "padding: 0.15rem 0.5rem; border-radius: 999px; font-size: 0.7rem; color: var(--text-muted, #64748b);",
                            "+{extra_tags} more"
                        }
                    }
                }
            }

            div {
                style: "display: flex; align-items: center; gap: 1rem; margin-top: auto; font-size: 0.75rem; color: var(--text-muted, #64748b);",
                if !year.is_empty() {
                    span { "📅 {year}" }
                }
                if !project.tech_stack.is_empty() {
                    span { "🧩 {project.tech_stack.len()} technologies" }
                }
            }
        }
    }
}

#[component]
fn ProjectModal(project: Project, on_close: Callback<()>) -> Element {
    rsx! {
        div {
            style: "position: fixed; inset: 0; background: var(--overlay-bg, rgba(0,0,0,0.5)); z-index: 80; display: flex; align-items: center; justify-content: center; padding: 1.5rem;",
            onclick: move |_| on_close.call(()),

            div {
                style: "width: 100%; max-width: 42rem; max-height: 90vh; overflow-y: auto; background: var(--panel-bg, #0b1220); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-lg, 12px); padding: 1.5rem;",
                onclick: move |e| e.stop_propagation(),

                div {
                    style: "display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 0.75rem;",
                    div {
                        h2 { style: "margin: 0 0 0.25rem 0; color: var(--text-primary, white);", "{project.title}" }
                        p { style: "margin: 0; font-size: 0.85rem; color: var(--text-muted, #64748b);", "{project.category}" }
                    }
                    button {
                        style: "padding: 0.25rem 0.6rem; background: var(--hover-bg, rgba(255,255,255,0.1)); color: var(--text-secondary, #94a3b8); border: none; border-radius: var(--radius-md, 8px); cursor: pointer; font-size: 1rem;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                p {
                    style: "margin: 0 0 1rem 0; line-height: 1.6; color: var(--text-secondary, #94a3b8);",
                    "{project.description}"
                }

                if !project.tech_stack.is_empty() {
                    h4 { style: "margin: 0 0 0.5rem 0; color: var(--text-primary, white);", "Tech Stack" }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 0.4rem; margin-bottom: 1rem;",
                        for tech in project.tech_stack.iter() {
                            span {
                                style: "padding: 0.2rem 0.6rem; background: var(--hover-bg, rgba(255,255,255,0.1)); border-radius: 999px; font-size: 0.75rem; color: var(--text-secondary, #94a3b8);",
                                "{tech}"
                            }
                        }
                    }
                }

                div {
                    style: "display: flex; gap: 0.75rem;",
                    if let Some(demo_url) = project.demo_url.clone() {
                        a {
                            style: "padding: 0.5rem 1.25rem; background: var(--accent-bg, #3b82f6); color: var(--accent-text, white); border-radius: var(--radius-md, 8px); text-decoration: none; font-weight: 600; font-size: 0.85rem;",
                            href: "{demo_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Live Demo"
                        }
                    }
                    if let Some(github_url) = project.github_url.clone() {
                        a {
                            style: "padding: 0.5rem 1.25rem; background: var(--hover-bg, rgba(255,255,255,0.1)); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); text-decoration: none; font-weight: 600; font-size: 0.85rem;",
                            href: "{github_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Source"
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

    fn project(id: i64, title: &str, category: &str, featured: bool, day: u32) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            short_description: None,
            category: category.to_string(),
            tags: vec!["rust".to_string()],
            tech_stack: Vec::new(),
            image_url: None,
            demo_url: None,
            github_url: None,
            featured,
            status: "completed".to_string(),
            created_at: NaiveDate::from_ymd_opt(2025, 6, day)
                .and_then(|d| d.and_hms_opt(12, 0, 0)),
            updated_at: None,
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project(1, "Alpha", "web", false, 1),
            project(2, "Beta", "cli", true, 2),
            project(3, "Gamma", "web", true, 3),
            project(4, "Delta", "cli", false, 4),
        ]
    }

    #[test]
    fn clearing_search_restores_category_filtered_set() {
        let projects = sample();

        let with_search = visible_projects(&projects, "web", "alpha", ProjectSort::Newest);
        assert_eq!(with_search.len(), 1);

        let cleared = visible_projects(&projects, "web", "", ProjectSort::Newest);
        let category_only = visible_projects(&projects, "web", "", ProjectSort::Newest);
        assert_eq!(cleared, category_only);
        assert_eq!(cleared.len(), 2);
    }

    #[test]
    fn search_and_category_commute() {
        let projects = sample();

        // Apply filters in both orders by narrowing the source first.
        let category_first: Vec<Project> = visible_projects(
            &visible_projects(&projects, "cli", "", ProjectSort::Newest),
            "all",
            "beta",
            ProjectSort::Newest,
        );
        let search_first: Vec<Project> = visible_projects(
            &visible_projects(&projects, "all", "beta", ProjectSort::Newest),
            "cli",
            "",
            ProjectSort::Newest,
        );
        assert_eq!(category_first, search_first);
    }

    #[test]
    fn featured_first_is_a_stable_partition() {
        let projects = sample();
        let sorted = visible_projects(&projects, "all", "", ProjectSort::FeaturedFirst);

        let titles: Vec<&str> = sorted.iter().map(|p| p.title.as_str()).collect();
        // Featured keep source order (Beta before Gamma), then the rest
        // (Alpha before Delta).
        assert_eq!(titles, vec!["Beta", "Gamma", "Alpha", "Delta"]);
    }

    #[test]
    fn newest_and_oldest_order_by_created_at() {
        let projects = sample();

        let newest = visible_projects(&projects, "all", "", ProjectSort::Newest);
        assert_eq!(newest[0].title, "Delta");
        assert_eq!(newest[3].title, "Alpha");

        let oldest = visible_projects(&projects, "all", "", ProjectSort::Oldest);
        assert_eq!(oldest[0].title, "Alpha");
    }

    #[test]
    fn name_sort_is_case_insensitive_lexicographic() {
        let mut projects = sample();
        projects[0].title = "alpha".to_string();
        let sorted = visible_projects(&projects, "all", "", ProjectSort::Name);
        assert_eq!(sorted[0].title, "alpha");
        assert_eq!(sorted[1].title, "Beta");
    }

    #[test]
    fn search_matches_tags() {
        let mut projects = sample();
        projects[2].tags = vec!["wasm".to_string()];
        let hits = visible_projects(&projects, "all", "WASM", ProjectSort::Newest);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Gamma");
    }

    #[test]
    fn categories_keep_source_order_after_all() {
        let projects = sample();
        assert_eq!(categories(&projects), vec!["all", "web", "cli"]);
    }

    #[test]
    fn sort_keys_round_trip() {
        for sort in [
            ProjectSort::Newest,
            ProjectSort::Oldest,
            ProjectSort::Name,
            ProjectSort::FeaturedFirst,
        ] {
            assert_eq!(ProjectSort::from_key(sort.key()), sort);
        }
        assert_eq!(ProjectSort::from_key("bogus"), ProjectSort::Newest);
    }
}
