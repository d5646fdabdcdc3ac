use dioxus::prelude::*;

#[component]
pub fn LoadingState(label: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100%; gap: 1rem; color: var(--text-muted, #6b7280);",
            div {
                style: "width: 32px; height: 32px; border: 3px solid var(--accent-bg, #3b82f6); border-top-color: transparent; border-radius: 50%; animation: spin 0.8s linear infinite;",
            }
            "{label}"
        }
    }
}

/// Inline failure panel with a manual retry that re-issues the same fetch.
#[component]
pub fn ErrorState(error: String, on_retry: Callback<()>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100%; gap: 1rem; padding: 2rem; text-align: center;",
            p {
                style: "margin: 0; font-weight: 500; color: var(--danger-text, #ef4444);",
                "{error}"
            }
            button {
                style: "padding: 0.5rem 1.5rem; background: var(--accent-bg, #3b82f6); color: var(--accent-text, white); border: none; border-radius: var(--radius-md, 8px); font-weight: 600; cursor: pointer;",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}
