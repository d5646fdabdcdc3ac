use dioxus::prelude::*;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div {
            style: "height: 100%; overflow-y: auto; padding: 1.5rem; display: flex; flex-direction: column; gap: 1rem;",

            div {
                style: "display: flex; align-items: center; gap: 1rem;",
                div {
                    style: "width: 3.5rem; height: 3.5rem; display: flex; align-items: center; justify-content: center; background: var(--accent-bg, #3b82f6); border-radius: 50%; font-size: 1.75rem;",
                    "👤"
                }
                div {
                    h1 { style: "margin: 0; font-size: 1.4rem; color: var(--text-primary, white);", "About" }
                    p { style: "margin: 0; font-size: 0.85rem; color: var(--text-secondary, #94a3b8);", "Full Stack Developer" }
                }
            }

            p {
                style: "margin: 0; line-height: 1.7; color: var(--text-secondary, #94a3b8);",
                "Full stack developer passionate about automation, systems, and \
                 crafting digital experiences. This desktop is my portfolio: open \
                 the Portfolio app to browse projects, the Journal for writing, or \
                 the Shop for templates and tools. Built as a single-page desktop \
                 simulation, with every app in its own draggable window."
            }

            div {
                style: "display: flex; gap: 0.75rem;",
                a {
                    style: "padding: 0.5rem 1.25rem; background: var(--hover-bg, rgba(255,255,255,0.1)); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); text-decoration: none; font-weight: 600; font-size: 0.85rem;",
                    href: "https://github.com",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "GitHub"
                }
                a {
                    style: "padding: 0.5rem 1.25rem; background: var(--hover-bg, rgba(255,255,255,0.1)); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); text-decoration: none; font-weight: 600; font-size: 0.85rem;",
                    href: "https://linkedin.com",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "LinkedIn"
                }
            }
        }
    }
}
