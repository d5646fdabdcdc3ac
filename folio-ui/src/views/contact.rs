//! Contact form: posts a message to the API. Name, email and message are
//! required by the server; validation here just avoids a guaranteed 400.

use dioxus::prelude::*;
use shared_types::NewContactMessage;

use crate::api;

#[derive(Debug, Clone, PartialEq, Default)]
enum SubmitState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Required fields present and the email looks like one.
pub fn is_valid_submission(name: &str, email: &str, message: &str) -> bool {
    !name.trim().is_empty()
        && email.contains('@')
        && !email.trim().is_empty()
        && !message.trim().is_empty()
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn ContactView() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submit_state = use_signal(SubmitState::default);

    let submit = use_callback(move |_: ()| {
        if submit_state() == SubmitState::Sending {
            return;
        }

        if !is_valid_submission(&name(), &email(), &message()) {
            submit_state.set(SubmitState::Failed(
                "Please fill in your name, a valid email, and a message.".to_string(),
            ));
            return;
        }

        let payload = NewContactMessage {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            subject: none_if_empty(&subject()),
            company: none_if_empty(&company()),
            message: message().trim().to_string(),
        };

        submit_state.set(SubmitState::Sending);
        spawn(async move {
            match api::send_contact_message(&payload).await {
                Ok(_) => {
                    submit_state.set(SubmitState::Sent);
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    company.set(String::new());
                    message.set(String::new());
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to send contact message: {}", e);
                    submit_state.set(SubmitState::Failed(e));
                }
            }
        });
    });

    let sending = submit_state() == SubmitState::Sending;
    let input_style = "width: 100%; padding: 0.55rem 0.75rem; background: var(--input-bg, #1f2937); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); outline: none; font-size: 0.9rem;";

    rsx! {
        div {
            style: "height: 100%; overflow-y: auto; padding: 1.5rem; display: flex; flex-direction: column; gap: 0.9rem;",

            div {
                h1 { style: "margin: 0 0 0.25rem 0; font-size: 1.4rem; color: var(--text-primary, white);", "Contact Me" }
                p { style: "margin: 0; font-size: 0.85rem; color: var(--text-secondary, #94a3b8);", "Let's connect! Send me a message and I'll get back to you." }
            }

            match submit_state() {
                SubmitState::Sent => rsx! {
                    div {
                        style: "padding: 0.6rem 0.9rem; background: var(--hover-bg, rgba(255,255,255,0.06)); border: 1px solid var(--success-bg, #10b981); border-radius: var(--radius-md, 8px); font-size: 0.85rem; color: var(--success-bg, #10b981);",
                        "Message sent. Thanks for reaching out!"
                    }
                },
                SubmitState::Failed(reason) => rsx! {
                    div {
                        style: "padding: 0.6rem 0.9rem; background: var(--hover-bg, rgba(255,255,255,0.06)); border: 1px solid var(--danger-bg, #ef4444); border-radius: var(--radius-md, 8px); font-size: 0.85rem; color: var(--danger-text, #ef4444);",
                        "{reason}"
                    }
                },
                _ => rsx! {},
            }

            div {
                style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.75rem;",
                input {
                    style: "{input_style}",
                    placeholder: "Name *",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                input {
                    style: "{input_style}",
                    r#type: "email",
                    placeholder: "Email *",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
            }

            input {
                style: "{input_style}",
                placeholder: "Subject",
                value: "{subject}",
                oninput: move |e| subject.set(e.value()),
            }

            input {
                style: "{input_style}",
                placeholder: "Company",
                value: "{company}",
                oninput: move |e| company.set(e.value()),
            }

            textarea {
                style: "{input_style} min-height: 9rem; resize: vertical; font-family: inherit;",
                placeholder: "Your message *",
                value: "{message}",
                oninput: move |e| message.set(e.value()),
            }

            button {
                style: if sending {
                    "align-self: flex-start; padding: 0.6rem 2rem; background: var(--accent-bg, #3b82f6); color: var(--accent-text, white); border: none; border-radius: var(--radius-md, 8px); font-weight: 600; cursor: wait; opacity: 0.7;"
                } else {
                    "align-self: flex-start; padding: 0.6rem 2rem; background: var(--accent-bg, #3b82f6); color: var(--accent-text, white); border: none; border-radius: var(--radius-md, 8px); font-weight: 600; cursor: pointer;"
                },
                disabled: sending,
                onclick: move |_| submit.call(()),
                if sending { "Sending..." } else { "Send Message" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_name_email_and_message() {
        assert!(is_valid_submission("Ada", "ada@example.com", "Hello"));
        assert!(!is_valid_submission("", "ada@example.com", "Hello"));
        assert!(!is_valid_submission("Ada", "", "Hello"));
        assert!(!is_valid_submission("Ada", "not-an-email", "Hello"));
        assert!(!is_valid_submission("Ada", "ada@example.com", "   "));
    }

    #[test]
    fn optional_fields_drop_to_none_when_blank() {
        assert_eq!(none_if_empty("  "), None);
        assert_eq!(none_if_empty(" Acme "), Some("Acme".to_string()));
    }
}
