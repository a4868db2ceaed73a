use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AlertLevel {
    Error,
    Success,
}

/// Dismissible inline alert. Every failed or completed user action
/// surfaces through one of these; there is no global error boundary.
#[component]
pub fn Alert(level: AlertLevel, message: String, on_dismiss: EventHandler<()>) -> Element {
    let class = match level {
        AlertLevel::Error => "alert alert--error",
        AlertLevel::Success => "alert alert--success",
    };

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            span { class: "alert-message", "{message}" }
            button {
                class: "alert-dismiss",
                onclick: move |_| on_dismiss.call(()),
                "\u{00d7}"
            }
        }
    }
}
