use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    pub fn class_name(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }
}

/// Transient message with a severity class. Renders nothing for an empty
/// message. No producer feeds this yet; the form and the listing log to the
/// console instead.
#[component]
pub fn Notification(#[prop(into)] message: String, kind: NotificationKind) -> impl IntoView {
    let has_message = !message.is_empty();
    view! {
        <Show when=move || has_message>
            <div class=format!("notification {}", kind.class_name())>
                {message.clone()}
            </div>
        </Show>
    }
}
