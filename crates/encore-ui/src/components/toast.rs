//! Toast stack rendering.
//!
//! The queue itself lives in `encore_core::ToastQueue`; this only draws it
//! and asks the owner to dismiss entries.

use std::time::Duration;

use dioxus::prelude::*;
use encore_core::Toast;

/// How long a toast stays up without interaction.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Clone, PartialEq, Props)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: EventHandler<u64>,
}

/// Fixed-position stack of toasts, newest on top
#[component]
pub fn ToastStack(props: ToastStackProps) -> Element {
    rsx! {
        div { class: "toast-stack", role: "region", "aria-live": "polite",
            for toast in props.toasts.iter() {
                ToastItem {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    on_dismiss: props.on_dismiss,
                }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let id = toast.id;

    use_hook(move || {
        spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            on_dismiss.call(id);
        })
    });

    rsx! {
        div {
            class: toast.variant.class(),
            role: "status",
            onclick: move |_| on_dismiss.call(id),
            div { class: "toast__title", "{toast.title}" }
            if !toast.description.is_empty() {
                div { class: "toast__description", "{toast.description}" }
            }
        }
    }
}
