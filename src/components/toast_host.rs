//! Renders the shared toast queue as a stacked overlay.

use leptos::prelude::*;

use crate::state::toast::{ToastLevel, ToastState};

fn level_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "toast--success",
        ToastLevel::Error => "toast--error",
        ToastLevel::Info => "toast--info",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=format!("toast {}", level_class(toast.level))>
                                <p class="toast__message">{toast.message}</p>
                                {toast
                                    .description
                                    .map(|d| view! { <p class="toast__description">{d}</p> })}
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
