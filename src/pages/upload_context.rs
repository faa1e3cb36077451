//! Context manager page: list, upload, and delete contexts.
//!
//! SYSTEM CONTEXT
//! ==============
//! A context is the document/text bundle grounding automated replies. The
//! upload form accepts files, pasted text, or both; at least one source and
//! a name are required before the multipart request fires. The list reloads
//! after every successful mutation.

#[cfg(test)]
#[path = "upload_context_test.rs"]
mod upload_context_test;

use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::guards::RequireAuth;
use crate::net::types::ContextItem;
use crate::state::toast::ToastState;

/// Page size for the context list; the app shows a single page today.
#[cfg(any(test, feature = "hydrate"))]
const LIST_LIMIT: u32 = 50;

/// A submission needs a name and at least one source (files or text).
fn upload_ready(name: &str, file_count: usize, text: &str) -> bool {
    !name.trim().is_empty() && (file_count > 0 || !text.trim().is_empty())
}

/// Human-readable source summary for a list row.
fn source_summary(item: &ContextItem) -> String {
    match (item.file_count, item.text_length) {
        (Some(files), Some(chars)) if files > 0 && chars > 0 => {
            format!("{files} file(s) + {chars} chars")
        }
        (Some(files), _) if files > 0 => format!("{files} file(s)"),
        (_, Some(chars)) if chars > 0 => format!("{chars} chars of text"),
        _ => "empty".to_owned(),
    }
}

fn load_contexts(
    contexts: RwSignal<Vec<ContextItem>>,
    loading: RwSignal<bool>,
    toasts: RwSignal<ToastState>,
) {
    // A reload kicked off after navigating away finds the page's signals
    // disposed; every write goes through try_set so it degrades to a no-op.
    if loading.try_set(true).is_some() {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::context_api::list_contexts(1, LIST_LIMIT).await {
            Ok(resp) => {
                let _ = contexts.try_set(resp.contexts);
            }
            Err(e) => crate::state::toast::toast_error(toasts, e.message(), None),
        }
        let _ = loading.try_set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (contexts, toasts);
        let _ = loading.try_set(false);
    }
}

#[component]
pub fn UploadContextPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let contexts = RwSignal::new(Vec::<ContextItem>::new());
    let loading = RwSignal::new(true);

    let name = RwSignal::new(String::new());
    let text = RwSignal::new(String::new());
    let file_count = RwSignal::new(0usize);
    let file_input: NodeRef<Input> = NodeRef::new();
    let uploading = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<String>);

    // Fetch the list once on mount; reloads happen after mutations.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load_contexts(contexts, loading, toasts);
    });

    let on_files_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let count = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .map_or(0, |list| list.length());
            file_count.set(count as usize);
        }
    };

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if uploading.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        let text_value = text.get();
        if !upload_ready(&name_value, file_count.get(), &text_value) {
            crate::state::toast::toast_error(
                toasts,
                "Provide a context name and at least one file or some text",
                None,
            );
            return;
        }
        uploading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let mut files = Vec::new();
            if let Some(input) = file_input.get_untracked() {
                if let Some(list) = input.files() {
                    for i in 0..list.length() {
                        if let Some(file) = list.get(i) {
                            files.push(file);
                        }
                    }
                }
            }
            leptos::task::spawn_local(async move {
                let trimmed = text_value.trim().to_owned();
                let text_opt = (!trimmed.is_empty()).then_some(trimmed);
                match crate::net::context_api::upload_context(
                    &name_value,
                    &files,
                    text_opt.as_deref(),
                )
                .await
                {
                    Ok(resp) => {
                        crate::state::toast::toast_success(
                            toasts,
                            format!("Context \"{}\" uploaded", resp.context_name),
                        );
                        let _ = name.try_set(String::new());
                        let _ = text.try_set(String::new());
                        // try_set returning the value back means the page is
                        // gone; skip the NodeRef, its input went with it.
                        if file_count.try_set(0).is_none() {
                            if let Some(input) = file_input.get_untracked() {
                                input.set_value("");
                            }
                        }
                        load_contexts(contexts, loading, toasts);
                    }
                    Err(e) => {
                        crate::state::toast::toast_error(toasts, e.message(), None);
                    }
                }
                let _ = uploading.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, text_value);
            uploading.set(false);
        }
    };

    let on_delete_confirm = move |_| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::context_api::delete_context(&id).await {
                Ok(resp) => {
                    crate::state::toast::toast_success(toasts, resp.message);
                    load_contexts(contexts, loading, toasts);
                }
                Err(e) => {
                    crate::state::toast::toast_error(toasts, e.message(), None);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <RequireAuth>
            <div class="context-page">
                <header class="context-page__header">
                    <A href="/dashboard" attr:class="context-page__back">
                        "< Dashboard"
                    </A>
                    <h1>"Contexts"</h1>
                </header>

                <form class="context-page__form" on:submit=on_upload>
                    <label class="context-page__label">
                        "Context Name"
                        <input
                            class="context-page__input"
                            type="text"
                            placeholder="e.g. Product docs"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="context-page__label">
                        "Documents"
                        <input
                            class="context-page__input"
                            type="file"
                            multiple
                            node_ref=file_input
                            on:change=on_files_change
                        />
                    </label>
                    <Show when=move || (file_count.get() > 0)>
                        <p class="context-page__file-count">
                            {move || format!("{} file(s) selected", file_count.get())}
                        </p>
                    </Show>
                    <label class="context-page__label">
                        "Or paste text"
                        <textarea
                            class="context-page__textarea"
                            placeholder="Paste FAQ answers, policy text, anything your replies should know."
                            prop:value=move || text.get()
                            on:input=move |ev| text.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || uploading.get()>
                        {move || if uploading.get() { "Uploading..." } else { "Upload Context" }}
                    </button>
                </form>

                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p>"Loading contexts..."</p> }
                >
                    <ul class="context-page__list">
                        {move || {
                            contexts
                                .get()
                                .into_iter()
                                .map(|item| {
                                    let summary = source_summary(&item);
                                    let id = item.id.clone();
                                    view! {
                                        <li class="context-page__item">
                                            <span class="context-page__name">{item.context_name}</span>
                                            <span class="context-page__status">{item.status}</span>
                                            <span class="context-page__summary">{summary}</span>
                                            <span class="context-page__created">{item.created_at}</span>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| pending_delete.set(Some(id.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>

                <Show when=move || pending_delete.get().is_some()>
                    <div class="dialog-backdrop" on:click=move |_| pending_delete.set(None)>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h2>"Delete Context"</h2>
                            <p class="dialog__danger">
                                "Automated replies will stop using this context immediately."
                            </p>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| pending_delete.set(None)>
                                    "Cancel"
                                </button>
                                <button class="btn btn--danger" on:click=on_delete_confirm>
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </RequireAuth>
    }
}
