//! Integration picker modal launched from the landing page hero.

use leptos::prelude::*;

/// Supported support-channel integrations shown in the modal.
const INTEGRATIONS: &[(&str, &str, &str)] = &[
    (
        "Gmail",
        "Connect your Gmail account to start automating email support",
        "/register",
    ),
    (
        "Slack",
        "Add Replexify bot to your Slack workspace",
        "https://app.replixy.com/connect/slack",
    ),
    (
        "Intercom",
        "Integrate with your Intercom helpdesk",
        "https://app.replixy.com/connect/intercom",
    ),
    (
        "Zendesk",
        "Connect your Zendesk support system",
        "https://app.replixy.com/connect/zendesk",
    ),
    (
        "Discord",
        "Add Replexify bot to your Discord server",
        "https://app.replixy.com/connect/discord",
    ),
];

#[component]
pub fn InstallModal(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| open.set(false)>
                <div class="dialog install-modal" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Connect a support channel"</h2>
                    <ul class="install-modal__list">
                        {INTEGRATIONS
                            .iter()
                            .map(|(name, blurb, href)| {
                                view! {
                                    <li class="install-modal__item">
                                        <a class="install-modal__link" href=*href>
                                            <span class="install-modal__name">{*name}</span>
                                            <span class="install-modal__blurb">{*blurb}</span>
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| open.set(false)>
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
