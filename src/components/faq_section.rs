//! FAQ accordion for the marketing landing page.

use leptos::prelude::*;

const FAQS: &[(&str, &str)] = &[
    (
        "How does Replexify maintain our brand voice?",
        "Upload your docs, past tickets, and style guide as a context; replies are grounded in your own material.",
    ),
    (
        "Is it free to get started?",
        "Yes — registration is free and no card is required until you connect a support channel.",
    ),
    (
        "Will customers know they're talking to AI?",
        "That's up to you. Replies can be sent automatically, or drafted for an agent to review and send.",
    ),
    (
        "How long does it take to set up?",
        "Most teams upload a context and connect their inbox in under fifteen minutes.",
    ),
    (
        "How does Replexify handle complex issues?",
        "Anything below the confidence threshold is escalated to a human with a summary attached.",
    ),
    (
        "What support channels does it work with?",
        "Gmail, Slack, Intercom, Zendesk, and Discord today; more integrations are on the way.",
    ),
];

#[component]
pub fn FaqSection() -> impl IntoView {
    // At most one entry expanded at a time.
    let open_index = RwSignal::new(None::<usize>);

    view! {
        <section class="faq" id="faq">
            <h2 class="faq__title">"Frequently asked questions"</h2>
            <div class="faq__list">
                {FAQS
                    .iter()
                    .enumerate()
                    .map(|(i, (question, answer))| {
                        view! {
                            <div class="faq__item">
                                <button
                                    class="faq__question"
                                    on:click=move |_| {
                                        open_index
                                            .update(|open| {
                                                *open = if *open == Some(i) { None } else { Some(i) };
                                            });
                                    }
                                >
                                    {*question}
                                </button>
                                <Show when=move || open_index.get() == Some(i)>
                                    <p class="faq__answer">{*answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
