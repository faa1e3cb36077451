//! Top navigation bar for the public marketing pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::APP_NAME;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">
                {APP_NAME}
            </A>
            <div class="navbar__links">
                <a class="navbar__link" href="/#faq">
                    "FAQ"
                </a>
                <A href="/login" attr:class="navbar__link">
                    "Log in"
                </A>
                <A href="/register" attr:class="btn btn--primary navbar__cta">
                    "Get Started"
                </A>
            </div>
        </nav>
    }
}
