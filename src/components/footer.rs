//! Marketing page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__tagline">
                "Built by founders who hated repetitive support tickets and knew there had to be a better way."
            </p>
        </footer>
    }
}
