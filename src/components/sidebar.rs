//! Dashboard sidebar navigation.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Sidebar destinations in display order.
pub fn nav_links() -> [(&'static str, &'static str); 2] {
    [("Dashboard", "/dashboard"), ("Upload Context", "/upload-context")]
}

/// A link is highlighted only on an exact path match, so "/upload-context"
/// does not light up the dashboard entry.
fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <aside class="sidebar">
            <A href="/dashboard" attr:class="sidebar__brand">
                {crate::config::APP_NAME}
            </A>
            <nav class="sidebar__nav">
                {nav_links()
                    .into_iter()
                    .map(|(name, href)| {
                        let class = move || {
                            if is_active(&pathname.get(), href) {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            }
                        };
                        view! {
                            <A href=href attr:class=class>
                                {name}
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
