//! Authenticated dashboard landing: sidebar, stats overview, recent
//! activity, and quick actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! First protected route after login. Logout clears the session store, and
//! the `RequireAuth` wrapper handles the redirect once the phase flips to
//! anonymous — no explicit navigation here.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::guards::RequireAuth;
use crate::components::recent_activity::RecentActivity;
use crate::components::sidebar::Sidebar;
use crate::components::stats_card::StatsCard;
use crate::state::session::SessionState;

/// Overview metrics shown on the stats grid. Static placeholders until a
/// reporting endpoint exists; labels match the product's reporting language.
fn stat_defs() -> [(&'static str, &'static str, &'static str); 4] {
    [
        ("Conversations automated", "1,284", "+12% this week"),
        ("Avg. response time", "28s", "-9s this week"),
        ("Deflection rate", "64%", "+3% this week"),
        ("CSAT", "4.7 / 5", "steady"),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let user_email = move || {
        session
            .get()
            .phase
            .user()
            .map(|u| u.email.clone())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::session::logout_session(session).await;
        });
    };

    view! {
        <RequireAuth>
            <div class="dashboard-page">
                <Sidebar/>
                <div class="dashboard-page__main">
                    <header class="dashboard-page__header">
                        <span class="dashboard-page__spacer"></span>
                        <span class="dashboard-page__user">{user_email}</span>
                        <button class="btn dashboard-page__logout" on:click=on_logout title="Logout">
                            "Logout"
                        </button>
                    </header>

                    <div class="dashboard-page__grid">
                        {stat_defs()
                            .into_iter()
                            .map(|(label, value, delta)| {
                                view! { <StatsCard label=label value=value delta=delta/> }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <RecentActivity/>

                    <section class="dashboard-page__actions">
                        <h2>"Quick actions"</h2>
                        <A href="/upload-context" attr:class="btn btn--primary">
                            "Manage contexts"
                        </A>
                    </section>
                </div>
            </div>
        </RequireAuth>
    }
}
