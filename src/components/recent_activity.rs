//! Recent-activity feed shown on the dashboard.

#[cfg(test)]
#[path = "recent_activity_test.rs"]
mod recent_activity_test;

use leptos::prelude::*;

/// What kind of event an activity row describes; drives the row icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Conversation,
    Automation,
    User,
}

pub struct ActivityItem {
    pub kind: ActivityKind,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub user: Option<&'static str>,
}

/// Static placeholders until an activity endpoint exists, same as the
/// overview stats.
pub fn recent_activities() -> [ActivityItem; 4] {
    [
        ActivityItem {
            kind: ActivityKind::Conversation,
            title: "New conversation started",
            description: "Customer inquiry about pricing plans",
            time: "2 minutes ago",
            user: Some("john@company.com"),
        },
        ActivityItem {
            kind: ActivityKind::Automation,
            title: "Automation triggered",
            description: "Welcome email sent to new customer",
            time: "5 minutes ago",
            user: None,
        },
        ActivityItem {
            kind: ActivityKind::User,
            title: "New team member added",
            description: "Sarah joined the support team",
            time: "1 hour ago",
            user: None,
        },
        ActivityItem {
            kind: ActivityKind::Conversation,
            title: "Conversation resolved",
            description: "Technical issue resolved for customer",
            time: "2 hours ago",
            user: Some("tech@company.com"),
        },
    ]
}

fn kind_glyph(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Conversation => "\u{1f4ac}",
        ActivityKind::Automation => "\u{26a1}",
        ActivityKind::User => "\u{1f464}",
    }
}

#[component]
pub fn RecentActivity() -> impl IntoView {
    view! {
        <section class="activity-feed">
            <h2>"Recent Activity"</h2>
            <ul class="activity-feed__list">
                {recent_activities()
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="activity-feed__item">
                                <span class="activity-feed__icon">{kind_glyph(item.kind)}</span>
                                <div class="activity-feed__body">
                                    <p class="activity-feed__title">{item.title}</p>
                                    <p class="activity-feed__description">{item.description}</p>
                                    <p class="activity-feed__meta">
                                        {item.time}
                                        {item.user.map(|u| format!(" \u{2022} {u}"))}
                                    </p>
                                </div>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
