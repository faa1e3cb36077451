//! Stat card used on the dashboard overview grid.

use leptos::prelude::*;

#[component]
pub fn StatsCard(
    label: &'static str,
    value: &'static str,
    delta: &'static str,
) -> impl IntoView {
    view! {
        <div class="stats-card">
            <span class="stats-card__label">{label}</span>
            <span class="stats-card__value">{value}</span>
            <span class="stats-card__delta">{delta}</span>
        </div>
    }
}
