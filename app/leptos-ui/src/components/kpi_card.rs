use leptos::prelude::*;
use tm_core::format;
use tm_core::types::StatCard;

use crate::router::Link;

/// One dashboard statistic, linking to the page it summarises.
#[component]
pub fn KpiCard(stat: StatCard) -> impl IntoView {
    let change = stat.change.map(|change| {
        view! {
            <span class=change.css_class()>
                {format::change_delta(&change)}
            </span>
        }
    });

    view! {
        <Link href=stat.href class="kpi-card">
            <div class="kpi-value">{stat.value}</div>
            <div class="kpi-body">
                <div class="kpi-title">{stat.title}</div>
                <div class="kpi-detail">
                    <span class="kpi-description">{stat.description}</span>
                    {change}
                </div>
            </div>
        </Link>
    }
}
