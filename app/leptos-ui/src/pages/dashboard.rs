use leptos::prelude::*;
use tm_core::source::recent_tasks;
use tm_core::{mock, Fetch};

use crate::components::kpi_card::KpiCard;
use crate::components::status_badge::{ErrorBanner, StatusRow};
use crate::components::task_row::TaskRow;
use crate::fetch::use_delayed_fetch;
use crate::i18n::t;
use crate::state::use_app_state;

const RECENT_TASK_LIMIT: usize = 5;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_app_state();
    let tagline = state.config.with_value(|cfg| cfg.app.tagline.clone());
    let delay = state.load_delay_ms();

    let source = state.source.clone();
    let stats = use_delayed_fetch("dashboard stats", delay, move || async move {
        source.dashboard_stats().await
    });
    let source = state.source.clone();
    let recent = use_delayed_fetch("recent tasks", delay, move || async move {
        source
            .tasks()
            .await
            .map(|tasks| recent_tasks(&tasks, RECENT_TASK_LIMIT))
    });

    // Placeholder cards stay up until the load lands, and after a failure.
    let cards = move || {
        stats
            .with(|s| s.ready().cloned())
            .unwrap_or_else(mock::initial_stats)
    };
    let load_error = move || {
        stats
            .with(|s| s.error().map(str::to_owned))
            .or_else(|| recent.with(|r| r.error().map(str::to_owned)))
    };
    let no_recent = t("no-recent-tasks");

    view! {
        <div class="page dashboard">
            <div class="page-header">
                <h1>{t("dashboard-title")}</h1>
                <p class="page-subtitle">{tagline}</p>
            </div>

            {move || load_error().map(|error| view! { <ErrorBanner error /> })}

            <div class="kpi-grid">
                {move || cards().into_iter().map(|stat| view! { <KpiCard stat /> }).collect_view()}
            </div>

            <div class="panel-grid">
                <section class="panel">
                    <h2 class="panel-title">{t("recent-tasks")}</h2>
                    <div class="panel-body">
                        {move || match recent.get() {
                            Fetch::Ready(tasks) if !tasks.is_empty() => view! {
                                <ul class="task-list">
                                    {tasks.into_iter().map(|task| view! { <TaskRow task /> }).collect_view()}
                                </ul>
                            }.into_any(),
                            _ => view! { <p class="empty-hint">{no_recent.clone()}</p> }.into_any(),
                        }}
                    </div>
                </section>

                <section class="panel">
                    <h2 class="panel-title">{t("system-status")}</h2>
                    <dl class="panel-body status-list">
                        {mock::dashboard_services()
                            .into_iter()
                            .map(|status| view! { <StatusRow status /> })
                            .collect_view()}
                    </dl>
                </section>
            </div>
        </div>
    }
}
