use leptos::prelude::*;
use tm_core::Fetch;

use crate::components::skeleton::SkeletonLines;
use crate::components::status_badge::{inert, ErrorBanner};
use crate::components::task_row::TaskRow;
use crate::fetch::use_delayed_fetch;
use crate::i18n::t;
use crate::state::use_app_state;

#[component]
pub fn TasksPage() -> impl IntoView {
    let state = use_app_state();
    let source = state.source.clone();
    let tasks = use_delayed_fetch("tasks", state.load_delay_ms(), move || async move {
        source.tasks().await
    });

    let body = move || match tasks.get() {
        Fetch::Pending => view! { <SkeletonLines label=t("tasks-loading") /> }.into_any(),
        Fetch::Failed(error) => view! { <ErrorBanner error /> }.into_any(),
        Fetch::Ready(list) if list.is_empty() => view! {
            <div class="empty-state">
                <p class="empty-title">{t("tasks-empty")}</p>
                <p class="empty-hint">{t("tasks-empty-hint")}</p>
                <button type="button" class="btn btn-primary" on:click=inert("create", "task")>
                    {t("create-task")}
                </button>
            </div>
        }
        .into_any(),
        Fetch::Ready(list) => view! {
            <ul class="task-list">
                {list.into_iter().map(|task| view! { <TaskRow task /> }).collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <div class="page tasks">
            <div class="page-header">
                <h1>{t("tasks-title")}</h1>
                <p class="page-subtitle">{t("tasks-subtitle")}</p>
            </div>
            <div class="panel">
                <div class="panel-body">{body}</div>
            </div>
        </div>
    }
}
