use leptos::prelude::*;
use tm_core::types::Workflow;
use tm_core::{format, mock};

use crate::components::status_badge::{inert, ActiveBadge};
use crate::i18n::t;

#[component]
fn WorkflowRow(workflow: Workflow) -> impl IntoView {
    let last_run = workflow.last_run.as_ref().map(format::last_run);
    view! {
        <li class="workflow-row">
            <div class="workflow-row-header">
                <div class="workflow-identity">
                    <p class="workflow-name">{workflow.name.clone()}</p>
                    <p class="workflow-kind">{format!("({})", workflow.kind)}</p>
                </div>
                <ActiveBadge is_active=workflow.is_active />
                <button type="button" class="btn btn-primary" on:click=inert("run", workflow.id.clone())>
                    {t("action-run")}
                </button>
                <button type="button" class="btn btn-secondary" on:click=inert("edit", workflow.id.clone())>
                    {t("action-edit")}
                </button>
            </div>
            <p class="workflow-description">{workflow.description}</p>
            <div class="workflow-footer">
                <span>{format::step_count(workflow.steps)}</span>
                {last_run.map(|text| view! { <span class="workflow-last-run">{text}</span> })}
            </div>
        </li>
    }
}

#[component]
pub fn WorkflowsPage() -> impl IntoView {
    let workflows = RwSignal::new(mock::demo_workflows());

    view! {
        <div class="page workflows">
            <div class="page-header">
                <h1>{t("workflows-title")}</h1>
                <p class="page-subtitle">{t("workflows-subtitle")}</p>
            </div>
            <ul class="panel workflow-list">
                <For each=move || workflows.get() key=|wf| wf.id.clone() let:workflow>
                    <WorkflowRow workflow />
                </For>
            </ul>
            <div class="page-actions">
                <button type="button" class="btn btn-primary" on:click=inert("create", "workflow")>
                    {t("create-workflow")}
                </button>
            </div>
        </div>
    }
}
