use leptos::prelude::*;
use tm_core::types::Agent;

use crate::components::status_badge::{inert, ActiveBadge, CapabilityChips};
use crate::i18n::t;

#[component]
pub fn AgentCard(agent: Agent) -> impl IntoView {
    let icon = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2"><path stroke-linecap="round" stroke-linejoin="round" d="{}"/></svg>"#,
        agent.kind.icon_path()
    );

    view! {
        <div class="agent-card">
            <div class="agent-header">
                <span class=agent.kind.css_class() aria-hidden="true" inner_html=icon></span>
                <span class="agent-name">{agent.name.clone()}</span>
                <ActiveBadge is_active=agent.is_active />
            </div>
            <p class="agent-description">{agent.description}</p>
            <CapabilityChips capabilities=agent.capabilities />
            <div class="agent-model">
                {t("default-model")} " " <span class="agent-model-id">{agent.default_model_id}</span>
            </div>
            <div class="card-actions">
                <button type="button" class="btn btn-primary" on:click=inert("execute", agent.id.clone())>
                    {t("action-execute")}
                </button>
                <button type="button" class="btn btn-secondary" on:click=inert("edit", agent.id)>
                    {t("action-edit")}
                </button>
            </div>
        </div>
    }
}
