use leptos::prelude::*;
use tm_core::mock;

use crate::components::agent_card::AgentCard;
use crate::i18n::t;

#[component]
pub fn AgentsPage() -> impl IntoView {
    let agents = RwSignal::new(mock::demo_agents());

    view! {
        <div class="page agents">
            <div class="page-header">
                <h1>{t("agents-title")}</h1>
                <p class="page-subtitle">{t("agents-subtitle")}</p>
            </div>
            <div class="agent-grid">
                <For each=move || agents.get() key=|agent| agent.id.clone() let:agent>
                    <AgentCard agent />
                </For>
            </div>
        </div>
    }
}
