use leptos::prelude::*;
use tm_core::types::Model;
use tm_core::{format, mock};

use crate::components::status_badge::{inert, ActiveBadge, CapabilityChips};
use crate::i18n::t;

const PENCIL_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" d="M16.862 4.487l1.687-1.688a1.875 1.875 0 112.652 2.652L10.582 16.07a4.5 4.5 0 01-1.897 1.13L6 18l.8-2.685a4.5 4.5 0 011.13-1.897l8.932-8.931z"/></svg>"#;

#[component]
fn ModelRow(model: Model) -> impl IntoView {
    view! {
        <li class="model-row">
            <div class="model-row-header">
                <div class="model-avatar" aria-hidden="true">{format::initials(&model.name)}</div>
                <div class="model-identity">
                    <p class="model-name">{model.name.clone()}</p>
                    <p class="model-provider">{model.provider.clone()}</p>
                </div>
                <ActiveBadge is_active=model.is_active />
                <button type="button" class="icon-btn" on:click=inert("edit", model.id.clone())>
                    <span class="sr-only">{t("action-edit")}</span>
                    <span aria-hidden="true" inner_html=PENCIL_SVG></span>
                </button>
            </div>
            <div class="model-stats">
                <span>{format::context_window(model.context_window)}</span>
                <span>{format::cost_per_token(model.cost_per_token)}</span>
            </div>
            <CapabilityChips capabilities=model.capabilities />
        </li>
    }
}

#[component]
pub fn ModelsPage() -> impl IntoView {
    let models = RwSignal::new(mock::demo_models());

    view! {
        <div class="page models">
            <div class="page-header">
                <h1>{t("models-title")}</h1>
                <p class="page-subtitle">{t("models-subtitle")}</p>
            </div>
            <ul class="panel model-list">
                <For each=move || models.get() key=|model| model.id.clone() let:model>
                    <ModelRow model />
                </For>
            </ul>
        </div>
    }
}
