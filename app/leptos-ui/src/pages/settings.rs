use leptos::prelude::*;
use tm_core::mock;
use tm_core::settings::{parse_cost_limit, ApiSettings, SettingsTab, ThemeChoice, UiSettings};

use crate::components::status_badge::{inert, StatusRow};
use crate::i18n::t;
use crate::state::use_app_state;

/// Password field with a cosmetic Show/Hide switch.
#[component]
fn ApiKeyField(
    id: &'static str,
    label: String,
    api: RwSignal<ApiSettings>,
    read: fn(&ApiSettings) -> String,
    write: fn(&mut ApiSettings, String),
) -> impl IntoView {
    let (shown, set_shown) = signal(false);
    let show = t("key-show");
    let hide = t("key-hide");

    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            <div class="input-group">
                <input
                    id=id
                    name=id
                    class="form-input"
                    type=move || if shown.get() { "text" } else { "password" }
                    autocomplete="off"
                    prop:value=move || api.with(read)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        api.update(|settings| write(settings, value));
                    }
                />
                <button
                    type="button"
                    class="btn btn-secondary input-addon"
                    aria-controls=id
                    on:click=move |_| set_shown.update(|s| *s = !*s)
                >
                    {move || if shown.get() { hide.clone() } else { show.clone() }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn ApiPanel(api: RwSignal<ApiSettings>) -> impl IntoView {
    let models = mock::demo_models();

    view! {
        <div class="settings-panel" role="tabpanel" id=SettingsTab::Api.panel_id()>
            <ApiKeyField
                id="openai-api-key"
                label=t("openai-api-key")
                api
                read=|s| s.openai_api_key.clone()
                write=|s, v| s.openai_api_key = v
            />
            <ApiKeyField
                id="anthropic-api-key"
                label=t("anthropic-api-key")
                api
                read=|s| s.anthropic_api_key.clone()
                write=|s, v| s.anthropic_api_key = v
            />

            <div class="form-field">
                <label for="default-model">{t("default-model-label")}</label>
                <select
                    id="default-model"
                    name="default-model"
                    class="form-select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        api.update(|s| s.default_model = value);
                    }
                >
                    {models
                        .into_iter()
                        .map(|model| {
                            let id = model.id.clone();
                            view! {
                                <option
                                    value=model.id
                                    prop:selected=move || api.with(|s| s.default_model == id)
                                >
                                    {model.name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-field">
                <label for="cost-limit">{t("cost-limit")}</label>
                <div class="input-group">
                    <span class="input-prefix">"$"</span>
                    <input
                        type="number"
                        id="cost-limit"
                        name="cost-limit"
                        class="form-input"
                        min="0"
                        step="any"
                        prop:value=move || api.with(|s| s.cost_limit.to_string())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            match parse_cost_limit(&raw) {
                                Some(limit) => api.update(|s| s.cost_limit = limit),
                                None => tracing::debug!(input = %raw, "ignoring invalid cost limit"),
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn UiPanel(ui: RwSignal<UiSettings>) -> impl IntoView {
    view! {
        <div class="settings-panel" role="tabpanel" id=SettingsTab::Ui.panel_id()>
            <div class="form-field">
                <label for="theme">{t("theme-label")}</label>
                <select
                    id="theme"
                    name="theme"
                    class="form-select"
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        match raw.parse::<ThemeChoice>() {
                            Ok(choice) => ui.update(|s| s.theme = choice),
                            Err(e) => tracing::warn!(error = %e, "unknown theme option"),
                        }
                    }
                >
                    {ThemeChoice::ALL
                        .into_iter()
                        .map(|choice| view! {
                            <option
                                value=choice.as_str()
                                prop:selected=move || ui.with(|s| s.theme == choice)
                            >
                                {choice.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-check">
                <input
                    id="animations"
                    name="animations"
                    type="checkbox"
                    prop:checked=move || ui.with(|s| s.animations_enabled)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        ui.update(|s| s.animations_enabled = checked);
                    }
                />
                <div class="form-check-text">
                    <label for="animations">{t("animations")}</label>
                    <p class="form-hint">{t("animations-hint")}</p>
                </div>
            </div>

            <div class="form-check">
                <input
                    id="compact-mode"
                    name="compact-mode"
                    type="checkbox"
                    prop:checked=move || ui.with(|s| s.compact_mode)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        ui.update(|s| s.compact_mode = checked);
                    }
                />
                <div class="form-check-text">
                    <label for="compact-mode">{t("compact-mode")}</label>
                    <p class="form-hint">{t("compact-mode-hint")}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SystemPanel() -> impl IntoView {
    let version = use_app_state().config.with_value(|cfg| cfg.app.version.clone());

    view! {
        <div class="settings-panel" role="tabpanel" id=SettingsTab::System.panel_id()>
            <h3 class="settings-section-title">{t("system-information")}</h3>
            <dl class="status-list">
                {mock::system_info(&version)
                    .into_iter()
                    .map(|status| view! { <StatusRow status /> })
                    .collect_view()}
            </dl>
            <div class="danger-zone">
                <button type="button" class="btn btn-danger" on:click=inert("clear-all-data", "settings")>
                    {t("clear-all-data")}
                </button>
                <p class="form-hint">{t("clear-all-data-warning")}</p>
            </div>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(SettingsTab::default());
    let api = RwSignal::new(ApiSettings::default());
    let ui = RwSignal::new(UiSettings::default());

    let save = move |_| {
        tracing::debug!(
            api = ?api.get_untracked(),
            ui = ?ui.get_untracked(),
            "save clicked, settings are not persisted"
        );
    };

    view! {
        <div class="page settings">
            <div class="page-header">
                <h1>{t("settings-title")}</h1>
                <p class="page-subtitle">{t("settings-subtitle")}</p>
            </div>

            <div class="panel">
                <nav class="settings-tabs" role="tablist" aria-label=t("settings-tabs")>
                    {SettingsTab::ALL
                        .into_iter()
                        .map(|tab| view! {
                            <button
                                type="button"
                                role="tab"
                                class="settings-tab"
                                id=format!("settings-tab-{}", tab.as_str())
                                class:active=move || active_tab.get() == tab
                                aria-selected=move || (active_tab.get() == tab).to_string()
                                aria-controls=tab.panel_id()
                                on:click=move |_| set_active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        })
                        .collect_view()}
                </nav>

                <div class="panel-body">
                    {move || match active_tab.get() {
                        SettingsTab::Api => view! { <ApiPanel api /> }.into_any(),
                        SettingsTab::Ui => view! { <UiPanel ui /> }.into_any(),
                        SettingsTab::System => view! { <SystemPanel /> }.into_any(),
                    }}
                </div>

                <div class="panel-footer">
                    <button type="button" class="btn btn-primary" on:click=save>
                        {t("save-changes")}
                    </button>
                </div>
            </div>
        </div>
    }
}
