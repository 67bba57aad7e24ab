use leptos::prelude::*;
use tm_core::{DashboardConfig, Route};

pub mod components;
pub mod fetch;
pub mod i18n;
pub mod logging;
pub mod pages;
pub mod router;
pub mod state;
pub mod theme;

use wasm_bindgen::prelude::*;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    theme::provide_theme(&config.theme);
    state::provide_app_state(state::AppState::new(config));
    i18n::provide_i18n();
    router::provide_router();

    let route = router::use_route();

    view! {
        <components::layout::Layout>
            {move || match route.get() {
                Route::Dashboard => view! { <pages::dashboard::DashboardPage /> }.into_any(),
                Route::Tasks => view! { <pages::tasks::TasksPage /> }.into_any(),
                Route::Models => view! { <pages::models::ModelsPage /> }.into_any(),
                Route::Agents => view! { <pages::agents::AgentsPage /> }.into_any(),
                Route::Workflows => view! { <pages::workflows::WorkflowsPage /> }.into_any(),
                Route::Settings => view! { <pages::settings::SettingsPage /> }.into_any(),
                Route::NotFound => view! { <pages::not_found::NotFoundPage /> }.into_any(),
            }}
        </components::layout::Layout>
    }
}

#[wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();

    let (config, config_err) = match DashboardConfig::load() {
        Ok(cfg) => (cfg, None),
        Err(e) => (DashboardConfig::default(), Some(e)),
    };
    logging::init_logging(&config.logging.level);
    if let Some(e) = config_err {
        tracing::error!(error = %e, "embedded dashboard.toml rejected, using defaults");
    }

    leptos::mount::mount_to_body(move || view! { <App config /> });
}
