// =============================================================================
// component_tests.rs - Leptos WASM component tests for the TheMachine dashboard
//
// Mounts pages and components into a real DOM and checks what they render:
// seeded list sizes, the delayed loads, settings tab switching and the theme
// toggle.
//
// Run with:
//   cd app/leptos-ui && wasm-pack test --headless --chrome
// =============================================================================

#![cfg(target_arch = "wasm32")]

mod support;

use std::sync::Arc;

use leptos::prelude::*;
use support::*;
use tm_core::mock;
use tm_leptos_ui::state::AppState;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mock_state(delay_ms: u32) -> AppState {
    AppState::new(test_config(delay_ms))
}

// =============================================================================
// Message catalogue
// =============================================================================

mod messages {
    use super::*;
    use fluent_bundle::FluentArgs;
    use tm_leptos_ui::i18n::I18n;

    #[wasm_bindgen_test]
    fn page_copy_resolves() {
        let i18n = I18n::english();
        assert_eq!(i18n.t("tasks-empty"), "No tasks found.");
        assert_eq!(i18n.t("models-title"), "AI Models");
        assert_eq!(i18n.t("save-changes"), "Save Changes");
    }

    #[wasm_bindgen_test]
    fn unknown_keys_come_back_verbatim() {
        assert_eq!(I18n::english().t("no-such-key"), "no-such-key");
    }

    #[wasm_bindgen_test]
    fn arguments_are_interpolated_without_isolation_marks() {
        let mut args = FluentArgs::new();
        args.set("path", "/nowhere");
        assert_eq!(
            I18n::english().t_args("not-found-body", &args),
            "Nothing lives at /nowhere."
        );
    }

    #[wasm_bindgen_test]
    fn broken_ftl_keeps_the_valid_messages() {
        let i18n = I18n::from_ftl("en-US", "good = Fine\n!!broken\n");
        assert_eq!(i18n.t("good"), "Fine");
    }
}

// =============================================================================
// Seeded list pages
// =============================================================================

mod list_pages {
    use super::*;
    use tm_leptos_ui::pages::agents::AgentsPage;
    use tm_leptos_ui::pages::models::ModelsPage;
    use tm_leptos_ui::pages::workflows::WorkflowsPage;

    #[wasm_bindgen_test]
    fn agents_page_renders_one_card_per_agent() {
        let root = container();
        let _mounted = leptos::mount::mount_to(root.clone(), || {
            provide_contexts(mock_state(0));
            view! { <AgentsPage /> }
        });

        assert_eq!(count(&root, ".agent-card"), 3);
        assert_eq!(count(&root, ".agent-card") as usize, mock::demo_agents().len());
        assert!(root.text_content().unwrap_or_default().contains("Code Generation Agent"));
    }

    #[wasm_bindgen_test]
    fn agent_capabilities_show_spaces() {
        let root = container();
        let _mounted = leptos::mount::mount_to(root.clone(), || {
            provide_contexts(mock_state(0));
            view! { <AgentsPage /> }
        });

        let page = root.text_content().unwrap_or_default();
        assert!(page.contains("code generation"));
        assert!(!page.contains("code_generation"));
        assert!(page.contains("Default model:"));
    }

    #[wasm_bindgen_test]
    fn models_page_renders_rows_and_formatted_numbers() {
        let root = container();
        let _mounted = leptos::mount::mount_to(root.clone(), || {
            provide_contexts(mock_state(0));
            view! { <ModelsPage /> }
        });

        assert_eq!(count(&root, ".model-row") as usize, mock::demo_models().len());
        let page = root.text_content().unwrap_or_default();
        assert!(page.contains("Context: 128,000 tokens"));
        assert!(page.contains("Cost: $0.000010 per token"));
        assert_eq!(text(&root, ".model-avatar"), "GP");
    }

    #[wasm_bindgen_test]
    fn workflows_page_renders_rows_and_last_run() {
        let root = container();
        let _mounted = leptos::mount::mount_to(root.clone(), || {
            provide_contexts(mock_state(0));
            view! { <WorkflowsPage /> }
        });

        assert_eq!(count(&root, ".workflow-row") as usize, mock::demo_workflows().len());
        // One seeded workflow has never run.
        assert_eq!(count(&root, ".workflow-last-run"), 2);
        let page = root.text_content().unwrap_or_default();
        assert!(page.contains("(sequential)"));
        assert!(page.contains("Last run: Mar 1, 2025, 15:30 UTC"));
        assert!(page.contains("Create Workflow"));
    }
}

// =============================================================================
// Delayed loads
// =============================================================================

mod delayed_load {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tm_core::types::{Task, TaskKind, TaskPriority, TaskStatus};
    use tm_leptos_ui::pages::dashboard::DashboardPage;
    use tm_leptos_ui::pages::tasks::TasksPage;

    #[wasm_bindgen_test]
    async fn tasks_page_swaps_skeleton_for_empty_state() {
        let root = container();
        let _mounted = leptos::mount::mount_to(root.clone(), || {
            provide_contexts(mock_state(30));
            view! { <TasksPage /> }
        });

        assert_eq!(count(&root, ".skeleton-block"), 1);
        assert_eq!(count(&root, ".empty-state"), 0);

        sleep(120).await;

        assert_eq!(count(&root, ".skeleton-block"), 0);
        assert_eq!(text(&root, ".empty-title"), "No tasks found.");
        assert!(text(&root, ".empty-state button").contains("Create Task"));
    }

    #[wasm_bindgen_test]
    async fn tasks_page_lists_tasks_when_the_source_has_some() {
        let task = Task {
            id: "t-1".into(),
            kind: TaskKind::Code,
            title: "Refactor parser".into(),
            description: "Split the lexer out".into(),
            priority: TaskPriority::High,
            status: TaskStatus::InProgress,
            progress: 0.4,
            cost: 0.12,
            created_at: Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap(),
        };
        let root = container();
        let _mounted = leptos::mount::mount_to(root.clone(), move || {
            let state = AppState::with_source(test_config(10), Arc::new(TaskSource(vec![task])));
            provide_contexts(state);
            view! { <TasksPage /> }
        });

        sleep(80).await;

        assert_eq!(count(&root, ".task-row"), 1);
        assert_eq!(text(&root, ".task-title"), "Refactor parser");
        assert!(text(&root, ".task-row").contains("In Progress"));
        let bar = query(&root, ".progress").expect("progress bar");
        assert_eq!(bar.get_attribute("aria-valuenow").as_deref(), Some("40"));
    }

    #[wasm_bindgen_test]
    async fn unmounting_before_the_delay_skips_the_load() {
        let source = CountingSource::default();
        let calls = Arc::clone(&source.calls);
        let root = container();
        let mounted = leptos::mount::mount_to(root.clone(), move || {
            provide_contexts(AppState::with_source(test_config(40), Arc::new(source)));
            view! { <TasksPage /> }
        });

        drop(mounted);
        sleep(120).await;

        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
        assert_eq!(count(&root, ".task-list, .empty-state"), 0);
    }

    #[wasm_bindgen_test]
    async fn failed_load_shows_error_banner() {
        let root = container();
        let _mounted = leptos::mount::mount_to(root.clone(), || {
            provide_contexts(AppState::with_source(test_config(10), Arc::new(DownSource)));
            view! { <TasksPage /> }
        });

        sleep(80).await;

        assert_eq!(count(&root, ".error-banner"), 1);
        assert!(text(&root, ".error-banner").contains("backend offline"));
    }

    #[wasm_bindgen_test]
    async fn dashboard_stats_start_at_zero_then_load() {
        let root = container();
        let _mounted = leptos::mount::mount_to(root.clone(), || {
            provide_contexts(mock_state(30));
            view! { <DashboardPage /> }
        });

        assert_eq!(count(&root, ".kpi-card"), 4);
        assert_eq!(text(&root, ".kpi-value"), "0");
        assert_eq!(count(&root, ".stat-change-up"), 0);
        assert_eq!(text(&root, ".empty-hint"), "No recent tasks found.");

        sleep(120).await;

        assert_eq!(count(&root, ".kpi-card"), 4);
        assert_eq!(text(&root, ".kpi-value"), "12");
        assert_eq!(count(&root, ".stat-change-up"), 2);
        assert_eq!(text(&root, ".stat-change-up"), "+2");
        assert_eq!(count(&root, ".status-row"), 3);
    }

    #[wasm_bindgen_test]
    fn stat_cards_link_to_their_pages() {
        let root = container();
        let _mounted = leptos::mount::mount_to(root.clone(), || {
            provide_contexts(mock_state(1_000));
            view! { <DashboardPage /> }
        });

        let link = query(&root, "a.kpi-card").expect("stat card link");
        assert_eq!(link.get_attribute("href").as_deref(), Some("/tasks"));
    }
}

// =============================================================================
// Settings page
// =============================================================================

mod settings_page {
    use super::*;
    use tm_core::settings::SettingsTab;
    use tm_leptos_ui::pages::settings::SettingsPage;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlInputElement;

    fn mount_settings() -> (web_sys::HtmlElement, impl Sized) {
        let root = container();
        let mounted = leptos::mount::mount_to(root.clone(), || {
            provide_contexts(mock_state(0));
            view! { <SettingsPage /> }
        });
        (root, mounted)
    }

    #[wasm_bindgen_test]
    async fn exactly_one_panel_matches_the_selected_tab() {
        let (root, _mounted) = mount_settings();

        assert_eq!(count(&root, "[role=tabpanel]"), 1);
        assert!(query(&root, &format!("#{}", SettingsTab::Api.panel_id())).is_some());

        for tab in SettingsTab::ALL {
            click(&root, &format!("#settings-tab-{}", tab.as_str()));
            tick().await;

            assert_eq!(count(&root, "[role=tabpanel]"), 1, "tab {tab:?}");
            assert!(
                query(&root, &format!("#{}", tab.panel_id())).is_some(),
                "panel for {tab:?} not shown"
            );
            assert_eq!(count(&root, ".settings-tab.active"), 1);
            assert_eq!(text(&root, ".settings-tab.active"), tab.label());
        }
    }

    #[wasm_bindgen_test]
    fn api_tab_is_seeded() {
        let (root, _mounted) = mount_settings();

        let key = query(&root, "#openai-api-key")
            .expect("openai key input")
            .unchecked_into::<HtmlInputElement>();
        assert_eq!(key.type_(), "password");
        assert_eq!(key.value(), mock::API_KEY_MASK);

        let limit = query(&root, "#cost-limit")
            .expect("cost limit input")
            .unchecked_into::<HtmlInputElement>();
        assert_eq!(limit.value(), "10");

        let selected = query(&root, "#default-model option:checked").expect("selected model");
        assert_eq!(selected.get_attribute("value").as_deref(), Some("gpt-4o-mini"));
    }

    #[wasm_bindgen_test]
    async fn show_toggle_reveals_the_key() {
        let (root, _mounted) = mount_settings();

        click(&root, "button[aria-controls=openai-api-key]");
        tick().await;

        let key = query(&root, "#openai-api-key")
            .expect("openai key input")
            .unchecked_into::<HtmlInputElement>();
        assert_eq!(key.type_(), "text");
        assert_eq!(text(&root, "button[aria-controls=openai-api-key]"), "Hide");

        // The other key is untouched.
        let other = query(&root, "#anthropic-api-key")
            .expect("anthropic key input")
            .unchecked_into::<HtmlInputElement>();
        assert_eq!(other.type_(), "password");
    }

    #[wasm_bindgen_test]
    async fn system_tab_lists_version_and_services() {
        let (root, _mounted) = mount_settings();

        click(&root, "#settings-tab-system");
        tick().await;

        assert_eq!(count(&root, ".status-row"), 4);
        assert!(text(&root, ".status-list").contains("0.1.0"));
        assert!(text(&root, ".danger-zone").contains("Clear All Data"));
    }
}

// =============================================================================
// Theme toggle
// =============================================================================

mod theme_toggle {
    use super::*;
    use tm_leptos_ui::components::theme_toggle::ThemeToggle;

    fn storage() -> web_sys::Storage {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .expect("localStorage")
    }

    fn root_is_dark() -> bool {
        document()
            .document_element()
            .expect("html element")
            .class_list()
            .contains("dark")
    }

    #[wasm_bindgen_test]
    async fn double_toggle_restores_class_and_storage() {
        storage().set_item(TEST_THEME_KEY, "light").expect("seed theme");
        let root = container();
        let _mounted = leptos::mount::mount_to(root.clone(), || {
            provide_contexts(mock_state(0));
            view! { <ThemeToggle /> }
        });

        assert!(!root_is_dark());
        assert_eq!(text(&root, "button"), "Dark Mode");

        click(&root, "button");
        tick().await;
        assert!(root_is_dark());
        assert_eq!(storage().get_item(TEST_THEME_KEY).ok().flatten().as_deref(), Some("dark"));
        assert_eq!(text(&root, "button"), "Light Mode");

        click(&root, "button");
        tick().await;
        assert!(!root_is_dark());
        assert_eq!(storage().get_item(TEST_THEME_KEY).ok().flatten().as_deref(), Some("light"));
        assert_eq!(text(&root, "button"), "Dark Mode");

        let _ = storage().remove_item(TEST_THEME_KEY);
    }

    #[wasm_bindgen_test]
    fn stored_dark_preference_applies_on_mount() {
        storage().set_item(TEST_THEME_KEY, "dark").expect("seed theme");
        let root = container();
        let mounted = leptos::mount::mount_to(root.clone(), || {
            provide_contexts(mock_state(0));
            view! { <ThemeToggle /> }
        });

        assert!(root_is_dark());
        assert_eq!(text(&root, "button"), "Light Mode");

        drop(mounted);
        // Leave the document light for the other tests.
        let _ = document()
            .document_element()
            .expect("html element")
            .class_list()
            .remove_1("dark");
        let _ = storage().remove_item(TEST_THEME_KEY);
    }
}

// =============================================================================
// Not found page
// =============================================================================

mod not_found {
    use super::*;
    use tm_leptos_ui::pages::not_found::NotFoundPage;

    #[wasm_bindgen_test]
    fn links_back_to_the_dashboard() {
        let root = container();
        let _mounted = leptos::mount::mount_to(root.clone(), || {
            provide_contexts(mock_state(0));
            view! { <NotFoundPage /> }
        });

        assert_eq!(text(&root, "h1"), "Page not found");
        let link = query(&root, "a").expect("dashboard link");
        assert_eq!(link.get_attribute("href").as_deref(), Some("/"));
        assert_eq!(link.text_content().as_deref(), Some("Back to Dashboard"));
    }
}
