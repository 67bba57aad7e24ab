// Shared mounting helpers for the browser tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use tm_core::config::ThemeConfig;
use tm_core::types::{StatCard, Task};
use tm_core::{mock, DashboardConfig, DataSource, SourceError};
use tm_leptos_ui::state::{provide_app_state, AppState};
use tm_leptos_ui::{i18n, router, theme};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub const TEST_THEME_KEY: &str = "tm-test-theme";

pub fn document() -> Document {
    web_sys::window()
        .expect("no window")
        .document()
        .expect("no document")
}

/// Fresh `<div>` attached to `<body>` for one test to mount into.
pub fn container() -> HtmlElement {
    let doc = document();
    let el = doc
        .create_element("div")
        .expect("create div")
        .unchecked_into::<HtmlElement>();
    doc.body()
        .expect("no body")
        .append_child(&el)
        .expect("append container");
    el
}

/// Config with a short load delay and a theme key that does not collide
/// with the real app.
pub fn test_config(delay_ms: u32) -> DashboardConfig {
    let mut config = DashboardConfig::default();
    config.loading.delay_ms = delay_ms;
    config.theme = ThemeConfig {
        storage_key: TEST_THEME_KEY.to_string(),
        ..ThemeConfig::default()
    };
    config
}

/// Everything `App` provides, so a single page or component can be mounted.
pub fn provide_contexts(state: AppState) {
    state.config.with_value(|cfg| theme::provide_theme(&cfg.theme));
    provide_app_state(state);
    i18n::provide_i18n();
    router::provide_router();
}

/// Let pending effects and zero-delay timers run.
pub async fn tick() {
    TimeoutFuture::new(0).await;
}

pub async fn sleep(ms: u32) {
    TimeoutFuture::new(ms).await;
}

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector)
        .map(|nodes| nodes.length())
        .unwrap_or(0)
}

pub fn text(root: &Element, selector: &str) -> String {
    query(root, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

pub fn click(root: &Element, selector: &str) {
    query(root, selector)
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .unchecked_into::<HtmlElement>()
        .click();
}

/// Counts calls and serves the mock data.
#[derive(Default)]
pub struct CountingSource {
    pub calls: Arc<AtomicUsize>,
}

impl CountingSource {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl DataSource for CountingSource {
    async fn dashboard_stats(&self) -> Result<Vec<StatCard>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(mock::loaded_stats())
    }

    async fn tasks(&self) -> Result<Vec<Task>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(mock::demo_tasks())
    }
}

/// Always fails.
pub struct DownSource;

#[async_trait(?Send)]
impl DataSource for DownSource {
    async fn dashboard_stats(&self) -> Result<Vec<StatCard>, SourceError> {
        Err(SourceError::Unavailable("backend offline".into()))
    }

    async fn tasks(&self) -> Result<Vec<Task>, SourceError> {
        Err(SourceError::Unavailable("backend offline".into()))
    }
}

/// Serves a fixed task list.
pub struct TaskSource(pub Vec<Task>);

#[async_trait(?Send)]
impl DataSource for TaskSource {
    async fn dashboard_stats(&self) -> Result<Vec<StatCard>, SourceError> {
        Ok(mock::loaded_stats())
    }

    async fn tasks(&self) -> Result<Vec<Task>, SourceError> {
        Ok(self.0.clone())
    }
}
