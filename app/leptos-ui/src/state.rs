use std::sync::Arc;

use leptos::prelude::*;
use tm_core::{DashboardConfig, DataSource, MockDataSource};

/// App-wide context: configuration and the source behind the delayed pages.
///
/// Page data itself stays local to each page.
#[derive(Clone)]
pub struct AppState {
    pub config: StoredValue<DashboardConfig>,
    pub source: Arc<dyn DataSource + Send + Sync>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_source(config, Arc::new(MockDataSource))
    }

    pub fn with_source(config: DashboardConfig, source: Arc<dyn DataSource + Send + Sync>) -> Self {
        Self {
            config: StoredValue::new(config),
            source,
        }
    }

    /// Milliseconds the delayed pages wait before asking the source.
    pub fn load_delay_ms(&self) -> u32 {
        self.config.with_value(|cfg| cfg.loading.delay_ms)
    }
}

pub fn provide_app_state(state: AppState) {
    provide_context(state);
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
