//! Asynchronous data loading for the Dashboard and Tasks pages.
//!
//! Pages never call into mock data directly for the delayed sets; they go
//! through a [`DataSource`] and fold its result into a [`Fetch`]. The mock
//! implementation answers immediately; the UI decides how long to wait
//! before asking.

use async_trait::async_trait;

use crate::mock;
use crate::types::{StatCard, Task};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("data source unavailable: {0}")]
    Unavailable(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// State of one asynchronous load.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Fetch::Pending
    }
}

impl<T> Fetch<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Fetch::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Fetch::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

impl<T> From<Result<T, SourceError>> for Fetch<T> {
    fn from(result: Result<T, SourceError>) -> Self {
        match result {
            Ok(value) => Fetch::Ready(value),
            Err(e) => Fetch::Failed(e.to_string()),
        }
    }
}

/// Where the delayed page data comes from.
///
/// Futures are `?Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait DataSource {
    async fn dashboard_stats(&self) -> Result<Vec<StatCard>, SourceError>;
    async fn tasks(&self) -> Result<Vec<Task>, SourceError>;
}

/// Serves the hardcoded second data set.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDataSource;

#[async_trait(?Send)]
impl DataSource for MockDataSource {
    async fn dashboard_stats(&self) -> Result<Vec<StatCard>, SourceError> {
        let stats = mock::loaded_stats();
        tracing::debug!(count = stats.len(), "mock dashboard stats served");
        Ok(stats)
    }

    async fn tasks(&self) -> Result<Vec<Task>, SourceError> {
        let tasks = mock::demo_tasks();
        tracing::debug!(count = tasks.len(), "mock tasks served");
        Ok(tasks)
    }
}

/// Newest first, at most `limit` entries. Used by the "Recent Tasks" panel.
pub fn recent_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}
