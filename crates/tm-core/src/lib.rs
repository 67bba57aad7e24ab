//! Framework-free core of the TheMachine dashboard.
//!
//! Everything the UI renders is defined here: the mock view models and their
//! seed data, the navigation table and route matching, the theme controller,
//! the settings page state, display formatting and the embedded
//! configuration. Nothing in this crate touches the DOM, so it builds and
//! tests natively.

pub mod config;
pub mod format;
pub mod mock;
pub mod nav;
pub mod settings;
pub mod source;
pub mod theme;
pub mod types;

pub use config::{ConfigError, DashboardConfig};
pub use nav::{NavIcon, NavItem, Route, NAVIGATION};
pub use source::{DataSource, Fetch, MockDataSource, SourceError};
pub use theme::{Theme, ThemeController};
