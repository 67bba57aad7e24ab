//! Light/dark theme flag.
//!
//! Resolution order on start-up: the value stored under the configured key,
//! then the OS color-scheme preference, then light. Every change is written
//! back to the store and applied to the document root. The browser pieces
//! live behind three small traits so the controller runs natively in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label of the button that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}', expected \"light\" or \"dark\"")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

// ---------------------------------------------------------------------------
// Seams
// ---------------------------------------------------------------------------

/// Key/value preference storage (browser `localStorage` in production).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// OS-level color scheme query.
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> bool;
}

impl<F: Fn() -> bool> ColorSchemeProbe for F {
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// The styling root the active theme is reflected onto.
pub trait ThemeRoot {
    fn apply(&self, theme: Theme);
}

/// In-memory store, used in tests and when `localStorage` is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Pick the initial theme: stored value, then OS preference, then light.
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.map(str::parse::<Theme>) {
        Some(Ok(theme)) => theme,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "ignoring stored theme");
            fallback(prefers_dark)
        }
        None => fallback(prefers_dark),
    }
}

fn fallback(prefers_dark: bool) -> Theme {
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Owns the theme flag and keeps store and root in sync with it.
pub struct ThemeController<S, R> {
    theme: Theme,
    key: String,
    store: S,
    root: R,
}

impl<S: PreferenceStore, R: ThemeRoot> ThemeController<S, R> {
    /// Resolve the initial theme and apply it to `root`.
    ///
    /// Nothing is written to the store here; only explicit changes persist.
    pub fn init(store: S, probe: &impl ColorSchemeProbe, root: R, key: impl Into<String>) -> Self {
        let key = key.into();
        let stored = match store.get(&key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "could not read theme preference");
                None
            }
        };
        // Only consult the media query when nothing usable is stored.
        let prefers_dark = stored
            .as_deref()
            .map_or(true, |v| v.parse::<Theme>().is_err())
            && probe.prefers_dark();
        let theme = resolve_initial(stored.as_deref(), prefers_dark);
        root.apply(theme);
        tracing::info!(theme = %theme, "theme initialised");
        Self {
            theme,
            key,
            store,
            root,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the flag, apply it and persist it. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.root.apply(theme);
        if let Err(e) = self.store.set(&self.key, theme.as_str()) {
            tracing::warn!(error = %e, key = %self.key, "could not persist theme preference");
        }
        tracing::debug!(theme = %theme, "theme changed");
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self) -> &R {
        &self.root
    }
}
