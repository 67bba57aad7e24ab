//! Browser side of the theme controller: `localStorage`, the
//! `prefers-color-scheme` media query and the `<html>` class list.

use leptos::prelude::*;
use reactive_graph::owner::LocalStorage;
use tm_core::config::ThemeConfig;
use tm_core::theme::{
    ColorSchemeProbe, MemoryStore, PreferenceStore, StorageError, ThemeRoot,
};
use tm_core::{Theme, ThemeController};

/// `window.localStorage`.
pub struct BrowserStorage(web_sys::Storage);

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        // Throws when storage is disabled (e.g. some private-browsing modes).
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Read(format!("{e:?}")))?;
        storage.map(Self).ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

/// Falls back to memory when `localStorage` cannot be opened, so the toggle
/// still works for the lifetime of the page.
pub enum ThemeStorage {
    Browser(BrowserStorage),
    Memory(MemoryStore),
}

impl ThemeStorage {
    pub fn open() -> Self {
        match BrowserStorage::open() {
            Ok(storage) => ThemeStorage::Browser(storage),
            Err(e) => {
                tracing::warn!(error = %e, "localStorage unavailable, theme will not persist");
                ThemeStorage::Memory(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for ThemeStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            ThemeStorage::Browser(s) => s.get(key),
            ThemeStorage::Memory(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            ThemeStorage::Browser(s) => s.set(key, value),
            ThemeStorage::Memory(s) => s.set(key, value),
        }
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`, read once.
pub struct MediaQueryProbe;

impl ColorSchemeProbe for MediaQueryProbe {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }
}

/// Toggles the dark class on `document.documentElement`.
pub struct DocumentRoot {
    dark_class: String,
}

impl DocumentRoot {
    pub fn new(dark_class: impl Into<String>) -> Self {
        Self {
            dark_class: dark_class.into(),
        }
    }
}

impl ThemeRoot for DocumentRoot {
    fn apply(&self, theme: Theme) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            tracing::warn!("no document element to apply the theme to");
            return;
        };
        if let Err(e) = root
            .class_list()
            .toggle_with_force(&self.dark_class, theme.is_dark())
        {
            tracing::warn!(error = ?e, "could not update the root class list");
        }
    }
}

type BrowserThemeController = ThemeController<ThemeStorage, DocumentRoot>;

/// Theme signal plus the controller behind it.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    controller: StoredValue<BrowserThemeController, LocalStorage>,
}

/// Resolve and apply the initial theme, then expose it as context.
pub fn provide_theme(config: &ThemeConfig) {
    let controller = ThemeController::init(
        ThemeStorage::open(),
        &MediaQueryProbe,
        DocumentRoot::new(config.dark_class.clone()),
        config.storage_key.clone(),
    );
    let (theme, set_theme) = signal(controller.theme());
    provide_context(ThemeContext {
        theme,
        set_theme,
        controller: StoredValue::new_local(controller),
    });
}

impl ThemeContext {
    /// Flip light/dark, updating the document root and storage.
    pub fn toggle(&self) {
        if let Some(next) = self.controller.try_update_value(|c| c.toggle()) {
            self.set_theme.set(next);
        }
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
