use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use leptos::prelude::*;
use reactive_graph::owner::LocalStorage;
use unic_langid::LanguageIdentifier;

const EN_FTL: &str = include_str!("locales/en.ftl");

/// Fluent message catalogue for the page copy.
pub struct I18n {
    bundle: FluentBundle<FluentResource>,
}

impl I18n {
    pub fn english() -> Self {
        Self::from_ftl("en-US", EN_FTL)
    }

    /// Build a catalogue from FTL text. Parse errors are logged and the
    /// messages that did parse are kept.
    pub fn from_ftl(lang: &str, ftl: &str) -> Self {
        let lang_id: LanguageIdentifier = lang.parse().unwrap_or_default();
        let resource = match FluentResource::try_new(ftl.to_string()) {
            Ok(res) => res,
            Err((res, errors)) => {
                tracing::warn!(lang, errors = errors.len(), "FTL resource has syntax errors");
                res
            }
        };
        let mut bundle = FluentBundle::new(vec![lang_id]);
        // Keep plain strings; the isolation marks show up in DOM text tests.
        bundle.set_use_isolating(false);
        if let Err(errors) = bundle.add_resource(resource) {
            tracing::warn!(lang, errors = errors.len(), "duplicate FTL messages ignored");
        }
        Self { bundle }
    }

    /// Look up `key`; unknown keys come back verbatim.
    pub fn t(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn t_args(&self, key: &str, args: &FluentArgs) -> String {
        self.format(key, Some(args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let Some(pattern) = self.bundle.get_message(key).and_then(|msg| msg.value()) else {
            tracing::warn!(key, "missing translation");
            return key.to_string();
        };
        let mut errors = vec![];
        let text = self.bundle.format_pattern(pattern, args, &mut errors).to_string();
        if !errors.is_empty() {
            tracing::warn!(key, errors = errors.len(), "translation formatted with errors");
        }
        text
    }
}

/// FluentBundle holds RefCells, so it lives in local (non-Send) storage.
type I18nStore = StoredValue<I18n, LocalStorage>;

/// Call once near the root; `t` and `t_args` work below it.
pub fn provide_i18n() {
    let store: I18nStore = StoredValue::new_local(I18n::english());
    provide_context(store);
}

pub fn t(key: &str) -> String {
    let store = expect_context::<I18nStore>();
    store.with_value(|i18n| i18n.t(key))
}

pub fn t_args(key: &str, args: &FluentArgs) -> String {
    let store = expect_context::<I18nStore>();
    store.with_value(|i18n| i18n.t_args(key, args))
}
