//! History-API routing over the fixed route table.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use tm_core::Route;
use wasm_bindgen::JsValue;

/// Handle on the current location. Copy it into event handlers; context
/// lookups are only valid while components are being built.
#[derive(Clone, Copy)]
pub struct Router {
    path: ReadSignal<String>,
    set_path: WriteSignal<String>,
}

impl Router {
    /// The current pathname.
    pub fn location(&self) -> ReadSignal<String> {
        self.path
    }

    /// Push `path` onto the history stack and re-render.
    pub fn navigate(&self, path: &str) {
        if self.path.get_untracked() == path {
            return;
        }
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                tracing::warn!(path, error = ?e, "pushState failed");
            }
        }
        tracing::debug!(path, "navigate");
        self.set_path.set(path.to_string());
    }

    /// Route a click on an anchor pointing at `path`. Modified clicks are
    /// left to the browser so "open in new tab" keeps working. Returns
    /// whether the click was handled.
    pub fn follow(&self, ev: &MouseEvent, path: &str) -> bool {
        let modified = ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key();
        if ev.button() != 0 || modified {
            return false;
        }
        ev.prevent_default();
        self.navigate(path);
        true
    }
}

fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Track `location.pathname`, following back/forward navigation.
pub fn provide_router() {
    let (path, set_path) = signal(current_pathname());

    let popstate = window_event_listener(leptos::ev::popstate, move |_| {
        set_path.set(current_pathname());
    });
    on_cleanup(move || popstate.remove());

    provide_context(Router { path, set_path });
}

pub fn use_router() -> Router {
    expect_context::<Router>()
}

/// The route the current pathname resolves to.
pub fn use_route() -> Memo<Route> {
    let path = use_router().location();
    Memo::new(move |_| Route::from_path(&path.get()))
}

/// Anchor that navigates without a page load.
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] on_navigate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = href.clone();
    view! {
        <a
            href=href
            class=class
            on:click=move |ev: MouseEvent| {
                if router.follow(&ev, &target) {
                    if let Some(cb) = on_navigate {
                        cb.run(());
                    }
                }
            }
        >
            {children()}
        </a>
    }
}
