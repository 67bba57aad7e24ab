use leptos::prelude::*;

use crate::theme::use_theme;

/// Light/dark switch. The label names the theme a click switches to.
#[component]
pub fn ThemeToggle(#[prop(optional)] class: &'static str) -> impl IntoView {
    let theme_ctx = use_theme();
    let theme = theme_ctx.theme;
    view! {
        <button
            type="button"
            class=format!("theme-toggle {class}")
            aria-pressed=move || theme.get().is_dark().to_string()
            on:click=move |_| theme_ctx.toggle()
        >
            {move || theme.get().toggle_label()}
        </button>
    }
}
