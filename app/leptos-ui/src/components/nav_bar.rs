use leptos::ev::MouseEvent;
use leptos::prelude::*;
use tm_core::nav;
use tm_core::{NavIcon, NavItem, NAVIGATION};

use crate::i18n::t;
use crate::router::use_router;

/// Heroicons 24px outline glyph for a nav entry.
pub fn nav_icon(icon: NavIcon) -> impl IntoView {
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" d="{}"/></svg>"#,
        icon.svg_path()
    );
    view! { <span class="sidebar-item-icon" aria-hidden="true" inner_html=svg></span> }
}

#[component]
fn NavLink(item: &'static NavItem, on_navigate: Option<Callback<()>>) -> impl IntoView {
    let router = use_router();
    let location = router.location();
    let active = move || nav::is_active(item, &location.get());

    view! {
        <a
            href=item.path
            class="sidebar-item"
            class:active=active
            aria-current=move || active().then_some("page")
            on:click=move |ev: MouseEvent| {
                if router.follow(&ev, item.path) {
                    if let Some(cb) = on_navigate {
                        cb.run(());
                    }
                }
            }
        >
            {nav_icon(item.icon)}
            <span class="sidebar-item-label">{item.label}</span>
        </a>
    }
}

/// The navigation list shared by the desktop and mobile sidebars.
#[component]
pub fn NavBar(
    /// Runs after a link is followed (the mobile sidebar closes itself here).
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <nav class="sidebar-nav" aria-label=t("main-navigation")>
            {NAVIGATION
                .iter()
                .map(|item| view! { <NavLink item on_navigate /> })
                .collect_view()}
        </nav>
    }
}
