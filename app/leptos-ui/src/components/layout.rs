use leptos::html;
use leptos::prelude::*;
use tm_core::nav;

use crate::components::focus_trap::use_focus_trap;
use crate::components::nav_bar::NavBar;
use crate::components::theme_toggle::ThemeToggle;
use crate::i18n::t;
use crate::router::use_router;
use crate::state::use_app_state;

const MENU_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" d="M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5"/></svg>"#;
const CLOSE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" d="M6 18L18 6M6 6l12 12"/></svg>"#;

#[component]
fn Brand() -> impl IntoView {
    let name = use_app_state().config.with_value(|cfg| cfg.app.name.trim().to_string());
    let name = if name.is_empty() { t("app-name") } else { name };
    view! {
        <div class="sidebar-brand">
            <span class="sidebar-brand-name">{name}</span>
        </div>
    }
}

/// Page frame: mobile sidebar dialog, fixed desktop sidebar, top bar.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let location = use_router().location();
    let (sidebar_open, set_sidebar_open) = signal(false);
    let close_sidebar = Callback::new(move |_: ()| set_sidebar_open.set(false));
    let on_keydown = use_focus_trap(close_sidebar);

    // Move focus into the dialog when it opens.
    let close_btn = NodeRef::<html::Button>::new();
    Effect::new(move |_| {
        if sidebar_open.get() {
            if let Some(btn) = close_btn.get() {
                if let Err(e) = btn.focus() {
                    tracing::debug!(error = ?e, "could not focus the sidebar close button");
                }
            }
        }
    });

    let title = move || nav::page_title(&location.get());

    view! {
        <div class="app-shell">
            <div
                class="mobile-sidebar"
                class:open=move || sidebar_open.get()
                role="dialog"
                aria-modal="true"
                aria-hidden=move || (!sidebar_open.get()).to_string()
                on:keydown=on_keydown
            >
                <div
                    class="mobile-sidebar-overlay"
                    aria-hidden="true"
                    on:click=move |_| close_sidebar.run(())
                ></div>
                <div class="mobile-sidebar-panel">
                    <button
                        type="button"
                        class="sidebar-close-btn"
                        aria-label=t("close-sidebar")
                        node_ref=close_btn
                        on:click=move |_| close_sidebar.run(())
                        inner_html=CLOSE_SVG
                    ></button>
                    <Brand />
                    <NavBar on_navigate=close_sidebar />
                </div>
            </div>

            <aside class="sidebar desktop-sidebar">
                <Brand />
                <NavBar />
                <div class="sidebar-footer">
                    <ThemeToggle class="sidebar-theme-toggle" />
                </div>
            </aside>

            <div class="main-column">
                <header class="topbar">
                    <button
                        type="button"
                        class="sidebar-open-btn"
                        aria-label=t("open-sidebar")
                        aria-expanded=move || sidebar_open.get().to_string()
                        on:click=move |_| set_sidebar_open.set(true)
                        inner_html=MENU_SVG
                    ></button>
                    <div class="topbar-title">{title}</div>
                    <ThemeToggle class="topbar-theme-toggle" />
                </header>
                <main class="page-content">{children()}</main>
            </div>
        </div>
    }
}
