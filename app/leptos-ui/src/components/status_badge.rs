use leptos::prelude::*;
use tm_core::types::{active_css_class, active_label, ServiceStatus};

#[component]
pub fn ActiveBadge(is_active: bool) -> impl IntoView {
    view! { <span class=active_css_class(is_active)>{active_label(is_active)}</span> }
}

/// Label/value row; the value is a green badge unless `badge` is off.
#[component]
pub fn StatusRow(status: ServiceStatus) -> impl IntoView {
    let value = if status.badge {
        view! { <span class="badge badge-green">{status.state}</span> }.into_any()
    } else {
        view! { <span class="status-value">{status.state}</span> }.into_any()
    };
    view! {
        <div class="status-row">
            <dt class="status-label">{status.label}</dt>
            <dd>{value}</dd>
        </div>
    }
}

#[component]
pub fn CapabilityChips(capabilities: Vec<String>) -> impl IntoView {
    view! {
        <ul class="chips">
            {capabilities
                .iter()
                .map(|cap| view! { <li class="chip">{tm_core::format::capability_label(cap)}</li> })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn ErrorBanner(error: String) -> impl IntoView {
    let mut args = fluent_bundle::FluentArgs::new();
    args.set("error", error);
    view! {
        <div class="error-banner" role="alert">
            {crate::i18n::t_args("load-failed", &args)}
        </div>
    }
}

/// Click handler for buttons that are shown but do nothing yet.
pub fn inert(action: &'static str, subject: impl Into<String>) -> impl Fn(leptos::ev::MouseEvent) + 'static {
    let subject = subject.into();
    move |_| tracing::debug!(action, subject = %subject, "button has no action wired")
}
