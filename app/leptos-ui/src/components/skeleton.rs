use leptos::prelude::*;

/// Pulsing placeholder lines shown while a list loads.
#[component]
pub fn SkeletonLines(#[prop(optional)] label: String) -> impl IntoView {
    view! {
        <div class="skeleton-block" role="status" aria-busy="true" aria-label=label>
            <div class="skeleton skeleton-title"></div>
            <div class="skeleton skeleton-text"></div>
            <div class="skeleton skeleton-text skeleton-short"></div>
        </div>
    }
}
