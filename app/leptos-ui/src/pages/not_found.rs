use fluent_bundle::FluentArgs;
use leptos::prelude::*;

use crate::i18n::{t, t_args};
use crate::router::{use_router, Link};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let path = use_router().location().get_untracked();
    tracing::info!(path = %path, "no route for path");

    let mut args = FluentArgs::new();
    args.set("path", path);

    view! {
        <div class="page not-found">
            <div class="page-header">
                <h1>{t("not-found-title")}</h1>
                <p class="page-subtitle">{t_args("not-found-body", &args)}</p>
            </div>
            <Link href="/" class="btn btn-primary">{t("back-to-dashboard")}</Link>
        </div>
    }
}
