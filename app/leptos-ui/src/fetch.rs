use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;
use tm_core::{Fetch, SourceError};

/// Wait `delay_ms`, run `load`, and publish its outcome as a [`Fetch`].
///
/// The result is dropped if the owning component has been torn down by the
/// time the timer fires or the load resolves.
pub fn use_delayed_fetch<T, F, Fut>(label: &'static str, delay_ms: u32, load: F) -> ReadSignal<Fetch<T>>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, SourceError>> + 'static,
{
    let (state, set_state) = signal(Fetch::Pending);

    // Rc<Cell<bool>> is !Send; on_cleanup needs Send + Sync. WASM is single-threaded.
    let mounted = Rc::new(Cell::new(true));
    let mounted_task = Rc::clone(&mounted);

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if !mounted_task.get() {
            tracing::debug!(what = label, "unmounted before the delay fired, skipping load");
            return;
        }
        let result = load().await;
        if !mounted_task.get() {
            tracing::debug!(what = label, "unmounted while loading, dropping result");
            return;
        }
        match &result {
            Ok(_) => tracing::debug!(what = label, "load finished"),
            Err(e) => tracing::warn!(what = label, error = %e, "load failed"),
        }
        set_state.set(result.into());
    });

    let mounted_cleanup = SendWrapper::new(mounted);
    on_cleanup(move || mounted_cleanup.set(false));

    state
}
