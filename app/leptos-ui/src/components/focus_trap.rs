use leptos::ev::KeyboardEvent;
use leptos::callback::{Callable, Callback};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

const FOCUSABLE: &str = r#"a[href], button:not([disabled]), input:not([disabled]), select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex="-1"])"#;

/// Index to focus next when Tab-cycling through `len` elements.
///
/// With nothing focused yet, Tab lands on the first element and Shift+Tab on
/// the last. Both directions wrap.
pub fn next_focus_index(len: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match (current, backwards) {
        (None, false) => 0,
        (None, true) => len - 1,
        (Some(i), false) => (i + 1) % len,
        (Some(0), true) => len - 1,
        (Some(i), true) => i - 1,
    };
    Some(next)
}

/// `on:keydown` handler for a modal panel: Escape runs `on_escape`, Tab and
/// Shift+Tab cycle through the focusable elements inside the panel.
///
/// # Example
/// ```rust,ignore
/// let on_keydown = use_focus_trap(close);
/// view! {
///     <div role="dialog" on:keydown=on_keydown>
///         <button>"First"</button>
///         <button>"Second"</button>
///     </div>
/// }
/// ```
pub fn use_focus_trap(on_escape: Callback<()>) -> impl Fn(KeyboardEvent) + Copy + 'static {
    move |ev: KeyboardEvent| match ev.key().as_str() {
        "Escape" => {
            ev.prevent_default();
            on_escape.run(());
        }
        "Tab" => cycle_focus(&ev),
        _ => {}
    }
}

fn cycle_focus(ev: &KeyboardEvent) {
    let Some(container) = ev
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return;
    };

    let focusable = focusable_elements(&container);
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    let current = active.and_then(|active| {
        focusable
            .iter()
            .position(|el| el.is_same_node(Some(&active)))
    });

    let Some(next) = next_focus_index(focusable.len(), current, ev.shift_key())
        .and_then(|idx| focusable.get(idx))
    else {
        return;
    };
    if next.focus().is_ok() {
        ev.prevent_default();
    }
}

fn focusable_elements(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
