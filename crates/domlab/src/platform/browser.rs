//! Browser implementations of the sandbox seams, plus the window hooks the
//! page needs.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};
use zoon::eprintln;

pub mod dom_output;
pub mod js_host;

pub use dom_output::DomOutput;
pub use js_host::JsHost;

/// Current vertical scroll offset of the page, 0 when unknown.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or_default()
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Calls `handler` with the new offset on every window scroll event.
///
/// The listener stays registered for the rest of the page session.
pub fn on_window_scroll(mut handler: impl FnMut(f64) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let scroll_closure: Closure<dyn FnMut()> = Closure::new(move || handler(scroll_offset()));
    if let Err(error) = window
        .add_event_listener_with_callback("scroll", scroll_closure.as_ref().unchecked_ref())
    {
        eprintln!("Failed to listen to window scrolling: {error:?}");
        return;
    }
    scroll_closure.forget();
}
