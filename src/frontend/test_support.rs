use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Element, Event, EventTarget};

use super::dom::document;

/// Fresh container appended to the test page body.
pub fn mount_root() -> Element {
    let document = document().expect("test page has a document");
    let root = document.create_element("div").expect("create root");
    document
        .body()
        .expect("test page has a body")
        .append_child(&root)
        .expect("attach root");
    root
}

/// Resolves after the browser has run the next batch of animation frame callbacks.
pub async fn next_frame() {
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(win) = window() {
            let _ = win.request_animation_frame(&resolve);
        }
    });
    JsFuture::from(promise).await.expect("animation frame");
}

pub fn dispatch(target: &EventTarget, event_type: &str) -> bool {
    let event = Event::new(event_type).expect("create event");
    target.dispatch_event(&event).expect("dispatch event")
}
