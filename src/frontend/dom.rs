use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    window, Document, Element, HtmlElement, HtmlScriptElement, KeyboardEvent, ScrollBehavior,
    ScrollIntoViewOptions, VisibilityState,
};

use crate::clipboard::ClipboardError;
use crate::devtools::{is_blocked, KeyChord};
use crate::scroll_spy::{FrameThrottle, SectionBounds};
use crate::selectors::{
    CHAT_WIDGET_SCRIPT_ID, FAVICON_SELECTOR, IN_PAGE_ANCHOR_SELECTOR, SECTION_SELECTOR,
};
use crate::smooth_scroll::anchor_target;
use crate::visibility::{TabIdentity, TabPresence};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(nodes) = document().and_then(|doc| doc.query_selector_all(SECTION_SELECTOR).ok()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            SectionBounds::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect()
}

pub fn install_visibility_handler() -> Option<EventListener> {
    let document = document()?;
    let identity = TabIdentity::capture(document.title());
    let target = document.clone();

    Some(EventListener::new(&target, "visibilitychange", move |_| {
        let presence =
            TabPresence::from_visible(document.visibility_state() == VisibilityState::Visible);
        document.set_title(identity.title(presence));

        if let Ok(Some(favicon)) = document.query_selector(FAVICON_SELECTOR) {
            let _ = favicon.set_attribute("href", identity.favicon(presence));
        }
    }))
}

pub fn install_devtools_blocker() -> Option<EventListener> {
    let document = document()?;

    Some(EventListener::new_with_options(
        &document,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let chord = KeyChord {
                key: event.key(),
                ctrl: event.ctrl_key(),
                shift: event.shift_key(),
            };
            if is_blocked(&chord) {
                event.prevent_default();
            }
        },
    ))
}

pub fn install_smooth_scroll() -> Option<EventListener> {
    let document = document()?;
    let lookup = document.clone();

    Some(EventListener::new_with_options(
        &document,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(anchor) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest(IN_PAGE_ANCHOR_SELECTOR).ok().flatten())
            else {
                return;
            };
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(target) = anchor_target(&href).and_then(|id| lookup.get_element_by_id(id)) else {
                return;
            };

            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        },
    ))
}

pub fn load_chat_widget(src: &str) {
    let Some(document) = document() else {
        return;
    };
    if document.get_element_by_id(CHAT_WIDGET_SCRIPT_ID).is_some() {
        return;
    }
    let Some(script) = document
        .create_element("script")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlScriptElement>().ok())
    else {
        return;
    };

    script.set_id(CHAT_WIDGET_SCRIPT_ID);
    script.set_async(true);
    script.set_src(src);
    script.set_charset("UTF-8");
    let _ = script.set_attribute("crossorigin", "*");

    if let Some(head) = document.head() {
        let _ = head.append_child(&script);
    }
}

/// Scroll, resize and load listeners that run `on_frame` at most once per
/// animation frame. Dropping the watch removes the listeners.
pub struct ScrollWatch {
    _listeners: Vec<EventListener>,
    _pending: Rc<RefCell<Option<AnimationFrame>>>,
}

pub fn watch_scroll(on_frame: impl Fn() + 'static) -> Option<ScrollWatch> {
    let window = window()?;
    let on_frame: Rc<dyn Fn()> = Rc::new(on_frame);
    let throttle = Rc::new(FrameThrottle::default());
    let pending: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

    let schedule: Rc<dyn Fn()> = {
        let pending = Rc::clone(&pending);
        Rc::new(move || {
            if !throttle.try_schedule() {
                return;
            }
            let throttle = Rc::clone(&throttle);
            let on_frame = Rc::clone(&on_frame);
            let handle = request_animation_frame(move |_| {
                throttle.frame_ran();
                on_frame();
            });
            *pending.borrow_mut() = Some(handle);
        })
    };

    let listeners = ["scroll", "resize", "load"]
        .into_iter()
        .map(|event_type| {
            let schedule = Rc::clone(&schedule);
            EventListener::new(&window, event_type, move |_| schedule())
        })
        .collect();

    schedule();

    Some(ScrollWatch {
        _listeners: listeners,
        _pending: pending,
    })
}

pub async fn write_clipboard_text(text: &str) -> Result<(), ClipboardError> {
    let navigator: JsValue = window().ok_or(ClipboardError::Unavailable)?.navigator().into();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }

    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|_| ClipboardError::Unavailable)?;
    let Some(write_text) = write_text.dyn_ref::<Function>() else {
        return Err(ClipboardError::Unavailable);
    };

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|err| ClipboardError::Rejected(describe_js_error(&err)))?
        .dyn_into::<Promise>()
        .map_err(|_| ClipboardError::Unavailable)?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError::Rejected(describe_js_error(&err)))
}

fn describe_js_error(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| "unknown error".to_string())
}
