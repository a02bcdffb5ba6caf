//! Browser collaborators: layout queries, event listeners and
//! intersection observers, each registration wrapped in a `Subscription`.

use page::{ElementRect, GateOptions, LayoutSample, PageMetrics, ProgressSource};
use runtime::Subscription;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, EventTarget, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn viewport_width() -> Option<f64> {
    window().ok()?.inner_width().ok()?.as_f64()
}

/// Read the current scroll and layout state. Returns `None` when the page
/// is not mounted.
pub fn layout_sample(source: &ProgressSource) -> Option<LayoutSample> {
    let window = window().ok()?;
    let root = window.document()?.document_element()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;

    let element = match source {
        ProgressSource::Page => None,
        ProgressSource::Element(id) => element_by_id(id).map(|el| {
            let rect = el.get_bounding_client_rect();
            ElementRect {
                top: rect.y(),
                height: rect.height(),
            }
        }),
    };

    Some(LayoutSample {
        page: PageMetrics {
            scroll_y: window.scroll_y().ok()?,
            scroll_height: root.scroll_height() as f64,
            viewport_height,
        },
        element,
    })
}

/// Passive listener for `event` on `target`, removed when the returned
/// subscription is released.
pub fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut() + 'static,
) -> Result<Subscription, JsValue> {
    let closure = Closure::<dyn FnMut()>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;

    let target = target.clone();
    Ok(Subscription::new(event, move || {
        if let Err(err) =
            target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            tracing::warn!(event, error = ?err, "failed to remove listener");
        }
        drop(closure);
    }))
}

/// Observe `element` and report each entry's intersection ratio.
pub fn observe_intersection(
    element: &Element,
    options: &GateOptions,
    mut on_ratio: impl FnMut(f64) + 'static,
) -> Result<Subscription, JsValue> {
    let closure = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_ratio(entry.intersection_ratio());
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(Subscription::new("intersection-observer", move || {
        observer.disconnect();
        drop(closure);
    }))
}
