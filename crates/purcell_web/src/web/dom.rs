//! Thin `web-sys` helpers shared by the page bindings.
//!
//! Event listeners and timers live for the whole page, so their closures are
//! leaked with `forget()` once registered.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub(super) fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

pub(super) fn document() -> Result<web_sys::Document, String> {
    window()?
        .document()
        .ok_or_else(|| "no document".to_string())
}

pub(super) fn body() -> Result<web_sys::HtmlElement, String> {
    document()?.body().ok_or_else(|| "no body".to_string())
}

pub(super) fn query(selector: &str) -> Option<web_sys::Element> {
    document().ok()?.query_selector(selector).ok().flatten()
}

pub(super) fn query_in(root: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    root.query_selector(selector).ok().flatten()
}

pub(super) fn by_id(id: &str) -> Option<web_sys::Element> {
    document().ok()?.get_element_by_id(id)
}

fn collect(list: Result<web_sys::NodeList, JsValue>) -> Vec<web_sys::Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
        .collect()
}

pub(super) fn query_all(selector: &str) -> Vec<web_sys::Element> {
    match document() {
        Ok(doc) => collect(doc.query_selector_all(selector)),
        Err(_) => Vec::new(),
    }
}

pub(super) fn query_all_in(root: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    collect(root.query_selector_all(selector))
}

pub(super) fn has_class(el: &web_sys::Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub(super) fn add_class(el: &web_sys::Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub(super) fn set_class(el: &web_sys::Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Sets an inline style property. Non-HTML elements are ignored.
pub(super) fn set_style(el: &web_sys::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub(super) fn create(tag: &str, class: &str) -> Result<web_sys::Element, String> {
    let el = document()?
        .create_element(tag)
        .map_err(|_| format!("create_element({tag}) threw"))?;
    el.set_class_name(class);
    Ok(el)
}

pub(super) fn append_to_body(el: &web_sys::Element) -> Result<(), String> {
    body()?
        .append_child(el)
        .map(|_| ())
        .map_err(|_| "body.appendChild threw".to_string())
}

pub(super) fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), String>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|_| format!("addEventListener({event}) threw"))?;
    cb.forget();
    Ok(())
}

/// Like [`listen`], but hands the handler the concrete event type. Events of
/// another type are dropped.
pub(super) fn listen_as<E, F>(target: &web_sys::EventTarget, event: &str, mut handler: F) -> Result<(), String>
where
    E: JsCast,
    F: FnMut(E) + 'static,
{
    listen(target, event, move |ev: web_sys::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    })
}

pub(super) fn set_timeout<F>(delay_ms: u32, f: F) -> Result<i32, String>
where
    F: FnOnce() + 'static,
{
    let cb = Closure::once_into_js(f);
    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )
        .map_err(|_| "setTimeout threw".to_string())
}

pub(super) fn set_interval<F>(period_ms: u32, f: F) -> Result<i32, String>
where
    F: FnMut() + 'static,
{
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = window()?
        .set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            period_ms.min(i32::MAX as u32) as i32,
        )
        .map_err(|_| "setInterval threw".to_string())?;
    cb.forget();
    Ok(id)
}

pub(super) fn clear_interval(handle: i32) {
    if let Ok(w) = window() {
        w.clear_interval_with_handle(handle);
    }
}

/// Runs `frame` on every animation frame until it returns `false`.
pub(super) fn frame_loop<F>(mut frame: F) -> Result<(), String>
where
    F: FnMut(f64) -> bool + 'static,
{
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let again = Rc::clone(&slot);

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if !frame(ts) {
            // Must not be dropped while it is running.
            let done = again.borrow_mut().take();
            let _ = set_timeout(0, move || drop(done));
            return;
        }
        if let Some(cb) = again.borrow().as_ref() {
            if let Ok(w) = window() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let window = window()?;
    let first = slot.borrow();
    let cb = first
        .as_ref()
        .ok_or_else(|| "frame closure missing".to_string())?;
    let res = window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map(|_| ())
        .map_err(|_| "requestAnimationFrame threw".to_string());
    res
}

/// Milliseconds since navigation start.
pub(super) fn now_ms() -> f64 {
    window()
        .ok()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub(super) fn scroll_y() -> f64 {
    window()
        .ok()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub(super) fn viewport_height() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub(super) fn document_height() -> f64 {
    document()
        .ok()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0)
}

pub(super) fn offset_top(el: &web_sys::Element) -> f64 {
    el.dyn_ref::<web_sys::HtmlElement>()
        .map(|h| h.offset_top() as f64)
        .unwrap_or(0.0)
}

pub(super) fn offset_height(el: &web_sys::Element) -> f64 {
    el.dyn_ref::<web_sys::HtmlElement>()
        .map(|h| h.offset_height() as f64)
        .unwrap_or(0.0)
}

pub(super) fn rect(el: &web_sys::Element) -> purcell::particles::Rect {
    let r = el.get_bounding_client_rect();
    purcell::particles::Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

/// Observes `elements` and calls `on_enter(index, element)` the first time
/// each one intersects. The element is unobserved afterwards.
pub(super) fn observe_once<F>(
    elements: &[web_sys::Element],
    threshold: f64,
    root_margin: &str,
    mut on_enter: F,
) -> Result<(), String>
where
    F: FnMut(usize, web_sys::Element) + 'static,
{
    if elements.is_empty() {
        return Ok(());
    }
    let tracked: Vec<web_sys::Element> = elements.to_vec();

    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                if let Some(idx) = tracked.iter().position(|el| *el == target) {
                    on_enter(idx, target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);

    let observer = web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
        .map_err(|_| "IntersectionObserver construction threw".to_string())?;
    cb.forget();

    for el in elements {
        observer.observe(el);
    }
    Ok(())
}
