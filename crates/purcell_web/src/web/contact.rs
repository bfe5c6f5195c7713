use std::cell::RefCell;
use std::rc::Rc;

use purcell::config::ContactConfig;
use purcell::contact::{ContactForm, FormPayload};
use purcell::notify::NotificationLevel;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;

use crate::ui_model::selectors;

use super::dom;
use super::shell::Overlay;

/// Collects `name -> value` pairs. File inputs and other non-string values
/// are skipped.
fn read_fields(form: &web_sys::HtmlFormElement) -> Result<FormPayload, String> {
    let data = web_sys::FormData::new_with_form(form).map_err(|_| "FormData construction threw".to_string())?;
    let iter = js_sys::try_iter(&data)
        .map_err(|_| "FormData is not iterable".to_string())?
        .ok_or_else(|| "FormData is not iterable".to_string())?;

    let mut pairs = Vec::new();
    for entry in iter {
        let entry = entry.map_err(|_| "FormData iteration threw".to_string())?;
        let pair = js_sys::Array::from(&entry);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            pairs.push((name, value));
        }
    }
    Ok(FormPayload::from_pairs(pairs))
}

/// Element whose text is swapped for the "sending" label.
fn label_element(button: &web_sys::Element, cfg: &ContactConfig) -> web_sys::Element {
    cfg.label_selector
        .as_deref()
        .and_then(|sel| dom::query_in(button, sel))
        .unwrap_or_else(|| button.clone())
}

fn set_disabled(button: &web_sys::Element, disabled: bool) {
    if let Some(b) = button.dyn_ref::<web_sys::HtmlButtonElement>() {
        b.set_disabled(disabled);
    }
}

pub(super) fn install(cfg: &ContactConfig, overlay: Overlay) {
    let Some(form) = dom::query(&cfg.form_selector) else {
        debug!(selector = %cfg.form_selector, "no contact form in markup");
        return;
    };
    let Ok(form) = form.dyn_into::<web_sys::HtmlFormElement>() else {
        warn!(selector = %cfg.form_selector, "contact form selector is not a <form>");
        return;
    };

    let state = Rc::new(RefCell::new(ContactForm::new()));
    let cfg = cfg.clone();
    let target = form.clone();
    let res = dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();

        let Some(button) = dom::query_in(&target, selectors::SUBMIT_BUTTON) else {
            return;
        };
        let label = label_element(&button, &cfg);
        let payload = match read_fields(&target) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "contact form fields unreadable");
                FormPayload::default()
            }
        };

        let current = label.text_content().unwrap_or_default();
        if !state.borrow_mut().submit(&current, &payload) {
            debug!("contact form already sending");
            return;
        }
        label.set_text_content(Some(&cfg.sending_label));
        set_disabled(&button, true);

        let done = Rc::new({
            let state = Rc::clone(&state);
            move || {
                if let Some(original) = state.borrow_mut().complete() {
                    label.set_text_content(Some(&original));
                }
                set_disabled(&button, false);
            }
        });
        let form = target.clone();
        let message = cfg.success_message.clone();
        let finish = Rc::clone(&done);
        let res = dom::set_timeout(cfg.delay_ms, move || {
            overlay.notify(NotificationLevel::Success, message);
            form.reset();
            finish();
        });
        if let Err(e) = res {
            warn!(error = %e, "contact completion not scheduled");
            done();
        }
    });
    if let Err(e) = res {
        warn!(error = %e, "contact submit handler not installed");
    }
}
