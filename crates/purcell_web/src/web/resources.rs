use purcell::config::ResourceConfig;
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::dom;

fn head() -> Result<web_sys::HtmlHeadElement, String> {
    dom::document()?.head().ok_or_else(|| "no <head>".to_string())
}

/// Appends the animation stylesheet to `<head>`.
pub(super) fn inject_stylesheet(css: &str) -> Result<(), String> {
    let style = dom::create("style", "")?;
    style.set_text_content(Some(css));
    style.set_attribute("data-purcell", "").map_err(|_| "setAttribute threw".to_string())?;
    head()?
        .append_child(&style)
        .map(|_| ())
        .map_err(|_| "head.appendChild threw".to_string())
}

pub(super) fn preload_styles(urls: &[String]) -> Result<(), String> {
    let head = head()?;
    for url in urls {
        let link = dom::create("link", "")?
            .dyn_into::<web_sys::HtmlLinkElement>()
            .map_err(|_| "created <link> is not an HtmlLinkElement".to_string())?;
        link.set_rel("preload");
        link.set_as("style");
        link.set_href(url);
        head.append_child(&link)
            .map_err(|_| "head.appendChild threw".to_string())?;
        debug!(%url, "preload hint added");
    }
    Ok(())
}

/// Registers the service worker at `script_url` when the browser supports it.
pub(super) fn register_service_worker(script_url: &str) {
    let Ok(window) = dom::window() else {
        return;
    };
    let navigator = window.navigator();
    let supported = js_sys::Reflect::has(&navigator, &"serviceWorker".into()).unwrap_or(false);
    if !supported {
        debug!("service workers unsupported");
        return;
    }

    let promise = navigator.service_worker().register(script_url);
    let url = script_url.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(reg) => {
                let scope = reg
                    .dyn_into::<web_sys::ServiceWorkerRegistration>()
                    .map(|r| r.scope())
                    .unwrap_or_default();
                info!(%url, %scope, "service worker registered");
            }
            Err(err) => warn!(%url, error = ?err, "service worker registration failed"),
        }
    });
}

pub(super) fn install(cfg: &ResourceConfig) {
    if let Err(e) = preload_styles(&cfg.preload_styles) {
        warn!(error = %e, "preload hints not added");
    }
    if let Some(url) = cfg.service_worker.as_deref() {
        register_service_worker(url);
    }
}
