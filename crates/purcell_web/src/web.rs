use leptos::prelude::*;
use purcell::config::{ConfigError, LoadingConfig, SiteConfig, Variant};
use tracing::{debug, info, warn};

use crate::ui_model::{enabled_effects, selectors, PageEffect, CONFIG_ELEMENT_ID, STYLESHEET};

mod contact;
mod dom;
mod effects;
mod logging;
mod nav;
mod resources;
mod reveal;
mod shell;

use shell::{CursorDot, LoadingSplash, Overlay, ScrollProgress, ToastStack};

/// Reads the embedded `<script id="purcell-config" type="application/json">`.
/// A page without one gets the default preset.
fn load_config() -> (SiteConfig, Option<ConfigError>) {
    let raw = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    match raw {
        Some(raw) if !raw.trim().is_empty() => match SiteConfig::from_json(&raw) {
            Ok(cfg) => (cfg, None),
            Err(e) => (SiteConfig::preset(Variant::default()), Some(e)),
        },
        _ => (SiteConfig::preset(Variant::default()), None),
    }
}

pub fn start() {
    console_error_panic_hook::set_once();

    let (cfg, err) = load_config();
    logging::init(cfg.max_level());
    if let Some(e) = err {
        warn!(error = %e, "embedded config rejected, using defaults");
    }

    let effects: Vec<&'static str> = enabled_effects(&cfg).into_iter().map(PageEffect::label).collect();
    info!(variant = cfg.variant.label(), ?effects, "purcell starting");

    mount_to_body(move || view! { <App cfg=cfg /> });
}

/// Fades and then drops the splash, both the rendered one and any `.loading`
/// element already present in the markup.
fn schedule_loading(cfg: &LoadingConfig, overlay: Overlay, markup: Option<web_sys::Element>) {
    let fade_ms = cfg.fade_ms;
    let res = dom::set_timeout(cfg.hide_after_ms, move || {
        let mut started = false;
        overlay.loading.update(|l| started = l.begin_fade());
        if let Some(el) = markup.as_ref() {
            dom::set_style(el, "opacity", "0");
        }
        if !started {
            return;
        }
        let res = dom::set_timeout(fade_ms, move || {
            overlay.loading.update(|l| {
                l.finish();
            });
            if let Some(el) = markup {
                el.remove();
            }
            debug!("loading screen removed");
        });
        if let Err(e) = res {
            warn!(error = %e, "loading removal not scheduled");
        }
    });
    if let Err(e) = res {
        warn!(error = %e, "loading fade not scheduled");
    }
}

#[component]
fn App(cfg: SiteConfig) -> impl IntoView {
    let overlay = Overlay::new(&cfg);

    if let Err(e) = resources::inject_stylesheet(STYLESHEET) {
        warn!(error = %e, "stylesheet not injected");
    }

    // A `.loading` element in the markup takes the place of the rendered splash.
    let markup_splash = dom::query(selectors::LOADING);
    let splash = match cfg.loading.clone() {
        Some(loading) => {
            schedule_loading(&loading, overlay, markup_splash.clone());
            markup_splash.is_none().then_some(loading)
        }
        None => None,
    };

    nav::install(&cfg, overlay);
    reveal::install(&cfg);
    effects::install(&cfg, overlay);
    contact::install(&cfg.contact, overlay);
    resources::install(&cfg.resources);

    let cursor_size = cfg.effects.cursor.as_ref().map(|c| c.size_px);
    let show_progress = cfg.effects.scroll_progress;

    view! {
        {splash.map(|loading| view! { <LoadingSplash loading=overlay.loading cfg=loading /> })}
        {show_progress.then(|| view! { <ScrollProgress progress=overlay.progress /> })}
        {cursor_size.map(|size_px| view! { <CursorDot cursor=overlay.cursor size_px=size_px /> })}
        <ToastStack toasts=overlay.toasts />
    }
}
