//! Decorative effects: typing, cursor follower, particles, card hover and the
//! konami easter egg.

use std::cell::RefCell;
use std::rc::Rc;

use purcell::config::{AmbientConfig, CursorConfig, KonamiConfig, SiteConfig, TypingConfig};
use purcell::cursor::CursorFollower;
use purcell::format::fmt_fixed;
use purcell::konami::KonamiDetector;
use purcell::notify::NotificationLevel;
use purcell::particles::{cards, ParticleField, BURST_LIFETIME_MS, SPARKLE_LIFETIME_MS};
use purcell::typing::Typewriter;
use tracing::{debug, info, warn};

use crate::ui_model::{classes, selectors};

use super::dom;
use super::shell::Overlay;

fn px(v: f64) -> String {
    format!("{}px", fmt_fixed(v, 2))
}

pub(super) fn install(cfg: &SiteConfig, overlay: Overlay) {
    let fx = &cfg.effects;
    if let Some(typing) = fx.typing.as_ref() {
        install_typing(typing);
    }
    if let Some(cursor) = fx.cursor.as_ref() {
        install_cursor(cursor, overlay);
    }
    if let Some(ambient) = fx.ambient_particles.as_ref() {
        // Offset the seed so the ambient stream differs from the hover streams.
        install_ambient(ambient, fx.seed.wrapping_add(1));
    }
    if fx.card_sparkle {
        install_card_sparkle(fx.seed.wrapping_add(2));
    }
    if fx.card_hover {
        install_card_hover();
    }
    if let Some(konami) = fx.konami.as_ref() {
        install_konami(konami, overlay);
    }
}

fn install_typing(cfg: &TypingConfig) {
    let Some(el) = dom::query(&cfg.selector) else {
        debug!(selector = %cfg.selector, "typing target missing");
        return;
    };
    let text = el.text_content().unwrap_or_default();
    el.set_text_content(Some(""));
    dom::set_style(&el, "border-right", &cfg.caret);

    let writer = Rc::new(RefCell::new(Typewriter::new(&text)));
    let cfg = cfg.clone();
    let res = dom::set_timeout(cfg.start_delay_ms, move || type_next(el, writer, cfg));
    if let Err(e) = res {
        warn!(error = %e, "typing not scheduled");
    }
}

fn type_next(el: web_sys::Element, writer: Rc<RefCell<Typewriter>>, cfg: TypingConfig) {
    let next = writer.borrow_mut().advance();
    let res = match next {
        Some(visible) => {
            el.set_text_content(Some(&visible));
            let delay = cfg.char_delay_ms;
            dom::set_timeout(delay, move || type_next(el, writer, cfg))
        }
        None => dom::set_timeout(cfg.caret_hold_ms, move || {
            dom::set_style(&el, "border-right", "none");
        }),
    };
    if let Err(e) = res {
        warn!(error = %e, "typing step not scheduled");
    }
}

fn install_cursor(cfg: &CursorConfig, overlay: Overlay) {
    let Ok(doc) = dom::document() else {
        return;
    };
    let follower = Rc::new(RefCell::new(CursorFollower::new(cfg)));
    overlay.cursor.set(Some(follower.borrow().frame()));

    let moved = Rc::clone(&follower);
    let res = dom::listen_as::<web_sys::MouseEvent, _>(&doc, "mousemove", move |ev| {
        moved
            .borrow_mut()
            .pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
    });
    if let Err(e) = res {
        warn!(error = %e, "cursor move handler not installed");
    }

    let left = Rc::clone(&follower);
    if let Err(e) = dom::listen(&doc, "mouseleave", move |_| left.borrow_mut().pointer_left()) {
        warn!(error = %e, "cursor leave handler not installed");
    }

    for el in dom::query_all(&cfg.hover_selector) {
        let enter = Rc::clone(&follower);
        let leave = Rc::clone(&follower);
        let _ = dom::listen(&el, "mouseenter", move |_| enter.borrow_mut().set_hovering(true));
        let _ = dom::listen(&el, "mouseleave", move |_| leave.borrow_mut().set_hovering(false));
    }

    let res = dom::frame_loop(move |_| {
        let frame = follower.borrow_mut().step();
        overlay.cursor.set(Some(frame));
        true
    });
    if let Err(e) = res {
        warn!(error = %e, "cursor frame loop not started");
    }
}

fn remove_later(el: web_sys::Element, after_ms: u32) {
    if let Err(e) = dom::set_timeout(after_ms, move || el.remove()) {
        warn!(error = %e, "element removal not scheduled");
    }
}

fn install_ambient(cfg: &AmbientConfig, seed: u64) {
    let container = match dom::create("div", classes::PARTICLES) {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "particle container not created");
            return;
        }
    };
    if let Err(e) = dom::append_to_body(&container) {
        warn!(error = %e, "particle container not attached");
        return;
    }

    let mut field = ParticleField::new(seed);
    let lifetime = cfg.lifetime_ms;
    let res = dom::set_interval(cfg.spawn_interval_ms, move || {
        let p = field.ambient();
        let Ok(el) = dom::create("div", classes::PARTICLE) else {
            return;
        };
        dom::set_style(&el, "left", &format!("{}vw", fmt_fixed(p.left_vw, 2)));
        dom::set_style(&el, "animation-duration", &format!("{}s", fmt_fixed(p.duration_s, 2)));
        dom::set_style(&el, "opacity", &fmt_fixed(p.opacity, 2));
        if container.append_child(&el).is_ok() {
            remove_later(el, lifetime);
        }
    });
    match res {
        Ok(_) => debug!(seed, "ambient particles running"),
        Err(e) => warn!(error = %e, "ambient particles not started"),
    }
}

fn install_card_sparkle(seed: u64) {
    let field = Rc::new(RefCell::new(ParticleField::new(seed)));
    for card in dom::query_all(selectors::SERVICE_CARD) {
        let field = Rc::clone(&field);
        let target = card.clone();
        let res = dom::listen(&card, "mouseenter", move |_| {
            let sparkles = field.borrow_mut().sparkles(dom::rect(&target));
            for s in sparkles {
                let Ok(el) = dom::create("div", classes::SPARKLE) else {
                    continue;
                };
                dom::set_style(&el, "left", &px(s.x));
                dom::set_style(&el, "top", &px(s.y));
                if dom::append_to_body(&el).is_err() {
                    continue;
                }
                let rising = el.clone();
                let rise = format!("translateY(-{}) scale(0)", px(s.rise));
                let _ = dom::set_timeout(16, move || {
                    dom::set_style(&rising, "transform", &rise);
                    dom::set_style(&rising, "opacity", "0");
                });
                remove_later(el, SPARKLE_LIFETIME_MS);
            }
        });
        if let Err(e) = res {
            warn!(error = %e, "card sparkle not installed");
        }
    }
}

/// Spawns a ring of gold particles centred on `anchor`.
pub(super) fn gold_burst(field: &mut ParticleField, anchor: &web_sys::Element) {
    let (cx, cy) = dom::rect(anchor).center();
    let burst = match dom::create("div", classes::GOLD_BURST) {
        Ok(b) => b,
        Err(e) => {
            warn!(error = %e, "gold burst not created");
            return;
        }
    };
    dom::set_style(&burst, "left", &px(cx));
    dom::set_style(&burst, "top", &px(cy));
    if dom::append_to_body(&burst).is_err() {
        return;
    }

    for p in field.burst() {
        let Ok(el) = dom::create("div", classes::GOLD_PARTICLE) else {
            continue;
        };
        dom::set_style(&el, "width", &px(p.size));
        dom::set_style(&el, "height", &px(p.size));
        dom::set_style(&el, "--end-x", &px(p.end_x));
        dom::set_style(&el, "--end-y", &px(p.end_y));
        if burst.append_child(&el).is_err() {
            continue;
        }
        let _ = dom::set_timeout(p.delay_ms, move || {
            dom::add_class(&el, classes::ANIMATE);
            dom::set_style(&el, "transform", &format!("translate({}, {})", px(p.end_x), px(p.end_y)));
        });
    }
    remove_later(burst, BURST_LIFETIME_MS);
}

fn install_card_hover() {
    for (index, card) in dom::query_all(selectors::SERVICE_CARD).into_iter().enumerate() {
        dom::set_style(&card, "animation-delay", &cards::entrance_delay(index));

        let particles = dom::query_all_in(&card, selectors::CARD_PARTICLE);
        let icon = dom::query_in(&card, selectors::SERVICE_ICON);

        let (c, ps, ic) = (card.clone(), particles.clone(), icon.clone());
        let _ = dom::listen(&card, "mouseenter", move |_| {
            for (p_index, p) in ps.iter().enumerate() {
                dom::set_style(p, "animation", cards::PARTICLE_ANIMATION);
                dom::set_style(p, "animation-delay", &cards::particle_delay(p_index));
            }
            dom::set_style(&c, "transform", cards::HOVER_TRANSFORM);
            dom::set_style(&c, "transition", cards::HOVER_TRANSITION);
            dom::set_style(&c, "box-shadow", cards::HOVER_SHADOW);
            if let Some(icon) = ic.as_ref() {
                dom::set_style(icon, "transform", cards::ICON_TRANSFORM);
                dom::set_style(icon, "transition", cards::ICON_TRANSITION);
            }
        });

        let c = card.clone();
        let _ = dom::listen(&card, "mouseleave", move |_| {
            for p in &particles {
                dom::set_style(p, "animation", "");
            }
            dom::set_style(&c, "transform", "");
            dom::set_style(&c, "box-shadow", "");
            if let Some(icon) = icon.as_ref() {
                dom::set_style(icon, "transform", "");
            }
        });

        let res = dom::set_timeout(cards::FLOAT_START_MS, move || {
            dom::set_style(&card, "animation", cards::FLOAT_ANIMATION);
            dom::set_style(&card, "animation-delay", &cards::float_delay(index));
        });
        if let Err(e) = res {
            warn!(error = %e, "card float not scheduled");
        }
    }
}

fn install_konami(cfg: &KonamiConfig, overlay: Overlay) {
    let Ok(doc) = dom::document() else {
        return;
    };
    let mut detector = KonamiDetector::new();
    let cfg = cfg.clone();
    let res = dom::listen_as::<web_sys::KeyboardEvent, _>(&doc, "keydown", move |ev| {
        if !detector.push(&ev.key()) {
            return;
        }
        info!("konami code entered");
        let Ok(body) = dom::body() else {
            return;
        };
        let _ = body.style().set_property("filter", &cfg.filter);
        overlay.notify(NotificationLevel::Success, cfg.message.clone());
        let _ = dom::set_timeout(cfg.duration_ms, move || {
            let _ = body.style().set_property("filter", "none");
        });
    });
    if let Err(e) = res {
        warn!(error = %e, "konami listener not installed");
    }
}
