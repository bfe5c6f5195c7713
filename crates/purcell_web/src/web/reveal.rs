//! Reveal-on-scroll observers and the statistics counters.

use std::cell::RefCell;
use std::rc::Rc;

use purcell::config::{CounterConfig, CounterPacing, RevealRule, SiteConfig, StaggerConfig};
use purcell::counter::{parse_target, CounterAnimation};
use purcell::reveal::{
    initial_style, reveal_classes, stagger_action, HiddenStyle, RevealLedger, StaggerAction,
    CARD_HIDDEN, PROCESS_CONTENT_HIDDEN, PROCESS_STEP_CLASS, SERVICE_CARD_CLASS,
};
use tracing::{debug, warn};

use crate::ui_model::selectors;

use super::dom;

fn apply_hidden(el: &web_sys::Element, style: HiddenStyle) {
    dom::set_style(el, "opacity", style.opacity);
    dom::set_style(el, "transform", style.transform);
    dom::set_style(el, "transition", style.transition);
}

fn show(el: &web_sys::Element, transform: &str) {
    dom::set_style(el, "transform", transform);
    dom::set_style(el, "opacity", "1");
}

pub(super) fn install(cfg: &SiteConfig) {
    let ledger = Rc::new(RefCell::new(RevealLedger::new()));

    for (observer, rule) in cfg.reveal.rules.iter().enumerate() {
        install_rule(observer, rule, Rc::clone(&ledger));
    }
    if let Some(stagger) = cfg.reveal.stagger.as_ref() {
        install_stagger(cfg.reveal.rules.len(), stagger, Rc::clone(&ledger));
    }
    install_counters(&cfg.counters);
}

fn install_rule(observer: usize, rule: &RevealRule, ledger: Rc<RefCell<RevealLedger>>) {
    let elements = dom::query_all(&rule.selector);
    for el in &elements {
        if let Some(style) = initial_style(rule, dom::has_class(el, SERVICE_CARD_CLASS)) {
            apply_hidden(el, style);
        }
    }
    debug!(selector = %rule.selector, count = elements.len(), "reveal rule bound");

    let rule = rule.clone();
    let res = dom::observe_once(&elements, rule.threshold, &rule.root_margin, {
        let rule = rule.clone();
        move |idx, el| {
            if !ledger.borrow_mut().first_sight(observer, idx) {
                return;
            }
            for class in reveal_classes(&rule, dom::has_class(&el, SERVICE_CARD_CLASS)) {
                dom::add_class(&el, class);
            }
        }
    });
    if let Err(e) = res {
        warn!(error = %e, selector = %rule.selector, "reveal observer not installed");
    }
}

fn install_stagger(observer: usize, cfg: &StaggerConfig, ledger: Rc<RefCell<RevealLedger>>) {
    let elements = dom::query_all(selectors::STAGGERED);
    let cards = dom::query_all(selectors::SERVICE_CARD);

    for el in &elements {
        if dom::has_class(el, SERVICE_CARD_CLASS) {
            apply_hidden(el, CARD_HIDDEN);
        } else if dom::has_class(el, PROCESS_STEP_CLASS) {
            if let Some(content) = dom::query_in(el, selectors::PROCESS_CONTENT) {
                apply_hidden(&content, PROCESS_CONTENT_HIDDEN);
            }
        }
    }

    let cfg = cfg.clone();
    let res = dom::observe_once(&elements, cfg.threshold, "0px", move |idx, el| {
        if !ledger.borrow_mut().first_sight(observer, idx) {
            return;
        }
        let is_card = dom::has_class(&el, SERVICE_CARD_CLASS);
        let card_index = cards.iter().position(|c| *c == el).unwrap_or(0);
        match stagger_action(&cfg, is_card, card_index) {
            StaggerAction::Card { delay_ms } => {
                if let Err(e) = dom::set_timeout(delay_ms, move || show(&el, "translateY(0)")) {
                    warn!(error = %e, "card stagger not scheduled");
                }
            }
            StaggerAction::ProcessStep => {
                if let Some(number) = dom::query_in(&el, selectors::PROCESS_NUMBER) {
                    dom::set_style(&number, "animation", "pulse-glow 2s infinite");
                }
                if let Some(content) = dom::query_in(&el, selectors::PROCESS_CONTENT) {
                    show(&content, "scale(1)");
                }
            }
        }
    });
    if let Err(e) = res {
        warn!(error = %e, "stagger observer not installed");
    }
}

fn install_counters(cfg: &CounterConfig) {
    let counters = dom::query_all(selectors::COUNTER);
    if counters.is_empty() {
        return;
    }
    let cfg = cfg.clone();
    let res = dom::observe_once(&counters, cfg.threshold, &cfg.root_margin.clone(), move |_, el| {
        let target = parse_target(el.get_attribute("data-target").as_deref());
        debug!(target, "counter started");
        run_counter(el, CounterAnimation::new(target, &cfg, dom::now_ms()), &cfg);
    });
    if let Err(e) = res {
        warn!(error = %e, "counter observer not installed");
    }
}

fn run_counter(el: web_sys::Element, mut anim: CounterAnimation, cfg: &CounterConfig) {
    let sep = cfg.thousands_separator.clone();
    match cfg.pacing {
        CounterPacing::FixedStep => {
            let handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
            let slot = Rc::clone(&handle);
            let res = dom::set_interval(cfg.step_ms, move || {
                let frame = anim.advance(dom::now_ms());
                el.set_text_content(Some(&anim.render(frame.value, &sep)));
                if frame.done {
                    if let Some(id) = slot.borrow_mut().take() {
                        dom::clear_interval(id);
                    }
                }
            });
            match res {
                Ok(id) => *handle.borrow_mut() = Some(id),
                Err(e) => warn!(error = %e, "counter interval not started"),
            }
        }
        CounterPacing::FrameTime => {
            let res = dom::frame_loop(move |ts| {
                let frame = anim.advance(ts);
                el.set_text_content(Some(&anim.render(frame.value, &sep)));
                !frame.done
            });
            if let Err(e) = res {
                warn!(error = %e, "counter frame loop not started");
            }
        }
    }
}
