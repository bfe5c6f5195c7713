//! Navigation: active link tracking, navbar chrome, mobile menu and smooth
//! scrolling to in-page sections.

use std::cell::RefCell;
use std::rc::Rc;

use purcell::config::{NavConfig, SiteConfig};
use purcell::debounce::Debouncer;
use purcell::navbar::{scroll_destination, MobileMenu, NavbarState, ScrollDestination};
use purcell::tracker::{fragment_target, ActiveSectionTracker, NavLinkView, Section, SectionLayout};
use purcell::{format::fmt_fixed, scroll};
use tracing::{debug, warn};

use crate::ui_model::{classes, selectors};

use super::dom;
use super::effects;
use super::shell::Overlay;

/// Reads `section[id]` geometry from the live DOM on every snapshot, so
/// layout changes after load are picked up.
struct DomSections;

impl SectionLayout for DomSections {
    fn snapshot(&self) -> Vec<Section> {
        dom::query_all(selectors::SECTIONS)
            .iter()
            .filter_map(|el| {
                let id = el.get_attribute("id")?;
                Some(Section::new(id, dom::offset_top(el), dom::offset_height(el)))
            })
            .collect()
    }
}

struct DomNavLink {
    el: web_sys::Element,
    href: Option<String>,
    class: String,
}

impl NavLinkView for DomNavLink {
    fn target(&self) -> Option<&str> {
        self.href.as_deref().and_then(fragment_target)
    }

    fn set_active(&mut self, active: bool) {
        dom::set_class(&self.el, &self.class, active);
    }
}

type Tracker = ActiveSectionTracker<DomSections, DomNavLink>;

pub(super) fn install(cfg: &SiteConfig, overlay: Overlay) {
    let nav = cfg.nav.clone();

    let links: Vec<DomNavLink> = dom::query_all(selectors::NAV_LINK)
        .into_iter()
        .map(|el| DomNavLink {
            href: el.get_attribute("href"),
            el,
            class: nav.active_class.clone(),
        })
        .collect();
    debug!(links = links.len(), "nav links bound");

    let tracker: Rc<RefCell<Tracker>> = Rc::new(RefCell::new(ActiveSectionTracker::new(
        DomSections,
        links,
        nav.header_offset,
    )));
    tracker.borrow_mut().update(dom::scroll_y());

    install_scroll(cfg, &nav, Rc::clone(&tracker), overlay);
    let menu = install_menu(cfg, &nav);
    install_links(&nav, menu);
}

fn install_scroll(cfg: &SiteConfig, nav: &NavConfig, tracker: Rc<RefCell<Tracker>>, overlay: Overlay) {
    let Ok(window) = dom::window() else {
        return;
    };
    let navbar = dom::query(selectors::NAVBAR);
    let hero = cfg
        .effects
        .parallax
        .as_ref()
        .and_then(|p| dom::query(&p.selector).map(|el| (el, p.factor)));
    let show_progress = cfg.effects.scroll_progress;

    let nav = nav.clone();
    let mut chrome = NavbarState::new();
    let debouncer = nav
        .active_debounce_ms
        .map(|ms| Rc::new(RefCell::new(Debouncer::new(ms))));

    let res = dom::listen(&window, "scroll", move |_| {
        let y = dom::scroll_y();

        if let Some(bar) = navbar.as_ref() {
            let look = chrome.update(&nav, y);
            dom::set_class(bar, classes::NAVBAR_SCROLLED, look.scrolled);
            if nav.hide_on_scroll_after.is_some() {
                let t = if look.hidden { "translateY(-100%)" } else { "translateY(0)" };
                dom::set_style(bar, "transform", t);
            }
        }

        if let Some((el, factor)) = hero.as_ref() {
            if let Some(offset) = scroll::parallax_offset(y, dom::offset_height(el), *factor) {
                dom::set_style(el, "transform", &format!("translateY({}px)", fmt_fixed(offset, 2)));
            }
        }

        if show_progress {
            let p = scroll::progress(y, dom::document_height(), dom::viewport_height());
            overlay.progress.set(p);
        }

        match debouncer.as_ref() {
            None => {
                tracker.borrow_mut().update(y);
            }
            Some(d) => {
                let wait = {
                    let mut d = d.borrow_mut();
                    d.call(dom::now_ms());
                    d.wait_ms()
                };
                let d = Rc::clone(d);
                let tracker = Rc::clone(&tracker);
                let res = dom::set_timeout(wait, move || {
                    if d.borrow_mut().fire(dom::now_ms()) {
                        tracker.borrow_mut().update(dom::scroll_y());
                    }
                });
                if let Err(e) = res {
                    warn!(error = %e, "debounced nav update not scheduled");
                }
            }
        }
    });
    if let Err(e) = res {
        warn!(error = %e, "scroll listener not installed");
    }
}

/// Reflects the menu state on the toggle icon: the `.hamburger` class when the
/// markup has one, otherwise a rotated `svg`.
fn paint_menu_icon(button: &web_sys::Element, open: bool) {
    if let Some(h) = dom::query_in(button, selectors::HAMBURGER) {
        dom::set_class(&h, classes::HAMBURGER_OPEN, open);
    } else if let Some(svg) = dom::query_in(button, selectors::MENU_ICON) {
        let t = if open { "rotate(180deg)" } else { "rotate(0deg)" };
        dom::set_style(&svg, "transform", t);
    }
}

/// The bound mobile menu. Cloning shares the open state.
#[derive(Clone)]
struct MenuHandle {
    button: web_sys::Element,
    menu: web_sys::Element,
    state: Rc<RefCell<MobileMenu>>,
}

impl MenuHandle {
    fn paint(&self) {
        let open = self.state.borrow().is_open();
        dom::set_class(&self.menu, classes::HIDDEN, !open);
        paint_menu_icon(&self.button, open);
    }

    fn toggle(&self) {
        self.state.borrow_mut().toggle();
        self.paint();
    }

    fn close(&self) {
        self.state.borrow_mut().close();
        self.paint();
    }

    fn on_key(&self, key: &str) {
        let closed = self.state.borrow_mut().on_key(key);
        if closed {
            self.paint();
        }
    }
}

fn install_menu(cfg: &SiteConfig, nav: &NavConfig) -> Option<MenuHandle> {
    let (Some(button), Some(menu)) = (dom::query(selectors::MENU_BUTTON), dom::query(selectors::MENU)) else {
        debug!("no mobile menu in markup");
        return None;
    };
    let open = !dom::has_class(&menu, classes::HIDDEN);
    let handle = MenuHandle {
        button,
        menu,
        state: Rc::new(RefCell::new(MobileMenu::new(open))),
    };

    let burst = nav.menu_burst;
    let mut field = purcell::particles::ParticleField::new(cfg.effects.seed);
    let on_click = handle.clone();
    let res = dom::listen(&handle.button, "click", move |_| {
        if burst {
            effects::gold_burst(&mut field, &on_click.button);
        }
        on_click.toggle();
    });
    if let Err(e) = res {
        warn!(error = %e, "menu toggle not installed");
    }

    let on_key = handle.clone();
    let res = dom::document().and_then(|doc| {
        dom::listen_as::<web_sys::KeyboardEvent, _>(&doc, "keydown", move |ev| on_key.on_key(&ev.key()))
    });
    if let Err(e) = res {
        warn!(error = %e, "menu keyboard handler not installed");
    }

    Some(handle)
}

/// Nav link clicks scroll to their section and close the mobile menu.
fn install_links(nav: &NavConfig, menu: Option<MenuHandle>) {
    for link in dom::query_all(selectors::NAV_LINK) {
        let nav = nav.clone();
        let menu = menu.clone();
        let href = link.get_attribute("href");
        let res = dom::listen(&link, "click", move |ev| {
            let Some(id) = href.as_deref().and_then(fragment_target) else {
                return;
            };
            ev.prevent_default();
            match dom::by_id(id) {
                Some(target) => smooth_scroll(&nav, &target),
                None => debug!(id, "nav target missing"),
            }
            if let Some(m) = menu.as_ref() {
                m.close();
            }
        });
        if let Err(e) = res {
            warn!(error = %e, "nav link handler not installed");
        }
    }
}

fn smooth_scroll(nav: &NavConfig, target: &web_sys::Element) {
    match scroll_destination(nav, dom::offset_top(target)) {
        ScrollDestination::Offset(top) => {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            if let Ok(w) = dom::window() {
                w.scroll_to_with_scroll_to_options(&opts);
            }
        }
        ScrollDestination::IntoView => {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            opts.set_block(web_sys::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }
}
