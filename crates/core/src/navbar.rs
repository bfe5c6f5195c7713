//! Navbar chrome: the `scrolled` look, hide-on-scroll and the mobile menu.

use crate::config::NavConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavbarLook {
    pub scrolled: bool,
    pub hidden: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NavbarState {
    look: NavbarLook,
    last_scroll_top: f64,
}

impl NavbarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one scroll position and returns the resulting look.
    pub fn update(&mut self, cfg: &NavConfig, scroll_top: f64) -> NavbarLook {
        self.look.scrolled = scroll_top > cfg.scrolled_threshold;

        if let Some(after) = cfg.hide_on_scroll_after {
            self.look.hidden = scroll_top > self.last_scroll_top && scroll_top > after;
        }
        self.last_scroll_top = scroll_top;
        self.look
    }

    pub fn look(&self) -> NavbarLook {
        self.look
    }
}

/// Where a nav link click should scroll to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollDestination {
    /// `window.scrollTo` with this top offset.
    Offset(f64),
    /// `element.scrollIntoView({ block: "start" })`.
    IntoView,
}

pub fn scroll_destination(cfg: &NavConfig, section_top: f64) -> ScrollDestination {
    match cfg.smooth_scroll_offset {
        Some(offset) => ScrollDestination::Offset((section_top - offset).max(0.0)),
        None => ScrollDestination::IntoView,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    /// Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// `Escape` closes an open menu; every other key is ignored.
    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, Variant};

    #[test]
    fn scrolled_threshold_is_strict() {
        let cfg = SiteConfig::preset(Variant::Modern).nav;
        let mut nav = NavbarState::new();
        assert!(!nav.update(&cfg, 80.0).scrolled);
        assert!(nav.update(&cfg, 80.5).scrolled);
        assert!(!nav.update(&cfg, 0.0).scrolled);
    }

    #[test]
    fn classic_hides_only_while_scrolling_down_past_limit() {
        let cfg = SiteConfig::preset(Variant::Classic).nav;
        let mut nav = NavbarState::new();

        assert!(!nav.update(&cfg, 150.0).hidden);
        assert!(nav.update(&cfg, 250.0).hidden);
        assert!(nav.update(&cfg, 400.0).hidden);
        assert!(!nav.update(&cfg, 390.0).hidden);
        assert!(!nav.update(&cfg, 390.0).hidden);
        assert!(nav.look().scrolled);
    }

    #[test]
    fn modern_never_hides() {
        let cfg = SiteConfig::preset(Variant::Modern).nav;
        let mut nav = NavbarState::new();
        for y in [0.0, 300.0, 900.0, 5000.0] {
            assert!(!nav.update(&cfg, y).hidden);
        }
    }

    #[test]
    fn destinations_follow_variant() {
        let classic = SiteConfig::preset(Variant::Classic).nav;
        assert_eq!(scroll_destination(&classic, 1000.0), ScrollDestination::Offset(920.0));
        assert_eq!(scroll_destination(&classic, 40.0), ScrollDestination::Offset(0.0));

        let modern = SiteConfig::preset(Variant::Modern).nav;
        assert_eq!(scroll_destination(&modern, 1000.0), ScrollDestination::IntoView);
    }

    #[test]
    fn mobile_menu_transitions() {
        let mut menu = MobileMenu::default();
        assert!(!menu.on_key("Escape"));
        assert!(menu.toggle());
        assert!(!menu.on_key("Enter"));
        assert!(menu.is_open());
        assert!(menu.on_key("Escape"));
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(menu.close());
        assert!(!menu.close());
    }
}
