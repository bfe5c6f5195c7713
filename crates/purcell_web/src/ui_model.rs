//! Page inventory that should be available on both wasm and native.
//!
//! Keeping the effect list, the selectors and the injected stylesheet out of
//! the wasm-only `web` module allows us to unit-test them on the host.

use purcell::config::SiteConfig;

/// Element id of the optional embedded JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "purcell-config";

/// Animation stylesheet injected into `<head>` at startup.
pub const STYLESHEET: &str = include_str!("style.css");

/// Selectors for the static markup the binding attaches to.
pub mod selectors {
    pub const NAVBAR: &str = "#navbar";
    pub const MENU_BUTTON: &str = "#mobile-menu-button";
    pub const MENU: &str = "#mobile-menu";
    pub const HAMBURGER: &str = ".hamburger";
    pub const MENU_ICON: &str = "svg";
    pub const NAV_LINK: &str = ".nav-link";
    pub const SECTIONS: &str = "section[id]";
    pub const COUNTER: &str = ".counter";
    pub const SERVICE_CARD: &str = ".service-card";
    pub const SERVICE_ICON: &str = ".service-icon";
    pub const CARD_PARTICLE: &str = ".particle";
    pub const STAGGERED: &str = ".service-card, .process-step";
    pub const PROCESS_NUMBER: &str = ".process-number";
    pub const PROCESS_CONTENT: &str = ".process-content";
    pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
    pub const LOADING: &str = ".loading";
}

/// Class names the binding toggles.
pub mod classes {
    pub const HIDDEN: &str = "hidden";
    pub const HAMBURGER_OPEN: &str = "active";
    pub const NAVBAR_SCROLLED: &str = "scrolled";
    pub const PARTICLES: &str = "particles";
    pub const PARTICLE: &str = "particle";
    pub const GOLD_BURST: &str = "gold-burst";
    pub const GOLD_PARTICLE: &str = "gold-particle";
    pub const ANIMATE: &str = "animate";
    pub const SPARKLE: &str = "sparkle";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEffect {
    ActiveNav,
    NavbarChrome,
    MobileMenu,
    SmoothScroll,
    ScrollProgress,
    Parallax,
    Reveal,
    StaggeredReveal,
    Counters,
    Typing,
    Cursor,
    AmbientParticles,
    CardSparkle,
    CardHover,
    MenuBurst,
    ContactForm,
    LoadingScreen,
    Konami,
    Preload,
    ServiceWorker,
}

impl PageEffect {
    pub fn label(self) -> &'static str {
        match self {
            PageEffect::ActiveNav => "active_nav",
            PageEffect::NavbarChrome => "navbar_chrome",
            PageEffect::MobileMenu => "mobile_menu",
            PageEffect::SmoothScroll => "smooth_scroll",
            PageEffect::ScrollProgress => "scroll_progress",
            PageEffect::Parallax => "parallax",
            PageEffect::Reveal => "reveal",
            PageEffect::StaggeredReveal => "staggered_reveal",
            PageEffect::Counters => "counters",
            PageEffect::Typing => "typing",
            PageEffect::Cursor => "cursor",
            PageEffect::AmbientParticles => "ambient_particles",
            PageEffect::CardSparkle => "card_sparkle",
            PageEffect::CardHover => "card_hover",
            PageEffect::MenuBurst => "menu_burst",
            PageEffect::ContactForm => "contact_form",
            PageEffect::LoadingScreen => "loading_screen",
            PageEffect::Konami => "konami",
            PageEffect::Preload => "preload",
            PageEffect::ServiceWorker => "service_worker",
        }
    }

    pub fn enabled(self, cfg: &SiteConfig) -> bool {
        match self {
            PageEffect::ActiveNav
            | PageEffect::NavbarChrome
            | PageEffect::MobileMenu
            | PageEffect::SmoothScroll
            | PageEffect::Counters
            | PageEffect::ContactForm => true,
            PageEffect::ScrollProgress => cfg.effects.scroll_progress,
            PageEffect::Parallax => cfg.effects.parallax.is_some(),
            PageEffect::Reveal => !cfg.reveal.rules.is_empty(),
            PageEffect::StaggeredReveal => cfg.reveal.stagger.is_some(),
            PageEffect::Typing => cfg.effects.typing.is_some(),
            PageEffect::Cursor => cfg.effects.cursor.is_some(),
            PageEffect::AmbientParticles => cfg.effects.ambient_particles.is_some(),
            PageEffect::CardSparkle => cfg.effects.card_sparkle,
            PageEffect::CardHover => cfg.effects.card_hover,
            PageEffect::MenuBurst => cfg.nav.menu_burst,
            PageEffect::LoadingScreen => cfg.loading.is_some(),
            PageEffect::Konami => cfg.effects.konami.is_some(),
            PageEffect::Preload => !cfg.resources.preload_styles.is_empty(),
            PageEffect::ServiceWorker => cfg.resources.service_worker.is_some(),
        }
    }

    pub fn all() -> &'static [PageEffect] {
        &[
            PageEffect::ActiveNav,
            PageEffect::NavbarChrome,
            PageEffect::MobileMenu,
            PageEffect::SmoothScroll,
            PageEffect::ScrollProgress,
            PageEffect::Parallax,
            PageEffect::Reveal,
            PageEffect::StaggeredReveal,
            PageEffect::Counters,
            PageEffect::Typing,
            PageEffect::Cursor,
            PageEffect::AmbientParticles,
            PageEffect::CardSparkle,
            PageEffect::CardHover,
            PageEffect::MenuBurst,
            PageEffect::ContactForm,
            PageEffect::LoadingScreen,
            PageEffect::Konami,
            PageEffect::Preload,
            PageEffect::ServiceWorker,
        ]
    }
}

/// Effects switched on by `cfg`, in installation order.
pub fn enabled_effects(cfg: &SiteConfig) -> Vec<PageEffect> {
    PageEffect::all()
        .iter()
        .copied()
        .filter(|e| e.enabled(cfg))
        .collect()
}
