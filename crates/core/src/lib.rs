//! # purcell
//!
//! Host-testable behaviour models for the Purcell marketing site.
//!
//! Every page effect is split in two: a DOM-free model in this crate and a
//! thin `web-sys` binding in `purcell_web`. The models own the state and the
//! arithmetic (which section is current, what a counter shows at a given
//! instant, where a spark flies), so they can be exercised without a browser.
//!
//! ## Quick Start
//!
//! ```
//! use purcell::prelude::*;
//!
//! struct Link { href: &'static str, active: bool }
//!
//! impl NavLinkView for Link {
//!     fn target(&self) -> Option<&str> { fragment_target(self.href) }
//!     fn set_active(&mut self, active: bool) { self.active = active; }
//! }
//!
//! let layout = vec![Section::new("home", 0.0, 800.0), Section::new("about", 800.0, 800.0)];
//! let links = vec![Link { href: "#home", active: false }, Link { href: "#about", active: false }];
//! let mut tracker = ActiveSectionTracker::new(layout, links, 0.0);
//!
//! assert_eq!(tracker.update(850.0), Some("about"));
//! assert!(tracker.links()[1].active);
//! assert_eq!(tracker.update(2000.0), None);
//! ```
//!
//! ## Modules
//!
//! - [`tracker`]: active navigation highlighting
//! - [`config`]: variant presets and JSON overrides
//! - [`navbar`], [`scroll`], [`debounce`]: scroll-driven chrome
//! - [`reveal`], [`counter`], [`typing`]: on-screen entrance effects
//! - [`cursor`], [`particles`], [`konami`]: decoration
//! - [`contact`], [`notify`], [`loading`]: simulated form, toasts, splash

pub mod config;
pub mod contact;
pub mod counter;
pub mod cursor;
pub mod debounce;
pub mod format;
pub mod konami;
pub mod loading;
pub mod navbar;
pub mod notify;
pub mod particles;
pub mod prng;
pub mod reveal;
pub mod scroll;
pub mod tracker;
pub mod typing;

/// Prelude module for convenient imports.
///
/// ```
/// use purcell::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ConfigError, SiteConfig, Variant};
    pub use crate::tracker::{
        fragment_target, locate, ActiveSectionTracker, NavLinkView, Section, SectionLayout,
    };
}
