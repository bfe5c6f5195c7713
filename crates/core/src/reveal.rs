//! Reveal-on-scroll planning.
//!
//! The binding observes elements with an `IntersectionObserver`; this module
//! decides what each element looks like before it is seen and what happens
//! when it first intersects. Every element reveals at most once.

use std::collections::HashSet;

use crate::config::{RevealRule, StaggerConfig};

/// Inline style applied before an element has been seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
    pub transition: &'static str,
}

pub const FADE_UP_HIDDEN: HiddenStyle = HiddenStyle {
    opacity: "0",
    transform: "translateY(30px)",
    transition: "opacity 0.6s ease, transform 0.6s ease",
};

pub const CARD_HIDDEN: HiddenStyle = HiddenStyle {
    opacity: "0",
    transform: "translateY(50px)",
    transition: "all 0.6s ease-out",
};

pub const PROCESS_CONTENT_HIDDEN: HiddenStyle = HiddenStyle {
    opacity: "0",
    transform: "scale(0.8)",
    transition: "all 0.6s ease-out",
};

pub const SERVICE_CARD_CLASS: &str = "service-card";
pub const PROCESS_STEP_CLASS: &str = "process-step";

/// Style to apply to an element matched by `rule` before it reveals.
pub fn initial_style(rule: &RevealRule, is_card: bool) -> Option<HiddenStyle> {
    (rule.prehide && !is_card).then_some(FADE_UP_HIDDEN)
}

/// Classes to add when an element matched by `rule` reveals.
pub fn reveal_classes(rule: &RevealRule, is_card: bool) -> Vec<&str> {
    let mut classes = vec![rule.class.as_str()];
    if is_card {
        if let Some(extra) = rule.card_class.as_deref() {
            classes.push(extra);
        }
    }
    classes
}

/// What the staggered observer does for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaggerAction {
    /// Slide the `index`-th service card in after `delay_ms`.
    Card { delay_ms: u32 },
    /// Pulse the step number and scale the step content in.
    ProcessStep,
}

pub fn stagger_action(cfg: &StaggerConfig, is_card: bool, card_index: usize) -> StaggerAction {
    if is_card {
        let delay_ms = (card_index as u32).saturating_mul(cfg.step_ms);
        StaggerAction::Card { delay_ms }
    } else {
        StaggerAction::ProcessStep
    }
}

/// Remembers which `(observer, element)` pairs have already revealed.
#[derive(Debug, Default)]
pub struct RevealLedger {
    seen: HashSet<(usize, usize)>,
}

impl RevealLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` the first time a pair is reported.
    pub fn first_sight(&mut self, observer: usize, element: usize) -> bool {
        self.seen.insert((observer, element))
    }

    pub fn revealed(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, Variant};

    #[test]
    fn modern_prehides_everything_but_cards() {
        let cfg = SiteConfig::preset(Variant::Modern);
        let rule = &cfg.reveal.rules[0];
        assert_eq!(initial_style(rule, false), Some(FADE_UP_HIDDEN));
        assert_eq!(initial_style(rule, true), None);
        assert_eq!(reveal_classes(rule, true), vec!["animate-fade-in", "animate"]);
        assert_eq!(reveal_classes(rule, false), vec!["animate-fade-in"]);
    }

    #[test]
    fn classic_rule_only_adds_its_class() {
        let cfg = SiteConfig::preset(Variant::Classic);
        let rule = &cfg.reveal.rules[0];
        assert_eq!(initial_style(rule, false), None);
        assert_eq!(reveal_classes(rule, true), vec!["animate-fade-in-up"]);
    }

    #[test]
    fn cards_stagger_by_index() {
        let cfg = SiteConfig::preset(Variant::Classic);
        let stagger = cfg.reveal.stagger.as_ref().unwrap();
        assert_eq!(stagger_action(stagger, true, 0), StaggerAction::Card { delay_ms: 0 });
        assert_eq!(stagger_action(stagger, true, 3), StaggerAction::Card { delay_ms: 300 });
        assert_eq!(stagger_action(stagger, false, 3), StaggerAction::ProcessStep);
    }

    #[test]
    fn ledger_reveals_once() {
        let mut ledger = RevealLedger::new();
        assert!(ledger.first_sight(0, 4));
        assert!(!ledger.first_sight(0, 4));
        assert!(ledger.first_sight(1, 4));
        assert_eq!(ledger.revealed(), 2);
    }
}
