//! Transient notifications.
//!
//! Each notification slides in shortly after creation, stays for a while,
//! slides out, and is dropped once the exit transition has run. The host
//! drives the phases with timers using [`NotificationConfig`] durations.

use tracing::debug;

use crate::config::NotificationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl NotificationLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Mounted off-screen.
    Entering,
    Shown,
    /// Sliding out; removed after the exit transition.
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
    pub phase: NotificationPhase,
}

/// Timer offsets, in ms after creation, for each phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationSchedule {
    pub show_at: u32,
    pub leave_at: u32,
    pub remove_at: u32,
}

impl NotificationSchedule {
    pub fn from_config(cfg: &NotificationConfig) -> Self {
        let leave_at = cfg.visible_ms.max(cfg.enter_delay_ms);
        Self {
            show_at: cfg.enter_delay_ms,
            leave_at,
            remove_at: leave_at.saturating_add(cfg.exit_ms),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    next_id: u64,
    single: bool,
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(cfg: &NotificationConfig) -> Self {
        Self {
            next_id: 0,
            single: cfg.single,
            items: Vec::new(),
        }
    }

    /// Adds a notification and returns its id. In single mode it replaces
    /// whatever is on screen.
    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) -> u64 {
        if self.single {
            self.items.clear();
        }
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        debug!(id, level = level.css_class(), %message, "notification");
        self.items.push(Notification {
            id,
            level,
            message,
            phase: NotificationPhase::Entering,
        });
        id
    }

    /// Moves a notification forward. Returns `false` for unknown ids or
    /// backwards transitions.
    pub fn advance(&mut self, id: u64, phase: NotificationPhase) -> bool {
        let Some(n) = self.items.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        let forward = matches!(
            (n.phase, phase),
            (NotificationPhase::Entering, NotificationPhase::Shown)
                | (NotificationPhase::Entering, NotificationPhase::Leaving)
                | (NotificationPhase::Shown, NotificationPhase::Leaving)
        );
        if forward {
            n.phase = phase;
        }
        forward
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, Variant};

    #[test]
    fn lifecycle_runs_forward_only() {
        let cfg = SiteConfig::preset(Variant::Classic).notifications;
        let mut center = NotificationCenter::new(&cfg);
        let id = center.push(NotificationLevel::Success, "ok");

        assert_eq!(center.items()[0].phase, NotificationPhase::Entering);
        assert!(center.advance(id, NotificationPhase::Shown));
        assert!(!center.advance(id, NotificationPhase::Entering));
        assert!(center.advance(id, NotificationPhase::Leaving));
        assert!(!center.advance(id, NotificationPhase::Shown));
        assert!(center.remove(id));
        assert!(!center.remove(id));
        assert!(!center.advance(id, NotificationPhase::Leaving));
    }

    #[test]
    fn classic_stacks_modern_replaces() {
        let classic = SiteConfig::preset(Variant::Classic).notifications;
        let mut center = NotificationCenter::new(&classic);
        center.push(NotificationLevel::Info, "a");
        center.push(NotificationLevel::Info, "b");
        assert_eq!(center.items().len(), 2);

        let modern = SiteConfig::preset(Variant::Modern).notifications;
        let mut center = NotificationCenter::new(&modern);
        let first = center.push(NotificationLevel::Info, "a");
        let second = center.push(NotificationLevel::Success, "b");
        assert_ne!(first, second);
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].message, "b");
        // Timers of the replaced notification find nothing to act on.
        assert!(!center.advance(first, NotificationPhase::Shown));
    }

    #[test]
    fn schedules_per_variant() {
        let classic = NotificationSchedule::from_config(&SiteConfig::preset(Variant::Classic).notifications);
        assert_eq!(
            classic,
            NotificationSchedule {
                show_at: 100,
                leave_at: 4000,
                remove_at: 4300
            }
        );
        let modern = NotificationSchedule::from_config(&SiteConfig::preset(Variant::Modern).notifications);
        assert_eq!(modern.remove_at, 4500);
    }
}
