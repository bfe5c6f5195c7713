//! Eased cursor follower.

use crate::config::CursorConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFrame {
    /// Top-left corner of the dot, in client pixels.
    pub left: f64,
    pub top: f64,
    pub visible: bool,
    pub scale: f64,
}

#[derive(Debug, Clone)]
pub struct CursorFollower {
    easing: f64,
    half_size: f64,
    hover_scale: f64,
    target: (f64, f64),
    pos: (f64, f64),
    visible: bool,
    hovering: bool,
}

impl CursorFollower {
    pub fn new(cfg: &CursorConfig) -> Self {
        Self {
            easing: cfg.easing,
            half_size: cfg.size_px / 2.0,
            hover_scale: cfg.hover_scale,
            target: (0.0, 0.0),
            pos: (0.0, 0.0),
            visible: false,
            hovering: false,
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.target = (x, y);
        self.visible = true;
    }

    pub fn pointer_left(&mut self) {
        self.visible = false;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Moves the dot one easing step towards the pointer.
    pub fn step(&mut self) -> CursorFrame {
        self.pos.0 += (self.target.0 - self.pos.0) * self.easing;
        self.pos.1 += (self.target.1 - self.pos.1) * self.easing;
        self.frame()
    }

    pub fn frame(&self) -> CursorFrame {
        CursorFrame {
            left: self.pos.0 - self.half_size,
            top: self.pos.1 - self.half_size,
            visible: self.visible,
            scale: if self.hovering { self.hover_scale } else { 1.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, Variant};

    fn follower() -> CursorFollower {
        let cfg = SiteConfig::preset(Variant::Classic);
        CursorFollower::new(cfg.effects.cursor.as_ref().unwrap())
    }

    #[test]
    fn eases_towards_pointer() {
        let mut c = follower();
        assert!(!c.frame().visible);

        c.pointer_moved(100.0, 200.0);
        let f = c.step();
        assert!(f.visible);
        assert!((f.left - (10.0 - 8.0)).abs() < 1e-9);
        assert!((f.top - (20.0 - 8.0)).abs() < 1e-9);

        for _ in 0..200 {
            c.step();
        }
        let f = c.frame();
        assert!((f.left - 92.0).abs() < 1e-3);
        assert!((f.top - 192.0).abs() < 1e-3);
    }

    #[test]
    fn hover_scales_and_leave_hides() {
        let mut c = follower();
        c.pointer_moved(5.0, 5.0);
        c.set_hovering(true);
        assert_eq!(c.step().scale, 2.0);
        c.set_hovering(false);
        c.pointer_left();
        let f = c.step();
        assert_eq!(f.scale, 1.0);
        assert!(!f.visible);
    }
}
