//! Count-up animation for the statistics strip.

use crate::config::{CounterConfig, CounterPacing};
use crate::format::{fmt_fixed, fmt_floor, fmt_grouped};

/// How a counter renders intermediate values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFormat {
    /// Two decimals, for fractional targets such as `99.99`.
    Fixed2,
    /// Floored and grouped by thousands.
    Grouped,
    /// Floored integer.
    Integer,
}

impl CounterFormat {
    pub fn for_target(target: f64) -> Self {
        if target.fract() != 0.0 {
            CounterFormat::Fixed2
        } else if target >= 1000.0 {
            CounterFormat::Grouped
        } else {
            CounterFormat::Integer
        }
    }

    pub fn render(self, value: f64, thousands_separator: &str) -> String {
        match self {
            CounterFormat::Fixed2 => fmt_fixed(value, 2),
            CounterFormat::Grouped => fmt_grouped(value, thousands_separator),
            CounterFormat::Integer => fmt_floor(value),
        }
    }
}

/// Reads a `data-target` attribute. Missing or unparsable values count as zero.
pub fn parse_target(attr: Option<&str>) -> f64 {
    attr.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterFrame {
    pub value: f64,
    pub done: bool,
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: f64,
    format: CounterFormat,
    pacing: CounterPacing,
    duration_ms: f64,
    increment: f64,
    started_at: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: f64, cfg: &CounterConfig, now: f64) -> Self {
        let duration_ms = cfg.duration_ms as f64;
        let ticks = duration_ms / cfg.step_ms.max(1) as f64;
        let increment = if ticks > 0.0 { target / ticks } else { target };
        Self {
            target,
            format: CounterFormat::for_target(target),
            pacing: cfg.pacing,
            duration_ms,
            increment,
            started_at: now,
            current: 0.0,
            done: false,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn format(&self) -> CounterFormat {
        self.format
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advances the animation.
    ///
    /// Fixed-step pacing moves one increment per call and ignores `now`;
    /// frame-time pacing interpolates linearly over the elapsed time.
    pub fn advance(&mut self, now: f64) -> CounterFrame {
        if self.done {
            return CounterFrame {
                value: self.current,
                done: true,
            };
        }

        match self.pacing {
            CounterPacing::FixedStep => {
                self.current += self.increment;
                if self.current >= self.target {
                    self.current = self.target;
                    self.done = true;
                }
            }
            CounterPacing::FrameTime => {
                let progress = if self.duration_ms > 0.0 {
                    ((now - self.started_at) / self.duration_ms).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                self.current = progress * self.target;
                self.done = progress >= 1.0;
            }
        }

        CounterFrame {
            value: self.current,
            done: self.done,
        }
    }

    pub fn render(&self, value: f64, thousands_separator: &str) -> String {
        self.format.render(value, thousands_separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, Variant};

    #[test]
    fn format_follows_target_shape() {
        assert_eq!(CounterFormat::for_target(99.99), CounterFormat::Fixed2);
        assert_eq!(CounterFormat::for_target(2.5), CounterFormat::Fixed2);
        assert_eq!(CounterFormat::for_target(1000.0), CounterFormat::Grouped);
        assert_eq!(CounterFormat::for_target(15000.0), CounterFormat::Grouped);
        assert_eq!(CounterFormat::for_target(250.0), CounterFormat::Integer);
        assert_eq!(CounterFormat::for_target(0.0), CounterFormat::Integer);
    }

    #[test]
    fn target_parsing_defaults_to_zero() {
        assert_eq!(parse_target(Some(" 1500 ")), 1500.0);
        assert_eq!(parse_target(Some("99.99")), 99.99);
        assert_eq!(parse_target(Some("lots")), 0.0);
        assert_eq!(parse_target(Some("NaN")), 0.0);
        assert_eq!(parse_target(None), 0.0);
    }

    #[test]
    fn fixed_step_reaches_target_in_duration_over_step_ticks() {
        let cfg = SiteConfig::preset(Variant::Classic).counters;
        let mut anim = CounterAnimation::new(1250.0, &cfg, 0.0);

        let mut ticks = 0;
        let mut last = CounterFrame {
            value: 0.0,
            done: false,
        };
        while !last.done {
            last = anim.advance(0.0);
            ticks += 1;
            assert!(ticks <= 200, "runaway counter");
        }
        assert_eq!(last.value, 1250.0);
        // 2000ms / 16ms = 125 ticks (one more may be needed for float rounding).
        assert!((125..=126).contains(&ticks), "{ticks}");
        assert_eq!(anim.render(last.value, ","), "1,250");
    }

    #[test]
    fn frame_time_is_linear_and_clamped() {
        let cfg = SiteConfig::preset(Variant::Modern).counters;
        let mut anim = CounterAnimation::new(500.0, &cfg, 1000.0);

        let f = anim.advance(1500.0);
        assert_eq!(f.value, 125.0);
        assert!(!f.done);
        assert_eq!(anim.render(f.value, ","), "125");

        let f = anim.advance(5000.0);
        assert_eq!(f.value, 500.0);
        assert!(f.done);
        assert!(anim.is_done());
        assert_eq!(anim.advance(9000.0).value, 500.0);
    }

    #[test]
    fn percentage_counter_keeps_two_decimals() {
        let cfg = SiteConfig::preset(Variant::Modern).counters;
        let mut anim = CounterAnimation::new(99.99, &cfg, 0.0);
        let f = anim.advance(0.0);
        assert_eq!(anim.render(f.value, ","), "0.00");
        let f = anim.advance(500.0);
        assert_eq!(anim.render(f.value, ","), "25.00");
        let f = anim.advance(2000.0);
        assert_eq!(anim.render(f.value, ","), "99.99");
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let cfg = SiteConfig::preset(Variant::Classic).counters;
        let mut anim = CounterAnimation::new(0.0, &cfg, 0.0);
        let f = anim.advance(0.0);
        assert!(f.done);
        assert_eq!(anim.render(f.value, ","), "0");
    }
}
