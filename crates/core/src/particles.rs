//! Decorative particle geometry.
//!
//! All randomness goes through a seeded [`Prng`], so a given seed always
//! produces the same field. The binding only turns these values into styles.

use crate::prng::Prng;

/// Client-space rectangle (as returned by `getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Background particle drifting up the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientParticle {
    /// Horizontal start, in `vw`.
    pub left_vw: f64,
    pub duration_s: f64,
    pub opacity: f64,
}

/// One spark of the gold burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstParticle {
    pub angle_deg: f64,
    pub distance: f64,
    pub size: f64,
    /// Offset from the burst centre at the end of the flight.
    pub end_x: f64,
    pub end_y: f64,
    pub delay_ms: u32,
}

/// Spark rising out of a hovered card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    pub x: f64,
    pub y: f64,
    pub rise: f64,
}

pub const BURST_COUNT: usize = 12;
pub const BURST_STAGGER_MS: u32 = 50;
pub const BURST_LIFETIME_MS: u32 = 1500;
pub const SPARKLE_COUNT: usize = 6;
pub const SPARKLE_LIFETIME_MS: u32 = 1000;

pub struct ParticleField {
    rng: Prng,
}

impl ParticleField {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Prng::new(seed),
        }
    }

    pub fn ambient(&mut self) -> AmbientParticle {
        AmbientParticle {
            left_vw: self.rng.gen_range_f64(0.0, 100.0),
            duration_s: self.rng.gen_range_f64(2.0, 5.0),
            opacity: self.rng.gen_range_f64(0.2, 0.7),
        }
    }

    /// Sparks spread roughly evenly around the circle, each jittered by up to 20°.
    pub fn burst(&mut self) -> Vec<BurstParticle> {
        (0..BURST_COUNT)
            .map(|i| {
                let angle_deg = (i as f64) * 30.0 + self.rng.gen_range_f64(0.0, 20.0);
                let distance = self.rng.gen_range_f64(40.0, 100.0);
                let size = self.rng.gen_range_f64(3.0, 6.0);
                let rad = angle_deg.to_radians();
                BurstParticle {
                    angle_deg,
                    distance,
                    size,
                    end_x: rad.cos() * distance,
                    end_y: rad.sin() * distance,
                    delay_ms: i as u32 * BURST_STAGGER_MS,
                }
            })
            .collect()
    }

    pub fn sparkles(&mut self, rect: Rect) -> Vec<Sparkle> {
        (0..SPARKLE_COUNT)
            .map(|_| Sparkle {
                x: rect.left + self.rng.gen_range_f64(0.0, 1.0) * rect.width,
                y: rect.top + self.rng.gen_range_f64(0.0, 1.0) * rect.height,
                rise: self.rng.gen_range_f64(50.0, 150.0),
            })
            .collect()
    }
}

/// Service card hover choreography.
pub mod cards {
    pub const HOVER_TRANSFORM: &str = "perspective(1000px) rotateX(5deg) rotateY(2deg) scale(1.02)";
    pub const HOVER_TRANSITION: &str = "transform 1.5s cubic-bezier(0.175, 0.885, 0.32, 1.275)";
    pub const HOVER_SHADOW: &str = "0 20px 40px rgba(251, 191, 36, 0.3)";
    pub const ICON_TRANSFORM: &str = "rotate(720deg) scale(1.3)";
    pub const ICON_TRANSITION: &str = "transform 2s ease";
    pub const PARTICLE_ANIMATION: &str = "particleFloat 6s ease-in-out infinite";
    pub const FLOAT_ANIMATION: &str = "cardFloat 4s ease-in-out infinite";
    pub const FLOAT_START_MS: u32 = 1000;

    /// CSS seconds string, e.g. `0.3s`, without float formatting.
    fn tenths(n: usize) -> String {
        let whole = n / 10;
        let frac = n % 10;
        if frac == 0 {
            format!("{whole}s")
        } else {
            format!("{whole}.{frac}s")
        }
    }

    pub fn entrance_delay(index: usize) -> String {
        tenths(index)
    }

    pub fn float_delay(index: usize) -> String {
        tenths(index * 5)
    }

    pub fn particle_delay(index: usize) -> String {
        tenths(index * 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_ranges() {
        let mut field = ParticleField::new(42);
        for _ in 0..500 {
            let p = field.ambient();
            assert!((0.0..100.0).contains(&p.left_vw));
            assert!((2.0..5.0).contains(&p.duration_s));
            assert!((0.2..0.7).contains(&p.opacity));
        }
    }

    #[test]
    fn burst_geometry() {
        let mut field = ParticleField::new(7);
        let burst = field.burst();
        assert_eq!(burst.len(), BURST_COUNT);
        for (i, p) in burst.iter().enumerate() {
            let base = i as f64 * 30.0;
            assert!(p.angle_deg >= base && p.angle_deg < base + 20.0);
            assert!((40.0..100.0).contains(&p.distance));
            assert!((3.0..6.0).contains(&p.size));
            let r = (p.end_x * p.end_x + p.end_y * p.end_y).sqrt();
            assert!((r - p.distance).abs() < 1e-9);
            assert_eq!(p.delay_ms, i as u32 * 50);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = ParticleField::new(99).burst();
        let b = ParticleField::new(99).burst();
        assert_eq!(a, b);
    }

    #[test]
    fn sparkles_land_inside_rect() {
        let rect = Rect {
            left: 100.0,
            top: 50.0,
            width: 300.0,
            height: 200.0,
        };
        assert_eq!(rect.center(), (250.0, 150.0));
        let mut field = ParticleField::new(3);
        let sparks = field.sparkles(rect);
        assert_eq!(sparks.len(), SPARKLE_COUNT);
        for s in sparks {
            assert!(s.x >= 100.0 && s.x < 400.0);
            assert!(s.y >= 50.0 && s.y < 250.0);
            assert!((50.0..150.0).contains(&s.rise));
        }
    }

    #[test]
    fn card_delays() {
        assert_eq!(cards::entrance_delay(0), "0s");
        assert_eq!(cards::entrance_delay(3), "0.3s");
        assert_eq!(cards::entrance_delay(12), "1.2s");
        assert_eq!(cards::float_delay(1), "0.5s");
        assert_eq!(cards::float_delay(4), "2s");
        assert_eq!(cards::particle_delay(3), "1.5s");
    }
}
