// Minimal PRNG (no external crates).
//
// This is NOT cryptographically secure.
// It only drives decorative particle placement, which must stay reproducible
// under a fixed seed so the geometry can be tested on the host.

#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        // Avoid a zero state.
        let seed = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state: seed }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of mantissa.
        let x = self.next_u64() >> 11;
        (x as f64) / ((1u64 << 53) as f64)
    }

    /// Uniform in `[low, high)`.
    #[inline]
    pub fn gen_range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64_01()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_is_remapped() {
        let mut a = Prng::new(0);
        let mut b = Prng::new(0x9E3779B97F4A7C15);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn ranges_stay_half_open() {
        let mut rng = Prng::new(7);
        for _ in 0..10_000 {
            let v = rng.gen_range_f64(40.0, 100.0);
            assert!((40.0..100.0).contains(&v), "{v}");
        }
    }
}
