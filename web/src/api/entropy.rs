/// Small xorshift64* generator for the mock data source.
///
/// The availability hints and generated slots only need to look plausible, so
/// a tiny PRNG seeded from the clock is enough. Tests seed it with constants
/// to get reproducible output.
#[derive(Debug, Clone)]
pub struct Entropy {
    state: u64,
}

impl Entropy {
    pub fn seeded(seed: u64) -> Self {
        // xorshift state must be non-zero
        Self {
            state: if seed == 0 { 0x9E3779B97F4A7C15 } else { seed },
        }
    }

    /// Seed from wall-clock milliseconds.
    pub fn from_clock() -> Self {
        Self::seeded(js_sys::Date::now() as u64)
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform value in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in [0, n), mirroring `floor(random() * n)`.
    pub fn below(&mut self, n: u32) -> u32 {
        (self.next_f64() * f64::from(n)) as u32
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = Entropy::seeded(42);
        let mut b = Entropy::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn zero_seed_is_remapped() {
        let mut e = Entropy::seeded(0);
        assert_ne!(e.next_u64(), 0);
    }

    #[test]
    fn next_f64_stays_in_unit_interval() {
        let mut e = Entropy::seeded(7);
        for _ in 0..1000 {
            let v = e.next_f64();
            assert!((0.0..1.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn below_never_reaches_bound() {
        let mut e = Entropy::seeded(1234);
        for _ in 0..1000 {
            assert!(e.below(30) < 30);
        }
    }
}
