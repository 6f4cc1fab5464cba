// Minimal PRNG (no external crates).
//
// This is NOT cryptographically secure.
// It only picks the next target pose.

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

    #[inline]
    pub fn gen_range_usize(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        let span = (high - low) as u32;
        let v = self.next_u32() % span;
        low + v as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_does_not_stick() {
        let mut rng = Prng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert!(a != 0 || b != 0);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = Prng::new(2026);
        let mut b = Prng::new(2026);
        for _ in 0..32 {
            assert_eq!(a.gen_range_usize(0, 4), b.gen_range_usize(0, 4));
        }
    }

    #[test]
    fn range_is_half_open() {
        let mut rng = Prng::new(7);
        for _ in 0..1000 {
            let v = rng.gen_range_usize(0, 4);
            assert!(v < 4);
        }
        assert_eq!(rng.gen_range_usize(3, 3), 3);
    }
}
