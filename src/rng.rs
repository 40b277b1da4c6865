use std::time::{SystemTime, UNIX_EPOCH};

/// Tiny LCG (Numerical Recipes constants). The tiling is purely cosmetic,
/// so all we ask of this is to be cheap and caller-seedable.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would sit on a short cycle.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

pub fn clock_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as u32,
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let first = rng.next_u32();
        let second = rng.next_u32();
        assert_ne!(first, second);
    }

    #[test]
    fn next_range_is_bounded() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..1000 {
            assert!(rng.next_range(6) < 6);
            assert!(rng.next_range(12) < 12);
        }
    }
}
