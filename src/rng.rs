//! Random source for tile spawning.
//!
//! The board never reaches for a global generator: whoever owns the game
//! passes a [`TileRng`] in. The CLI uses [`fastrand::Rng`]; [`Lcg`] is a
//! tiny seeded generator whose sequence is fixed forever, handy for replays
//! and tests.

/// Capability needed to spawn tiles.
pub trait TileRng {
    /// Uniform integer in `[0, n)`. `n` is never zero.
    fn next_index(&mut self, n: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl TileRng for fastrand::Rng {
    fn next_index(&mut self, n: usize) -> usize {
        self.usize(..n)
    }

    fn next_unit(&mut self) -> f64 {
        self.f64()
    }
}

impl<R: TileRng + ?Sized> TileRng for &mut R {
    fn next_index(&mut self, n: usize) -> usize {
        (**self).next_index(n)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// 32-bit linear congruential generator (Numerical Recipes constants).
#[derive(Clone, Debug)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Seed the generator. A zero seed is bumped to 1.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl TileRng for Lcg {
    #[inline]
    fn next_index(&mut self, n: usize) -> usize {
        let r = self.next_u32() as u64;
        ((r * n as u64) >> 32) as usize
    }

    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcg_zero_seed() {
        let mut a = Lcg::new(0);
        let mut b = Lcg::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_lcg_known_sequence() {
        let mut rng = Lcg::new(1);
        assert_eq!(rng.next_u32(), 1015568748);
        assert_eq!(rng.next_u32(), 1586005467);
    }

    #[test]
    fn test_lcg_ranges() {
        let mut rng = Lcg::new(42);
        for n in 1..50 {
            assert!(rng.next_index(n) < n);
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_fastrand_ranges() {
        let mut rng = fastrand::Rng::with_seed(7);
        for n in 1..50 {
            assert!(TileRng::next_index(&mut rng, n) < n);
            let u = TileRng::next_unit(&mut rng);
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_seeded_lcg_repeats() {
        let mut a = Lcg::new(2024);
        let mut b = Lcg::new(2024);
        for _ in 0..20 {
            assert_eq!(a.next_index(16), b.next_index(16));
        }
    }
}
