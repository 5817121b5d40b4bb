use super::RandomImpl;

const MULTIPLIER: u64 = 0x5DEECE66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// The 48-bit linear congruential generator used by older world generation code.
///
/// Seeding it with the same value as the reference generator reproduces the same stream.
#[derive(Clone)]
pub struct LegacyRand {
    seed: u64,
}

impl LegacyRand {
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = (seed ^ MULTIPLIER) & MASK;
    }

    fn next_random(&mut self) -> u64 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        self.seed
    }

    fn next(&mut self, bits: u32) -> i32 {
        (self.next_random() >> (48 - bits)) as i32
    }
}

impl RandomImpl for LegacyRand {
    fn from_seed(seed: u64) -> Self {
        let mut rand = Self { seed: 0 };
        rand.set_seed(seed);
        rand
    }

    fn split(&mut self) -> Self {
        Self::from_seed(self.next_i64() as u64)
    }

    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_bounded_i32(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive, got {bound}");
        if (bound & -bound) == bound {
            return ((bound as i64 * self.next(31) as i64) >> 31) as i32;
        }

        loop {
            let bits = self.next(31);
            let value = bits % bound;
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value;
            }
        }
    }

    fn next_i64(&mut self) -> i64 {
        let high = self.next(32) as i64;
        let low = self.next(32) as i64;
        (high << 32).wrapping_add(low)
    }

    fn next_bool(&mut self) -> bool {
        self.next(1) != 0
    }

    fn next_f32(&mut self) -> f32 {
        self.next(24) as f32 / (1 << 24) as f32
    }

    fn next_f64(&mut self) -> f64 {
        let high = (self.next(26) as i64) << 27;
        let low = self.next(27) as i64;
        (high + low) as f64 * 1.110_223_024_625_156_5E-16
    }
}

#[cfg(test)]
mod tests {
    use super::LegacyRand;
    use crate::random::RandomImpl;

    #[test]
    fn matches_reference_stream() {
        let mut rand = LegacyRand::from_seed(0);
        assert_eq!(rand.next_i32(), -1155484576);

        let mut rand = LegacyRand::from_seed(42);
        assert_eq!(rand.next_i32(), -1170105035);
    }

    #[test]
    fn bounded_power_of_two_and_odd() {
        let mut rand = LegacyRand::from_seed(1234);
        for _ in 0..500 {
            assert!((0..16).contains(&rand.next_bounded_i32(16)));
            assert!((0..7).contains(&rand.next_bounded_i32(7)));
            assert_eq!(rand.next_bounded_i32(1), 0);
        }
    }

    #[test]
    fn floats_in_unit_interval() {
        let mut rand = LegacyRand::from_seed(99);
        for _ in 0..500 {
            let f = rand.next_f32();
            assert!((0.0..1.0).contains(&f));
            let d = rand.next_f64();
            assert!((0.0..1.0).contains(&d));
        }
    }

    #[test]
    fn bounded_and_float_draws_match_reference_stream() {
        let mut rand = LegacyRand::from_seed(42);
        let draws: Vec<i32> = (0..6).map(|_| rand.next_bounded_i32(7)).collect();
        assert_eq!(draws, vec![1, 5, 6, 3, 5, 4]);

        let mut rand = LegacyRand::from_seed(42);
        let bits: Vec<u32> = (0..3).map(|_| rand.next_f32().to_bits()).collect();
        assert_eq!(bits, vec![0x3f3a_419d, 0x3d5f_e8a0, 0x3f2e_e7bb]);

        let mut rand = LegacyRand::from_seed(1234);
        let draws: Vec<i32> = (0..5).map(|_| rand.next_bounded_i32(12)).collect();
        assert_eq!(draws, vec![8, 5, 5, 0, 2]);
        let draws: Vec<i32> = (0..3).map(|_| rand.next_bounded_i32(16)).collect();
        assert_eq!(draws, vec![5, 7, 8]);
    }

    #[test]
    fn bounded_redraws_from_the_biased_tail() {
        // The first 31 bit draw for this seed falls in the last partial bucket of the bound.
        let mut rand = LegacyRand::from_seed(2304);
        assert_eq!(rand.next_bounded_i32(1_000_000_007), 310_496_299);
    }
}
