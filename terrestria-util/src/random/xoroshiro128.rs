use super::RandomImpl;

const GOLDEN_RATIO_64: u64 = 0x9E37_79B9_7F4A_7C15;
const SILVER_RATIO_64: u64 = 0x6A09_E667_F3BC_C909;

/// xoroshiro128++, the stream used by modern world generation.
#[derive(Clone)]
pub struct Xoroshiro {
    lo: u64,
    hi: u64,
}

fn mix_stafford_13(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl Xoroshiro {
    pub fn from_raw(lo: u64, hi: u64) -> Self {
        if lo == 0 && hi == 0 {
            return Self {
                lo: GOLDEN_RATIO_64,
                hi: SILVER_RATIO_64,
            };
        }
        Self { lo, hi }
    }

    fn next(&mut self) -> u64 {
        let l = self.lo;
        let mut m = self.hi;
        let n = l.wrapping_add(m).rotate_left(17).wrapping_add(l);
        m ^= l;
        self.lo = l.rotate_left(49) ^ m ^ (m << 21);
        self.hi = m.rotate_left(28);
        n
    }

    fn next_bits(&mut self, bits: u32) -> u64 {
        self.next() >> (64 - bits)
    }
}

impl RandomImpl for Xoroshiro {
    fn from_seed(seed: u64) -> Self {
        let lo = seed ^ SILVER_RATIO_64;
        let hi = lo.wrapping_add(GOLDEN_RATIO_64);
        Self::from_raw(mix_stafford_13(lo), mix_stafford_13(hi))
    }

    fn split(&mut self) -> Self {
        Self::from_raw(self.next(), self.next())
    }

    fn next_i32(&mut self) -> i32 {
        self.next() as i32
    }

    fn next_bounded_i32(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive, got {bound}");
        let bound = bound as u64;
        let mut product = (self.next_i32() as u32 as u64).wrapping_mul(bound);
        let mut low = product & 0xFFFF_FFFF;
        if low < bound {
            let threshold = (bound.wrapping_neg() & 0xFFFF_FFFF) % bound;
            while low < threshold {
                product = (self.next_i32() as u32 as u64).wrapping_mul(bound);
                low = product & 0xFFFF_FFFF;
            }
        }
        (product >> 32) as i32
    }

    fn next_i64(&mut self) -> i64 {
        self.next() as i64
    }

    fn next_bool(&mut self) -> bool {
        self.next() & 1 != 0
    }

    fn next_f32(&mut self) -> f32 {
        self.next_bits(24) as f32 * 5.960_464_5E-8
    }

    fn next_f64(&mut self) -> f64 {
        self.next_bits(53) as f64 * 1.110_223_024_625_156_5E-16
    }
}

#[cfg(test)]
mod tests {
    use super::Xoroshiro;
    use crate::random::RandomImpl;

    #[test]
    fn zero_state_is_reseeded() {
        let mut rand = Xoroshiro::from_raw(0, 0);
        assert_ne!(rand.next_i64(), 0);
    }

    #[test]
    fn bounded_stays_in_range() {
        let mut rand = Xoroshiro::from_seed(3);
        for bound in [1, 2, 7, 12, 100] {
            for _ in 0..200 {
                assert!((0..bound).contains(&rand.next_bounded_i32(bound)));
            }
        }
    }
}
