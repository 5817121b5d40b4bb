use legacy_rand::LegacyRand;
use xoroshiro128::Xoroshiro;

pub mod legacy_rand;
pub mod xoroshiro128;

/// A fresh seed for hosts that do not derive one from the world seed.
pub fn get_seed() -> u64 {
    rand::random()
}

pub enum RandomGenerator {
    Xoroshiro(Xoroshiro),
    Legacy(LegacyRand),
}

impl RandomGenerator {
    pub fn legacy(seed: u64) -> Self {
        Self::Legacy(LegacyRand::from_seed(seed))
    }

    pub fn xoroshiro(seed: u64) -> Self {
        Self::Xoroshiro(Xoroshiro::from_seed(seed))
    }
}

impl RandomImpl for RandomGenerator {
    #[inline]
    fn from_seed(seed: u64) -> Self {
        Self::Xoroshiro(Xoroshiro::from_seed(seed))
    }

    #[inline]
    fn split(&mut self) -> Self {
        match self {
            Self::Xoroshiro(rand) => Self::Xoroshiro(rand.split()),
            Self::Legacy(rand) => Self::Legacy(rand.split()),
        }
    }

    #[inline]
    fn next_i32(&mut self) -> i32 {
        match self {
            Self::Xoroshiro(rand) => rand.next_i32(),
            Self::Legacy(rand) => rand.next_i32(),
        }
    }

    #[inline]
    fn next_bounded_i32(&mut self, bound: i32) -> i32 {
        match self {
            Self::Xoroshiro(rand) => rand.next_bounded_i32(bound),
            Self::Legacy(rand) => rand.next_bounded_i32(bound),
        }
    }

    #[inline]
    fn next_i64(&mut self) -> i64 {
        match self {
            Self::Xoroshiro(rand) => rand.next_i64(),
            Self::Legacy(rand) => rand.next_i64(),
        }
    }

    #[inline]
    fn next_bool(&mut self) -> bool {
        match self {
            Self::Xoroshiro(rand) => rand.next_bool(),
            Self::Legacy(rand) => rand.next_bool(),
        }
    }

    #[inline]
    fn next_f32(&mut self) -> f32 {
        match self {
            Self::Xoroshiro(rand) => rand.next_f32(),
            Self::Legacy(rand) => rand.next_f32(),
        }
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        match self {
            Self::Xoroshiro(rand) => rand.next_f64(),
            Self::Legacy(rand) => rand.next_f64(),
        }
    }
}

pub trait RandomImpl {
    fn from_seed(seed: u64) -> Self;

    fn split(&mut self) -> Self;

    fn next_i32(&mut self) -> i32;

    /// Uniform in `0..bound`. `bound` must be positive.
    fn next_bounded_i32(&mut self, bound: i32) -> i32;

    /// Uniform in `min..=max`.
    fn next_inbetween_i32(&mut self, min: i32, max: i32) -> i32 {
        self.next_bounded_i32(max - min + 1) + min
    }

    fn next_i64(&mut self) -> i64;

    fn next_bool(&mut self) -> bool;

    /// Uniform in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    fn skip(&mut self, count: i32) {
        for _ in 0..count {
            self.next_i64();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RandomGenerator, RandomImpl, get_seed};

    #[test]
    fn generators_are_deterministic() {
        let seed = get_seed();
        for (mut a, mut b) in [
            (RandomGenerator::legacy(seed), RandomGenerator::legacy(seed)),
            (
                RandomGenerator::xoroshiro(seed),
                RandomGenerator::xoroshiro(seed),
            ),
        ] {
            for _ in 0..64 {
                assert_eq!(a.next_i64(), b.next_i64());
                assert_eq!(a.next_bounded_i32(13), b.next_bounded_i32(13));
                assert_eq!(a.next_f32().to_bits(), b.next_f32().to_bits());
            }
        }
    }

    #[test]
    fn inbetween_is_inclusive() {
        let mut random = RandomGenerator::legacy(get_seed());
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let value = random.next_inbetween_i32(8, 11);
            assert!((8..=11).contains(&value), "{value} out of range");
            seen[(value - 8) as usize] = true;
        }
        assert!(seen.iter().all(|seen| *seen));
    }

    #[test]
    fn split_diverges_from_parent() {
        let mut parent = RandomGenerator::xoroshiro(7);
        let mut child = parent.split();
        let parent_values: Vec<_> = (0..8).map(|_| parent.next_i64()).collect();
        let child_values: Vec<_> = (0..8).map(|_| child.next_i64()).collect();
        assert_ne!(parent_values, child_values);
    }

    #[test]
    fn skip_advances_like_drawing() {
        let mut skipped = RandomGenerator::legacy(5);
        let mut drawn = RandomGenerator::legacy(5);
        skipped.skip(3);
        for _ in 0..3 {
            drawn.next_i64();
        }
        assert_eq!(skipped.next_i32(), drawn.next_i32());
    }
}
