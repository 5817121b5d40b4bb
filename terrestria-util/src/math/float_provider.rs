use crate::random::RandomImpl;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum NormalFloatProvider {
    #[serde(rename = "minecraft:constant", alias = "constant")]
    Constant(ConstantFloatProvider),
    #[serde(rename = "minecraft:uniform", alias = "uniform")]
    Uniform(UniformFloatProvider),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum FloatProvider {
    Object(NormalFloatProvider),
    Constant(f32),
}

impl FloatProvider {
    pub fn uniform(min_inclusive: f32, max_exclusive: f32) -> Self {
        FloatProvider::Object(NormalFloatProvider::Uniform(UniformFloatProvider::new(
            min_inclusive,
            max_exclusive,
        )))
    }

    pub fn get_min(&self) -> f32 {
        match self {
            FloatProvider::Object(inv_provider) => match inv_provider {
                NormalFloatProvider::Constant(constant) => constant.get_min(),
                NormalFloatProvider::Uniform(uniform) => uniform.get_min(),
            },
            FloatProvider::Constant(i) => *i,
        }
    }

    pub fn get(&self, random: &mut impl RandomImpl) -> f32 {
        match self {
            FloatProvider::Object(inv_provider) => match inv_provider {
                NormalFloatProvider::Constant(constant) => constant.get(random),
                NormalFloatProvider::Uniform(uniform) => uniform.get(random),
            },
            FloatProvider::Constant(i) => *i,
        }
    }

    pub fn get_max(&self) -> f32 {
        match self {
            FloatProvider::Object(inv_provider) => match inv_provider {
                NormalFloatProvider::Constant(constant) => constant.get_max(),
                NormalFloatProvider::Uniform(uniform) => uniform.get_max(),
            },
            FloatProvider::Constant(i) => *i,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConstantFloatProvider {
    value: f32,
}

impl ConstantFloatProvider {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    pub fn get_min(&self) -> f32 {
        self.value
    }

    pub fn get(&self, _random: &mut impl RandomImpl) -> f32 {
        self.value
    }

    pub fn get_max(&self) -> f32 {
        self.value
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UniformFloatProvider {
    pub min_inclusive: f32,
    pub max_exclusive: f32,
}

impl UniformFloatProvider {
    pub fn new(min_inclusive: f32, max_exclusive: f32) -> Self {
        Self {
            min_inclusive,
            max_exclusive,
        }
    }

    pub fn get_min(&self) -> f32 {
        self.min_inclusive
    }

    pub fn get(&self, random: &mut impl RandomImpl) -> f32 {
        random.next_f32() * (self.max_exclusive - self.min_inclusive) + self.min_inclusive
    }

    pub fn get_max(&self) -> f32 {
        self.max_exclusive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RandomGenerator, get_seed};

    #[test]
    fn uniform_stays_in_half_open_range() {
        let mut random = RandomGenerator::legacy(get_seed());
        let provider = FloatProvider::uniform(2.0, 9.0);
        for _ in 0..500 {
            let value = provider.get(&mut random);
            assert!((2.0..9.0).contains(&value), "{value} outside [2, 9)");
        }
    }

    #[test]
    fn uniform_matches_scaled_draw() {
        let seed = get_seed();
        let mut provided = RandomGenerator::legacy(seed);
        let mut manual = RandomGenerator::legacy(seed);
        let provider = UniformFloatProvider::new(2.0, 9.0);
        for _ in 0..32 {
            assert_eq!(
                provider.get(&mut provided).to_bits(),
                (manual.next_f32() * 7.0 + 2.0).to_bits()
            );
        }
    }

    #[test]
    fn constant_is_fixed() {
        let mut random = RandomGenerator::legacy(0);
        let provider = FloatProvider::Constant(4.5);
        assert_eq!(provider.get(&mut random), 4.5);
        assert_eq!(provider.get_min(), provider.get_max());
    }
}
