use crate::random::RandomImpl;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum NormalIntProvider {
    #[serde(rename = "minecraft:constant", alias = "constant")]
    Constant(ConstantIntProvider),
    #[serde(rename = "minecraft:uniform", alias = "uniform")]
    Uniform(UniformIntProvider),
    #[serde(rename = "minecraft:clamped", alias = "clamped")]
    Clamped(ClampedIntProvider),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum IntProvider {
    Object(NormalIntProvider),
    Constant(i32),
}

impl IntProvider {
    pub fn uniform(min_inclusive: i32, max_inclusive: i32) -> Self {
        IntProvider::Object(NormalIntProvider::Uniform(UniformIntProvider::new(
            min_inclusive,
            max_inclusive,
        )))
    }

    pub fn get_min(&self) -> i32 {
        match self {
            IntProvider::Object(int_provider) => match int_provider {
                NormalIntProvider::Constant(constant) => constant.get_min(),
                NormalIntProvider::Uniform(uniform) => uniform.get_min(),
                NormalIntProvider::Clamped(clamped) => clamped.get_min(),
            },
            IntProvider::Constant(i) => *i,
        }
    }

    pub fn get(&self, random: &mut impl RandomImpl) -> i32 {
        match self {
            IntProvider::Object(int_provider) => match int_provider {
                NormalIntProvider::Constant(constant) => constant.get(random),
                NormalIntProvider::Uniform(uniform) => uniform.get(random),
                NormalIntProvider::Clamped(clamped) => clamped.get(random),
            },
            IntProvider::Constant(i) => *i,
        }
    }

    pub fn get_max(&self) -> i32 {
        match self {
            IntProvider::Object(int_provider) => match int_provider {
                NormalIntProvider::Constant(constant) => constant.get_max(),
                NormalIntProvider::Uniform(uniform) => uniform.get_max(),
                NormalIntProvider::Clamped(clamped) => clamped.get_max(),
            },
            IntProvider::Constant(i) => *i,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConstantIntProvider {
    value: i32,
}

impl ConstantIntProvider {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn get_min(&self) -> i32 {
        self.value
    }

    pub fn get(&self, _random: &mut impl RandomImpl) -> i32 {
        self.value
    }

    pub fn get_max(&self) -> i32 {
        self.value
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClampedIntProvider {
    source: Box<IntProvider>,
    min_inclusive: i32,
    max_inclusive: i32,
}

impl ClampedIntProvider {
    pub fn new(source: IntProvider, min_inclusive: i32, max_inclusive: i32) -> Self {
        Self {
            source: Box::new(source),
            min_inclusive,
            max_inclusive,
        }
    }

    pub fn get_min(&self) -> i32 {
        self.min_inclusive.max(self.source.get_min())
    }

    pub fn get(&self, random: &mut impl RandomImpl) -> i32 {
        self.source
            .get(random)
            .clamp(self.min_inclusive, self.max_inclusive)
    }

    pub fn get_max(&self) -> i32 {
        self.max_inclusive.min(self.source.get_max())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UniformIntProvider {
    pub min_inclusive: i32,
    pub max_inclusive: i32,
}

impl UniformIntProvider {
    pub fn new(min_inclusive: i32, max_inclusive: i32) -> Self {
        Self {
            min_inclusive,
            max_inclusive,
        }
    }

    pub fn get_min(&self) -> i32 {
        self.min_inclusive
    }

    pub fn get(&self, random: &mut impl RandomImpl) -> i32 {
        random.next_inbetween_i32(self.min_inclusive, self.max_inclusive)
    }

    pub fn get_max(&self) -> i32 {
        self.max_inclusive
    }
}
