use std::{f64::consts::PI, sync::LazyLock};

pub mod block_box;
pub mod float_provider;
pub mod int_provider;
pub mod position;
pub mod vector3;

const SINE_TABLE_SIZE: usize = 65536;
const RADIANS_TO_INDEX: f32 = 10430.378;

static SINE_TABLE: LazyLock<Box<[f32]>> = LazyLock::new(|| {
    (0..SINE_TABLE_SIZE)
        .map(|i| (i as f64 * PI * 2.0 / SINE_TABLE_SIZE as f64).sin() as f32)
        .collect()
});

/// Table based sine. Matches vanilla world generation bit for bit, which `f32::sin` does not.
#[inline]
pub fn sin(radians: f32) -> f32 {
    SINE_TABLE[(radians * RADIANS_TO_INDEX) as i32 as usize & (SINE_TABLE_SIZE - 1)]
}

/// Table based cosine, see [`sin`].
#[inline]
pub fn cos(radians: f32) -> f32 {
    SINE_TABLE[(radians * RADIANS_TO_INDEX + 16384.0) as i32 as usize & (SINE_TABLE_SIZE - 1)]
}
