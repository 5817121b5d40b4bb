use std::fmt;

use serde::{Deserialize, Serialize};

use super::{position::BlockPos, vector3::Vector3};

/// Inclusive, axis-aligned box of blocks.
///
/// Features use it as their working volume: writes outside of it are tracked but never reach
/// the world.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct BlockBox {
    pub min: Vector3<i32>,
    pub max: Vector3<i32>,
}

impl BlockBox {
    pub const fn new(min_x: i32, min_y: i32, min_z: i32, max_x: i32, max_y: i32, max_z: i32) -> Self {
        Self {
            min: Vector3::new(min_x, min_y, min_z),
            max: Vector3::new(max_x, max_y, max_z),
        }
    }

    /// A box spanning every representable position.
    pub const fn infinite() -> Self {
        Self::new(i32::MIN, i32::MIN, i32::MIN, i32::MAX, i32::MAX, i32::MAX)
    }

    pub fn from_corners(a: BlockPos, b: BlockPos) -> Self {
        Self::new(
            a.0.x.min(b.0.x),
            a.0.y.min(b.0.y),
            a.0.z.min(b.0.z),
            a.0.x.max(b.0.x),
            a.0.y.max(b.0.y),
            a.0.z.max(b.0.z),
        )
    }

    /// The 16x16 column of the chunk at `chunk_x`, `chunk_z`, between `min_y` and `max_y`.
    pub fn of_chunk(chunk_x: i32, chunk_z: i32, min_y: i32, max_y: i32) -> Self {
        let x = chunk_x << 4;
        let z = chunk_z << 4;
        Self::new(x, min_y, z, x + 15, max_y, z + 15)
    }

    pub fn contains(&self, pos: &BlockPos) -> bool {
        let pos = pos.0;
        pos.x >= self.min.x
            && pos.x <= self.max.x
            && pos.y >= self.min.y
            && pos.y <= self.max.y
            && pos.z >= self.min.z
            && pos.z <= self.max.z
    }
}

impl fmt::Display for BlockBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}] -> [{}, {}, {}]",
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::BlockBox;
    use crate::math::position::BlockPos;

    #[test]
    fn contains_is_inclusive() {
        let bounds = BlockBox::from_corners(BlockPos::new(2, 0, 2), BlockPos::new(-2, 10, -2));
        assert!(bounds.contains(&BlockPos::new(2, 10, -2)));
        assert!(bounds.contains(&BlockPos::new(0, 5, 0)));
        assert!(!bounds.contains(&BlockPos::new(3, 5, 0)));
        assert!(!bounds.contains(&BlockPos::new(0, 11, 0)));
    }

    #[test]
    fn chunk_box() {
        let bounds = BlockBox::of_chunk(-1, 2, 0, 255);
        assert!(bounds.contains(&BlockPos::new(-16, 0, 32)));
        assert!(bounds.contains(&BlockPos::new(-1, 255, 47)));
        assert!(!bounds.contains(&BlockPos::new(0, 64, 40)));
        assert!(!BlockBox::of_chunk(0, 2, 0, 255).contains(&BlockPos::new(-1, 64, 40)));
    }

    #[test]
    fn infinite_contains_extremes() {
        assert!(BlockBox::infinite().contains(&BlockPos::new(i32::MAX, i32::MIN, 0)));
    }
}
