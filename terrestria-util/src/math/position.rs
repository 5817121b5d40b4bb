use super::vector3::Vector3;
use std::fmt;
use std::hash::Hash;

pub struct BlockPosIterator {
    start_x: i32,
    start_y: i32,
    start_z: i32,
    size_x: u64,
    size_y: u64,
    index: u64,
    count: u64,
}

/// Number of cells in the inclusive range `start..=end`, zero when it is empty.
fn axis_len(start: i32, end: i32) -> u64 {
    u64::try_from(i64::from(end) - i64::from(start) + 1).unwrap_or(0)
}

impl BlockPosIterator {
    pub fn new(
        start_x: i32,
        start_y: i32,
        start_z: i32,
        end_x: i32,
        end_y: i32,
        end_z: i32,
    ) -> Self {
        let size_x = axis_len(start_x, end_x);
        let size_y = axis_len(start_y, end_y);
        let size_z = axis_len(start_z, end_z);
        BlockPosIterator {
            start_x,
            start_y,
            start_z,
            size_x,
            size_y,
            index: 0,
            count: size_x.saturating_mul(size_y).saturating_mul(size_z),
        }
    }
}

impl Iterator for BlockPosIterator {
    type Item = BlockPos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let x_offset = self.index % self.size_x;
        let y_offset = (self.index / self.size_x) % self.size_y;
        let z_offset = (self.index / self.size_x) / self.size_y;

        // Each offset is below its axis length, so the sums stay inside the box.
        let x = (i64::from(self.start_x) + x_offset as i64) as i32;
        let y = (i64::from(self.start_y) + y_offset as i64) as i32;
        let z = (i64::from(self.start_z) + z_offset as i64) as i32;

        self.index += 1;
        Some(BlockPos::new(x, y, z))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.index).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BlockPosIterator {}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
/// Aka Block Position
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// Iterates through all `BlockPos` within a cuboid region defined by two corner points,
    /// `start` and `end`. The iteration covers all blocks inclusively between the minimum
    /// and maximum coordinates of the two provided positions, X fastest, then Y, then Z.
    pub fn iterate(start: BlockPos, end: BlockPos) -> BlockPosIterator {
        BlockPosIterator::new(
            start.0.x.min(end.0.x),
            start.0.y.min(end.0.y),
            start.0.z.min(end.0.z),
            start.0.x.max(end.0.x),
            start.0.y.max(end.0.y),
            start.0.z.max(end.0.z),
        )
    }

    pub fn offset(&self, offset: Vector3<i32>) -> Self {
        BlockPos(self.0 + offset)
    }

    pub fn add(&self, x: i32, y: i32, z: i32) -> Self {
        BlockPos::new(self.0.x + x, self.0.y + y, self.0.z + z)
    }

    pub fn up(&self) -> Self {
        self.offset(Vector3::new(0, 1, 0))
    }

    pub fn up_height(&self, height: i32) -> Self {
        self.offset(Vector3::new(0, height, 0))
    }

    pub fn down(&self) -> Self {
        self.offset(Vector3::new(0, -1, 0))
    }

    pub fn down_height(&self, height: i32) -> Self {
        self.offset(Vector3::new(0, -height, 0))
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from(value: (i32, i32, i32)) -> Self {
        BlockPos(value.into())
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0.x, self.0.y, self.0.z)
    }
}

#[cfg(test)]
mod tests {
    use super::BlockPos;

    #[test]
    fn iterate_covers_cuboid_once() {
        let positions: Vec<_> =
            BlockPos::iterate(BlockPos::new(1, 5, 1), BlockPos::new(-1, 5, -1)).collect();
        assert_eq!(positions.len(), 9);
        assert_eq!(positions[0], BlockPos::new(-1, 5, -1));
        assert_eq!(positions[8], BlockPos::new(1, 5, 1));
        for x in -1..=1 {
            for z in -1..=1 {
                assert!(positions.contains(&BlockPos::new(x, 5, z)));
            }
        }
    }

    #[test]
    fn vertical_offsets() {
        let pos = BlockPos::new(3, 64, -7);
        assert_eq!(pos.up(), BlockPos::new(3, 65, -7));
        assert_eq!(pos.down(), BlockPos::new(3, 63, -7));
        assert_eq!(pos.up_height(8), BlockPos::new(3, 72, -7));
        assert_eq!(pos.down_height(2).up_height(2), pos);
    }

    #[test]
    fn iterate_spans_the_full_axis_range() {
        let mut wide = BlockPos::iterate(BlockPos::new(i32::MIN, 0, 0), BlockPos::new(i32::MAX, 0, 0));
        assert_eq!(wide.next(), Some(BlockPos::new(i32::MIN, 0, 0)));
        assert_eq!(wide.next(), Some(BlockPos::new(i32::MIN + 1, 0, 0)));
        assert_eq!(wide.size_hint().0, (1usize << 32) - 2);

        let mut huge = BlockPos::iterate(
            BlockPos::new(-70_000, -70_000, -70_000),
            BlockPos::new(70_000, 70_000, 70_000),
        );
        assert_eq!(huge.next(), Some(BlockPos::new(-70_000, -70_000, -70_000)));
        assert_eq!(huge.size_hint().0, 140_001usize.pow(3) - 1);
    }

    #[test]
    fn empty_range_yields_nothing() {
        assert_eq!(super::BlockPosIterator::new(1, 0, 0, 0, 0, 0).count(), 0);
    }
}
