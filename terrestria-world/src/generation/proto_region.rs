use std::collections::HashMap;

use indexmap::IndexSet;
use terrestria_config::WorldConfig;
use terrestria_data::{Block, BlockState};
use terrestria_util::math::position::BlockPos;

use crate::{
    BlockStateId,
    world::{BlockAccessor, BlockFlags, ModifiableWorld, SetBlockError},
};

/// Sparse in-memory block storage for feature generation.
///
/// Unset cells are air. Only non-air states are stored.
#[derive(Clone, Debug, PartialEq)]
pub struct ProtoRegion {
    blocks: HashMap<BlockPos, BlockStateId>,
    bottom_y: i32,
    height: u32,
    writes: usize,
    pending_updates: IndexSet<BlockPos>,
}

impl ProtoRegion {
    pub fn new(bottom_y: i32, height: u32) -> Self {
        Self {
            blocks: HashMap::new(),
            bottom_y,
            height,
            writes: 0,
            pending_updates: IndexSet::new(),
        }
    }

    pub fn from_config(config: &WorldConfig) -> Self {
        Self::new(config.min_y, config.height)
    }

    /// Fills the inclusive square `min..=max` at layer `y` without counting as writes.
    pub fn fill_layer(
        &mut self,
        y: i32,
        (min_x, min_z): (i32, i32),
        (max_x, max_z): (i32, i32),
        state: &'static BlockState,
    ) {
        for x in min_x..=max_x {
            for z in min_z..=max_z {
                self.store(BlockPos::new(x, y, z), state);
            }
        }
    }

    /// Places a single block without counting as a write.
    pub fn insert(&mut self, position: BlockPos, state: &'static BlockState) {
        self.store(position, state);
    }

    /// Number of states written through [`ModifiableWorld::set_block_state`].
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Drains the positions whose neighbours were asked to update.
    pub fn take_pending_updates(&mut self) -> Vec<BlockPos> {
        self.pending_updates.drain(..).collect()
    }

    pub fn count_of(&self, block: &Block) -> usize {
        self.blocks
            .values()
            .filter(|id| **id == block.default_state.id)
            .count()
    }

    /// Positions holding `block`, in no particular order.
    pub fn positions_of<'a>(&'a self, block: &'a Block) -> impl Iterator<Item = BlockPos> + 'a {
        self.blocks
            .iter()
            .filter(move |(_, id)| **id == block.default_state.id)
            .map(|(pos, _)| *pos)
    }

    fn store(&mut self, position: BlockPos, state: &'static BlockState) -> &'static BlockState {
        let previous = if state.is_air() {
            self.blocks.remove(&position)
        } else {
            self.blocks.insert(position, state.id)
        };
        previous
            .and_then(BlockState::from_id)
            .unwrap_or(Block::AIR.default_state)
    }
}

impl BlockAccessor for ProtoRegion {
    fn get_block_state(&self, position: &BlockPos) -> &'static BlockState {
        self.blocks
            .get(position)
            .copied()
            .and_then(BlockState::from_id)
            .unwrap_or(Block::AIR.default_state)
    }

    fn bottom_y(&self) -> i32 {
        self.bottom_y
    }

    fn top_y(&self) -> i32 {
        self.bottom_y + self.height as i32
    }
}

impl ModifiableWorld for ProtoRegion {
    fn set_block_state(
        &mut self,
        position: &BlockPos,
        block_state: &'static BlockState,
        flags: BlockFlags,
    ) -> Result<&'static BlockState, SetBlockError> {
        if self.is_out_of_height_limit(position.0.y) {
            return Err(SetBlockError::BlockOutOfWorldBounds(*position));
        }
        self.writes += 1;
        if flags.contains(BlockFlags::NOTIFY_NEIGHBORS) {
            self.pending_updates.insert(*position);
        }
        Ok(self.store(*position, block_state))
    }
}

#[cfg(test)]
mod tests {
    use terrestria_config::WorldConfig;
    use terrestria_data::Block;
    use terrestria_util::math::position::BlockPos;

    use super::ProtoRegion;
    use crate::world::{BlockAccessor, BlockFlags, ModifiableWorld, SetBlockError};

    #[test]
    fn unset_and_out_of_world_reads_are_air() {
        let region = ProtoRegion::from_config(&WorldConfig::default());
        assert_eq!(region.get_block(&BlockPos::new(0, 64, 0)), &Block::AIR);
        assert_eq!(region.get_block(&BlockPos::new(0, 300, 0)), &Block::AIR);
        assert_eq!(region.top_y(), 256);
        assert!(region.is_out_of_height_limit(256));
        assert!(!region.is_out_of_height_limit(0));
    }

    #[test]
    fn set_returns_previous_state() {
        let mut region = ProtoRegion::new(0, 256);
        let pos = BlockPos::new(1, 2, 3);
        let previous = region
            .set_block_state(&pos, Block::STONE.default_state, BlockFlags::FORCE_STATE)
            .unwrap();
        assert_eq!(previous.block(), &Block::AIR);
        let previous = region
            .set_block_state(&pos, Block::AIR.default_state, BlockFlags::FORCE_STATE)
            .unwrap();
        assert_eq!(previous.block(), &Block::STONE);
        assert_eq!(region.write_count(), 2);
        assert_eq!(region.count_of(&Block::STONE), 0);
    }

    #[test]
    fn rejects_writes_outside_height() {
        let mut region = ProtoRegion::new(-64, 384);
        let pos = BlockPos::new(0, 320, 0);
        assert_eq!(
            region.set_block_state(&pos, Block::DIRT.default_state, BlockFlags::NOTIFY_ALL),
            Err(SetBlockError::BlockOutOfWorldBounds(pos))
        );
        assert_eq!(region.write_count(), 0);
        assert!(region.take_pending_updates().is_empty());
    }

    #[test]
    fn notify_queues_updates() {
        let mut region = ProtoRegion::new(0, 256);
        let a = BlockPos::new(0, 10, 0);
        let b = BlockPos::new(0, 11, 0);
        region
            .set_block_state(&a, Block::DIRT.default_state, BlockFlags::NOTIFY_ALL)
            .unwrap();
        region
            .set_block_state(&b, Block::DIRT.default_state, BlockFlags::NOTIFY_LISTENERS)
            .unwrap();
        region
            .set_block_state(&a, Block::STONE.default_state, BlockFlags::NOTIFY_ALL)
            .unwrap();
        assert_eq!(region.take_pending_updates(), vec![a]);
        assert!(region.take_pending_updates().is_empty());
    }

    #[test]
    fn fill_layer_is_not_a_write() {
        let mut region = ProtoRegion::new(0, 256);
        region.fill_layer(63, (-2, -2), (2, 2), Block::GRASS_BLOCK.default_state);
        assert_eq!(region.count_of(&Block::GRASS_BLOCK), 25);
        assert_eq!(region.write_count(), 0);
        assert!(
            region
                .positions_of(&Block::GRASS_BLOCK)
                .all(|pos| pos.0.y == 63)
        );
    }
}
