use bitflags::bitflags;
use terrestria_data::{Block, BlockState};
use terrestria_util::math::position::BlockPos;
use thiserror::Error;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BlockFlags: u32 {
        const NOTIFY_NEIGHBORS                      = 0b000_0000_0001;
        const NOTIFY_LISTENERS                      = 0b000_0000_0010;
        const NOTIFY_ALL                            = 0b000_0000_0011;
        const FORCE_STATE                           = 0b000_0000_0100;
        const SKIP_DROPS                            = 0b000_0000_1000;
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetBlockError {
    #[error("block position {0} is outside of the world height")]
    BlockOutOfWorldBounds(BlockPos),
}

/// Read access to the blocks of a world.
///
/// Positions outside of the world read as air.
pub trait BlockAccessor {
    fn get_block_state(&self, position: &BlockPos) -> &'static BlockState;

    fn get_block(&self, position: &BlockPos) -> &'static Block {
        self.get_block_state(position).block()
    }

    /// Lowest y that holds blocks.
    fn bottom_y(&self) -> i32;

    /// First y above the world, exclusive.
    fn top_y(&self) -> i32;

    fn is_out_of_height_limit(&self, y: i32) -> bool {
        y < self.bottom_y() || y >= self.top_y()
    }
}

/// Write access on top of [`BlockAccessor`].
pub trait ModifiableWorld: BlockAccessor {
    /// Replaces the state at `position`, returning the state it had before.
    fn set_block_state(
        &mut self,
        position: &BlockPos,
        block_state: &'static BlockState,
        flags: BlockFlags,
    ) -> Result<&'static BlockState, SetBlockError>;
}
