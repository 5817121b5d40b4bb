use indexmap::IndexSet;
use log::{debug, trace};
use terrestria_config::TreeDefinition;
use terrestria_data::{
    Block, BlockState,
    tag::{Tagable, block},
};
use terrestria_util::math::{block_box::BlockBox, position::BlockPos};
use thiserror::Error;

use crate::world::{BlockAccessor, BlockFlags, ModifiableWorld};

pub mod branch;
pub mod rubber;
pub mod trunk;

/// Every position a tree attempted to write, in first-write order.
pub type ModifiedSet = IndexSet<BlockPos>;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("tree definition names unknown block `{0}`")]
pub struct UnknownBlockError(pub String);

/// The wood and leaves a tree is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeMaterials {
    pub wood: &'static BlockState,
    pub leaves: &'static BlockState,
}

impl TreeMaterials {
    pub fn resolve(definition: &TreeDefinition) -> Result<Self, UnknownBlockError> {
        let lookup = |key: &str| {
            Block::from_registry_key(key)
                .map(|block| block.default_state)
                .ok_or_else(|| UnknownBlockError(key.to_string()))
        };
        Ok(Self {
            wood: lookup(&definition.wood)?,
            leaves: lookup(&definition.leaves)?,
        })
    }
}

pub fn placement_flags(notify: bool) -> BlockFlags {
    if notify {
        BlockFlags::NOTIFY_ALL | BlockFlags::FORCE_STATE
    } else {
        BlockFlags::NOTIFY_LISTENERS | BlockFlags::FORCE_STATE
    }
}

fn is_tagged(block: &Block, tag: &str) -> bool {
    block.is_tagged_with(tag).unwrap_or(false)
}

pub fn is_leaves(block: &Block) -> bool {
    is_tagged(block, block::LEAVES)
}

pub fn is_natural_dirt(block: &Block) -> bool {
    is_tagged(block, block::NATURAL_DIRT)
}

/// States a growing tree may overwrite.
pub fn can_replace(state: &BlockState, block: &Block) -> bool {
    state.is_air()
        || is_leaves(block)
        || block == &Block::GRASS_BLOCK
        || is_natural_dirt(block)
        || is_tagged(block, block::LOGS)
        || is_tagged(block, block::SAPLINGS)
        || block == &Block::VINE
}

pub fn can_tree_replace(world: &impl BlockAccessor, pos: &BlockPos) -> bool {
    let state = world.get_block_state(pos);
    can_replace(state, state.block())
}

pub fn is_air_or_leaves(world: &impl BlockAccessor, pos: &BlockPos) -> bool {
    let state = world.get_block_state(pos);
    state.is_air() || is_leaves(state.block())
}

pub fn is_natural_dirt_or_grass(world: &impl BlockAccessor, pos: &BlockPos) -> bool {
    let block = world.get_block(pos);
    block == &Block::GRASS_BLOCK || is_natural_dirt(block)
}

/// Records `pos` as modified and writes `state` there if it lies inside `bounding_box`.
pub fn set_block_state<W: ModifiableWorld>(
    modified: &mut ModifiedSet,
    world: &mut W,
    pos: BlockPos,
    state: &'static BlockState,
    bounding_box: &BlockBox,
    flags: BlockFlags,
) {
    modified.insert(pos);
    if !bounding_box.contains(&pos) {
        trace!("Clipped {} at {pos}, outside {bounding_box}", state.block());
        return;
    }
    if let Err(err) = world.set_block_state(&pos, state, flags) {
        debug!("Dropped {} for tree: {err}", state.block());
    }
}

/// The world, bounds and bookkeeping one generation attempt writes through.
pub struct TreeWriter<'a, W: ModifiableWorld> {
    pub world: &'a mut W,
    pub modified: &'a mut ModifiedSet,
    pub bounding_box: &'a BlockBox,
    pub flags: BlockFlags,
}

impl<W: ModifiableWorld> TreeWriter<'_, W> {
    pub fn place(&mut self, pos: BlockPos, state: &'static BlockState) {
        set_block_state(
            self.modified,
            self.world,
            pos,
            state,
            self.bounding_box,
            self.flags,
        );
    }

    pub fn can_tree_replace(&self, pos: &BlockPos) -> bool {
        can_tree_replace(&*self.world, pos)
    }

    pub fn is_air_or_leaves(&self, pos: &BlockPos) -> bool {
        is_air_or_leaves(&*self.world, pos)
    }
}
