use itertools::iproduct;
use log::debug;
use terrestria_config::{RubberTreeConfig, TreeDefinition};
use terrestria_data::Block;
use terrestria_util::{
    math::{
        block_box::BlockBox, float_provider::FloatProvider, int_provider::IntProvider,
        position::BlockPos,
    },
    random::RandomGenerator,
};
use thiserror::Error;

use crate::world::{BlockAccessor, BlockFlags, ModifiableWorld};

use super::{
    ModifiedSet, TreeMaterials, TreeWriter, UnknownBlockError, branch::grow_branches,
    can_tree_replace, is_natural_dirt_or_grass, placement_flags, trunk::grow_trunk,
};

/// Why a rubber tree could not grow at an origin. Nothing is written when this is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("a tree of height {height} at {origin} does not fit in the world")]
    OutOfWorldBounds { origin: BlockPos, height: i32 },
    #[error("{block} at {pos} cannot carry a tree")]
    InvalidGround { pos: BlockPos, block: &'static Block },
    #[error("{block} at {pos} is in the way")]
    Obstructed { pos: BlockPos, block: &'static Block },
}

/// The sizes of one tree, drawn once per attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RubberTreeParameters {
    pub height: i32,
    pub bare_trunk_height: i32,
    /// Half width of the canopy volume that must be free.
    pub max_radius: i32,
}

impl RubberTreeParameters {
    pub fn sample(
        random: &mut RandomGenerator,
        height: &IntProvider,
        bare_trunk_height: &IntProvider,
        max_radius: &IntProvider,
    ) -> Self {
        let height = height.get(random);
        let bare_trunk_height = bare_trunk_height.get(random);
        let max_radius = max_radius.get(random);
        Self {
            height,
            bare_trunk_height,
            max_radius,
        }
    }
}

/// A thick trunked tree with a leaf cap and up to 32 rising branches.
#[derive(Clone, Debug, PartialEq)]
pub struct RubberTreeFeature {
    materials: TreeMaterials,
    flags: BlockFlags,
    height: IntProvider,
    bare_trunk_height: IntProvider,
    max_radius: IntProvider,
    branch_length: FloatProvider,
}

impl RubberTreeFeature {
    /// A feature with the stock size ranges.
    pub fn new(definition: &TreeDefinition, notify: bool) -> Result<Self, UnknownBlockError> {
        let defaults = RubberTreeConfig::default();
        Ok(Self {
            materials: TreeMaterials::resolve(definition)?,
            flags: placement_flags(notify),
            height: defaults.height,
            bare_trunk_height: defaults.bare_trunk_height,
            max_radius: defaults.max_radius,
            branch_length: defaults.branch_length,
        })
    }

    pub fn from_config(config: &RubberTreeConfig) -> Result<Self, UnknownBlockError> {
        Ok(Self {
            materials: TreeMaterials::resolve(&config.definition)?,
            flags: placement_flags(config.notify),
            height: config.height.clone(),
            bare_trunk_height: config.bare_trunk_height.clone(),
            max_radius: config.max_radius.clone(),
            branch_length: config.branch_length.clone(),
        })
    }

    pub fn materials(&self) -> &TreeMaterials {
        &self.materials
    }

    /// Tries to grow a tree at `origin`.
    ///
    /// Returns `false` when the spot is rejected, in which case neither `world` nor `modified`
    /// was touched. Writes outside `bounding_box` are recorded in `modified` but not applied.
    pub fn generate<W: ModifiableWorld>(
        &self,
        modified: &mut ModifiedSet,
        world: &mut W,
        random: &mut RandomGenerator,
        origin: BlockPos,
        bounding_box: &BlockBox,
    ) -> bool {
        let parameters = RubberTreeParameters::sample(
            random,
            &self.height,
            &self.bare_trunk_height,
            &self.max_radius,
        );
        match self.generate_with_parameters(
            modified,
            world,
            random,
            origin,
            bounding_box,
            parameters,
        ) {
            Ok(()) => true,
            Err(err) => {
                debug!("Rejected rubber tree at {origin}: {err}");
                false
            }
        }
    }

    /// Same as [`Self::generate`] with the tree sizes fixed by the caller. Branches still draw
    /// from `random`.
    pub fn generate_with_parameters<W: ModifiableWorld>(
        &self,
        modified: &mut ModifiedSet,
        world: &mut W,
        random: &mut RandomGenerator,
        origin: BlockPos,
        bounding_box: &BlockBox,
        parameters: RubberTreeParameters,
    ) -> Result<(), PlacementError> {
        check_placement(&*world, origin, &parameters)?;
        debug!("Growing rubber tree at {origin} with {parameters:?}");

        let mut writer = TreeWriter {
            world,
            modified,
            bounding_box,
            flags: self.flags,
        };
        grow_trunk(&mut writer, &self.materials, origin, parameters.height);
        grow_branches(
            &mut writer,
            &self.materials,
            origin,
            parameters.height,
            &self.branch_length,
            random,
        );
        Ok(())
    }
}

/// Read-only check that a tree with `parameters` may grow at `origin`.
pub fn check_placement(
    world: &impl BlockAccessor,
    origin: BlockPos,
    parameters: &RubberTreeParameters,
) -> Result<(), PlacementError> {
    let height = parameters.height;
    let headroom = origin
        .0
        .y
        .checked_add(height)
        .and_then(|top| top.checked_add(1));
    if origin.0.y <= world.bottom_y() || headroom.is_none_or(|top| top > world.top_y()) {
        return Err(PlacementError::OutOfWorldBounds { origin, height });
    }

    let ground = origin.down();
    if !is_natural_dirt_or_grass(world, &ground) {
        return Err(PlacementError::InvalidGround {
            pos: ground,
            block: world.get_block(&ground),
        });
    }

    check_for_obstructions(world, origin, parameters)
}

/// Probes the column above `origin` up to the canopy, then the full canopy square.
pub fn check_for_obstructions(
    world: &impl BlockAccessor,
    origin: BlockPos,
    parameters: &RubberTreeParameters,
) -> Result<(), PlacementError> {
    let radius = parameters.max_radius;
    // Everything above the world reads as air, so the column stops at the top.
    let column = parameters
        .bare_trunk_height
        .min(world.top_y().saturating_sub(origin.0.y));
    let bare = (1..=column).map(|dy| (dy, 0, 0));
    let canopy = iproduct!(
        parameters.bare_trunk_height..parameters.height,
        -radius..=radius,
        -radius..=radius
    );

    for (dy, dx, dz) in bare.chain(canopy) {
        let pos = origin.add(dx, dy, dz);
        if !can_tree_replace(world, &pos) {
            return Err(PlacementError::Obstructed {
                pos,
                block: world.get_block(&pos),
            });
        }
    }
    Ok(())
}
