use std::f32::consts::PI;

use log::trace;
use terrestria_config::tree::MIN_BRANCH_BASE;
use terrestria_data::BlockDirection;
use terrestria_util::{
    math::{self, float_provider::FloatProvider, position::BlockPos},
    random::{RandomGenerator, RandomImpl},
};

use crate::world::ModifiableWorld;

use super::{TreeMaterials, TreeWriter};

pub const BRANCH_ATTEMPTS: usize = 32;
/// Branch wood never lands further than this from the trunk axis on X or Z.
pub const MAX_BRANCH_REACH: i32 = 6;
const BRANCH_RISE: f64 = 0.4;

/// Where a branch leaves the trunk and where it heads, relative to the tree origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BranchShape {
    pub base_y: i32,
    pub offset_x: i32,
    pub offset_z: i32,
}

impl BranchShape {
    /// Draws base height, length and angle, in that order.
    pub fn sample(random: &mut RandomGenerator, height: i32, length: &FloatProvider) -> Self {
        let base_y = random.next_bounded_i32(height - MIN_BRANCH_BASE) + MIN_BRANCH_BASE;
        let length = length.get(random);
        let angle = random.next_f32() * PI * 2.0;
        Self::from_polar(base_y, length, angle)
    }

    /// Horizontal offsets are truncated toward zero.
    pub fn from_polar(base_y: i32, length: f32, angle: f32) -> Self {
        Self {
            base_y,
            offset_x: (math::cos(angle) * length) as i32,
            offset_z: (math::sin(angle) * length) as i32,
        }
    }

    /// Number of steps the walk takes, one per unit of Manhattan distance to the tip.
    pub fn steps(&self) -> u32 {
        self.offset_x
            .unsigned_abs()
            .saturating_add(self.offset_z.unsigned_abs())
    }

    pub fn walk(&self) -> BranchWalk {
        BranchWalk::new(self.offset_x, self.offset_z)
    }
}

/// One cell of a branch walk, relative to the branch base on the trunk axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BranchStep {
    pub moved_x: i32,
    pub moved_z: i32,
    pub offset_y: i32,
}

impl BranchStep {
    pub fn is_within_reach(&self) -> bool {
        let reach = -MAX_BRANCH_REACH..=MAX_BRANCH_REACH;
        reach.contains(&self.moved_x) && reach.contains(&self.moved_z)
    }
}

/// Walks from the trunk axis towards `(offset_x, offset_z)` one axis-aligned step at a time,
/// advancing whichever axis lags behind in relative progress.
///
/// Progress ratios are single precision. A zero offset on an axis makes its ratio NaN or
/// infinite and the comparison falls through to Z, so a walk along X alone first steps once
/// towards -Z.
pub struct BranchWalk {
    move_x: i32,
    move_z: i32,
    abs_x: u32,
    step_x: f32,
    step_z: f32,
    moved_x: i32,
    moved_z: i32,
    remaining: u32,
}

impl BranchWalk {
    pub fn new(offset_x: i32, offset_z: i32) -> Self {
        let abs_x = offset_x.unsigned_abs();
        let abs_z = offset_z.unsigned_abs();
        Self {
            move_x: if offset_x > 0 { 1 } else { -1 },
            move_z: if offset_z > 0 { 1 } else { -1 },
            abs_x,
            step_x: 1.0 / abs_x as f32,
            step_z: 1.0 / abs_z as f32,
            moved_x: 0,
            moved_z: 0,
            remaining: abs_x.saturating_add(abs_z),
        }
    }
}

impl Iterator for BranchWalk {
    type Item = BranchStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let progress_x = (self.moved_x as f32 * self.step_x).abs();
        let progress_z = (self.moved_z as f32 * self.step_z).abs();
        if progress_x < progress_z && self.moved_x.unsigned_abs() < self.abs_x {
            self.moved_x = self.moved_x.saturating_add(self.move_x);
        } else {
            self.moved_z = self.moved_z.saturating_add(self.move_z);
        }

        let (moved_x, moved_z) = (f64::from(self.moved_x), f64::from(self.moved_z));
        let distance = (moved_x * moved_x + moved_z * moved_z).sqrt();
        Some(BranchStep {
            moved_x: self.moved_x,
            moved_z: self.moved_z,
            offset_y: (distance * BRANCH_RISE) as i32,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl ExactSizeIterator for BranchWalk {}

/// How a single branch attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchOutcome {
    /// Every step within reach was placed.
    Placed { wood: u32 },
    /// The walk hit a block it may not replace and stopped there.
    Terminated { wood: u32, at: BlockPos },
}

impl BranchOutcome {
    pub fn wood(&self) -> u32 {
        match self {
            BranchOutcome::Placed { wood } | BranchOutcome::Terminated { wood, .. } => *wood,
        }
    }
}

/// Grows one branch from the trunk axis above `origin`, placing wood along the walk and
/// leaves on every air or leaf neighbour of each wood block.
pub fn grow_branch<W: ModifiableWorld>(
    writer: &mut TreeWriter<'_, W>,
    materials: &TreeMaterials,
    origin: BlockPos,
    shape: BranchShape,
) -> BranchOutcome {
    let mut wood = 0;
    // Each axis only moves away from the trunk, so after the first step out of reach every
    // later one is out of reach too and would be skipped.
    for step in shape.walk().take_while(BranchStep::is_within_reach) {
        let pos = origin.add(step.moved_x, shape.base_y + step.offset_y, step.moved_z);
        if !writer.can_tree_replace(&pos) {
            trace!("Branch {shape:?} from {origin} stopped at {pos} after {wood} wood");
            return BranchOutcome::Terminated { wood, at: pos };
        }

        writer.place(pos, materials.wood);
        wood += 1;

        for direction in BlockDirection::all() {
            let neighbor = pos.offset(direction.to_offset());
            if writer.is_air_or_leaves(&neighbor) {
                writer.place(neighbor, materials.leaves);
            }
        }
    }
    BranchOutcome::Placed { wood }
}

/// Runs [`BRANCH_ATTEMPTS`] independent branches off a trunk of `height`.
pub fn grow_branches<W: ModifiableWorld>(
    writer: &mut TreeWriter<'_, W>,
    materials: &TreeMaterials,
    origin: BlockPos,
    height: i32,
    length: &FloatProvider,
    random: &mut RandomGenerator,
) -> Vec<BranchOutcome> {
    if height <= MIN_BRANCH_BASE {
        trace!("Trunk of height {height} at {origin} is too short for branches");
        return Vec::new();
    }

    (0..BRANCH_ATTEMPTS)
        .map(|_| {
            let shape = BranchShape::sample(random, height, length);
            grow_branch(writer, materials, origin, shape)
        })
        .collect()
}
