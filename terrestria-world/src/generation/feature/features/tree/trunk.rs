use terrestria_data::{Block, BlockState};
use terrestria_util::math::position::BlockPos;

use crate::world::ModifiableWorld;

use super::{TreeMaterials, TreeWriter};

/// Grows a 3x3 trunk of wood `height` layers tall, centered on `origin`, capped by one 3x3
/// layer of leaves. The block below `origin` is turned into plain dirt first.
pub fn grow_trunk<W: ModifiableWorld>(
    writer: &mut TreeWriter<'_, W>,
    materials: &TreeMaterials,
    origin: BlockPos,
    height: i32,
) {
    writer.place(origin.down(), Block::DIRT.default_state);

    let mut layer = origin;
    for _ in 0..height {
        place_layer(writer, layer, materials.wood);
        layer = layer.up();
    }
    place_layer(writer, layer, materials.leaves);
}

fn place_layer<W: ModifiableWorld>(
    writer: &mut TreeWriter<'_, W>,
    center: BlockPos,
    state: &'static BlockState,
) {
    for pos in BlockPos::iterate(center.add(-1, 0, -1), center.add(1, 0, 1)) {
        writer.place(pos, state);
    }
}
