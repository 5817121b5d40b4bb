use crate::Block;

#[derive(Debug)]
pub struct BlockState {
    pub id: u16,
    pub block_id: u16,
    pub state_flags: u8,
}

impl PartialEq for BlockState {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BlockState {}

impl BlockState {
    pub const fn is_air(&self) -> bool {
        self.state_flags & IS_AIR != 0
    }

    pub fn block(&self) -> &'static Block {
        Block::from_id(self.block_id).unwrap_or(&Block::AIR)
    }

    /// Looks up a catalog state by its raw id.
    pub fn from_id(id: u16) -> Option<&'static BlockState> {
        Block::from_state_id(id).map(|block| block.default_state)
    }
}

/// Set in `state_flags` for every kind of air.
pub(crate) const IS_AIR: u8 = 0b00000001;
