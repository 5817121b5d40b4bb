mod block_direction;
pub mod block_state;
mod blocks;
pub mod tag;

pub use block_direction::BlockDirection;
pub use block_state::BlockState;
pub use blocks::Block;
