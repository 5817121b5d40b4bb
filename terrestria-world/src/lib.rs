pub mod generation;
pub mod world;

pub type BlockStateId = u16;

pub use generation::ProtoRegion;
