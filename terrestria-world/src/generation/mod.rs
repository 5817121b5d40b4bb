pub mod feature;
pub mod proto_region;

pub use proto_region::ProtoRegion;
