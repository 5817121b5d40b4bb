/// Features decorate an already shaped world. Each one is handed an origin picked by the host
/// and decides on its own whether and how it fits there.
pub mod features;
