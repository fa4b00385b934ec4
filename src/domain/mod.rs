// Domain layer: record model, filter types and ports. No I/O here.

pub mod model;
pub mod ports;
