// Domain layer: request shapes and ports. No HTTP framework types in here.

pub mod model;
pub mod ports;
