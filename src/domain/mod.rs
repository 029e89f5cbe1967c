// Domain layer: value types and ports. Nothing here touches transport or the environment.

pub mod model;
pub mod ports;
