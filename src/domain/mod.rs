// Domain layer: catalog records and ports (interfaces). No ranking logic lives here.

pub mod model;
pub mod ports;
