// Domain layer: result model and the gateway port. No I/O here.

pub mod model;
pub mod ports;
