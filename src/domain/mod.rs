// Domain layer: models and the port the core talks to upstream through.

pub mod model;
pub mod ports;
