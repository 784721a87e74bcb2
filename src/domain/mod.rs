// Domain layer: input/output records and the seams (ports) the engine is built on.

pub mod model;
pub mod ports;
