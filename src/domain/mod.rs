// Domain layer: input/output models and the ports calculators read settings through.

pub mod model;
pub mod ports;
