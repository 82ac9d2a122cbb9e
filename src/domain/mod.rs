// Domain layer: records, result sets and the ports the pipelines plug into.

pub mod model;
pub mod ports;
