// Domain layer: clock models and the converter port. No I/O.

pub mod model;
pub mod ports;
