// Domain layer: joke model and the ports the store is built on.

pub mod model;
pub mod ports;
