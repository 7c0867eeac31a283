// Domain layer: value types and the traits the core is written against.

pub mod model;
pub mod ports;
