// Domain layer: input/report models and the snippet and storage ports.

pub mod model;
pub mod ports;
