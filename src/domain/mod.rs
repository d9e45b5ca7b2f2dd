// Domain layer: value types and ports (interfaces) shared by the calculators and the batch runner.

pub mod model;
pub mod ports;
