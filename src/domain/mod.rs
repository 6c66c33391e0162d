// Domain layer: core models and the provider port. No HTTP or config details here.

pub mod model;
pub mod ports;
