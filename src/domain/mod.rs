// Domain layer: deployment models and the toolkit ports the runner talks to.

pub mod model;
pub mod ports;
