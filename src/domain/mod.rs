// Domain layer: decoded-match models and the decoder port. No decision
// logic here; that lives in core.

pub mod model;
pub mod ports;
