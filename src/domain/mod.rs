// Domain layer: palette and per-pass outcome models, plus the pass port.

pub mod model;
pub mod ports;
