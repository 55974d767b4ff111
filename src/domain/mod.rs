// Domain layer: core models and ports (interfaces). Depends only on
// std/serde, the crate error type, and the shared validation helpers.

pub mod model;
pub mod ports;
