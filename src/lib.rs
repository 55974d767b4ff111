pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::core::{engine::CartEngine, pipeline::StorefrontPipeline};
pub use crate::utils::error::{Result, StorefrontError};
