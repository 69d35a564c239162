pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::PatchConfig;
pub use core::engine::PatchEngine;
pub use utils::error::{PatchError, Result};
