pub mod brand;
pub mod bundle;
pub mod color;
pub mod engine;
pub mod recolor;
pub mod theme;

pub use crate::domain::model::{Palette, PaletteRole, RunSummary};
pub use crate::domain::ports::Pass;
pub use crate::utils::error::Result;
