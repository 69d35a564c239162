use crate::config::PatchConfig;
use crate::utils::error::Result;

/// A single text-substitution pass over the web root.
///
/// An `Err` is fatal and stops the run; anything recoverable is recorded in
/// the outcome instead.
pub trait Pass {
    type Outcome;

    fn name(&self) -> &'static str;

    fn run(&self, config: &PatchConfig) -> Result<Self::Outcome>;
}
