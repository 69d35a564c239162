//! Environment overrides.
//!
//! Lookups go through a closure so tests never touch the process environment.

use super::PatchConfig;

pub const BASE_PATH_VAR: &str = "IT_TOOLS_BASE";
pub const ACCENT_VAR: &str = "HB_ACCENT_COLOR";

pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Apply `IT_TOOLS_BASE` and `HB_ACCENT_COLOR` when they are set.
///
/// A variable that is set but empty still counts: an empty base path means `/`
/// and an empty accent falls back to the default color.
pub fn apply_env_overrides<FEnv>(config: PatchConfig, env_lookup: &FEnv) -> PatchConfig
where
    FEnv: Fn(&str) -> Option<String>,
{
    let mut config = config;
    if let Some(base) = env_lookup(BASE_PATH_VAR) {
        tracing::debug!("{} override: {:?}", BASE_PATH_VAR, base);
        config = config.with_base_path(&base);
    }
    if let Some(accent) = env_lookup(ACCENT_VAR) {
        tracing::debug!("{} override: {:?}", ACCENT_VAR, accent);
        config = config.with_accent(&accent);
    }
    config
}
