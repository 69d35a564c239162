use super::env::apply_env_overrides;
use super::toml_config::TomlConfig;
use super::PatchConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "asset-rebrand")]
#[command(about = "Rebase and rebrand a built IT Tools site in place")]
pub struct CliConfig {
    /// Directory holding the built site
    #[arg(long)]
    pub web_root: Option<String>,

    /// Bundle file pattern, relative to the web root
    #[arg(long)]
    pub bundle_pattern: Option<String>,

    /// Base path the site is served under (overrides IT_TOOLS_BASE)
    #[arg(long)]
    pub base_path: Option<String>,

    /// Accent color (overrides HB_ACCENT_COLOR)
    #[arg(long)]
    pub accent: Option<String>,

    /// Optional TOML file with branding and recolor overrides
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Layer defaults, the TOML file, the environment and finally the flags.
    pub fn resolve<FEnv>(&self, env_lookup: &FEnv) -> Result<PatchConfig>
    where
        FEnv: Fn(&str) -> Option<String>,
    {
        let mut config = PatchConfig::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            config = TomlConfig::from_file(path, env_lookup)?.apply_to(config);
        }

        config = apply_env_overrides(config, env_lookup);

        if let Some(root) = &self.web_root {
            config.web_root = root.into();
        }
        if let Some(pattern) = &self.bundle_pattern {
            config.bundle_pattern = pattern.clone();
        }
        if let Some(base) = &self.base_path {
            config = config.with_base_path(base);
        }
        if let Some(accent) = &self.accent {
            config = config.with_accent(accent);
        }
        config = config.with_dry_run(self.dry_run);

        config.validate()?;
        Ok(config)
    }
}
