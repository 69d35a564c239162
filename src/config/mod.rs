#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod toml_config;

use crate::core::color::{self, DEFAULT_ACCENT};
use crate::domain::model::Palette;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::PathBuf;

pub const DEFAULT_BASE_PATH: &str = "/tools/it-tools/";
pub const DEFAULT_WEB_ROOT: &str = "/usr/share/nginx/html";
pub const DEFAULT_BUNDLE_PATTERN: &str = "assets/index-*.js";
pub const DEFAULT_RECOLOR_TARGET: &str = "#36AD6AFF";
pub const DEFAULT_RECOLOR_EXTENSIONS: [&str; 4] = ["css", "js", "html", "svg"];

/// Replacement text for the upstream title, tagline and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub title: String,
    pub tagline: String,
    pub description: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            title: "Heartbeat Utility Bench · IT Tools".to_string(),
            tagline: "Heartbeat Utility Bench".to_string(),
            description: "Self-hosted checksum, encoding, colour, and network utilities running safely \
                          inside dev.heartbeat.local so sensitive data never leaves Heartbeat A CIC."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecolorSettings {
    /// Literal color searched for, case-insensitively.
    pub target: String,
    pub extensions: Vec<String>,
}

impl Default for RecolorSettings {
    fn default() -> Self {
        Self {
            target: DEFAULT_RECOLOR_TARGET.to_string(),
            extensions: DEFAULT_RECOLOR_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Fully resolved settings for one run. Built once, then only borrowed.
#[derive(Debug, Clone)]
pub struct PatchConfig {
    base_path: String,
    palette: Palette,
    pub web_root: PathBuf,
    pub bundle_pattern: String,
    pub branding: Branding,
    pub recolor: RecolorSettings,
    pub dry_run: bool,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            palette: color::derive_palette(DEFAULT_ACCENT),
            web_root: PathBuf::from(DEFAULT_WEB_ROOT),
            bundle_pattern: DEFAULT_BUNDLE_PATTERN.to_string(),
            branding: Branding::default(),
            recolor: RecolorSettings::default(),
            dry_run: false,
        }
    }
}

impl PatchConfig {
    /// Defaults rooted at `web_root`, handy for tests and embedding.
    pub fn for_web_root(web_root: impl Into<PathBuf>) -> Self {
        Self {
            web_root: web_root.into(),
            ..Self::default()
        }
    }

    pub fn with_base_path(mut self, raw: &str) -> Self {
        self.base_path = normalize_base_path(raw);
        self
    }

    pub fn with_accent(mut self, raw: &str) -> Self {
        self.palette = color::derive_palette(raw);
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Always begins and ends with `/`.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn accent(&self) -> &str {
        &self.palette.main
    }
}

impl Validate for PatchConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("web_root", &self.web_root.to_string_lossy())?;
        validation::validate_path("bundle_pattern", &self.bundle_pattern)?;
        validation::validate_non_empty_string("recolor.target", &self.recolor.target)?;
        validation::validate_extensions("recolor.extensions", &self.recolor.extensions)?;
        Ok(())
    }
}

/// Force a leading and trailing `/`. Empty input becomes the site root.
pub fn normalize_base_path(raw: &str) -> String {
    let mut base = if raw.is_empty() { "/".to_string() } else { raw.to_string() };
    if !base.starts_with('/') {
        base.insert(0, '/');
    }
    if !base.ends_with('/') {
        base.push('/');
    }
    base
}
