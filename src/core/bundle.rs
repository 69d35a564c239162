//! Rewrites the base URL baked into the compiled index bundle.

use crate::config::PatchConfig;
use crate::domain::model::BundleOutcome;
use crate::domain::ports::Pass;
use crate::utils::error::{PatchError, Result};
use crate::utils::pattern::FilePattern;
use regex::{Captures, Regex};
use std::path::Path;

const BASE_URL_LITERAL: &str = r#"BASE_URL:"/""#;
const BASE_URL_DEFAULT_PATTERN: &str = r#"(baseUrl\{[^}]*default:)"/""#;

#[derive(Debug)]
pub struct BundlePatcher {
    base_url_default: Regex,
}

impl BundlePatcher {
    pub fn new() -> Result<Self> {
        let base_url_default =
            Regex::new(BASE_URL_DEFAULT_PATTERN).map_err(|source| PatchError::Pattern {
                pattern: BASE_URL_DEFAULT_PATTERN.to_string(),
                source,
            })?;
        Ok(Self { base_url_default })
    }

    /// Replace every `BASE_URL:"/"` and the first `default:"/"` inside a `baseUrl{...}` block.
    /// Returns `None` when the text is left unchanged.
    pub fn patch_text(&self, content: &str, base_path: &str) -> Option<String> {
        let replaced = content.replace(BASE_URL_LITERAL, &format!(r#"BASE_URL:"{base_path}""#));
        let replaced = self
            .base_url_default
            .replacen(&replaced, 1, |caps: &Captures| {
                format!(r#"{}"{}""#, &caps[1], base_path)
            })
            .into_owned();

        (replaced != content).then_some(replaced)
    }

    fn patch_file(&self, path: &Path, config: &PatchConfig) -> Result<bool> {
        let content = std::fs::read_to_string(path).map_err(|e| PatchError::io(path, e))?;
        let Some(new_content) = self.patch_text(&content, config.base_path()) else {
            return Ok(false);
        };
        if !config.dry_run {
            std::fs::write(path, new_content).map_err(|e| PatchError::io(path, e))?;
        }
        Ok(true)
    }
}

impl Pass for BundlePatcher {
    type Outcome = BundleOutcome;

    fn name(&self) -> &'static str {
        "bundle-base-url"
    }

    fn run(&self, config: &PatchConfig) -> Result<BundleOutcome> {
        let pattern = FilePattern::new(&config.web_root, &config.bundle_pattern)?;
        let bundles = pattern.find()?;
        if bundles.is_empty() {
            return Err(PatchError::NoBundleFiles {
                pattern: config.web_root.join(pattern.as_str()).display().to_string(),
            });
        }

        let mut outcome = BundleOutcome::default();
        for path in bundles {
            if self.patch_file(&path, config)? {
                tracing::debug!("Patched base URL in {}", path.display());
                outcome.patched.push(path.clone());
            } else {
                tracing::debug!("No base URL literal in {}", path.display());
            }
            outcome.searched.push(path);
        }

        if outcome.patched.is_empty() {
            return Err(PatchError::BundleLiteralNotFound {
                searched: outcome.searched.len(),
            });
        }

        Ok(outcome)
    }
}
