//! Page branding: fixed text and color rewrites plus one-time theme injection.

use crate::config::{Branding, PatchConfig};
use crate::core::theme::{render_theme_snippet, INJECTION_MARKER};
use crate::domain::model::{BrandOutcome, FileFailure, Palette};
use crate::domain::ports::Pass;
use crate::utils::error::{PatchError, Result};
use crate::utils::walk::visible_entries;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

const UPSTREAM_TITLE: &str = "IT Tools - Handy online tools for developers";
const UPSTREAM_TAGLINE: &str = "Handy online tools for developers";
const UPSTREAM_DESCRIPTION: &str = "Collection of handy online tools for developers, with great UX. \
     IT Tools is a free and open-source collection of handy online tools for developers &amp; people working in IT.";

const HEAD_CLOSE: &str = "</head>";

/// Every literal rewrite for one page, in the order it must be applied.
fn replacements(branding: &Branding, palette: &Palette) -> Vec<(String, String)> {
    let escaped_description = branding.description.replace('&', "&amp;");

    vec![
        (
            format!("content=\"{UPSTREAM_DESCRIPTION}\""),
            format!("content=\"{escaped_description}\""),
        ),
        (UPSTREAM_DESCRIPTION.to_string(), escaped_description),
        (UPSTREAM_TITLE.to_string(), branding.title.clone()),
        (UPSTREAM_TAGLINE.to_string(), branding.tagline.clone()),
        (
            "stop-color=\"#25636c\"".to_string(),
            format!("stop-color=\"{}\"", palette.bright),
        ),
        (
            "stop-color=\"#3b956f\"".to_string(),
            format!("stop-color=\"{}\"", palette.main),
        ),
        (
            "stop-color=\"#14a058\"".to_string(),
            format!("stop-color=\"{}\"", palette.main),
        ),
        (
            "fill=\"#14a058\"".to_string(),
            format!("fill=\"{}\"", palette.bold),
        ),
    ]
}

/// Apply the branding rewrites to one document. Returns `None` when nothing changed.
pub fn brand_document(
    html: &str,
    branding: &Branding,
    palette: &Palette,
    snippet: &str,
) -> Option<String> {
    let mut out = html.to_string();
    for (from, to) in replacements(branding, palette) {
        out = out.replace(from.as_str(), &to);
    }

    if !out.contains(INJECTION_MARKER) {
        if let Some(pos) = out.find(HEAD_CLOSE) {
            out.insert_str(pos, &format!("{snippet}\n"));
        }
    }

    (out != html).then_some(out)
}

/// `<web_root>/index.html` and every `*.html` below the web root, sorted.
pub fn gather_html_targets(web_root: &Path) -> Vec<PathBuf> {
    let mut targets = BTreeSet::new();
    if !web_root.is_dir() {
        return Vec::new();
    }

    targets.insert(web_root.join("index.html"));
    for entry in visible_entries(web_root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", web_root.display(), e);
                continue;
            }
        };
        if entry.path().extension().and_then(|ext| ext.to_str()) == Some("html") {
            targets.insert(entry.into_path());
        }
    }

    targets.into_iter().filter(|p| p.is_file()).collect()
}

#[derive(Debug, Default)]
pub struct HtmlBrander;

impl HtmlBrander {
    fn brand_file(&self, path: &Path, config: &PatchConfig, snippet: &str) -> Result<bool> {
        let html = std::fs::read_to_string(path).map_err(|e| PatchError::io(path, e))?;
        let Some(branded) = brand_document(&html, &config.branding, config.palette(), snippet) else {
            return Ok(false);
        };

        if !config.dry_run {
            std::fs::write(path, branded).map_err(|e| PatchError::io(path, e))?;
        }
        Ok(true)
    }
}

impl Pass for HtmlBrander {
    type Outcome = BrandOutcome;

    fn name(&self) -> &'static str {
        "html-brand"
    }

    /// Per-file failures are recorded and never abort the batch.
    fn run(&self, config: &PatchConfig) -> Result<BrandOutcome> {
        let snippet = render_theme_snippet(config.palette());
        let targets = gather_html_targets(&config.web_root);
        let mut outcome = BrandOutcome {
            candidates: targets.len(),
            ..BrandOutcome::default()
        };

        for path in targets {
            match self.brand_file(&path, config, &snippet) {
                Ok(true) => {
                    tracing::debug!("Branded {}", path.display());
                    outcome.branded.push(path);
                }
                Ok(false) => tracing::debug!("No branding changes for {}", path.display()),
                Err(e) => {
                    outcome.failures.push(FileFailure {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(outcome)
    }
}
