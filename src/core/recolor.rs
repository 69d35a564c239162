use crate::config::PatchConfig;
use crate::domain::model::{FileFailure, RecolorOutcome};
use crate::domain::ports::Pass;
use crate::utils::error::{PatchError, Result};
use crate::utils::walk::visible_entries;
use regex::bytes::{NoExpand, Regex, RegexBuilder};
use std::path::Path;

/// Case-insensitive literal color swap across asset files.
///
/// Works on raw bytes, so assets that are not valid UTF-8 are rewritten without
/// losing the bytes around each match.
#[derive(Debug)]
pub struct Recolorer {
    target: Regex,
}

impl Recolorer {
    pub fn new(target: &str) -> Result<Self> {
        let target = RegexBuilder::new(&regex::escape(target))
            .case_insensitive(true)
            .build()
            .map_err(|source| PatchError::Pattern {
                pattern: target.to_string(),
                source,
            })?;
        Ok(Self { target })
    }

    /// Returns the rewritten bytes and the number of occurrences, or `None` if there were none.
    pub fn recolor_bytes(&self, content: &[u8], replacement: &str) -> Option<(Vec<u8>, usize)> {
        let count = self.target.find_iter(content).count();
        if count == 0 {
            return None;
        }
        let replaced = self
            .target
            .replace_all(content, NoExpand(replacement.as_bytes()))
            .into_owned();
        Some((replaced, count))
    }

    fn recolor_file(&self, path: &Path, config: &PatchConfig) -> Result<usize> {
        let content = std::fs::read(path).map_err(|e| PatchError::io(path, e))?;
        let Some((replaced, count)) = self.recolor_bytes(&content, config.accent()) else {
            return Ok(0);
        };
        if !config.dry_run {
            std::fs::write(path, replaced).map_err(|e| PatchError::io(path, e))?;
        }
        Ok(count)
    }
}

fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

impl Pass for Recolorer {
    type Outcome = RecolorOutcome;

    fn name(&self) -> &'static str {
        "recolor"
    }

    fn run(&self, config: &PatchConfig) -> Result<RecolorOutcome> {
        let mut outcome = RecolorOutcome {
            target: config.recolor.target.clone(),
            replacement: config.accent().to_string(),
            ..RecolorOutcome::default()
        };

        for entry in visible_entries(&config.web_root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(config.web_root.as_path()).to_path_buf();
                    outcome.failures.push(FileFailure {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() || !has_allowed_extension(path, &config.recolor.extensions) {
                continue;
            }

            match self.recolor_file(path, config) {
                Ok(0) => {}
                Ok(count) => {
                    tracing::debug!("{} occurrence(s) recolored in {}", count, path.display());
                    outcome.occurrences += count;
                    outcome.touched.push(path.to_path_buf());
                }
                Err(e) => outcome.failures.push(FileFailure {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }),
            }
        }

        outcome.touched.sort();
        Ok(outcome)
    }
}
