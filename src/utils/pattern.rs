//! File-name wildcard matching for locating build output.
//!
//! Only the last path component of a pattern may carry wildcards: `*` matches
//! any run of characters except a path separator, `?` matches exactly one.

use crate::utils::error::{PatchError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FilePattern {
    raw: String,
    dir: PathBuf,
    name: Regex,
}

impl FilePattern {
    /// Compile `pattern` relative to `root`.
    pub fn new(root: &Path, pattern: &str) -> Result<Self> {
        let relative = Path::new(pattern);
        let file_name = relative
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| PatchError::InvalidConfigValue {
                field: "bundle_pattern".to_string(),
                value: pattern.to_string(),
                reason: "Pattern has no file name component".to_string(),
            })?;

        let dir = match relative.parent() {
            Some(parent) => root.join(parent),
            None => root.to_path_buf(),
        };

        let name = Regex::new(&wildcard_to_regex(file_name)).map_err(|source| {
            PatchError::Pattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        Ok(Self {
            raw: pattern.to_string(),
            dir,
            name,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches_name(&self, file_name: &str) -> bool {
        self.name.is_match(file_name)
    }

    /// Regular files in the pattern's directory whose name matches, sorted.
    /// A missing directory yields no matches.
    pub fn find(&self) -> Result<Vec<PathBuf>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(PatchError::io(&self.dir, e)),
        };

        let mut found = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PatchError::io(&self.dir, e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if self.matches_name(name) {
                    found.push(path);
                }
            }
        }
        found.sort();
        Ok(found)
    }
}

fn wildcard_to_regex(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len() + 8);
    out.push('^');
    for ch in glob.chars() {
        match ch {
            '*' => out.push_str("[^/]*"),
            '?' => out.push_str("[^/]"),
            other => out.push_str(&regex::escape(&other.to_string())),
        }
    }
    out.push('$');
    out
}
