//! Recursive directory walk that skips hidden entries below the root.

use std::path::Path;
use walkdir::{DirEntry, WalkDir};

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Walk `root` without following links. Dot-files and dot-directories are
/// pruned, but `root` itself is always visited even if its own name is hidden.
pub fn visible_entries(root: &Path) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_hidden_files_and_dirs_are_pruned() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".well-known")).unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join(".well-known/page.html"), "").unwrap();
        fs::write(dir.path().join(".hidden.css"), "").unwrap();
        fs::write(dir.path().join("assets/app.css"), "").unwrap();

        let mut files: Vec<_> = visible_entries(dir.path())
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .collect();
        files.sort();

        assert_eq!(files, vec![dir.path().join("assets/app.css")]);
    }

    #[test]
    fn test_hidden_root_is_still_walked() {
        let parent = tempfile::TempDir::new().unwrap();
        let root = parent.path().join(".site");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("index.html"), "").unwrap();

        let count = visible_entries(&root)
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .count();
        assert_eq!(count, 1);
    }
}
