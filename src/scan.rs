//! Directory traversal and root-level file listing.
//!
//! The walker descends depth-first and emits one row per subdirectory
//! that already carries its own `index.html`; regular files are only
//! listed for the root itself, never for subdirectories. An unreadable
//! child is skipped with a warning instead of aborting the whole run.

use crate::OUTPUT_NAME;
use crate::model::Entry;
use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Recursively visits every subdirectory below `root`, pre-order, with
/// siblings sorted ascending by name.
///
/// A subdirectory produces a row only if it contains a file named
/// `index.html`; the row links to the subdirectory's root-relative path
/// and shows that index file's modification time. A subdirectory
/// without one produces no row but is still entered, so deeper indexed
/// directories get theirs.
///
/// Symlink cycles are broken by refusing to re-enter a canonical
/// directory path already visited during this run.
///
/// # Errors
/// Returns an error only if `root` itself cannot be read or resolved;
/// faults on individual children are reported and skipped.
pub fn walk_dirs(root: &Path) -> Result<Vec<Entry>> {
    let mut rows = Vec::new();
    let mut visited = HashSet::new();
    visited.insert(fs::canonicalize(root)?);

    descend(root, root, &mut visited, &mut rows)?;

    Ok(rows)
}

fn descend(
    dir: &Path,
    root: &Path,
    visited: &mut HashSet<PathBuf>,
    rows: &mut Vec<Entry>,
) -> Result<()> {
    for path in sorted_children(dir)? {
        let is_dir = match fs::metadata(&path) {
            Ok(meta) => meta.is_dir(),
            Err(e) => {
                eprintln!("⚠️ skipping {}: {e}", path.display());
                continue;
            }
        };
        if !is_dir {
            // Files below the root never get a row.
            continue;
        }

        match fs::canonicalize(&path) {
            Ok(real) => {
                // A canonical target already visited gets neither a row
                // nor a descent, so sibling symlinks to one directory
                // cannot list it twice.
                if visited.insert(real) {
                    if let Some(modified) = index_modified(&path) {
                        rows.push(Entry::directory(relative_link(&path, root), modified));
                    }
                    if let Err(e) = descend(&path, root, visited, rows) {
                        eprintln!("⚠️ skipping {}: {e}", path.display());
                    }
                }
            }
            Err(e) => eprintln!("⚠️ skipping {}: {e}", path.display()),
        }
    }

    Ok(())
}

/// Lists the root's direct regular files, excluding dotfiles and the
/// generated `index.html` itself, sorted ascending by name.
///
/// # Errors
/// Returns an error if `root` cannot be read.
pub fn list_files(root: &Path) -> Result<Vec<Entry>> {
    let mut rows = Vec::new();

    for path in sorted_children(root)? {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') || name == OUTPUT_NAME {
            continue;
        }

        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => match meta.modified() {
                Ok(modified) => rows.push(Entry::file(name.to_string(), meta.len(), modified)),
                Err(e) => eprintln!("⚠️ skipping {}: {e}", path.display()),
            },
            Ok(_) => {}
            Err(e) => eprintln!("⚠️ skipping {}: {e}", path.display()),
        }
    }

    Ok(rows)
}

fn sorted_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        children.push(entry?.path());
    }

    // Case-sensitive byte order, so uppercase names sort first.
    children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(children)
}

fn index_modified(dir: &Path) -> Option<SystemTime> {
    let meta = fs::metadata(dir.join(OUTPUT_NAME)).ok()?;
    if meta.is_file() { meta.modified().ok() } else { None }
}

fn relative_link(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryKind;
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn root_files_sort_case_sensitively() {
        let root = tempdir().unwrap();
        for name in ["b.txt", "A.txt", "c.txt"] {
            touch(&root.path().join(name));
        }

        let rows = list_files(root.path()).unwrap();
        let names: Vec<_> = rows.iter().map(|e| e.link()).collect();

        assert_eq!(names, ["A.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn dotfiles_and_the_output_file_are_excluded() {
        let root = tempdir().unwrap();
        for name in [".hidden", "index.html", "visible.txt"] {
            touch(&root.path().join(name));
        }

        let rows = list_files(root.path()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].link(), "visible.txt");
    }

    #[test]
    fn indexed_subdirectories_get_rows_in_preorder() {
        let root = tempdir().unwrap();
        let sub = root.path().join("sub");
        let deep = sub.join("deep");
        fs::create_dir_all(&deep).unwrap();
        touch(&sub.join("index.html"));
        touch(&deep.join("index.html"));
        touch(&sub.join("nested.txt"));

        let rows = walk_dirs(root.path()).unwrap();
        let links: Vec<_> = rows.iter().map(|e| e.link()).collect();

        assert_eq!(links, ["sub", "sub/deep"]);
        assert!(rows.iter().all(|e| *e.kind() == EntryKind::Directory));
    }

    #[test]
    fn unindexed_subdirectories_are_still_descended() {
        let root = tempdir().unwrap();
        let deep = root.path().join("plain").join("deep");
        fs::create_dir_all(&deep).unwrap();
        touch(&deep.join("index.html"));

        let rows = walk_dirs(root.path()).unwrap();
        let links: Vec<_> = rows.iter().map(|e| e.link()).collect();

        assert_eq!(links, ["plain/deep"]);
    }

    #[test]
    fn directory_rows_use_the_index_files_mtime() {
        let root = tempdir().unwrap();
        let sub = root.path().join("sub");
        fs::create_dir(&sub).unwrap();
        touch(&sub.join("index.html"));

        let rows = walk_dirs(root.path()).unwrap();
        let index_mtime = fs::metadata(sub.join("index.html")).unwrap().modified().unwrap();

        assert_eq!(rows[0].modified(), index_mtime);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectories_are_skipped_with_the_walk_continuing() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempdir().unwrap();
        let locked = root.path().join("locked");
        fs::create_dir(&locked).unwrap();
        let ok = root.path().join("ok");
        fs::create_dir(&ok).unwrap();
        touch(&ok.join("index.html"));

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // "locked" sorts before "ok", so the fault is hit mid-walk.
        let rows = walk_dirs(root.path()).unwrap();
        let links: Vec<_> = rows.iter().map(|e| e.link()).collect();

        assert_eq!(links, ["ok"]);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn sibling_symlinks_to_one_directory_yield_a_single_row() {
        let root = tempdir().unwrap();
        let real = root.path().join("real");
        fs::create_dir(&real).unwrap();
        touch(&real.join("index.html"));
        std::os::unix::fs::symlink(&real, root.path().join("alias_a")).unwrap();
        std::os::unix::fs::symlink(&real, root.path().join("alias_b")).unwrap();

        let rows = walk_dirs(root.path()).unwrap();
        let links: Vec<_> = rows.iter().map(|e| e.link()).collect();

        // First name in sort order claims the canonical target.
        assert_eq!(links, ["alias_a"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_cycles_terminate() {
        let root = tempdir().unwrap();
        let sub = root.path().join("sub");
        fs::create_dir(&sub).unwrap();
        touch(&sub.join("index.html"));
        std::os::unix::fs::symlink(root.path(), sub.join("loop")).unwrap();

        let rows = walk_dirs(root.path()).unwrap();
        let links: Vec<_> = rows.iter().map(|e| e.link()).collect();

        assert_eq!(links, ["sub"]);
    }
}
