use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursively collects every regular file below `root` that passes `filter`.
///
/// Files are returned in the order the directory walk visits them. With
/// `sort` set, entries of each directory are visited sorted by file name,
/// which makes the result deterministic across platforms.
///
/// Unreadable directories or entries are logged and skipped, a missing root
/// simply yields nothing. Symbolic links to directories are not descended
/// into, symbolic links that resolve to a regular file are kept.
pub fn walk_files<F>(root: &Path, sort: bool, filter: F) -> Vec<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    let mut walker = WalkDir::new(root).follow_links(false);
    if sort {
        walker = walker.sort_by_file_name();
    }

    walker
        .into_iter()
        .filter_map(|entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let at = err.path().unwrap_or(root);
                    log::warn!("Skipping unreadable path {}: {err}", at.display());
                    return None;
                }
            };
            let is_file = if entry.path_is_symlink() {
                entry.path().is_file()
            } else {
                entry.file_type().is_file()
            };
            if !is_file {
                return None;
            }
            let path = entry.into_path();
            if !filter(&path) {
                return None;
            }
            Some(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    #[test]
    fn finds_files_in_nested_dirs() {
        let temp = TempDir::new().unwrap();
        temp.child("a.txt").touch().unwrap();
        temp.child("one/b.txt").touch().unwrap();
        temp.child("one/two/three/c.txt").touch().unwrap();

        let files = walk_files(temp.path(), true, |_| true);
        assert_eq!(
            files,
            vec![
                temp.child("a.txt").path().to_path_buf(),
                temp.child("one/b.txt").path().to_path_buf(),
                temp.child("one/two/three/c.txt").path().to_path_buf(),
            ]
        );
    }

    #[test]
    fn skips_directories() {
        let temp = TempDir::new().unwrap();
        temp.child("empty.vert").create_dir_all().unwrap();
        temp.child("real.vert").touch().unwrap();

        let files = walk_files(temp.path(), false, |_| true);
        assert_eq!(files, vec![temp.child("real.vert").path().to_path_buf()]);
    }

    #[test]
    fn applies_filter() {
        let temp = TempDir::new().unwrap();
        temp.child("keep.me").touch().unwrap();
        temp.child("drop.me").touch().unwrap();

        let files = walk_files(temp.path(), false, |path| {
            path.file_stem().map(|stem| stem == "keep").unwrap_or_default()
        });
        assert_eq!(files, vec![temp.child("keep.me").path().to_path_buf()]);
    }

    #[test]
    fn missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let files = walk_files(&temp.path().join("nope"), false, |_| true);
        assert!(files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn keeps_file_symlinks() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        temp.child("real/x.frag").touch().unwrap();
        symlink(temp.child("real/x.frag").path(), temp.child("link.frag").path()).unwrap();
        symlink(temp.child("real").path(), temp.child("linkdir").path()).unwrap();
        symlink(temp.child("gone.vert").path(), temp.child("dangling.vert").path()).unwrap();

        let files = walk_files(temp.path(), true, |_| true);
        assert_eq!(
            files,
            vec![
                temp.child("link.frag").path().to_path_buf(),
                temp.child("real/x.frag").path().to_path_buf(),
            ]
        );
    }
}
