//! File system traversal for .gd scripts.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Script extension, matched case-insensitively.
const GD_EXTENSION: &str = ".gd";

/// Normalize **/name or path/name to just the directory name (e.g. **/node_modules -> node_modules).
pub fn normalize_exclude_dir(pattern: &str) -> String {
    let normalized = pattern.replace('\\', "/");
    let name = normalized.trim_end_matches('/');
    name.rsplit('/').next().unwrap_or(name).to_string()
}

fn is_gd_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.to_lowercase().ends_with(GD_EXTENSION))
}

fn walk_rec(dir: &Path, exclude_dirs: &HashSet<String>, result: &mut Vec<PathBuf>) {
    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(err) => {
            log::debug!("cannot list {}: {}", dir.display(), err);
            return;
        }
    };
    let mut dirs = Vec::new();
    for entry in read_dir.flatten() {
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        } else if path.is_file() && is_gd_file(&path) {
            result.push(path);
        }
    }
    log::trace!("walked {} ({} subdirectories)", dir.display(), dirs.len());
    for d in &dirs {
        let excluded = d
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| exclude_dirs.contains(n));
        if excluded {
            log::trace!("excluded {}", d.display());
            continue;
        }
        walk_rec(d, exclude_dirs, result);
    }
}

/// Recursively collect all .gd files under root, sorted by path.
pub fn iter_gd_files(root: &Path, exclude_dirs: Option<&[String]>) -> Vec<PathBuf> {
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    if !root.is_dir() {
        return Vec::new();
    }
    let excluded: HashSet<String> = exclude_dirs
        .unwrap_or(&[])
        .iter()
        .map(|p| normalize_exclude_dir(p))
        .collect();
    log::trace!("walking {} excluding {:?}", root.display(), excluded);
    let mut result = Vec::new();
    walk_rec(&root, &excluded, &mut result);
    result.sort();
    result
}
