//! Shared test helpers.

#![allow(dead_code)]

use std::path::PathBuf;

use gd2ts::{extract_classes, ClassInfo, GdParser};

/// Sample script with exports, privates, locals and every parameter shape.
pub const CAMERA_SHAKE: &str = include_str!("../fixtures/camera_shake_core.gd");

/// Create a temp project and write scripts. Returns (guard, root). Paths are relative to root; parent dirs are created.
pub fn project(files: &[(&str, &str)]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();
    for (path, content) in files {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full, content).unwrap();
    }
    (dir, root)
}

/// Parse GDScript source with the real grammar and extract its classes.
pub fn extract(source: &str) -> Vec<ClassInfo> {
    let mut parser = GdParser::new().unwrap();
    let parsed = parser.parse(source).unwrap();
    extract_classes(&parsed.root)
}
