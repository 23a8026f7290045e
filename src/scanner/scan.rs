//! Orchestrate directory scanning: discover, parse and extract every script.

use std::path::Path;

use rayon::prelude::*;

use super::extract::extract_classes;
use super::files::iter_gd_files;
use super::models::{ResourcePath, ScanFailure, ScanResult, ScriptClasses};
use super::parser::{normalize_source, GdParser};
use crate::error::{Error, Result};

/// Read, parse and extract one script. `root` anchors its resource path.
pub fn scan_file(parser: &mut GdParser, root: &Path, path: &Path) -> Result<ScriptClasses> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = normalize_source(&text);
    let parsed = parser.parse(&text)?;
    if parsed.has_errors {
        log::warn!(
            "{}: syntax errors, extracted members may be incomplete",
            path.display()
        );
    }
    let classes = extract_classes(&parsed.root);
    let rel = path.strip_prefix(root).unwrap_or(path);
    let resource_path = ResourcePath::from_relative(rel);
    log::debug!(
        "{}: {} class(es), {} function(s)",
        resource_path,
        classes.len(),
        classes.iter().map(|c| c.functions.len()).sum::<usize>()
    );
    Ok(ScriptClasses {
        file: path.to_path_buf(),
        resource_path,
        classes,
    })
}

/// Scan a directory for .gd files and extract their classes in parallel.
/// Files that cannot be read or parsed are logged and reported in `failures`.
pub fn scan_directory(root: &Path, exclude_dirs: Option<&[String]>) -> ScanResult {
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    let paths = iter_gd_files(&root, exclude_dirs);
    log::info!("found {} script(s) under {}", paths.len(), root.display());

    let outcomes: Vec<_> = paths
        .par_iter()
        .map_init(GdParser::new, |parser, path| {
            let outcome = match parser {
                Ok(parser) => scan_file(parser, &root, path),
                // Rebuild so the grammar error is reported against this file.
                Err(_) => GdParser::new().and_then(|mut p| scan_file(&mut p, &root, path)),
            };
            (path, outcome)
        })
        .collect();

    let mut result = ScanResult::default();
    for (path, outcome) in outcomes {
        match outcome {
            Ok(script) => result.scripts.push(script),
            Err(error) => {
                log::warn!("skipping {}: {}", path.display(), error);
                result.failures.push(ScanFailure {
                    file: path.clone(),
                    error,
                });
            }
        }
    }
    result
}
