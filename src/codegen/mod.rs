//! Generate TypeScript declarations from extracted script classes.

pub mod declarations;
mod mapper;
mod printer;
mod types;

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::scanner::ScriptClasses;

pub use declarations::{Declaration, TypeRef};
pub use mapper::{interface_name, map_declarations, sanitize_identifier};
pub use printer::{print_declarations, print_file, HEADER};

/// Module the engine types are imported from.
pub const ENGINE_MODULE: &str = "godot";
/// Namespace alias engine types are referenced through.
pub const ENGINE_NAMESPACE: &str = "G";
/// Type mapping resource paths to interfaces.
pub const LOOKUP_TYPE_NAME: &str = "ResourceMapper";
/// Exported function instantiating a script by resource path.
pub const ACCESSOR_NAME: &str = "instantiateGdScript";
/// File written into the output directory.
pub const OUTPUT_FILE_NAME: &str = "generated.ts";

/// Render the complete generated file for a set of scanned scripts.
pub fn generate(scripts: &[ScriptClasses]) -> String {
    print_file(&map_declarations(scripts))
}

/// Write generated code to `<dir>/generated.ts`, creating `dir` if needed.
pub fn write_output(dir: &Path, contents: &str) -> Result<PathBuf> {
    let path = dir.join(OUTPUT_FILE_NAME);
    let write_err = |source| Error::Write {
        path: path.clone(),
        source,
    };
    std::fs::create_dir_all(dir).map_err(write_err)?;
    std::fs::write(&path, contents).map_err(write_err)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_output_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("types/generated");
        let path = write_output(&out_dir, "x").unwrap();
        assert_eq!(path, out_dir.join(OUTPUT_FILE_NAME));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "x");
    }

    #[test]
    fn write_output_into_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let err = write_output(&blocker, "x").unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
