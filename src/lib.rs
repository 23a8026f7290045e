//! Extract class surfaces from Godot GDScript files and generate TypeScript declarations.

pub mod cli;
pub mod codegen;
mod error;
pub mod scanner;

pub use cli::{display_path, run, Args};
pub use codegen::{generate, map_declarations, write_output, Declaration};
pub use error::{Error, Result};
pub use scanner::{
    extract_classes, scan_directory, ClassInfo, Function, GdParser, Meta, ResourcePath,
    ScanResult, ScriptClasses, Variable, CONSTRUCTOR_NAME,
};
