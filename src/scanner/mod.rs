//! Discover GDScript files and extract the classes they declare.

mod constants;
pub mod extract;
mod files;
mod models;
pub mod parser;
mod scan;
pub mod syntax;

pub use constants::{CONSTRUCTOR_NAME, EXPORT_ANNOTATION, RESOURCE_SCHEME};
pub use extract::{extract_classes, merge};
pub use files::iter_gd_files;
pub use models::{
    ClassInfo, Function, Meta, ResourcePath, ScanFailure, ScanResult, ScriptClasses, Variable,
};
pub use parser::{normalize_source, GdParser, ParsedScript};
pub use scan::{scan_directory, scan_file};
pub use syntax::{NodeKind, SyntaxNode};
