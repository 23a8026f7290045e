//! Map extracted classes onto target declarations.
//!
//! Output order depends only on class names and resource paths, never on
//! scan order, so regenerating an unchanged project is byte-identical.

use std::sync::OnceLock;

use regex::Regex;

use super::declarations::{
    AccessorFunction, CallSignature, Declaration, InterfaceDecl, LookupEntry, LookupType, Param,
    TypeRef,
};
use super::types::{parameter_type, return_type};
use super::{ACCESSOR_NAME, LOOKUP_TYPE_NAME};
use crate::scanner::{ClassInfo, Function, ResourcePath, ScriptClasses};

/// Name of the synthetic first parameter that selects the method.
pub const METHOD_PARAM: &str = "fn";

/// Parameter names that cannot be used as-is in a call signature.
const RESERVED_PARAM_NAMES: &[&str] = &[
    METHOD_PARAM, "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

static INVALID_IDENT_CHARS: OnceLock<Regex> = OnceLock::new();

fn invalid_ident_chars() -> &'static Regex {
    INVALID_IDENT_CHARS.get_or_init(|| Regex::new(r"[^A-Za-z0-9_$]").unwrap())
}

/// Turn an arbitrary name (e.g. a file stem like `enemy-ai`) into a valid identifier.
pub fn sanitize_identifier(name: &str) -> String {
    let cleaned = invalid_ident_chars().replace_all(name, "_");
    let first = cleaned.chars().next();
    match first {
        None => "_".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", cleaned),
        Some(_) => cleaned.into_owned(),
    }
}

fn param_name(name: &str) -> String {
    if RESERVED_PARAM_NAMES.contains(&name) {
        format!("{}_", name)
    } else {
        sanitize_identifier(name)
    }
}

/// Declared class name, or the script's file stem when it has none.
pub fn interface_name(class: &ClassInfo, resource_path: &ResourcePath) -> String {
    let raw = class.name.as_deref().unwrap_or_else(|| resource_path.stem());
    sanitize_identifier(raw)
}

fn call_signature(function: &Function) -> CallSignature {
    CallSignature {
        method: function.name.clone(),
        params: function
            .parameters
            .iter()
            .map(|p| Param {
                name: param_name(&p.name),
                ty: parameter_type(p.ty.as_deref()),
            })
            .collect(),
        returns: return_type(function.return_type.as_deref()),
    }
}

fn interface(name: String, class: &ClassInfo) -> InterfaceDecl {
    InterfaceDecl {
        name,
        extends: class.extends_class.clone().map(TypeRef::Engine),
        members: class.functions.iter().map(call_signature).collect(),
    }
}

fn accessor() -> AccessorFunction {
    let type_param = "T".to_string();
    AccessorFunction {
        name: ACCESSOR_NAME.to_string(),
        constraint: TypeRef::KeyOf(LOOKUP_TYPE_NAME.to_string()),
        param: Param {
            name: "path".to_string(),
            ty: TypeRef::Local(type_param.clone()),
        },
        returns: TypeRef::Indexed {
            object: LOOKUP_TYPE_NAME.to_string(),
            index: type_param.clone(),
        },
        type_param,
    }
}

fn warn_duplicate_names(interfaces: &[InterfaceDecl]) {
    for pair in interfaces.windows(2) {
        if pair[0].name == pair[1].name {
            log::warn!(
                "interface {} is declared by more than one script; declarations will merge",
                pair[0].name
            );
        }
    }
}

/// Build interfaces (sorted by name), the path lookup type (sorted by path) and the accessor.
pub fn map_declarations(scripts: &[ScriptClasses]) -> Vec<Declaration> {
    let mut interfaces = Vec::new();
    let mut entries = Vec::new();
    for script in scripts {
        for class in &script.classes {
            let name = interface_name(class, &script.resource_path);
            entries.push(LookupEntry {
                key: script.resource_path.as_str().to_string(),
                ty: TypeRef::Local(name.clone()),
            });
            interfaces.push(interface(name, class));
        }
    }
    interfaces.sort_by(|a, b| a.name.cmp(&b.name));
    warn_duplicate_names(&interfaces);
    entries.sort_by(|a, b| a.key.cmp(&b.key));

    let mut declarations: Vec<Declaration> =
        interfaces.into_iter().map(Declaration::Interface).collect();
    declarations.push(Declaration::Lookup(LookupType {
        name: LOOKUP_TYPE_NAME.to_string(),
        entries,
    }));
    declarations.push(Declaration::Accessor(accessor()));
    declarations
}
