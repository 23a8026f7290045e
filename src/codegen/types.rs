//! GDScript type names to target types.

use super::declarations::TypeRef;

/// Strip a typed-collection suffix: `Array[int]` -> `Array`.
fn base_name(name: &str) -> &str {
    let name = name.trim();
    name.split_once('[').map_or(name, |(base, _)| base.trim_end())
}

/// Map a written (or hinted) type name. Unknown names pass through as engine references.
fn map_named(name: &str) -> TypeRef {
    match base_name(name) {
        "" => TypeRef::Unknown,
        "int" | "float" | "integer" => TypeRef::Number,
        "String" | "StringName" | "string" => TypeRef::String,
        "bool" | "true" | "false" => TypeRef::Boolean,
        "void" => TypeRef::Void,
        "Array" | "array" => TypeRef::Array(Box::new(TypeRef::Unknown)),
        other => TypeRef::Engine(other.to_string()),
    }
}

pub fn parameter_type(ty: Option<&str>) -> TypeRef {
    ty.map_or(TypeRef::Unknown, map_named)
}

pub fn return_type(ty: Option<&str>) -> TypeRef {
    ty.map_or(TypeRef::Void, map_named)
}
