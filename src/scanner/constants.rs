//! GDScript naming conventions the extractor relies on.

/// Name Godot gives every constructor (`func _init()`).
pub const CONSTRUCTOR_NAME: &str = "_init";

/// Annotation identifier that exports a property (`@export`).
pub const EXPORT_ANNOTATION: &str = "export";

/// Leading character marking a member as private by convention.
pub const PRIVATE_PREFIX: char = '_';

/// Scheme prefix of Godot resource paths.
pub const RESOURCE_SCHEME: &str = "res://";

/// `@export_*` annotations that group properties in the inspector instead of exporting one.
const EXPORT_GROUPING_ANNOTATIONS: &[&str] = &["export_group", "export_subgroup", "export_category"];

/// True for `@export` and property-exporting variants such as `@export_range`.
pub fn is_export_annotation(name: &str) -> bool {
    if name == EXPORT_ANNOTATION {
        return true;
    }
    name.strip_prefix(EXPORT_ANNOTATION)
        .is_some_and(|rest| rest.starts_with('_'))
        && !EXPORT_GROUPING_ANNOTATIONS.contains(&name)
}

pub fn is_private_name(name: &str) -> bool {
    name.starts_with(PRIVATE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_variants() {
        assert!(is_export_annotation("export"));
        assert!(is_export_annotation("export_range"));
        assert!(is_export_annotation("export_enum"));
        assert!(!is_export_annotation("export_group"));
        assert!(!is_export_annotation("export_category"));
        assert!(!is_export_annotation("exported"));
        assert!(!is_export_annotation("onready"));
    }

    #[test]
    fn private_names() {
        assert!(is_private_name("_speed"));
        assert!(!is_private_name("speed"));
    }
}
