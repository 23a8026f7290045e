//! Extract class surfaces (fields, exports, methods) from a GDScript syntax tree.
//!
//! A script may contribute members to two scopes: the implicit class formed
//! by the file body and the class declared with `class_name`. Members are
//! attributed to the named scope once it exists, otherwise to the anonymous
//! one, and both scopes are merged when traversal finishes.

use super::constants::{is_export_annotation, CONSTRUCTOR_NAME};
use super::models::{ClassInfo, Function, Meta, Variable};
use super::syntax::{NodeKind, SyntaxNode};

/// Lexical context threaded through the traversal.
#[derive(Debug, Clone, Copy, Default)]
struct Scope {
    /// Inside a function or constructor body, where declarations are locals.
    in_function: bool,
}

/// Per-file accumulator: at most one anonymous and one named class.
#[derive(Debug, Default)]
struct FileScopes {
    extends: Option<String>,
    anonymous: Option<ClassInfo>,
    named: Option<ClassInfo>,
}

impl FileScopes {
    fn declare_named(&mut self, name: &str, extends: Option<String>) {
        match &self.named {
            None => {
                let mut class = ClassInfo::named(name);
                class.extends_class = extends;
                self.named = Some(class);
            }
            Some(existing) if existing.name.as_deref() == Some(name) => {}
            Some(existing) => {
                log::warn!(
                    "ignoring class_name {:?}: script already declares {:?}",
                    name,
                    existing.name.as_deref().unwrap_or_default()
                );
            }
        }
    }

    /// Class receiving members right now; creates the anonymous one if needed.
    fn current(&mut self) -> &mut ClassInfo {
        match self.named {
            Some(ref mut named) => named,
            None => self.anonymous.get_or_insert_with(ClassInfo::default),
        }
    }

    fn finish(self) -> Vec<ClassInfo> {
        let FileScopes {
            extends,
            anonymous,
            named,
        } = self;
        let merged = match (anonymous, named) {
            (None, None) => extends.clone().map(|_| ClassInfo::default()),
            (Some(anonymous), None) => Some(anonymous),
            (None, Some(named)) => Some(named),
            (Some(anonymous), Some(named)) => Some(merge(anonymous, named)),
        };
        merged
            .map(|mut class| {
                if class.extends_class.is_none() {
                    class.extends_class = extends;
                }
                class
            })
            .into_iter()
            .collect()
    }
}

/// Fold the anonymous scope into the named class; anonymous members come first.
pub fn merge(anonymous: ClassInfo, named: ClassInfo) -> ClassInfo {
    fn prepend<T>(mut first: Vec<T>, rest: Vec<T>) -> Vec<T> {
        first.extend(rest);
        first
    }
    ClassInfo {
        name: named.name,
        extends_class: named.extends_class.or(anonymous.extends_class),
        exports: prepend(anonymous.exports, named.exports),
        variables: prepend(anonymous.variables, named.variables),
        functions: prepend(anonymous.functions, named.functions),
    }
}

/// Extract the classes declared by one script. Yields at most one record.
pub fn extract_classes(root: &SyntaxNode<'_>) -> Vec<ClassInfo> {
    let mut scopes = FileScopes::default();
    visit(root, &[], Scope::default(), &mut scopes);
    scopes.finish()
}

/// `preceding` holds the earlier siblings of `node`, in source order.
fn visit(
    node: &SyntaxNode<'_>,
    preceding: &[SyntaxNode<'_>],
    scope: Scope,
    scopes: &mut FileScopes,
) {
    let scope = match node.kind() {
        NodeKind::ClassNameStatement => {
            let prev_named = preceding.iter().rev().find(|s| s.is_named());
            declare_class_name(node, prev_named, scopes);
            scope
        }
        NodeKind::ExtendsStatement => {
            if !scope.in_function && scopes.extends.is_none() {
                scopes.extends = extends_target(node);
            }
            scope
        }
        NodeKind::VariableStatement => {
            if !scope.in_function {
                declare_variable(node, preceding, scopes);
            }
            scope
        }
        NodeKind::FunctionDefinition | NodeKind::ConstructorDefinition => {
            declare_function(node, scopes);
            Scope { in_function: true }
        }
        // Property accessors and lambdas have bodies whose declarations are locals.
        NodeKind::Lambda | NodeKind::SetBody | NodeKind::GetBody => Scope { in_function: true },
        // Inner classes own their members.
        NodeKind::ClassDefinition => {
            let inner = node.child_by_field("name").map(|n| n.text());
            log::debug!("skipping inner class {}", inner.unwrap_or("<unnamed>"));
            return;
        }
        NodeKind::Parameters
        | NodeKind::Identifier
        | NodeKind::TypedParameter
        | NodeKind::DefaultParameter
        | NodeKind::TypedDefaultParameter
        | NodeKind::Type
        | NodeKind::Name
        | NodeKind::Annotations
        | NodeKind::Annotation
        | NodeKind::Other => scope,
    };

    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        visit(child, &children[..i], scope, scopes);
    }
}

fn extends_target(node: &SyntaxNode<'_>) -> Option<String> {
    node.named_children()
        .find(|c| c.kind() == NodeKind::Type)
        .map(|t| t.text().to_string())
}

fn declare_class_name(
    node: &SyntaxNode<'_>,
    prev_named: Option<&SyntaxNode<'_>>,
    scopes: &mut FileScopes,
) {
    let Some(name) = node.named_children().find(|c| c.kind() == NodeKind::Name) else {
        return;
    };
    let extends = prev_named
        .filter(|p| p.kind() == NodeKind::ExtendsStatement)
        .or_else(|| node.child_of_kind(NodeKind::ExtendsStatement))
        .and_then(extends_target);
    scopes.declare_named(name.text(), extends);
}

/// True if an `annotation`, or any annotation in an `annotations` group, exports.
fn annotation_exports(node: &SyntaxNode<'_>) -> bool {
    match node.kind() {
        NodeKind::Annotation => node
            .children()
            .iter()
            .any(|id| id.kind() == NodeKind::Identifier && is_export_annotation(id.text())),
        NodeKind::Annotations => node.children().iter().any(annotation_exports),
        _ => false,
    }
}

/// Export marker either inside the statement or on the annotation lines directly above it.
fn has_export_annotation(node: &SyntaxNode<'_>, preceding: &[SyntaxNode<'_>]) -> bool {
    node.children().iter().any(annotation_exports)
        || preceding
            .iter()
            .rev()
            .filter(|s| s.is_named())
            .take_while(|s| matches!(s.kind(), NodeKind::Annotation | NodeKind::Annotations))
            .any(annotation_exports)
}

fn declare_variable(node: &SyntaxNode<'_>, preceding: &[SyntaxNode<'_>], scopes: &mut FileScopes) {
    let Some(name) = node.named_children().find(|c| c.kind() == NodeKind::Name) else {
        return;
    };
    let value = node.child_by_field("value");
    // Fall back to the initializer's syntax kind (`integer`, `string`, ...) as a hint.
    let ty = node
        .child_of_kind(NodeKind::Type)
        .and_then(|t| t.child_of_kind(NodeKind::Identifier))
        .map(|id| id.text())
        .or_else(|| value.map(|v| v.raw_kind()));
    let meta = Meta {
        name: name.text().to_string(),
        ty: ty.map(str::to_string),
        default_value: value.map(|v| v.text().to_string()),
    };

    let class = scopes.current();
    if has_export_annotation(node, preceding) {
        class.exports.push(meta);
    } else {
        class.variables.push(Variable::from(meta));
    }
}

fn declare_function(node: &SyntaxNode<'_>, scopes: &mut FileScopes) {
    let name = match node.kind() {
        NodeKind::ConstructorDefinition => Some(CONSTRUCTOR_NAME),
        _ => node
            .child_by_field("name")
            .or_else(|| node.child_of_kind(NodeKind::Name))
            .map(|n| n.text()),
    };
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return;
    };

    let parameters = node
        .child_of_kind(NodeKind::Parameters)
        .map(|params| params.children().iter().filter_map(parameter).collect())
        .unwrap_or_default();

    let return_type = node.child_by_field("return_type").map(|t| {
        t.child_of_kind(NodeKind::Identifier)
            .map(|id| id.text())
            .unwrap_or_else(|| t.text().trim())
            .to_string()
    });

    scopes.current().functions.push(Function {
        name: name.to_string(),
        return_type,
        parameters,
    });
}

/// Normalize one child of a parameter list. Separators and unknown shapes yield `None`.
fn parameter(node: &SyntaxNode<'_>) -> Option<Meta> {
    let name = || {
        node.named_children()
            .find(|c| c.kind() == NodeKind::Identifier)
            .map(|id| Meta::new(id.text()))
    };
    let type_text = || {
        node.child_by_field("type")
            .or_else(|| node.child_of_kind(NodeKind::Type))
            .map(|t| t.text().to_string())
    };
    let value_text = || node.child_by_field("value").map(|v| v.text().to_string());

    match node.kind() {
        NodeKind::Identifier => Some(Meta::new(node.text())),
        NodeKind::TypedDefaultParameter => name().map(|meta| Meta {
            ty: type_text(),
            default_value: value_text(),
            ..meta
        }),
        // The grammar nests a type node here too, but it never carries a real annotation.
        NodeKind::DefaultParameter => name().map(|meta| Meta {
            default_value: value_text(),
            ..meta
        }),
        NodeKind::TypedParameter => name().map(|meta| Meta {
            ty: type_text(),
            ..meta
        }),
        NodeKind::ClassNameStatement
        | NodeKind::ExtendsStatement
        | NodeKind::VariableStatement
        | NodeKind::FunctionDefinition
        | NodeKind::ConstructorDefinition
        | NodeKind::Lambda
        | NodeKind::SetBody
        | NodeKind::GetBody
        | NodeKind::ClassDefinition
        | NodeKind::Parameters
        | NodeKind::Type
        | NodeKind::Name
        | NodeKind::Annotations
        | NodeKind::Annotation
        | NodeKind::Other => None,
    }
}
