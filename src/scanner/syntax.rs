//! Syntax tree vocabulary consumed by the extractor.
//!
//! Nodes borrow their text from the script source, so a lowered tree can
//! outlive the parser that produced it.

/// Node kinds the extractor understands. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    ClassNameStatement,
    ExtendsStatement,
    VariableStatement,
    FunctionDefinition,
    ConstructorDefinition,
    /// `func(): ...` used as an expression.
    Lambda,
    /// `set(value):` body of a property.
    SetBody,
    /// `get:` body of a property.
    GetBody,
    /// Inner `class Name:` block.
    ClassDefinition,
    Parameters,
    Identifier,
    TypedParameter,
    DefaultParameter,
    TypedDefaultParameter,
    Type,
    Name,
    Annotations,
    Annotation,
    Other,
}

impl NodeKind {
    /// Map a grammar node-kind string onto the vocabulary.
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            "class_name_statement" => NodeKind::ClassNameStatement,
            "extends_statement" => NodeKind::ExtendsStatement,
            "variable_statement" => NodeKind::VariableStatement,
            "function_definition" => NodeKind::FunctionDefinition,
            "constructor_definition" => NodeKind::ConstructorDefinition,
            "lambda" => NodeKind::Lambda,
            "set_body" => NodeKind::SetBody,
            "get_body" => NodeKind::GetBody,
            "class_definition" => NodeKind::ClassDefinition,
            "parameters" => NodeKind::Parameters,
            "identifier" => NodeKind::Identifier,
            "typed_parameter" => NodeKind::TypedParameter,
            "default_parameter" => NodeKind::DefaultParameter,
            "typed_default_parameter" => NodeKind::TypedDefaultParameter,
            "type" => NodeKind::Type,
            "name" => NodeKind::Name,
            "annotations" => NodeKind::Annotations,
            "annotation" => NodeKind::Annotation,
            _ => NodeKind::Other,
        }
    }
}

/// One node of a lowered syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode<'src> {
    kind: NodeKind,
    raw_kind: &'src str,
    text: &'src str,
    named: bool,
    field: Option<&'src str>,
    children: Vec<SyntaxNode<'src>>,
}

impl<'src> SyntaxNode<'src> {
    /// A named node of grammar kind `raw_kind` covering `text`.
    pub fn new(raw_kind: &'src str, text: &'src str) -> Self {
        Self {
            kind: NodeKind::from_kind(raw_kind),
            raw_kind,
            text,
            named: true,
            field: None,
            children: Vec::new(),
        }
    }

    /// An anonymous token such as `(`, `,` or `func`.
    pub fn token(text: &'src str) -> Self {
        Self {
            kind: NodeKind::Other,
            named: false,
            ..Self::new(text, text)
        }
    }

    pub fn with_field(mut self, field: &'src str) -> Self {
        self.field = Some(field);
        self
    }

    pub fn with_child(mut self, child: SyntaxNode<'src>) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = SyntaxNode<'src>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The grammar's own kind string (used as a type hint for initializers).
    pub fn raw_kind(&self) -> &'src str {
        self.raw_kind
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    pub fn is_named(&self) -> bool {
        self.named
    }

    /// Field name this node occupies under its parent, if any.
    pub fn field_name(&self) -> Option<&'src str> {
        self.field
    }

    pub fn children(&self) -> &[SyntaxNode<'src>] {
        &self.children
    }

    pub fn named_children(&self) -> impl Iterator<Item = &SyntaxNode<'src>> {
        self.children.iter().filter(|c| c.named)
    }

    /// First direct child of the given kind.
    pub fn child_of_kind(&self, kind: NodeKind) -> Option<&SyntaxNode<'src>> {
        self.children.iter().find(|c| c.kind == kind)
    }

    pub fn child_by_field(&self, field: &str) -> Option<&SyntaxNode<'src>> {
        self.children.iter().find(|c| c.field == Some(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_kind_maps_vocabulary() {
        assert_eq!(
            NodeKind::from_kind("class_name_statement"),
            NodeKind::ClassNameStatement
        );
        assert_eq!(
            NodeKind::from_kind("typed_default_parameter"),
            NodeKind::TypedDefaultParameter
        );
        assert_eq!(NodeKind::from_kind("lambda"), NodeKind::Lambda);
        assert_eq!(NodeKind::from_kind("set_body"), NodeKind::SetBody);
        assert_eq!(NodeKind::from_kind("class_definition"), NodeKind::ClassDefinition);
        assert_eq!(NodeKind::from_kind("if_statement"), NodeKind::Other);
    }

    #[test]
    fn token_is_anonymous() {
        let node = SyntaxNode::new("parameters", "(a)")
            .with_child(SyntaxNode::token("("))
            .with_child(SyntaxNode::new("identifier", "a"))
            .with_child(SyntaxNode::token(")"));
        assert_eq!(node.children().len(), 3);
        let named: Vec<_> = node.named_children().map(|c| c.text()).collect();
        assert_eq!(named, vec!["a"]);
        assert_eq!(node.children()[0].kind(), NodeKind::Other);
    }

    #[test]
    fn child_lookup_by_field_and_kind() {
        let node = SyntaxNode::new("variable_statement", "var x = 1")
            .with_child(SyntaxNode::new("name", "x"))
            .with_child(SyntaxNode::new("integer", "1").with_field("value"));
        assert_eq!(node.child_of_kind(NodeKind::Name).map(|n| n.text()), Some("x"));
        assert_eq!(node.child_by_field("value").map(|n| n.raw_kind()), Some("integer"));
        assert!(node.child_by_field("type").is_none());
    }
}
