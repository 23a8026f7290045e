//! Tree-sitter front end: parse GDScript and lower the tree into [`SyntaxNode`]s.

use tree_sitter::{Node, Parser};

use super::syntax::SyntaxNode;
use crate::error::{Error, Result};

/// Normalize line endings and BOM so parses are consistent across platforms.
pub fn normalize_source(text: &str) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// A lowered parse of one script.
#[derive(Debug)]
pub struct ParsedScript<'src> {
    pub root: SyntaxNode<'src>,
    /// The grammar recovered from at least one syntax error.
    pub has_errors: bool,
}

/// Reusable GDScript parser. Not `Sync`: create one per worker thread.
pub struct GdParser {
    parser: Parser,
}

impl GdParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_gdscript::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    pub fn parse<'src>(&mut self, source: &'src str) -> Result<ParsedScript<'src>> {
        let tree = self.parser.parse(source, None).ok_or(Error::Parse)?;
        let root = tree.root_node();
        Ok(ParsedScript {
            root: lower(root, None, source),
            has_errors: root.has_error(),
        })
    }
}

fn lower<'src>(node: Node<'_>, field: Option<&'static str>, source: &'src str) -> SyntaxNode<'src> {
    let text = source.get(node.byte_range()).unwrap_or_default();
    let mut lowered = if node.is_named() {
        SyntaxNode::new(node.kind(), text)
    } else {
        SyntaxNode::token(text)
    };
    if let Some(field) = field {
        lowered = lowered.with_field(field);
    }

    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            lowered = lowered.with_child(lower(cursor.node(), cursor.field_name(), source));
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    lowered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::syntax::NodeKind;

    #[test]
    fn normalize_source_empty() {
        assert_eq!(normalize_source(""), "");
    }

    #[test]
    fn normalize_source_bom_and_crlf() {
        assert_eq!(normalize_source("\u{feff}foo"), "foo");
        assert_eq!(normalize_source("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn parse_lowers_class_name() {
        let mut parser = GdParser::new().unwrap();
        let parsed = parser.parse("extends Node\nclass_name Player\n").unwrap();
        assert!(!parsed.has_errors);
        let kinds: Vec<_> = parsed.root.named_children().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::ExtendsStatement, NodeKind::ClassNameStatement]
        );
    }
}
