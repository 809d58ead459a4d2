//! DOM Serializer - Convert the element tree to an indented outline
//!
//! One line per reachable element, pre-order, indented by depth:
//!
//! ```text
//! Document
//!   Html
//!     Head
//!     Body
//! ```

use crate::arena::DomArena;
use crate::types::HtmlElement;

/// Serializer configuration
#[derive(Debug, Clone)]
pub struct SerializerConfig {
    /// Spaces per depth level
    pub indent_width: usize,
    /// Append ` key="value"` pairs, sorted by key
    pub include_attributes: bool,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            include_attributes: false,
        }
    }
}

/// Element tree serializer
pub struct DomSerializer {
    config: SerializerConfig,
}

impl DomSerializer {
    pub fn new() -> Self {
        Self::with_config(SerializerConfig::default())
    }

    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// Serialize the reachable tree; an empty tree yields an empty string
    pub fn serialize(&self, arena: &DomArena) -> String {
        let mut output = String::new();

        if let Some(root_id) = arena.root_id() {
            for (depth, node) in arena.pre_order_with_depth(root_id) {
                self.serialize_line(node, depth, &mut output);
            }
        }

        output
    }

    fn serialize_line(&self, node: &HtmlElement, depth: usize, output: &mut String) {
        output.push_str(&" ".repeat(depth * self.config.indent_width));
        output.push_str(node.element_type.as_str());

        if self.config.include_attributes {
            let mut attrs: Vec<_> = node.attributes.iter().collect();
            attrs.sort_unstable_by(|a, b| a.0.cmp(b.0));
            for (key, value) in attrs {
                output.push_str(&format!(" {}=\"{}\"", key, value));
            }
        }

        output.push('\n');
    }
}

impl Default for DomSerializer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DomTree;
    use crate::types::{ElementSpec, ElementType};

    #[test]
    fn test_serialize_default_document() {
        let tree = DomTree::new();
        let output = DomSerializer::new().serialize(tree.arena());

        assert_eq!(output, "Document\n  Html\n    Head\n    Body\n");
    }

    #[test]
    fn test_serialize_with_attributes() {
        let spec = ElementSpec::new(ElementType::Body).with_child(
            ElementSpec::new(ElementType::Anchor)
                .with_attribute("id", "home")
                .with_attribute("href", "/"),
        );
        let tree = DomTree::with_root(&spec);

        let serializer = DomSerializer::with_config(SerializerConfig {
            indent_width: 4,
            include_attributes: true,
        });
        let output = serializer.serialize(tree.arena());

        assert_eq!(output, "Body\n    Anchor href=\"/\" id=\"home\"\n");
    }

    #[test]
    fn test_display_matches_default_serializer() {
        let tree = DomTree::new();
        assert_eq!(tree.to_string(), DomSerializer::new().serialize(tree.arena()));
    }
}
