//! Core type definitions for the element tree
//!
//! Key design principles:
//! 1. Use u32 for indices, parents are plain indices (no Rc/Weak cycles)
//! 2. Use SmallVec for child lists (most elements have <4 children)
//! 3. Keep the owned `ElementSpec` separate from arena-resident `HtmlElement`

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::fmt;

/// Node identifier (index into arena)
pub type NodeId = u32;

/// Kind of an element in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Document,
    Html,
    Head,
    Title,
    Meta,
    Body,
    Div,
    Span,
    Paragraph,
    Anchor,
    UnorderedList,
    OrderedList,
    ListItem,
    Image,
    Script,
    Style,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Document => "Document",
            ElementType::Html => "Html",
            ElementType::Head => "Head",
            ElementType::Title => "Title",
            ElementType::Meta => "Meta",
            ElementType::Body => "Body",
            ElementType::Div => "Div",
            ElementType::Span => "Span",
            ElementType::Paragraph => "Paragraph",
            ElementType::Anchor => "Anchor",
            ElementType::UnorderedList => "UnorderedList",
            ElementType::OrderedList => "OrderedList",
            ElementType::ListItem => "ListItem",
            ElementType::Image => "Image",
            ElementType::Script => "Script",
            ElementType::Style => "Style",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An element stored in the arena
///
/// Design:
/// - `children_ids` owns the edge, `parent_id` is only a back-reference
/// - A node with no parent is either the root or detached
#[derive(Debug, Clone)]
pub struct HtmlElement {
    pub node_id: NodeId,
    pub element_type: ElementType,

    // Navigation indices
    pub parent_id: Option<NodeId>,
    pub children_ids: SmallVec<[NodeId; 4]>,

    pub attributes: AHashMap<String, String>,
}

impl HtmlElement {
    pub fn new(node_id: NodeId, element_type: ElementType) -> Self {
        Self {
            node_id,
            element_type,
            parent_id: None,
            children_ids: SmallVec::new(),
            attributes: AHashMap::new(),
        }
    }

    /// Get attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn is_type(&self, element_type: ElementType) -> bool {
        self.element_type == element_type
    }

    pub fn has_children(&self) -> bool {
        !self.children_ids.is_empty()
    }
}

/// Owned description of a subtree
///
/// Deserializes from fixtures such as:
///
/// ```json
/// { "type": "Body", "attributes": { "id": "main" }, "children": [] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSpec {
    #[serde(rename = "type")]
    pub element_type: ElementType,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(element_type: ElementType) -> Self {
        Self {
            element_type,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = ElementSpec>,
    {
        self.children.extend(children);
        self
    }

    /// `Document → Html → (Head, Body)`
    pub fn default_document() -> Self {
        Self::new(ElementType::Document).with_child(
            Self::new(ElementType::Html)
                .with_child(Self::new(ElementType::Head))
                .with_child(Self::new(ElementType::Body)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_type_display() {
        assert_eq!(ElementType::UnorderedList.to_string(), "UnorderedList");
        assert_eq!(format!("{}", ElementType::Document), "Document");
    }

    #[test]
    fn test_spec_defaults_when_fields_missing() {
        let spec: ElementSpec = serde_json::from_value(serde_json::json!({
            "type": "Anchor"
        }))
        .unwrap();

        assert_eq!(spec, ElementSpec::new(ElementType::Anchor));
    }

    #[test]
    fn test_spec_skips_empty_fields() {
        let spec = ElementSpec::new(ElementType::Div).with_attribute("id", "main");
        let value = serde_json::to_value(&spec).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "type": "Div", "attributes": { "id": "main" } })
        );
    }
}
