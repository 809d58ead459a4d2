//! Document tree - main entry point for element operations
//!
//! This handles:
//! - Building the default `Document → Html → (Head, Body)` skeleton
//! - Creating standalone elements and subtrees
//! - Attaching / detaching nodes with reachability checks
//! - Type and id lookups (BFS for single hits, pre-order for collections)
//! - Attribute edits on attached nodes

use crate::arena::DomArena;
use crate::error::{DomError, Result};
use crate::serializer::DomSerializer;
use crate::types::*;
use std::fmt;

/// Where to attach a child in its new parent's child list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    First,
    Last,
}

/// Rooted, ordered tree of typed elements
#[derive(Debug, Clone)]
pub struct DomTree {
    arena: DomArena,
}

impl DomTree {
    /// Create the default document: `Document → Html → (Head, Body)`
    pub fn new() -> Self {
        Self::with_root(&ElementSpec::default_document())
    }

    /// Create a tree with no root
    pub fn empty() -> Self {
        Self {
            arena: DomArena::new(),
        }
    }

    /// Create a tree whose root subtree is built from `spec`
    pub fn with_root(spec: &ElementSpec) -> Self {
        let mut tree = Self::empty();
        let root_id = tree.create_subtree(spec);
        let _ = tree.arena.set_root(root_id); // freshly allocated, always exists
        tree
    }

    /// Parse a JSON `ElementSpec` and use it as the root subtree
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: ElementSpec = serde_json::from_str(json)?;
        Ok(Self::with_root(&spec))
    }

    /// Get reference to internal arena
    pub fn arena(&self) -> &DomArena {
        &self.arena
    }

    pub fn root(&self) -> Option<NodeId> {
        self.arena.root_id()
    }

    /// Get element by ID, attached or not
    pub fn element(&self, node_id: NodeId) -> Result<&HtmlElement> {
        self.arena.get(node_id)
    }

    /// Number of nodes reachable from the root
    pub fn len(&self) -> usize {
        match self.root() {
            Some(root_id) => self.arena.pre_order(root_id).count(),
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    /// Allocate a standalone element; it joins the tree only once inserted
    pub fn create_element(&mut self, element_type: ElementType) -> NodeId {
        self.arena.alloc(element_type)
    }

    /// Allocate a standalone subtree from `spec`, returns the subtree root
    pub fn create_subtree(&mut self, spec: &ElementSpec) -> NodeId {
        let node_id = self.arena.alloc(spec.element_type);

        let mut child_ids = smallvec::SmallVec::<[NodeId; 4]>::new();
        for child in &spec.children {
            let child_id = self.create_subtree(child);
            if let Ok(node) = self.arena.get_mut(child_id) {
                node.parent_id = Some(node_id);
            }
            child_ids.push(child_id);
        }

        if let Ok(node) = self.arena.get_mut(node_id) {
            node.children_ids = child_ids;
            node.attributes = spec
                .attributes
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
        }

        node_id
    }

    /// First element of `element_type` in breadth-first order
    pub fn get_element_by_type(&self, element_type: ElementType) -> Option<NodeId> {
        self.arena.find_one_bf(|node| node.is_type(element_type))
    }

    /// All elements of `element_type` in depth-first pre-order
    pub fn get_elements_by_type(&self, element_type: ElementType) -> Vec<NodeId> {
        self.arena.find_df(|node| node.is_type(element_type))
    }

    /// First element whose `id` attribute equals `id`, breadth-first
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.arena.find_one_bf(|node| node.attr("id") == Some(id))
    }

    /// Whether `node_id` is the root or one of its descendants
    pub fn contains(&self, node_id: NodeId) -> bool {
        match self.root() {
            Some(root_id) => self.arena.pre_order(root_id).any(|node| node.node_id == node_id),
            None => false,
        }
    }

    pub fn insert_first(&mut self, parent_id: NodeId, child_id: NodeId) -> Result<()> {
        self.insert(parent_id, child_id, Position::First)
    }

    pub fn insert_last(&mut self, parent_id: NodeId, child_id: NodeId) -> Result<()> {
        self.insert(parent_id, child_id, Position::Last)
    }

    fn insert(&mut self, parent_id: NodeId, child_id: NodeId, position: Position) -> Result<()> {
        self.ensure_in_tree(parent_id)?;
        self.arena.get(child_id)?;

        // Attaching an ancestor below itself would close a cycle
        if self
            .arena
            .ancestors_inclusive(parent_id)
            .any(|id| id == child_id)
        {
            return Err(DomError::HierarchyRequest {
                parent: parent_id,
                child: child_id,
            });
        }

        self.detach(child_id)?;

        let parent = self.arena.get_mut(parent_id)?;
        match position {
            Position::First => parent.children_ids.insert(0, child_id),
            Position::Last => parent.children_ids.push(child_id),
        }
        self.arena.get_mut(child_id)?.parent_id = Some(parent_id);

        tracing::debug!(parent_id, child_id, ?position, "Inserted element");
        Ok(())
    }

    /// Detach `node_id` from the tree
    ///
    /// The subtree stays allocated and can be re-inserted. Removing the
    /// root empties the tree.
    pub fn remove(&mut self, node_id: NodeId) -> Result<()> {
        self.ensure_in_tree(node_id)?;

        if self.detach(node_id)? {
            tracing::debug!(node_id, "Removed element");
        } else {
            self.arena.take_root();
            tracing::debug!(node_id, "Removed root, tree is now empty");
        }

        Ok(())
    }

    /// Detach every element of `element_type` from its parent
    ///
    /// Matches inside an already detached subtree are skipped. The root
    /// has no parent and is never removed here. Returns how many nodes
    /// were detached.
    pub fn remove_all(&mut self, element_type: ElementType) -> Result<usize> {
        let mut removed = 0;

        for node_id in self.get_elements_by_type(element_type) {
            if self.contains(node_id) && self.detach(node_id)? {
                removed += 1;
            }
        }

        tracing::debug!(%element_type, removed, "Removed all elements of type");
        Ok(removed)
    }

    /// Returns `false` and leaves the old value when `key` already exists
    pub fn add_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        node_id: NodeId,
    ) -> Result<bool> {
        self.ensure_in_tree(node_id)?;

        let key = key.into();
        let node = self.arena.get_mut(node_id)?;
        if node.attributes.contains_key(&key) {
            return Ok(false);
        }

        tracing::debug!(node_id, key = %key, "Added attribute");
        node.attributes.insert(key, value.into());
        Ok(true)
    }

    pub fn remove_attribute(&mut self, key: &str, node_id: NodeId) -> Result<bool> {
        self.ensure_in_tree(node_id)?;

        let removed = self.arena.get_mut(node_id)?.attributes.remove(key).is_some();
        if removed {
            tracing::debug!(node_id, key, "Removed attribute");
        }
        Ok(removed)
    }

    /// Owned copy of the reachable tree
    pub fn to_spec(&self) -> Option<ElementSpec> {
        self.root().and_then(|root_id| self.spec_of(root_id).ok())
    }

    /// Export the reachable tree as JSON (`null` when empty)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_spec())?)
    }

    fn spec_of(&self, node_id: NodeId) -> Result<ElementSpec> {
        let node = self.arena.get(node_id)?;
        let children = node
            .children_ids
            .iter()
            .map(|&child_id| self.spec_of(child_id))
            .collect::<Result<Vec<_>>>()?;

        Ok(ElementSpec {
            element_type: node.element_type,
            attributes: node
                .attributes
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
            children,
        })
    }

    fn ensure_in_tree(&self, node_id: NodeId) -> Result<()> {
        if self.contains(node_id) {
            Ok(())
        } else {
            Err(DomError::NotInTree(node_id))
        }
    }

    /// Unlink `node_id` from its parent, if it has one
    ///
    /// Returns whether there was a parent to unlink from.
    fn detach(&mut self, node_id: NodeId) -> Result<bool> {
        let Some(parent_id) = self.arena.get_mut(node_id)?.parent_id.take() else {
            return Ok(false);
        };

        self.arena
            .get_mut(parent_id)?
            .children_ids
            .retain(|id| *id != node_id);
        Ok(true)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DomTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&DomSerializer::new().serialize(&self.arena))
    }
}
