//! Arena-based element storage
//!
//! Every element ever created by a tree lives here, attached or not.
//! Parent links and child lists are `NodeId` indices, so there are no
//! reference cycles and detached subtrees stay addressable.
//!
//! ```text
//! Arena: Vec<HtmlElement>
//!        [Node0][Node1][Node2]...
//!         ↑ NodeId is the position, never reused
//! ```

use crate::error::{DomError, Result};
use crate::types::{ElementType, HtmlElement, NodeId};
use std::collections::VecDeque;

/// Arena allocator for elements
///
/// Design:
/// - Single Vec<HtmlElement> for sequential allocation
/// - `root_id` marks which node the tree hangs from (if any)
/// - No Rc/Arc: use indices everywhere
#[derive(Debug, Clone)]
pub struct DomArena {
    nodes: Vec<HtmlElement>,
    root_id: Option<NodeId>,
}

impl DomArena {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root_id: None,
        }
    }

    /// Create arena with specific capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root_id: None,
        }
    }

    /// Allocate a standalone element, returns its ID
    pub fn alloc(&mut self, element_type: ElementType) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        self.nodes.push(HtmlElement::new(node_id, element_type));
        node_id
    }

    /// Get node by ID (immutable)
    pub fn get(&self, node_id: NodeId) -> Result<&HtmlElement> {
        self.nodes
            .get(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Get node by ID (mutable)
    pub fn get_mut(&mut self, node_id: NodeId) -> Result<&mut HtmlElement> {
        self.nodes
            .get_mut(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Set root node
    pub fn set_root(&mut self, node_id: NodeId) -> Result<()> {
        // Verify node exists
        self.get(node_id)?;
        self.root_id = Some(node_id);
        Ok(())
    }

    /// Drop the root; nodes stay allocated
    pub fn take_root(&mut self) -> Option<NodeId> {
        self.root_id.take()
    }

    pub fn root_id(&self) -> Option<NodeId> {
        self.root_id
    }

    /// Total number of allocated nodes, attached or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterator over all allocated nodes
    pub fn iter(&self) -> impl Iterator<Item = &HtmlElement> {
        self.nodes.iter()
    }

    /// Get children of a node
    pub fn children(&self, node_id: NodeId) -> Result<Vec<&HtmlElement>> {
        let node = self.get(node_id)?;
        node.children_ids
            .iter()
            .map(|&child_id| self.get(child_id))
            .collect()
    }

    /// Get parent of a node
    pub fn parent(&self, node_id: NodeId) -> Result<Option<&HtmlElement>> {
        let node = self.get(node_id)?;
        match node.parent_id {
            Some(parent_id) => Ok(Some(self.get(parent_id)?)),
            None => Ok(None),
        }
    }

    /// Depth-first pre-order walk starting at `start_id` (iterative, no recursion)
    pub fn pre_order(&self, start_id: NodeId) -> PreOrder<'_> {
        PreOrder {
            arena: self,
            stack: vec![start_id],
        }
    }

    /// Breadth-first walk starting at `start_id`
    pub fn breadth_first(&self, start_id: NodeId) -> BreadthFirst<'_> {
        BreadthFirst {
            arena: self,
            queue: VecDeque::from([start_id]),
        }
    }

    /// Node followed by its parent, grandparent, ... up to a parentless node
    pub fn ancestors_inclusive(&self, node_id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(node_id), move |&id| {
            self.nodes.get(id as usize).and_then(|node| node.parent_id)
        })
    }

    /// Same walk as `pre_order` but yielding depth alongside each node
    pub fn pre_order_with_depth(&self, start_id: NodeId) -> Vec<(usize, &HtmlElement)> {
        let mut out = Vec::new();
        let mut stack = vec![(start_id, 0usize)];

        while let Some((node_id, depth)) = stack.pop() {
            let Some(node) = self.nodes.get(node_id as usize) else {
                continue;
            };
            out.push((depth, node));

            // Push children in reverse order (so they're visited left-to-right)
            for &child_id in node.children_ids.iter().rev() {
                stack.push((child_id, depth + 1));
            }
        }

        out
    }

    /// Find first reachable node matching predicate, in breadth-first order
    pub fn find_one_bf<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&HtmlElement) -> bool,
    {
        let root_id = self.root_id?;
        self.breadth_first(root_id)
            .find(|node| predicate(*node))
            .map(|node| node.node_id)
    }

    /// Find all reachable nodes matching predicate, in pre-order
    pub fn find_df<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&HtmlElement) -> bool,
    {
        let Some(root_id) = self.root_id else {
            return Vec::new();
        };
        self.pre_order(root_id)
            .filter(|node| predicate(*node))
            .map(|node| node.node_id)
            .collect()
    }
}

impl Default for DomArena {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order iterator, see [`DomArena::pre_order`]
pub struct PreOrder<'a> {
    arena: &'a DomArena,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a HtmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node_id) = self.stack.pop() {
            if let Some(node) = self.arena.nodes.get(node_id as usize) {
                self.stack.extend(node.children_ids.iter().rev());
                return Some(node);
            }
        }
        None
    }
}

/// Breadth-first iterator, see [`DomArena::breadth_first`]
pub struct BreadthFirst<'a> {
    arena: &'a DomArena,
    queue: VecDeque<NodeId>,
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = &'a HtmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node_id) = self.queue.pop_front() {
            if let Some(node) = self.arena.nodes.get(node_id as usize) {
                self.queue.extend(node.children_ids.iter().copied());
                return Some(node);
            }
        }
        None
    }
}
