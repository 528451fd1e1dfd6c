use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Data payload for one element in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Tag name, non-empty once constructed
    pub name: String,
    /// Text content; blank text is suppressed when rendering
    pub text: String,
}

impl ElementData {
    /// Create element data, rejecting an empty name.
    pub fn new(name: &str, text: &str) -> TreeResult<Self> {
        if name.is_empty() {
            return Err(TreeError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            text: text.to_string(),
        })
    }

    /// Whether the text should appear in rendered output.
    /// Whitespace-only text counts as absent.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

impl fmt::Display for ElementData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Tree node in the arena-based element hierarchy.
#[derive(Debug)]
pub struct ElementNode {
    /// Element data for this node
    pub data: ElementData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, insertion order
    pub children: Vec<Index>,
}

/// Arena-based tree structure holding one element hierarchy.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Nodes are only ever inserted fresh, never re-parented, so the structure
/// stays acyclic by construction.
#[derive(Debug)]
pub struct ElementTree {
    /// Arena storage for all element nodes
    arena: Arena<ElementNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Create a tree holding a single root element with the given name.
    pub fn with_root(name: &str) -> TreeResult<Self> {
        let mut tree = Self::new();
        let data = ElementData::new(name, "")?;
        tree.insert_node(data, None);
        Ok(tree)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: ElementData, parent: Option<Index>) -> Index {
        let node = ElementNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&ElementNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_node_links_parent_and_child() {
        let mut tree = ElementTree::with_root("ul").unwrap();
        let root_idx = tree.root().unwrap();

        let child_idx = tree.insert_node(
            ElementData::new("li", "hello").unwrap(),
            Some(root_idx),
        );

        let root = tree.get_node(root_idx).unwrap();
        assert_eq!(root.children, vec![child_idx]);
        let child = tree.get_node(child_idx).unwrap();
        assert_eq!(child.parent, Some(root_idx));
        assert_eq!(child.data.name, "li");
    }

    #[test]
    fn test_depth_counts_nesting_levels() {
        let mut tree = ElementTree::with_root("div").unwrap();
        assert_eq!(tree.depth(), 1);

        let root_idx = tree.root().unwrap();
        tree.insert_node(ElementData::new("span", "").unwrap(), Some(root_idx));
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert_eq!(ElementData::new("", "text"), Err(TreeError::EmptyName));
    }

    #[test]
    fn test_blank_text_counts_as_absent() {
        let data = ElementData::new("p", "   ").unwrap();
        assert!(!data.has_text());
        let data = ElementData::new("p", "hello").unwrap();
        assert!(data.has_text());
    }
}
