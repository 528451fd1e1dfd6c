//! Serialization of element trees to indented nested-tag text,
//! plus an ASCII tree view for terminal display.

use generational_arena::Index;
use termtree::Tree;

use crate::arena::ElementTree;

/// Spaces per nesting level in rendered output.
const INDENT_SIZE: usize = 2;

/// Render the whole tree as indented nested-tag text.
///
/// Depth-first, pre-order: open tag, optional text line, children, close
/// tag. Lines always end with `\n` regardless of platform so output stays
/// deterministic across environments. An empty tree renders as an empty
/// string.
pub fn render(tree: &ElementTree) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        render_node(tree, root, 0, &mut out);
    }
    out
}

fn render_node(tree: &ElementTree, idx: Index, depth: usize, out: &mut String) {
    let Some(node) = tree.get_node(idx) else {
        return;
    };

    let indent = " ".repeat(INDENT_SIZE * depth);
    out.push_str(&indent);
    out.push('<');
    out.push_str(&node.data.name);
    out.push_str(">\n");

    if node.data.has_text() {
        out.push_str(&" ".repeat(INDENT_SIZE * (depth + 1)));
        out.push_str(&node.data.text);
        out.push('\n');
    }

    for &child in &node.children {
        render_node(tree, child, depth + 1, out);
    }

    out.push_str(&indent);
    out.push_str("</");
    out.push_str(&node.data.name);
    out.push_str(">\n");
}

/// Conversion to a `termtree` display tree for terminal output.
pub trait TreeDisplay {
    fn to_display_tree(&self) -> Tree<String>;
}

impl TreeDisplay for ElementTree {
    fn to_display_tree(&self) -> Tree<String> {
        match self.root() {
            Some(root) => build_display_tree(self, root),
            None => Tree::new(String::new()),
        }
    }
}

fn build_display_tree(tree: &ElementTree, idx: Index) -> Tree<String> {
    let Some(node) = tree.get_node(idx) else {
        return Tree::new(String::new());
    };

    let label = if node.data.has_text() {
        format!("{} {:?}", node.data.name, node.data.text)
    } else {
        node.data.name.clone()
    };

    let leaves: Vec<_> = node
        .children
        .iter()
        .map(|&child| build_display_tree(tree, child))
        .collect();

    Tree::new(label).with_leaves(leaves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::ElementData;

    fn sample_tree() -> ElementTree {
        let mut tree = ElementTree::with_root("ul").unwrap();
        let root = tree.root().unwrap();
        tree.insert_node(ElementData::new("li", "hello").unwrap(), Some(root));
        tree.insert_node(ElementData::new("li", "world").unwrap(), Some(root));
        tree
    }

    #[test]
    fn test_render_nested_list() {
        let rendered = render(&sample_tree());
        assert_eq!(
            rendered,
            "<ul>\n  <li>\n    hello\n  </li>\n  <li>\n    world\n  </li>\n</ul>\n"
        );
    }

    #[test]
    fn test_render_empty_tree_is_empty_string() {
        assert_eq!(render(&ElementTree::new()), "");
    }

    #[test]
    fn test_render_root_only() {
        let tree = ElementTree::with_root("div").unwrap();
        assert_eq!(render(&tree), "<div>\n</div>\n");
    }

    #[test]
    fn test_display_tree_shows_children_in_order() {
        let display = sample_tree().to_display_tree();
        let text = display.to_string();
        let hello = text.find("hello").unwrap();
        let world = text.find("world").unwrap();
        assert!(text.starts_with("ul"));
        assert!(hello < world);
    }
}
