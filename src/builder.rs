use std::fmt;

use tracing::instrument;

use crate::arena::{ElementData, ElementTree};
use crate::errors::TreeResult;
use crate::render;

/// Step-by-step builder for an element tree with a fixed root name.
///
/// The builder owns its tree exclusively; children are appended under the
/// root in call order and the whole tree renders as indented nested-tag
/// text via [`HtmlBuilder::render`] or `Display`.
///
/// ```
/// use tagtree::HtmlBuilder;
///
/// let builder = HtmlBuilder::new("ul")?
///     .with_child("li", "hello")?
///     .with_child("li", "world")?;
/// assert!(builder.render().starts_with("<ul>\n"));
/// # Ok::<(), tagtree::TreeError>(())
/// ```
#[derive(Debug)]
pub struct HtmlBuilder {
    root_name: String,
    tree: ElementTree,
}

impl HtmlBuilder {
    /// Create a builder whose tree holds a single root element.
    ///
    /// Fails with [`TreeError::EmptyName`](crate::TreeError::EmptyName) if
    /// `root_name` is empty; the same rule applies to every node name.
    #[instrument(level = "debug")]
    pub fn new(root_name: &str) -> TreeResult<Self> {
        let tree = ElementTree::with_root(root_name)?;
        Ok(Self {
            root_name: root_name.to_string(),
            tree,
        })
    }

    /// Append a child element under the root, preserving call order.
    ///
    /// `text` may be empty; blank text is suppressed when rendering.
    /// Validation happens before any mutation, so a failed call leaves the
    /// tree unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn add_child(&mut self, name: &str, text: &str) -> TreeResult<()> {
        let data = ElementData::new(name, text)?;
        let root_idx = self.tree.root();
        self.tree.insert_node(data, root_idx);
        Ok(())
    }

    /// Fluent variant of [`add_child`](Self::add_child) for call chaining.
    #[instrument(level = "debug", skip(self))]
    pub fn with_child(mut self, name: &str, text: &str) -> TreeResult<Self> {
        self.add_child(name, text)?;
        Ok(self)
    }

    /// Discard all children and text, keeping the root name from
    /// construction. A no-op on an already-empty builder.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        // root name was validated at construction, rebuilding cannot fail
        if let Ok(tree) = ElementTree::with_root(&self.root_name) {
            self.tree = tree;
        }
    }

    /// Render the tree as indented nested-tag text.
    ///
    /// Pure function of the current tree state; repeated calls without
    /// mutation yield identical strings.
    #[instrument(level = "debug", skip(self))]
    pub fn render(&self) -> String {
        render::render(&self.tree)
    }

    /// Root tag name this builder was constructed with.
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// The underlying element tree, for display and inspection.
    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }
}

impl fmt::Display for HtmlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TreeError;

    #[test]
    fn test_empty_root_name_fails() {
        let result = HtmlBuilder::new("");
        assert!(matches!(result, Err(TreeError::EmptyName)));
    }

    #[test]
    fn test_empty_child_name_fails_and_leaves_tree_unchanged() {
        let mut builder = HtmlBuilder::new("ul").unwrap();
        let before = builder.render();

        let result = builder.add_child("", "hello");

        assert_eq!(result, Err(TreeError::EmptyName));
        assert_eq!(builder.render(), before);
    }

    #[test]
    fn test_fluent_and_plain_insertion_render_identically() {
        let fluent = HtmlBuilder::new("ul")
            .unwrap()
            .with_child("li", "hello")
            .unwrap()
            .with_child("li", "world")
            .unwrap();

        let mut plain = HtmlBuilder::new("ul").unwrap();
        plain.add_child("li", "hello").unwrap();
        plain.add_child("li", "world").unwrap();

        assert_eq!(fluent.render(), plain.render());
    }

    #[test]
    fn test_clear_resets_to_freshly_constructed_state() {
        let mut builder = HtmlBuilder::new("ul").unwrap();
        builder.add_child("li", "hello").unwrap();

        builder.clear();

        assert_eq!(builder.render(), HtmlBuilder::new("ul").unwrap().render());
        // clearing again changes nothing
        builder.clear();
        assert_eq!(builder.render(), "<ul>\n</ul>\n");
    }

    #[test]
    fn test_display_matches_render() {
        let builder = HtmlBuilder::new("p").unwrap();
        assert_eq!(format!("{}", builder), builder.render());
    }
}
