//! Fluent builder for labeled element trees with indented markup rendering.
//!
//! A [`HtmlBuilder`] owns one tree rooted at a fixed tag name. Children are
//! appended in call order (plain or fluent form) and the tree serializes to
//! deterministic indented nested-tag text. Builders are not internally
//! synchronized; callers using one from multiple threads must lock it.

pub mod arena;
pub mod builder;
pub mod cli;
pub mod errors;
pub mod render;
pub mod util;

pub use arena::{ElementData, ElementNode, ElementTree};
pub use builder::HtmlBuilder;
pub use errors::{TreeError, TreeResult};
pub use render::{render, TreeDisplay};
