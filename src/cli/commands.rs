use anyhow::Result;
use tracing::{debug, instrument};

use crate::builder::HtmlBuilder;
use crate::cli::args::{Cli, Commands};
use crate::render::TreeDisplay;

pub fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Render { root, children }) => _render(root, children),
        Some(Commands::Tree { root, children }) => _tree(root, children),
        None => Ok(()),
    }
}

/// Build a document from CLI child specs, each `name` or `name=text`.
fn build_document(root: &str, children: &[String]) -> Result<HtmlBuilder> {
    let mut builder = HtmlBuilder::new(root)?;
    for spec in children {
        let (name, text) = match spec.split_once('=') {
            Some((name, text)) => (name, text),
            None => (spec.as_str(), ""),
        };
        builder.add_child(name, text)?;
    }
    Ok(builder)
}

#[instrument]
fn _render(root: &str, children: &[String]) -> Result<()> {
    debug!("root: {:?}, children: {:?}", root, children);
    let builder = build_document(root, children)?;
    // rendered output is already newline-terminated
    print!("{}", builder.render());
    Ok(())
}

#[instrument]
fn _tree(root: &str, children: &[String]) -> Result<()> {
    debug!("root: {:?}, children: {:?}", root, children);
    let builder = build_document(root, children)?;
    println!("{}", builder.tree().to_display_tree());
    Ok(())
}
