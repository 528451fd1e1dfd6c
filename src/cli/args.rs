//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

/// Build labeled element trees and render them as indented markup
#[derive(Parser, Debug)]
#[command(name = "tagtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more verbosity)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions for the given shell
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a document as indented nested-tag text
    Render {
        /// Root tag name
        root: String,

        /// Child elements, each `name` or `name=text`
        children: Vec<String>,
    },

    /// Show a document as an ASCII tree
    Tree {
        /// Root tag name
        root: String,

        /// Child elements, each `name` or `name=text`
        children: Vec<String>,
    },
}
