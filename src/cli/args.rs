//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Binary search tree workbench: build integer BSTs and inspect them via in-order traversal
///
/// Without a subcommand, runs the classic exercise: builds a tree from the
/// fixed dataset and prints its in-order traversal.
#[derive(Parser, Debug)]
#[command(name = "bstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the in-order traversal of a tree built from VALUES
    Traverse {
        /// Values, inserted in the order given
        values: Vec<i64>,

        /// Read whitespace-separated values from a file instead
        #[arg(short, long, conflicts_with = "values")]
        file: Option<PathBuf>,

        /// Use the arena-backed tree
        #[arg(long)]
        arena: bool,
    },

    /// Render the tree shape
    Shape {
        /// Values, inserted in the order given
        values: Vec<i64>,

        /// Read whitespace-separated values from a file instead
        #[arg(short, long, conflicts_with = "values")]
        file: Option<PathBuf>,
    },

    /// Show node count and height
    Stats {
        /// Values, inserted in the order given
        values: Vec<i64>,

        /// Read whitespace-separated values from a file instead
        #[arg(short, long, conflicts_with = "values")]
        file: Option<PathBuf>,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
