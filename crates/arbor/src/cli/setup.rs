use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "arbor", bin_name = "arbor", version)]
#[command(about = "Edit tree-shaped documents of folders, embeds and files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $ARBOR_DIR, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub dir: Option<PathBuf>,

    /// Tree to operate on
    #[arg(short, long, global = true, value_name = "ID", help_heading = "Options")]
    pub tree: Option<String>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new tree
    New {
        /// Name of the root folder
        name: Vec<String>,
    },

    /// List stored trees
    Trees,

    /// List nodes of the tree
    #[command(alias = "ls")]
    List {
        /// Include children of collapsed folders
        #[arg(short, long)]
        all: bool,
    },

    /// Show one node
    Show { path: String },

    /// Add a node
    Add {
        #[arg(value_enum)]
        kind: KindArg,

        /// Parent folder path (defaults to the top level)
        #[arg(short, long, value_name = "PATH")]
        parent: Option<String>,

        /// 1-based position among the parent's children (defaults to last)
        #[arg(long, value_name = "N")]
        at: Option<usize>,

        /// Node name
        #[arg(short, long)]
        name: Option<String>,

        /// Embed source (embeds only)
        #[arg(long)]
        src: Option<String>,
    },

    /// Rename a node
    Rename { path: String, name: Vec<String> },

    /// Expand a folder
    Expand { path: String },

    /// Collapse a folder
    Collapse { path: String },

    /// Toggle a folder between expanded and collapsed
    Toggle { path: String },

    /// Set the source of an embed
    SetSrc { path: String, src: String },

    /// Remove a node and everything below it
    #[command(alias = "remove")]
    Rm { path: String },

    /// Move a node
    Mv {
        source: String,

        /// Node to drop on
        #[arg(required_unless_present = "to_root")]
        target: Option<String>,

        /// Where to drop relative to TARGET
        #[arg(long, value_enum, default_value_t = PositionArg::Inside)]
        position: PositionArg,

        /// Append to the top level instead of dropping on a node
        #[arg(long, conflicts_with = "target")]
        to_root: bool,
    },

    /// Check the tree for inconsistencies
    Doctor {
        /// Repair what is found
        #[arg(long)]
        fix: bool,
    },

    /// Print the tree as JSON
    Export,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Folder,
    Embed,
    File,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PositionArg {
    Before,
    After,
    Inside,
}
