//! # CLI Behavior
//!
//! One possible UI client for arbor. It is the only place that knows about
//! terminal I/O, exit codes, and output formatting.
//!
//! ## Naked Execution
//!
//! Running `arbor` with no subcommand lists the selected tree.
//!
//! ## Tree Selection
//!
//! Commands that work on one tree pick it in this order:
//!
//! 1. `--tree ID`
//! 2. `default_tree` from configuration
//! 3. the only stored tree, when exactly one exists
//!
//! ## Paths
//!
//! Nodes are addressed by the dotted 1-based paths shown by `arbor list`
//! (`1.2` is the second child of the first root node). Paths shift after
//! edits, so re-list before chaining commands.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: context setup and per-command handlers
//! - `render`: output formatting

mod commands;
mod render;
pub mod setup;

pub use commands::run;
