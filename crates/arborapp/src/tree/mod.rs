//! # Tree Core
//!
//! Pure functions over a root collection (`&[NodeRef]`). Nothing in here
//! performs I/O, logs, or fails: lookups return `Option`, and edits that cannot
//! apply return the input tree unchanged.
//!
//! - [`resolve`]: locate a node (or a children collection) by path
//! - [`mutate`]: `update`, `remove`, `insert`, each returning a new tree that
//!   shares every subtree off the edited route
//! - [`normalize`]: fill in defaulted folder fields recursively
//! - [`rows`]: depth-first projections for renderers, id → path lookup
//! - [`check`]: integrity diagnostics and repair
//!
//! Moves live one level up in [`crate::drag`], which composes remove and insert.

pub mod check;
pub mod mutate;
pub mod normalize;
pub mod resolve;
pub mod rows;

pub use check::{check, repair, TreeIssue};
pub use mutate::{insert, remove, update};
pub use normalize::{is_normalized, normalize};
pub use resolve::{resolve, resolve_children};
pub use rows::{all_rows, find_path, visible_rows, Row};
