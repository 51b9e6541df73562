//! # Arbor Architecture
//!
//! Arbor is a **UI-agnostic tree document library**: an ordered hierarchy of
//! typed nodes (folders, embeds, files) addressed by positional paths, edited
//! immutably, and rearranged with drag-and-drop semantics. The CLI in the
//! `arbor` crate is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (arbor crate)                                          │
//! │  - Parses arguments, renders rows, owns stdout/exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, parses "1.2" paths and tree ids             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load → core operation → sync, structured CmdResult       │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Core (tree/, drag.rs)        │ │  Storage (store/)         │
//! │  - pure, total, no I/O        │ │  - TreeStore trait        │
//! │  - structural sharing (Arc)   │ │  - FileStore, InMemory    │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Paths
//!
//! Internally a path is a `[usize]` of child indexes from the root collection
//! (`[0, 1]` is the second child of the first root node). Users see the same
//! path 1-based and dotted (`"1.2"`). Paths only hold for the snapshot they
//! came from; see [`path`].
//!
//! ## Key Principle: a Total Core
//!
//! [`tree`] and [`drag`] never fail and never panic. Unresolvable requests come
//! back as `None`, as the unchanged tree, or as a `MoveOutcome::Rejected`. The
//! command layer decides which of those are user errors.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`tree`]: Resolve, mutate, normalize, check, and flatten trees
//! - [`drag`]: Drop positions, move legality, and drag session state
//! - [`path`]: Path helpers and display formatting
//! - [`model`]: `TreeNode`, `NodeKind`, `NodePatch`
//! - [`store`]: Persistence trait and implementations
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod drag;
pub mod error;
pub mod model;
pub mod path;
pub mod store;
pub mod tree;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
