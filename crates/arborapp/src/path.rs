//! # Node Paths
//!
//! A path is a slice of child indices: `path[i]` is the index to descend into
//! at depth `i`, starting from the root collection. The empty path names the
//! root collection itself and is only meaningful as an insertion base.
//!
//! ## Index Drift
//!
//! Paths are positional. Removing or inserting a node shifts the indices of
//! every later sibling, so a path is only valid against the snapshot it was
//! derived from. Re-derive paths after each edit (see
//! [`crate::tree::find_path`]) or adjust them explicitly with
//! [`adjust_after_removal`].
//!
//! ## Display Paths
//!
//! Users see and type 1-based, dot-separated paths: `"2.1"` is `[1, 0]`.
//! [`parse_path`] and [`format_path`] convert between the two.

use crate::error::{ArborError, Result};

/// Whether `prefix` is a (non-strict) prefix of `path`.
pub fn is_prefix(prefix: &[usize], path: &[usize]) -> bool {
    prefix.len() <= path.len() && prefix.iter().zip(path).all(|(a, b)| a == b)
}

/// Whether `path` lies strictly inside the subtree rooted at `ancestor`.
pub fn is_strict_descendant(path: &[usize], ancestor: &[usize]) -> bool {
    path.len() > ancestor.len() && is_prefix(ancestor, path)
}

/// Splits a node path into its parent collection path and its index there.
pub fn split_parent(path: &[usize]) -> Option<(&[usize], usize)> {
    let (last, parent) = path.split_last()?;
    Some((parent, *last))
}

/// Rewrites `path` as it reads after the node at `removed` is detached.
///
/// A path that routes through a later sibling of the removed node has its
/// index at that depth shifted left by one. Paths inside the removed subtree
/// are returned unchanged; they no longer denote anything and callers are
/// expected to have rejected them earlier.
pub fn adjust_after_removal(path: &[usize], removed: &[usize]) -> Vec<usize> {
    let mut adjusted = path.to_vec();
    if let Some((parent, index)) = split_parent(removed) {
        let depth = parent.len();
        if path.len() > depth && is_prefix(parent, path) && path[depth] > index {
            adjusted[depth] -= 1;
        }
    }
    adjusted
}

/// Formats a path for display: `[1, 0]` becomes `"2.1"`. The root collection
/// formats as `"root"`.
pub fn format_path(path: &[usize]) -> String {
    if path.is_empty() {
        return "root".to_string();
    }
    path.iter()
        .map(|i| (i + 1).to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Parses a 1-based dotted display path. `"root"` and the empty string parse
/// to the empty path.
pub fn parse_path(s: &str) -> Result<Vec<usize>> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("root") {
        return Ok(Vec::new());
    }
    trimmed
        .split('.')
        .map(|segment| match segment.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n - 1),
            _ => Err(ArborError::Api(format!(
                "Invalid path '{}': segments must be positive numbers like 1.2",
                s
            ))),
        })
        .collect()
}
