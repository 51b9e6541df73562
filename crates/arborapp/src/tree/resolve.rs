use crate::model::NodeRef;

/// Locates the node at `path`.
///
/// The empty path names the root collection, not a node, so it resolves to
/// `None`. So does any out-of-range index, and any path that continues below
/// a leaf.
pub fn resolve<'a>(nodes: &'a [NodeRef], path: &[usize]) -> Option<&'a NodeRef> {
    let (first, rest) = path.split_first()?;
    let mut current = nodes.get(*first)?;
    for index in rest {
        current = current.children()?.get(*index)?;
    }
    Some(current)
}

/// Locates the children collection at `base`: the root collection for the
/// empty path, a folder's children otherwise. Leaves have no collection.
pub fn resolve_children<'a>(nodes: &'a [NodeRef], base: &[usize]) -> Option<&'a [NodeRef]> {
    if base.is_empty() {
        return Some(nodes);
    }
    resolve(nodes, base)?.children()
}
