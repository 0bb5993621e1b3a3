/// Outcome of [`Node::delete_and_repair`][crate::node::Node::delete_and_repair].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeleteResult {
    /// The key wasn't found so nothing was deleted.
    NotFound,
    /// The Node returning this holds the key but has no in-order successor to take its place.
    /// Whoever owns it must splice it out by promoting its left child.
    DeleteSelf,
    /// The key was removed from the subtree.
    Deleted,
}
