//! Drawing a [`Tree`] for humans.
//!
//! The drawing is sideways: the root sits at the left margin, right subtrees are drawn above
//! their parent and left subtrees below it, so reading the keys top to bottom gives them in
//! descending order.
//!
//! ```
//! use monitored_bst::Tree;
//!
//! let tree = Tree::from_keys([1, 2, 3]);
//!
//! let drawing = tree.to_string();
//! let lines: Vec<&str> = drawing.lines().collect();
//!
//! assert_eq!(lines, ["│   ┌── 3", "└── 2", "    └── 1"]);
//! ```

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => draw(f, root, "", true),
            None => Ok(()),
        }
    }
}

/// Writes the subtree rooted at `node`, one key per line, every line starting with `prefix`.
/// `is_left` tells whether `node` hangs below its parent's line (or is the root).
fn draw<K>(f: &mut fmt::Formatter<'_>, node: &Node<K>, prefix: &str, is_left: bool) -> fmt::Result
where
    K: fmt::Display,
{
    if let Some(right) = node.right() {
        let rail = if is_left { "│   " } else { "    " };
        draw(f, right, &format!("{prefix}{rail}"), false)?;
    }

    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{prefix}{connector}{}", node.key())?;

    if let Some(left) = node.left() {
        let rail = if is_left { "    " } else { "│   " };
        draw(f, left, &format!("{prefix}{rail}"), true)?;
    }
    Ok(())
}
