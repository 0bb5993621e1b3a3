//! Selecting one of the four traversal orders by value or by name.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The order in which [`Tree::traverse`][crate::Tree::traverse] visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
    /// Breadth first, one depth at a time, left to right.
    LevelOrder,
}

impl Order {
    /// Every order, in the order they are listed above.
    pub const ALL: [Order; 4] = [
        Order::InOrder,
        Order::PreOrder,
        Order::PostOrder,
        Order::LevelOrder,
    ];

    /// The short name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Order::InOrder => "in",
            Order::PreOrder => "pre",
            Order::PostOrder => "post",
            Order::LevelOrder => "level",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Order {
    type Err = Error;

    /// Parses `in`, `pre`, `post` or `level`, optionally followed by `order` or `-order`, in any
    /// case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let name = normalized
            .strip_suffix("order")
            .map(|prefix| prefix.trim_end_matches(&['-', '_'][..]))
            .unwrap_or(normalized.as_str());

        Order::ALL
            .into_iter()
            .find(|order| order.name() == name)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown traversal order `{s}`")))
    }
}
