use super::{Node, Symbol, Trie};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Shape of a trie, gathered in a single traversal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    /// Number of stored keys
    pub keys: usize,
    /// Number of nodes, the root included
    pub nodes: usize,
    /// Number of parent to child edges
    pub edges: usize,
    /// Length of the longest stored key
    pub depth: usize,
    /// Largest number of children below a single node
    pub fanout: usize,
}

impl Stats {
    fn new<S: Symbol>(trie: &Trie<S>) -> Self {
        let mut stats = Self::default();

        let mut stack: Vec<(&Node<S>, usize)> = vec![(&trie.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            stats.nodes += 1;
            if node.is_terminal() {
                stats.keys += 1;
                stats.depth = stats.depth.max(depth);
            }
            let children = node.children();
            stats.edges += children.len();
            stats.fanout = stats.fanout.max(children.len());
            stack.extend(children.map(|(_, child)| (child, depth + 1)));
        }

        stats
    }
}

impl<'a, S: Symbol> From<&'a Trie<S>> for Stats {
    fn from(trie: &'a Trie<S>) -> Self {
        Self::new(trie)
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "keys:   {}", self.keys)?;
        writeln!(f, "nodes:  {}", self.nodes)?;
        writeln!(f, "edges:  {}", self.edges)?;
        writeln!(f, "depth:  {}", self.depth)?;
        write!(f, "fanout: {}", self.fanout)
    }
}
