use super::{Node, Symbol};
use std::collections::hash_map;

/// The outgoing edges of a node, in no particular order.
#[derive(Debug, Clone)]
pub(crate) struct Children<'a, S: Symbol> {
    edges: hash_map::Iter<'a, S, Node<S>>,
}

impl<'a, S: Symbol> Children<'a, S> {
    pub fn new(node: &'a Node<S>) -> Self {
        Self {
            edges: node.children.iter(),
        }
    }
}

impl<'a, S: Symbol> Iterator for Children<'a, S> {
    type Item = (S, &'a Node<S>);

    fn next(&mut self) -> Option<Self::Item> {
        self.edges.next().map(|(&symbol, child)| (symbol, child))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl<'a, S: Symbol> ExactSizeIterator for Children<'a, S> {}
