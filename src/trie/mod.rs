mod error;
mod iter;
mod keys;
mod node;
mod stats;

pub use error::{Error, Result};
pub use stats::Stats;

use std::{collections::HashMap, fmt::Debug, hash::Hash};

/// A single edge label of the trie.
pub trait Symbol: Copy + Eq + Hash + Debug {}

impl Symbol for u8 {}
impl Symbol for char {}

/// Anything that can be viewed as a sequence of symbols.
///
/// The length of a key is the length of its symbol sequence, so a `str` is
/// measured in bytes by a [`ByteTrie`] and in code points by a [`CharTrie`].
pub trait Key<S: Symbol> {
    fn symbols(&self) -> std::borrow::Cow<'_, [S]>;
}

pub struct Node<S: Symbol> {
    terminal: bool,
    children: HashMap<S, Node<S>>,
}

/// A set of keys which can be searched by prefix.
///
/// Every key accepted by [`Trie::insert`] is at most `max_key_length` symbols long.
pub struct Trie<S: Symbol> {
    root: Node<S>,
    max_key_length: usize,
    len: usize,
}

pub type ByteTrie = Trie<u8>;
pub type CharTrie = Trie<char>;
