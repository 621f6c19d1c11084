//! An in-memory trie storing keys of bytes or characters, searchable by prefix.

mod trie;

pub use trie::{ByteTrie, CharTrie, Error, Key, Result, Stats, Symbol, Trie};
