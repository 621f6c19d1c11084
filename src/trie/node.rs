use super::{Error, Key, Node, Result, Symbol, Trie, iter::Children};
use smallvec::SmallVec;
use std::any::type_name;
use tracing::{debug, trace};

/// Path buffer reused across the whole of a prefix traversal.
type Scratch<S> = SmallVec<[S; 32]>;

impl<S: Symbol> Default for Node<S> {
    fn default() -> Self {
        Node {
            terminal: false,
            children: Default::default(),
        }
    }
}

impl<S: Symbol> core::fmt::Debug for Node<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(type_name::<Node<S>>())
            .field("terminal", &self.terminal)
            .field("children", &self.children.keys())
            .finish()
    }
}

impl<S: Symbol> core::fmt::Debug for Trie<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(type_name::<Trie<S>>())
            .field("max_key_length", &self.max_key_length)
            .field("len", &self.len)
            .finish()
    }
}

// Drained through an explicit stack, keeping drop depth independent of key length.
impl<S: Symbol> Drop for Node<S> {
    fn drop(&mut self) {
        let mut stack: Vec<Node<S>> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl<S: Symbol> Node<S> {
    /// Whether an inserted key ends exactly at this node.
    pub(crate) fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub(crate) fn children(&self) -> Children<'_, S> {
        Children::new(self)
    }

    fn walk(&self, path: &[S]) -> Option<&Node<S>> {
        path.iter()
            .try_fold(self, |node, symbol| node.children.get(symbol))
    }

    /// Depth first search below `self`, pushing `prefix + path` for every terminal node reached.
    ///
    /// `buffer` holds the path from `self` to the node on top of `stack`,
    /// so it is always one symbol shorter than `stack`.
    fn collect_into(&self, prefix: &[S], buffer: &mut Scratch<S>, entries: &mut Vec<Vec<S>>) {
        let emit = |buffer: &Scratch<S>, entries: &mut Vec<Vec<S>>| {
            let mut key = Vec::with_capacity(prefix.len() + buffer.len());
            key.extend_from_slice(prefix);
            key.extend_from_slice(buffer);
            entries.push(key);
        };

        if self.terminal {
            emit(buffer, entries);
        }
        let mut stack = vec![self.children()];
        while let Some(children) = stack.last_mut() {
            match children.next() {
                Some((symbol, child)) => {
                    buffer.push(symbol);
                    if child.terminal {
                        emit(buffer, entries);
                    }
                    stack.push(child.children());
                }
                None => {
                    stack.pop();
                    buffer.pop();
                }
            }
        }
    }
}

impl<S: Symbol> Trie<S> {
    pub fn new(max_key_length: usize) -> Self {
        Trie {
            root: Node::default(),
            max_key_length,
            len: 0,
        }
    }

    pub fn max_key_length(&self) -> usize {
        self.max_key_length
    }

    /// Returns the number of keys stored in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `key` to the trie, returning whether it was not already present.
    ///
    /// The empty key is never stored: inserting it returns `Ok(false)` and leaves the trie untouched.
    /// A key longer than [`Trie::max_key_length`] is rejected before any node is created.
    pub fn insert<K: Key<S> + ?Sized>(&mut self, key: &K) -> Result<bool> {
        let key = key.symbols();
        if key.len() > self.max_key_length {
            debug!(
                length = key.len(),
                limit = self.max_key_length,
                "rejected key exceeding the maximum length"
            );
            return Err(Error::KeyTooLong {
                limit: self.max_key_length,
                length: key.len(),
            });
        }
        if key.is_empty() {
            return Ok(false);
        }

        let node = key.iter().fold(&mut self.root, |node, &symbol| {
            node.children.entry(symbol).or_default()
        });
        let added = !std::mem::replace(&mut node.terminal, true);
        if added {
            self.len += 1;
            trace!(key = ?key, "added key");
        }
        Ok(added)
    }

    /// Checks whether `key` was previously inserted.
    ///
    /// A key which is only the prefix of stored keys does not exist.
    pub fn exists<K: Key<S> + ?Sized>(&self, key: &K) -> bool {
        let key = key.symbols();
        if key.len() > self.max_key_length {
            // Could never have been inserted.
            return false;
        }
        self.subtrie(&key).is_some_and(Node::is_terminal)
    }

    /// The node reached by following `key` from the root.
    pub(crate) fn subtrie(&self, key: &[S]) -> Option<&Node<S>> {
        self.root.walk(key)
    }

    /// Returns every stored key starting with `prefix`, including `prefix` itself if it is stored.
    ///
    /// The order of the returned keys is unspecified.
    /// A missing or over-length prefix yields no keys rather than an error.
    pub fn collect_with_prefix<K: Key<S> + ?Sized>(&self, prefix: &K) -> Vec<Vec<S>> {
        let prefix = prefix.symbols();
        if prefix.len() > self.max_key_length {
            return Vec::new();
        }
        let Some(subtrie) = self.subtrie(&prefix) else {
            return Vec::new();
        };

        let mut entries = Vec::new();
        let mut buffer = Scratch::new();
        subtrie.collect_into(&prefix, &mut buffer, &mut entries);
        trace!(prefix = ?prefix, found = entries.len(), "collected keys");
        entries
    }

    /// Returns every stored key, in no particular order.
    pub fn keys(&self) -> Vec<Vec<S>> {
        self.collect_with_prefix::<[S]>(&[])
    }
}
