use std::io::BufRead;

use tracing::{info, warn};
use tripod::{Error, Key, Symbol, Trie};
use unicode_segmentation::UnicodeSegmentation;

/// Outcome of filling a trie from an input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Loaded {
    pub added: usize,
    pub duplicates: usize,
    pub rejected: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Trie { line: usize, source: Error },
}

pub(super) fn split(line: &str, words: bool) -> Vec<&str> {
    if words {
        line.unicode_words().collect()
    } else if line.is_empty() {
        Vec::new()
    } else {
        vec![line]
    }
}

/// Inserts every key read from `reader`.
///
/// Over-length keys are skipped with a warning, unless `strict` is set.
pub fn load<S: Symbol>(
    trie: &mut Trie<S>,
    reader: impl BufRead,
    words: bool,
    strict: bool,
) -> Result<Loaded, LoadError>
where
    str: Key<S>,
{
    let mut loaded = Loaded::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        for key in split(&line, words) {
            match trie.insert(key) {
                Ok(true) => loaded.added += 1,
                Ok(false) => loaded.duplicates += 1,
                Err(source) if strict => {
                    return Err(LoadError::Trie {
                        line: index + 1,
                        source,
                    });
                }
                Err(err) => {
                    warn!(line = index + 1, "skipping key: {err}");
                    loaded.rejected += 1;
                }
            }
        }
    }
    info!(
        added = loaded.added,
        duplicates = loaded.duplicates,
        rejected = loaded.rejected,
        "loaded keys"
    );
    Ok(loaded)
}
