use super::{Key, Symbol};
use std::borrow::Cow;

impl<S: Symbol> Key<S> for [S] {
    fn symbols(&self) -> Cow<'_, [S]> {
        Cow::Borrowed(self)
    }
}

impl<S: Symbol> Key<S> for Vec<S> {
    fn symbols(&self) -> Cow<'_, [S]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<S: Symbol, const N: usize> Key<S> for [S; N] {
    fn symbols(&self) -> Cow<'_, [S]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl Key<u8> for str {
    fn symbols(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Key<u8> for String {
    fn symbols(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Key<char> for str {
    fn symbols(&self) -> Cow<'_, [char]> {
        Cow::Owned(self.chars().collect())
    }
}

impl Key<char> for String {
    fn symbols(&self) -> Cow<'_, [char]> {
        Key::<char>::symbols(self.as_str())
    }
}

impl<S: Symbol, K: Key<S> + ?Sized> Key<S> for &K {
    fn symbols(&self) -> Cow<'_, [S]> {
        (**self).symbols()
    }
}
