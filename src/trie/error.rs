use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("key of length {length} exceeds the maximum key length of {limit}")]
    KeyTooLong { limit: usize, length: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
