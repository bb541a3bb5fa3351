use thiserror::Error;

/// Errors raised by cursor operations on a
/// [`CircularList`](crate::CircularList).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation needs at least one element, but the list is empty.
    #[error("the list is empty, there is no element to point at")]
    EmptyCollection,
}

pub type Result<T> = std::result::Result<T, Error>;
