use thiserror::Error;

/// A mapping function failed for one element.
///
/// Carries the index of the offending element and the function's own error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("mapping failed at index {index}")]
pub struct MappingFailure<E> {
    /// Index of the element whose mapping failed.
    pub index: usize,

    /// The error returned by the mapping function.
    #[source]
    pub source: E,
}

impl<E> MappingFailure<E> {
    /// Consumes the failure and returns the underlying error.
    pub fn into_source(self) -> E {
        self.source
    }
}

/// Errors that can occur during a [`map`](crate::map) run.
#[derive(Debug, Error)]
pub enum Error<E> {
    #[error(transparent)]
    Mapping(#[from] MappingFailure<E>),

    #[error("aborted by observer after index {index}")]
    Aborted { index: usize },

    #[error("input length {len} exceeds limit {max}")]
    TooLong { len: usize, max: usize },
}

impl<E> Error<E> {
    /// Returns the index of the element that ended the run, if any.
    ///
    /// [`Error::TooLong`] is raised before any element is mapped and has no index.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Mapping(failure) => Some(failure.index),
            Self::Aborted { index } => Some(*index),
            Self::TooLong { .. } => None,
        }
    }
}
