//! Outcome of a single list query.

use crate::aws::FetchError;

/// Records returned by one fetch, or the error that was swallowed in their place.
///
/// A failed fetch reads as an empty list through [`Fetched::items`], so the
/// report looks the same as for a VPC that really has no children. The error
/// is kept so callers and tests can tell the two apart.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// The query succeeded; the list may still be empty.
    Complete(Vec<T>),
    /// The query failed and was replaced with an empty list.
    Defaulted(FetchError),
}

impl<T> Fetched<T> {
    /// Records in provider order. Empty when defaulted.
    pub fn items(&self) -> &[T] {
        match self {
            Fetched::Complete(items) => items,
            Fetched::Defaulted(_) => &[],
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Fetched::Defaulted(_))
    }

    /// The swallowed error, if any.
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Fetched::Complete(_) => None,
            Fetched::Defaulted(e) => Some(e),
        }
    }

    /// Consume into the records, dropping any error.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Fetched::Complete(items) => items,
            Fetched::Defaulted(_) => Vec::new(),
        }
    }
}

impl<T> Default for Fetched<T> {
    fn default() -> Self {
        Fetched::Complete(Vec::new())
    }
}
