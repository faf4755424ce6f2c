//! View Snapshots - Loading/Data/Error Triples
//!
//! Every view model reaches the UI as a `Snapshot`: optional data,
//! a loading flag, and an optional error. Snapshots compose with
//! [`Snapshot::join`], which merges dependency states the way the
//! tabs expect: loading while any dependency loads, and the first
//! error in argument order wins. Views check `loading` before
//! `error`, so an error only shows once every dependency settles.

use std::sync::Arc;

/// Shared error value.
///
/// `anyhow::Error` isn't `Clone`; wrapping in `Arc` lets one failure
/// fan out to every snapshot composed from it.
pub type StateError = Arc<anyhow::Error>;

/// Async state of one view model.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    /// The composed view, present once every dependency resolved.
    pub data: Option<T>,
    /// Whether any dependency is still in flight.
    pub loading: bool,
    /// First dependency failure, in composition order.
    pub error: Option<StateError>,
}

impl<T> Snapshot<T> {
    /// A snapshot still waiting on its dependency.
    pub const fn loading() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    /// A resolved snapshot.
    pub const fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            loading: false,
            error: None,
        }
    }

    /// A failed snapshot.
    pub const fn failed(error: StateError) -> Self {
        Self {
            data: None,
            loading: false,
            error: Some(error),
        }
    }

    /// Build a snapshot from an async task's poll state, where `None`
    /// means the task hasn't produced a value yet.
    pub fn from_poll(poll: &Option<Result<T, StateError>>) -> Self
    where
        T: Clone,
    {
        match poll {
            None => Self::loading(),
            Some(Ok(data)) => Self::ready(data.clone()),
            Some(Err(error)) => Self::failed(Arc::clone(error)),
        }
    }

    /// Merge two dependency snapshots into one.
    ///
    /// Loading is the OR of both sides. On error, `self`'s error wins
    /// over `other`'s, so callers order arguments by display priority
    /// (contract before indexer). `combine` runs only when both sides
    /// resolved cleanly.
    pub fn join<U, V>(self, other: Snapshot<U>, combine: impl FnOnce(T, U) -> V) -> Snapshot<V> {
        let loading = self.loading || other.loading;
        let error = self.error.or(other.error);

        let data = match (&error, self.data, other.data) {
            (None, Some(left), Some(right)) => Some(combine(left, right)),
            _ => None,
        };

        Snapshot {
            data,
            loading,
            error,
        }
    }

    /// Render the error chain for display, outermost context first.
    pub fn error_text(&self) -> Option<String> {
        self.error.as_ref().map(|error| format!("{error:#}"))
    }
}
