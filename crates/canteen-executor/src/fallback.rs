//! Two-stage loading: a default value that a fetch may replace.

use std::fmt::Display;

/// Where the current value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    /// The default supplied at construction.
    #[default]
    Default,
    /// A fetched value that passed the acceptance check.
    Fetched,
}

/// Result of offering a fetched value to a [`Fallback`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Overlay {
    /// The fetched value replaced the current one.
    Applied,
    /// The fetch succeeded but the value was not accepted (e.g. empty).
    Rejected,
    /// The fetch failed; the current value is kept.
    Failed(String),
}

impl Overlay {
    /// Whether the value was replaced.
    pub fn is_applied(&self) -> bool {
        matches!(self, Overlay::Applied)
    }
}

/// A value that always has something to show.
///
/// Stage one is the default handed to [`Fallback::new`]. Stage two is any
/// number of [`Fallback::overlay`] calls; a failed or rejected fetch never
/// disturbs what is already there.
#[derive(Debug, Clone)]
pub struct Fallback<T> {
    value: T,
    origin: Origin,
}

impl<T> Fallback<T> {
    /// Start from a default value.
    pub fn new(default: T) -> Self {
        Self {
            value: default,
            origin: Origin::Default,
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Where the current value came from.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Consume and return the current value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Replace the value with `fetched` if it is `Ok` and `accept` agrees.
    pub fn overlay<E: Display>(
        &mut self,
        fetched: Result<T, E>,
        accept: impl FnOnce(&T) -> bool,
    ) -> Overlay {
        self.overlay_with(fetched, accept, |slot, value| *slot = value)
    }

    /// Like [`Fallback::overlay`], but merges a partial value into the
    /// current one with `merge`.
    pub fn overlay_with<U, E: Display>(
        &mut self,
        fetched: Result<U, E>,
        accept: impl FnOnce(&U) -> bool,
        merge: impl FnOnce(&mut T, U),
    ) -> Overlay {
        match fetched {
            Ok(value) if accept(&value) => {
                merge(&mut self.value, value);
                self.origin = Origin::Fetched;
                Overlay::Applied
            }
            Ok(_) => {
                tracing::debug!("Fetched value rejected, keeping current data");
                Overlay::Rejected
            }
            Err(e) => {
                tracing::warn!(error = %e, "Fetch failed, keeping current data");
                Overlay::Failed(e.to_string())
            }
        }
    }
}

impl<T: Default> Default for Fallback<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
