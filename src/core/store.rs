//! Dispatchable container that owns one slice's current state.

use super::action::Action;
use super::error::SliceError;
use super::slice::Slice;
use super::state::SliceState;
use std::sync::Arc;
use tracing::warn;

/// Owns the current state of a slice and applies dispatched actions to it.
pub struct Store<S: SliceState> {
    slice: Slice<S>,
    current: Arc<S>,
}

impl<S: SliceState> Store<S> {
    /// Create a store starting from the slice's initial state
    pub fn new(slice: Slice<S>) -> Self {
        let current = slice.initial_state();
        Self { slice, current }
    }

    /// Create a store starting from an arbitrary state.
    pub fn with_state(slice: Slice<S>, state: S) -> Self {
        Self {
            slice,
            current: Arc::new(state),
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &Arc<S> {
        &self.current
    }

    /// Get the slice driving this store (pure)
    pub fn slice(&self) -> &Slice<S> {
        &self.slice
    }

    /// Apply one action.
    ///
    /// On failure the store keeps its previous state.
    pub fn dispatch(&mut self, action: &Action) -> Result<&Arc<S>, SliceError> {
        match self.slice.reduce(&self.current, action) {
            Ok(next) => {
                self.current = next;
                Ok(&self.current)
            }
            Err(err) => {
                warn!(slice = %self.slice.name(), error = %err, "dispatch failed");
                Err(err)
            }
        }
    }

    /// Apply actions in order, stopping at the first failure.
    pub fn dispatch_all<'a, I>(&mut self, actions: I) -> Result<&Arc<S>, SliceError>
    where
        I: IntoIterator<Item = &'a Action>,
    {
        for action in actions {
            self.dispatch(action)?;
        }
        Ok(&self.current)
    }

    /// Return to the slice's initial state without dispatching.
    pub fn reset_to_initial(&mut self) {
        self.current = self.slice.initial_state();
    }

    /// Consume the store, yielding its current state.
    pub fn into_state(self) -> Arc<S> {
        self.current
    }
}
