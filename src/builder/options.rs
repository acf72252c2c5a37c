//! Options accepted by every slice generator.

use crate::builder::error::BuildError;
use crate::core::{case_reducer, CaseReducer, SliceState, TransitionError};
use serde::de::DeserializeOwned;

/// Options for generating a slice with a fluent API.
///
/// `extra_reducers` are forwarded verbatim into the generated slice; the
/// generators never inspect them.
pub struct SliceOptions<S: SliceState> {
    pub(crate) name: String,
    pub(crate) initial_state: Option<S>,
    pub(crate) extra_reducers: Vec<(String, CaseReducer<S>)>,
}

impl<S: SliceState> SliceOptions<S> {
    /// Create options for a slice called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_state: None,
            extra_reducers: Vec::new(),
        }
    }

    /// Set the initial state (required for single-value slices).
    pub fn initial_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// React to an action type owned by another slice.
    pub fn extra_reducer(mut self, action_type: impl Into<String>, reducer: CaseReducer<S>) -> Self {
        self.extra_reducers.push((action_type.into(), reducer));
        self
    }

    /// React to an action type owned by another slice using a typed closure.
    pub fn extra_case<P, F>(self, action_type: impl Into<String>, transition: F) -> Self
    where
        P: DeserializeOwned + Clone + 'static,
        F: Fn(&S, P) -> Result<S, TransitionError> + Send + Sync + 'static,
    {
        self.extra_reducer(action_type, case_reducer(transition))
    }

    /// Slice name as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn or_initial_state_with<F>(mut self, default: F) -> Self
    where
        F: FnOnce() -> S,
    {
        if self.initial_state.is_none() {
            self.initial_state = Some(default());
        }
        self
    }

    pub(crate) fn validated_name(&self) -> Result<&str, BuildError> {
        if self.name.trim().is_empty() {
            return Err(BuildError::MissingName);
        }
        Ok(&self.name)
    }
}
