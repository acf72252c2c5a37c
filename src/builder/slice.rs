//! Turn options plus a transition set into a slice.

use crate::builder::error::BuildError;
use crate::builder::options::SliceOptions;
use crate::core::{Action, CaseReducer, Slice, SliceError, SliceState, Store};
use std::sync::Arc;
use tracing::debug;

/// Build a slice from options and the generator's own transitions.
///
/// `transitions` receives the captured initial state so a `reset` transition
/// can hand back that exact allocation. Extra reducers are registered first;
/// an own transition with the same action type replaces them.
///
/// # Example
///
/// ```rust
/// use slicekit::builder::{create_slice, SliceOptions};
/// use slicekit::core::{case_reducer, reset_to, Action};
/// use std::sync::Arc;
///
/// let slice = create_slice(SliceOptions::new("count").initial_state(1_u32), |initial| {
///     vec![
///         ("double", case_reducer(|n: &u32, (): ()| Ok(n * 2))),
///         ("reset", reset_to(initial)),
///     ]
/// })
/// .unwrap();
///
/// let next = slice.reduce(&Arc::new(4), &Action::empty("count/double")).unwrap();
/// assert_eq!(*next, 8);
/// ```
pub fn create_slice<S, F>(options: SliceOptions<S>, transitions: F) -> Result<Slice<S>, BuildError>
where
    S: SliceState,
    F: FnOnce(Arc<S>) -> Vec<(&'static str, CaseReducer<S>)>,
{
    let name = options.validated_name()?.to_string();
    let SliceOptions {
        initial_state,
        extra_reducers,
        ..
    } = options;
    let initial_state = initial_state.ok_or_else(|| BuildError::MissingInitialState(name.clone()))?;

    let mut slice = Slice::new(name, initial_state);
    let extra_count = extra_reducers.len();
    for (action_type, reducer) in extra_reducers {
        slice.add_case(action_type, reducer);
    }
    for (transition, reducer) in transitions(slice.initial_state()) {
        slice.add_transition(transition, reducer);
    }

    debug!(
        slice = %slice.name(),
        extra_reducers = extra_count,
        action_types = slice.action_types().count(),
        "created slice"
    );
    Ok(slice)
}

/// A generated slice: the reducer together with its typed action creators.
#[derive(Clone, Debug)]
pub struct GeneratedSlice<S: SliceState, A> {
    slice: Slice<S>,
    actions: A,
}

impl<S: SliceState, A> GeneratedSlice<S, A> {
    pub(crate) fn new(slice: Slice<S>, actions: A) -> Self {
        Self { slice, actions }
    }

    /// The reducer.
    pub fn slice(&self) -> &Slice<S> {
        &self.slice
    }

    /// The action creators, one per transition.
    pub fn actions(&self) -> &A {
        &self.actions
    }

    /// Slice name, the prefix of every action type.
    pub fn name(&self) -> &str {
        self.slice.name()
    }

    /// The initial state captured at creation; `reset` returns this `Arc`.
    pub fn initial_state(&self) -> Arc<S> {
        self.slice.initial_state()
    }

    /// Compute the next state for an action. See [`Slice::reduce`].
    pub fn reduce(&self, state: &Arc<S>, action: &Action) -> Result<Arc<S>, SliceError> {
        self.slice.reduce(state, action)
    }

    /// Split into the reducer and the action creators.
    pub fn into_parts(self) -> (Slice<S>, A) {
        (self.slice, self.actions)
    }

    /// Wrap the reducer in a store, keeping the action creators.
    pub fn into_store(self) -> (Store<S>, A) {
        (Store::new(self.slice), self.actions)
    }
}
