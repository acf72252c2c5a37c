//! Named dispatch tables of pure transitions.

use super::action::{action_type, Action};
use super::error::{SliceError, TransitionError};
use super::state::SliceState;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Type alias for a transition as stored in a slice's dispatch table.
///
/// The reducer receives the current state and the action and returns the
/// next state.
pub type CaseReducer<S> =
    Arc<dyn Fn(&Arc<S>, &Action) -> Result<Arc<S>, TransitionError> + Send + Sync>;

/// Wrap a typed transition as a [`CaseReducer`].
///
/// The transition receives the action's typed payload when it was created
/// as a `P`, and the JSON payload decoded into `P` otherwise. Use `()` for
/// transitions that take no payload.
///
/// # Example
///
/// ```rust
/// use slicekit::core::{case_reducer, Action, CaseReducer};
/// use std::sync::Arc;
///
/// let increment: CaseReducer<u32> = case_reducer(|count: &u32, by: u32| Ok(count + by));
/// let action = Action::new("count/increment", serde_json::json!(3));
/// let next = increment(&Arc::new(2), &action).unwrap();
/// assert_eq!(*next, 5);
/// ```
pub fn case_reducer<S, P, F>(transition: F) -> CaseReducer<S>
where
    S: SliceState,
    P: DeserializeOwned + Clone + 'static,
    F: Fn(&S, P) -> Result<S, TransitionError> + Send + Sync + 'static,
{
    Arc::new(move |state: &Arc<S>, action: &Action| -> Result<Arc<S>, TransitionError> {
        let payload = match action.typed_payload::<P>() {
            Some(payload) => payload.clone(),
            None => P::deserialize(action.payload())?,
        };
        transition(&**state, payload).map(Arc::new)
    })
}

/// A [`CaseReducer`] that always yields the captured value, ignoring both the
/// current state and the payload.
pub fn reset_to<S: SliceState>(initial_state: Arc<S>) -> CaseReducer<S> {
    Arc::new(move |_state: &Arc<S>, _action: &Action| Ok(Arc::clone(&initial_state)))
}

/// A named unit of state together with its transitions.
///
/// A slice holds no current state. It maps action types to transitions and
/// remembers the initial value it was created with; the caller (or a
/// [`Store`](super::Store)) owns the state being reduced.
#[derive(Clone)]
pub struct Slice<S: SliceState> {
    name: String,
    initial_state: Arc<S>,
    case_reducers: HashMap<String, CaseReducer<S>>,
}

impl<S: SliceState> Slice<S> {
    /// Create a slice with no transitions.
    pub fn new(name: impl Into<String>, initial_state: S) -> Self {
        Self {
            name: name.into(),
            initial_state: Arc::new(initial_state),
            case_reducers: HashMap::new(),
        }
    }

    /// Register a reducer under a full action type, replacing any reducer
    /// already registered for it.
    pub fn add_case(&mut self, action_type: impl Into<String>, reducer: CaseReducer<S>) {
        self.case_reducers.insert(action_type.into(), reducer);
    }

    /// Register one of this slice's own transitions under
    /// `"<name>/<transition>"`.
    pub fn add_transition(&mut self, transition: &str, reducer: CaseReducer<S>) {
        let action_type = self.action_type(transition);
        self.add_case(action_type, reducer);
    }

    /// Slice name (pure)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The initial state captured when the slice was created.
    ///
    /// Every call returns the same allocation.
    pub fn initial_state(&self) -> Arc<S> {
        Arc::clone(&self.initial_state)
    }

    /// Action type of one of this slice's transitions.
    pub fn action_type(&self, transition: &str) -> String {
        action_type(&self.name, transition)
    }

    /// Check whether the slice reacts to an action type (pure)
    pub fn handles(&self, action_type: &str) -> bool {
        self.case_reducers.contains_key(action_type)
    }

    /// All action types the slice reacts to, in no particular order.
    pub fn action_types(&self) -> impl Iterator<Item = &str> + '_ {
        self.case_reducers.keys().map(String::as_str)
    }

    /// Compute the next state for an action.
    ///
    /// Actions the slice does not handle return `state` itself. A payload the
    /// transition cannot read is reported as [`SliceError::MalformedPayload`].
    pub fn reduce(&self, state: &Arc<S>, action: &Action) -> Result<Arc<S>, SliceError> {
        let Some(reducer) = self.case_reducers.get(action.action_type()) else {
            trace!(
                slice = %self.name,
                action_type = %action.action_type(),
                "action not handled"
            );
            return Ok(Arc::clone(state));
        };

        debug!(slice = %self.name, action_type = %action.action_type(), "reducing action");
        reducer(state, action).map_err(|err| err.in_action(action.action_type()))
    }
}

impl<S: SliceState> fmt::Debug for Slice<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut action_types: Vec<&str> = self.action_types().collect();
        action_types.sort_unstable();
        f.debug_struct("Slice")
            .field("name", &self.name)
            .field("initial_state", &self.initial_state)
            .field("action_types", &action_types)
            .finish()
    }
}
