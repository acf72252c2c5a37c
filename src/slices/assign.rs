//! Single assignable value.

use crate::builder::{create_slice, BuildError, GeneratedSlice, SliceOptions};
use crate::core::{case_reducer, reset_to, ActionCreator, SliceState};

/// Action creators of a single-value slice.
#[derive(Clone, Debug)]
pub struct AssignActions<V> {
    pub set: ActionCreator<V>,
    pub reset: ActionCreator<()>,
}

pub type AssignSlice<V> = GeneratedSlice<V, AssignActions<V>>;

/// Generate a single-value slice.
///
/// Unlike the other generators there is no default: the options must carry
/// an initial state, otherwise [`BuildError::MissingInitialState`].
///
/// # Example
///
/// ```rust
/// use slicekit::{assign_slice, SliceOptions};
/// use std::sync::Arc;
///
/// let page = assign_slice(SliceOptions::new("page").initial_state(5_u32)).unwrap();
///
/// let next = page.reduce(&Arc::new(0), &page.actions().reset.call()).unwrap();
/// assert_eq!(*next, 5);
/// ```
pub fn assign_slice<V: SliceState>(options: SliceOptions<V>) -> Result<AssignSlice<V>, BuildError> {
    let slice = create_slice(options, |initial| {
        vec![
            ("set", case_reducer(|_: &V, payload: V| Ok(payload))),
            ("reset", reset_to(initial)),
        ]
    })?;

    let actions = AssignActions {
        set: ActionCreator::new(slice.action_type("set")),
        reset: ActionCreator::new(slice.action_type("reset")),
    };
    Ok(GeneratedSlice::new(slice, actions))
}
