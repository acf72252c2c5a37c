//! Slice construction: the machinery every generator builds on.
//!
//! This module contains the pure core shared by all generators:
//! - Actions and typed action creators
//! - Slices: named dispatch tables of transitions
//! - The store, a dispatchable container for one slice
//!
//! Transitions never mutate the state they are given. They borrow it and
//! return a new value, so the borrow checker enforces what a JavaScript
//! state container would check with frozen objects.

mod action;
mod error;
mod slice;
mod state;
mod store;

pub use action::{action_type, Action, ActionCreator};
pub use error::{SliceError, TransitionError};
pub use slice::{case_reducer, reset_to, CaseReducer, Slice};
pub use state::SliceState;
pub use store::Store;
