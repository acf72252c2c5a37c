//! Slicekit: reducer and action-creator generators.
//!
//! Three recurring shapes of client application state get their transitions
//! written once:
//!
//! - **Keyed collections** ([`map_slice`]): add, set, remove, reset, patch
//! - **Single values** ([`assign_slice`]): set, reset
//! - **Status records** ([`loading_slice`]): loading, success, error, reset
//!
//! Every transition is a pure function from the current state and an action
//! payload to a new state. Generators hold nothing but the initial state they
//! were given; the caller, or a [`Store`], owns the state being reduced.
//!
//! # Example
//!
//! ```rust
//! use slicekit::{loading_slice, LoadingState, SliceOptions};
//!
//! let (mut store, actions) = loading_slice(SliceOptions::new("fetch"))
//!     .unwrap()
//!     .into_store();
//!
//! store.dispatch(&actions.loading.with_message("fetching")).unwrap();
//! assert!(store.state().is_loading());
//!
//! store.dispatch(&actions.success.without_message()).unwrap();
//! assert_eq!(**store.state(), LoadingState::success(""));
//!
//! store.dispatch(&actions.reset.call()).unwrap();
//! assert!(store.state().is_idle());
//! ```

pub mod builder;
pub mod core;
pub mod slices;

// Re-export commonly used types
pub use crate::builder::{BuildError, GeneratedSlice, SliceOptions};
pub use crate::core::{Action, ActionCreator, Slice, SliceError, SliceState, Store, TransitionError};
pub use crate::slices::{
    assign_slice, loading_slice, map_slice, AssignActions, AssignSlice, EntityMap, LoadingActions,
    LoadingSlice, LoadingState, MapActions, MapSlice, PatchSet,
};
