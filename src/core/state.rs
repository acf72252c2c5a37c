//! The bound every slice state satisfies.
//!
//! Slice states are plain values. Transitions never mutate them in place;
//! they read a borrowed state and return a new one.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait for values that can live in a slice.
///
/// # Required Traits
///
/// - `Clone`: transitions copy the current state before changing it
/// - `PartialEq`: states must be comparable in tests and by callers
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `DeserializeOwned`: payloads travel as JSON values and
///   partial updates are merged at the JSON level
///
/// # JSON Round Trip
///
/// A state should decode back to itself from its JSON form. Actions from a
/// typed creator hand the payload over unchanged, but payloads built from raw
/// JSON and the map slice's `patch` go through `serde_json`. Values JSON
/// cannot hold (`#[serde(skip)]` fields, non-finite floats) are lost on that
/// path; `patch` refuses such entities with `SliceError::LossyEntity`.
///
/// The trait is implemented for every type meeting these bounds, so callers
/// never implement it by hand.
///
/// # Example
///
/// ```rust
/// use slicekit::core::SliceState;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Todo {
///     title: String,
///     done: bool,
/// }
///
/// fn assert_slice_state<S: SliceState>() {}
/// assert_slice_state::<Todo>();
/// assert_slice_state::<u32>();
/// ```
pub trait SliceState:
    Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> SliceState for T where
    T: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}
