//! The three slice generators.
//!
//! Each generator is a leaf: it depends only on the slice-construction
//! machinery, never on another generator.

mod assign;
mod loading;
mod map;

pub use assign::{assign_slice, AssignActions, AssignSlice};
pub use loading::{loading_slice, LoadingActions, LoadingSlice, LoadingState};
pub use map::{map_slice, EntityMap, MapActions, MapSlice, PatchSet};
