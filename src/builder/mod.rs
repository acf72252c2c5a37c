//! Options and construction for generated slices.
//!
//! Every generator takes a [`SliceOptions`] and returns a
//! [`GeneratedSlice`]: the reducer plus a struct of typed action creators.

pub mod error;
pub mod options;
pub mod slice;

pub use error::BuildError;
pub use options::SliceOptions;
pub use slice::{create_slice, GeneratedSlice};
