//! Build errors for slice generators.

use thiserror::Error;

/// Errors that can occur when generating a slice from its options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Slice name not specified. Pass a non-empty name to SliceOptions::new(name)")]
    MissingName,

    #[error("Initial state not specified for slice '{0}'. Call .initial_state(state) before generating")]
    MissingInitialState(String),
}
