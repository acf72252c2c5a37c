//! Loading/success/error status record.

use crate::builder::{create_slice, BuildError, GeneratedSlice, SliceOptions};
use crate::core::{case_reducer, reset_to, ActionCreator};
use serde::{Deserialize, Serialize};

/// Status of an asynchronous operation tracked in application state.
///
/// The record does not enforce that `loading` and `success` are exclusive;
/// each transition simply writes a complete record.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct LoadingState {
    pub error: String,
    pub message: String,
    pub loading: bool,
    pub success: bool,
}

impl LoadingState {
    /// Record for an operation in flight.
    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            loading: true,
            ..Self::default()
        }
    }

    /// Record for a completed operation.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
            ..Self::default()
        }
    }

    /// Record for a failed operation.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            ..Self::default()
        }
    }

    /// Nothing started, nothing recorded.
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// An error message was recorded.
    pub fn is_error(&self) -> bool {
        !self.error.is_empty()
    }
}

/// Action creators of a status-record slice.
///
/// Every payload is an optional message; a missing or empty message is
/// recorded as the empty string.
#[derive(Clone, Debug)]
pub struct LoadingActions {
    pub loading: ActionCreator<Option<String>>,
    pub success: ActionCreator<Option<String>>,
    pub error: ActionCreator<Option<String>>,
    pub reset: ActionCreator<()>,
}

pub type LoadingSlice = GeneratedSlice<LoadingState, LoadingActions>;

/// Generate a status-record slice.
///
/// The initial state defaults to [`LoadingState::default`]. None of the
/// transitions read the previous record.
///
/// # Example
///
/// ```rust
/// use slicekit::{loading_slice, LoadingState, SliceOptions};
/// use std::sync::Arc;
///
/// let status = loading_slice(SliceOptions::new("loading")).unwrap();
/// let state = Arc::new(LoadingState::loading(""));
///
/// let next = status
///     .reduce(&state, &status.actions().error.with_message("some error"))
///     .unwrap();
///
/// assert_eq!(*next, LoadingState::failed("some error"));
/// ```
pub fn loading_slice(options: SliceOptions<LoadingState>) -> Result<LoadingSlice, BuildError> {
    let slice = create_slice(options.or_initial_state_with(LoadingState::default), |initial| {
        vec![
            (
                "loading",
                case_reducer(|_: &LoadingState, message: Option<String>| {
                    Ok(LoadingState::loading(message.unwrap_or_default()))
                }),
            ),
            (
                "success",
                case_reducer(|_: &LoadingState, message: Option<String>| {
                    Ok(LoadingState::success(message.unwrap_or_default()))
                }),
            ),
            (
                "error",
                case_reducer(|_: &LoadingState, message: Option<String>| {
                    Ok(LoadingState::failed(message.unwrap_or_default()))
                }),
            ),
            ("reset", reset_to(initial)),
        ]
    })?;

    let actions = LoadingActions {
        loading: ActionCreator::new(slice.action_type("loading")),
        success: ActionCreator::new(slice.action_type("success")),
        error: ActionCreator::new(slice.action_type("error")),
        reset: ActionCreator::new(slice.action_type("reset")),
    };
    Ok(GeneratedSlice::new(slice, actions))
}
