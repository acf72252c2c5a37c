//! Dispatch errors.

use thiserror::Error;

/// Errors that can occur while creating or reducing actions.
///
/// Transitions do not validate their payloads. The failures are payloads
/// whose JSON shape does not match what the transition reads, and patches
/// that would have to drop data the entity's JSON form cannot carry.
#[derive(Debug, Error)]
pub enum SliceError {
    /// The payload could not be decoded into the type the transition expects.
    #[error("malformed payload for action '{action_type}': {source}")]
    MalformedPayload {
        action_type: String,
        #[source]
        source: serde_json::Error,
    },

    /// The entity does not survive a JSON round trip, so a field-level merge
    /// would lose the fields the update leaves alone.
    #[error("entity '{key}' cannot be patched by action '{action_type}': it does not survive a JSON round trip")]
    LossyEntity { action_type: String, key: String },

    /// The action creator could not encode its payload.
    #[error("payload for action '{action_type}' could not be encoded: {source}")]
    PayloadEncoding {
        action_type: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SliceError {
    /// The action type the failure belongs to.
    pub fn action_type(&self) -> &str {
        match self {
            Self::MalformedPayload { action_type, .. } => action_type,
            Self::LossyEntity { action_type, .. } => action_type,
            Self::PayloadEncoding { action_type, .. } => action_type,
        }
    }
}

/// Failure of a single transition, before it is tied to an action type.
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error("entity '{0}' does not survive a JSON round trip")]
    LossyEntity(String),
}

impl TransitionError {
    pub(crate) fn in_action(self, action_type: &str) -> SliceError {
        let action_type = action_type.to_string();
        match self {
            Self::Decode(source) => SliceError::MalformedPayload {
                action_type,
                source,
            },
            Self::LossyEntity(key) => SliceError::LossyEntity { action_type, key },
        }
    }
}
