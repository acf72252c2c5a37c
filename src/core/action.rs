//! Actions and typed action creators.
//!
//! An action is the `{type, payload}` record that selects a transition. Its
//! payload travels as a JSON value so one action can be offered to any slice.
//! Actions from a typed creator also keep the payload as given; a transition
//! reads that copy when the types match and decodes the JSON otherwise.

use super::error::SliceError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Build the action type for a transition of a named slice.
///
/// ```rust
/// assert_eq!(slicekit::core::action_type("todos", "add"), "todos/add");
/// ```
pub fn action_type(slice: &str, transition: &str) -> String {
    format!("{slice}/{transition}")
}

/// Record dispatched to a slice.
///
/// Actions built by an [`ActionCreator`] also carry the typed payload they
/// were created from. Transitions expecting that exact type read it directly,
/// so values JSON cannot represent (`f64::NAN`, `#[serde(skip)]` fields)
/// reach them unchanged. The JSON payload is what gets serialized and what
/// every other reader decodes.
#[derive(Clone, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    action_type: String,
    #[serde(default)]
    payload: Value,
    #[serde(skip)]
    typed: Option<Arc<dyn Any + Send + Sync>>,
}

impl Action {
    /// Create an action with a payload.
    pub fn new(action_type: impl Into<String>, payload: Value) -> Self {
        Self {
            action_type: action_type.into(),
            payload,
            typed: None,
        }
    }

    /// Create an action without a payload.
    pub fn empty(action_type: impl Into<String>) -> Self {
        Self::new(action_type, Value::Null)
    }

    fn with_typed<P: Any + Send + Sync>(action_type: String, payload: Value, typed: P) -> Self {
        Self {
            action_type,
            payload,
            typed: Some(Arc::new(typed)),
        }
    }

    /// Namespaced transition identifier, `"<slice>/<transition>"` for
    /// actions built by a slice's creators.
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    /// Transition input as JSON; `null` for transitions that take none.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// The payload as originally typed, if the action came from an
    /// [`ActionCreator`] of payload type `P`.
    pub fn typed_payload<P: Any>(&self) -> Option<&P> {
        self.typed.as_deref().and_then(|typed| typed.downcast_ref::<P>())
    }
}

/// Two actions are equal when their types and JSON payloads are.
impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.action_type == other.action_type && self.payload == other.payload
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("type", &self.action_type)
            .field("payload", &self.payload)
            .field("typed", &self.typed.is_some())
            .finish()
    }
}

/// Typed factory for the actions of one transition.
///
/// The payload type `P` is fixed at construction. The action keeps a copy of
/// the typed payload next to its JSON form, so a transition of the same
/// payload type receives the value exactly as given. A JSON payload can
/// still fail to decode once the action is serialized, or when it is
/// offered to a transition expecting another type.
///
/// # Example
///
/// ```rust
/// use slicekit::core::ActionCreator;
///
/// let remove: ActionCreator<Vec<String>> = ActionCreator::new("todos/remove");
/// let action = remove.create(&vec!["1".to_string()]).unwrap();
///
/// assert_eq!(action.action_type(), "todos/remove");
/// assert!(remove.matches(&action));
/// assert_eq!(remove.to_string(), "todos/remove");
/// ```
pub struct ActionCreator<P> {
    action_type: String,
    _payload: PhantomData<fn(&P)>,
}

impl<P> ActionCreator<P> {
    /// Create a creator for the given action type.
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            _payload: PhantomData,
        }
    }

    /// The action type every action from this creator carries.
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    /// Check whether an action was produced for this creator's transition.
    pub fn matches(&self, action: &Action) -> bool {
        action.action_type == self.action_type
    }
}

impl<P> ActionCreator<P>
where
    P: Serialize + Clone + Send + Sync + 'static,
{
    /// Build an action carrying `payload`.
    pub fn create(&self, payload: &P) -> Result<Action, SliceError> {
        let json = serde_json::to_value(payload).map_err(|source| SliceError::PayloadEncoding {
            action_type: self.action_type.clone(),
            source,
        })?;
        Ok(Action::with_typed(self.action_type.clone(), json, payload.clone()))
    }
}

impl ActionCreator<()> {
    /// Build the payload-less action.
    pub fn call(&self) -> Action {
        Action::empty(self.action_type.clone())
    }
}

impl ActionCreator<Option<String>> {
    /// Build an action carrying a message.
    pub fn with_message(&self, message: impl Into<String>) -> Action {
        let message = message.into();
        Action::with_typed(
            self.action_type.clone(),
            Value::String(message.clone()),
            Some(message),
        )
    }

    /// Build an action without a message.
    pub fn without_message(&self) -> Action {
        Action::empty(self.action_type.clone())
    }
}

impl<P> Clone for ActionCreator<P> {
    fn clone(&self) -> Self {
        Self::new(self.action_type.clone())
    }
}

impl<P> fmt::Debug for ActionCreator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCreator")
            .field("action_type", &self.action_type)
            .finish()
    }
}

impl<P> fmt::Display for ActionCreator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.action_type)
    }
}
