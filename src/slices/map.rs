//! Keyed collection of entities.

use crate::builder::{create_slice, BuildError, GeneratedSlice, SliceOptions};
use crate::core::{case_reducer, reset_to, ActionCreator, SliceState, TransitionError};
use serde_json::Value;
use std::collections::HashMap;

/// State of a keyed collection: entities of one type addressed by string key.
pub type EntityMap<V> = HashMap<String, V>;

/// Partial updates keyed by entity key. Each update is a JSON object whose
/// fields overwrite the entity's fields of the same name.
pub type PatchSet = HashMap<String, Value>;

/// Action creators of a keyed-collection slice.
#[derive(Clone, Debug)]
pub struct MapActions<V> {
    /// Write every entry of the payload, keeping other entries
    pub add: ActionCreator<EntityMap<V>>,
    /// Replace the whole collection with the payload
    pub set: ActionCreator<EntityMap<V>>,
    /// Delete the listed keys
    pub remove: ActionCreator<Vec<String>>,
    /// Return to the initial collection
    pub reset: ActionCreator<()>,
    /// Shallow-merge fields into existing entities
    pub patch: ActionCreator<PatchSet>,
}

pub type MapSlice<V> = GeneratedSlice<EntityMap<V>, MapActions<V>>;

/// Generate a keyed-collection slice.
///
/// The initial state defaults to an empty collection.
///
/// # Example
///
/// ```rust
/// use slicekit::{map_slice, EntityMap, SliceOptions};
/// use std::sync::Arc;
///
/// let todos = map_slice::<String>(SliceOptions::new("test")).unwrap();
/// let state = Arc::new(EntityMap::from([("3".to_string(), "three".to_string())]));
///
/// let payload = EntityMap::from([
///     ("1".to_string(), "one".to_string()),
///     ("2".to_string(), "two".to_string()),
/// ]);
/// let next = todos
///     .reduce(&state, &todos.actions().add.create(&payload).unwrap())
///     .unwrap();
///
/// assert_eq!(next.len(), 3);
/// assert_eq!(next["3"], "three");
/// ```
pub fn map_slice<V: SliceState>(
    options: SliceOptions<EntityMap<V>>,
) -> Result<MapSlice<V>, BuildError> {
    let slice = create_slice(options.or_initial_state_with(EntityMap::new), |initial| {
        vec![
            ("add", case_reducer(add::<V>)),
            ("set", case_reducer(set::<V>)),
            ("remove", case_reducer(remove::<V>)),
            ("reset", reset_to(initial)),
            ("patch", case_reducer(patch::<V>)),
        ]
    })?;

    let actions = MapActions {
        add: ActionCreator::new(slice.action_type("add")),
        set: ActionCreator::new(slice.action_type("set")),
        remove: ActionCreator::new(slice.action_type("remove")),
        reset: ActionCreator::new(slice.action_type("reset")),
        patch: ActionCreator::new(slice.action_type("patch")),
    };
    Ok(GeneratedSlice::new(slice, actions))
}

fn add<V: SliceState>(
    state: &EntityMap<V>,
    payload: EntityMap<V>,
) -> Result<EntityMap<V>, TransitionError> {
    let mut next = state.clone();
    next.extend(payload);
    Ok(next)
}

fn set<V: SliceState>(
    _state: &EntityMap<V>,
    payload: EntityMap<V>,
) -> Result<EntityMap<V>, TransitionError> {
    Ok(payload)
}

fn remove<V: SliceState>(
    state: &EntityMap<V>,
    payload: Vec<String>,
) -> Result<EntityMap<V>, TransitionError> {
    let mut next = state.clone();
    for key in &payload {
        next.remove(key);
    }
    Ok(next)
}

/// Shallow merge, existing keys only.
///
/// Skipped without error: keys absent from the state, updates that are not
/// JSON objects, and entities that do not serialize to JSON objects.
///
/// The merge happens on the entity's JSON form, so an entity must decode back
/// to itself before it is touched; otherwise the fields the update leaves
/// alone could change, and the patch fails with `LossyEntity`. A merged
/// entity that no longer decodes into `V` is a malformed payload.
fn patch<V: SliceState>(
    state: &EntityMap<V>,
    payload: PatchSet,
) -> Result<EntityMap<V>, TransitionError> {
    let mut next = state.clone();
    for (id, update) in payload {
        let Value::Object(fields) = update else {
            continue;
        };
        let Some(existing) = next.get(&id) else {
            continue;
        };
        let Value::Object(mut merged) = serde_json::to_value(existing)? else {
            continue;
        };
        match serde_json::from_value::<V>(Value::Object(merged.clone())) {
            Ok(decoded) if decoded == *existing => {}
            _ => return Err(TransitionError::LossyEntity(id)),
        }
        merged.extend(fields);
        let updated: V = serde_json::from_value(Value::Object(merged))?;
        next.insert(id, updated);
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, SliceError};
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Named {
        name: String,
        #[serde(default)]
        tags: Vec<String>,
    }

    fn named(name: &str) -> Named {
        Named {
            name: name.to_string(),
            tags: Vec::new(),
        }
    }

    fn strings(entries: &[(&str, &str)]) -> EntityMap<String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn patch_set(value: Value) -> PatchSet {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn add_merges_items_into_map() {
        let slice = map_slice::<String>(SliceOptions::new("test")).unwrap();
        let state = Arc::new(strings(&[("3", "three")]));

        let action = slice
            .actions()
            .add
            .create(&strings(&[("1", "one"), ("2", "two")]))
            .unwrap();
        let actual = slice.reduce(&state, &action).unwrap();

        assert_eq!(*actual, strings(&[("1", "one"), ("2", "two"), ("3", "three")]));
        assert_eq!(*state, strings(&[("3", "three")]));
    }

    #[test]
    fn add_overwrites_existing_keys() {
        let slice = map_slice::<String>(SliceOptions::new("test")).unwrap();
        let state = Arc::new(strings(&[("1", "one"), ("2", "two")]));

        let action = slice.actions().add.create(&strings(&[("2", "deux")])).unwrap();
        let actual = slice.reduce(&state, &action).unwrap();

        assert_eq!(*actual, strings(&[("1", "one"), ("2", "deux")]));
    }

    #[test]
    fn add_with_empty_payload_returns_new_equal_map() {
        let slice = map_slice::<String>(SliceOptions::new("test")).unwrap();
        let state = Arc::new(strings(&[("1", "one")]));

        let action = slice.actions().add.create(&EntityMap::new()).unwrap();
        let actual = slice.reduce(&state, &action).unwrap();

        assert_eq!(actual, state);
        assert!(!Arc::ptr_eq(&actual, &state));
    }

    #[test]
    fn set_replaces_map() {
        let slice = map_slice::<String>(SliceOptions::new("test")).unwrap();
        let state = Arc::new(strings(&[("3", "three")]));
        let payload = strings(&[("1", "one"), ("2", "two")]);

        let action = slice.actions().set.create(&payload).unwrap();
        let actual = slice.reduce(&state, &action).unwrap();

        assert_eq!(*actual, payload);
    }

    #[test]
    fn remove_deletes_listed_keys() {
        let slice = map_slice::<String>(SliceOptions::new("test")).unwrap();
        let state = Arc::new(strings(&[("1", "one"), ("2", "two"), ("3", "three")]));

        let action = slice
            .actions()
            .remove
            .create(&vec!["1".to_string(), "2".to_string()])
            .unwrap();
        let actual = slice.reduce(&state, &action).unwrap();

        assert_eq!(*actual, strings(&[("3", "three")]));
    }

    #[test]
    fn remove_ignores_absent_keys() {
        let slice = map_slice::<String>(SliceOptions::new("test")).unwrap();
        let state = Arc::new(strings(&[("1", "one")]));

        let action = slice.actions().remove.create(&vec!["9".to_string()]).unwrap();
        let actual = slice.reduce(&state, &action).unwrap();

        assert_eq!(*actual, strings(&[("1", "one")]));
        assert!(!Arc::ptr_eq(&actual, &state));
    }

    #[test]
    fn set_with_identical_payload_returns_new_equal_map() {
        let slice = map_slice::<String>(SliceOptions::new("test")).unwrap();
        let state = Arc::new(strings(&[("1", "one")]));

        let action = slice.actions().set.create(&state).unwrap();
        let actual = slice.reduce(&state, &action).unwrap();

        assert_eq!(actual, state);
        assert!(!Arc::ptr_eq(&actual, &state));
    }

    #[test]
    fn reset_returns_empty_map_by_default() {
        let slice = map_slice::<String>(SliceOptions::new("test")).unwrap();
        let state = Arc::new(strings(&[("1", "one"), ("2", "two"), ("3", "three")]));

        let actual = slice.reduce(&state, &slice.actions().reset.call()).unwrap();

        assert!(actual.is_empty());
    }

    #[test]
    fn reset_returns_caller_initial_state() {
        let initial = strings(&[("0", "zero")]);
        let slice = map_slice(SliceOptions::new("test").initial_state(initial.clone())).unwrap();
        let reset = slice.actions().reset.call();

        let first = slice.reduce(&Arc::new(EntityMap::new()), &reset).unwrap();
        let second = slice.reduce(&first, &reset).unwrap();

        assert_eq!(*first, initial);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn patch_updates_a_prop_of_object_entity() {
        let slice = map_slice::<Named>(SliceOptions::new("test")).unwrap();
        let state = Arc::new(EntityMap::from([
            ("1".to_string(), named("one")),
            ("2".to_string(), named("two")),
            ("3".to_string(), named("three")),
        ]));

        let action = slice
            .actions()
            .patch
            .create(&patch_set(json!({"2": {"name": "four"}})))
            .unwrap();
        let actual = slice.reduce(&state, &action).unwrap();

        assert_eq!(
            *actual,
            EntityMap::from([
                ("1".to_string(), named("one")),
                ("2".to_string(), named("four")),
                ("3".to_string(), named("three")),
            ])
        );
        assert_eq!(state["2"], named("two"));
    }

    #[test]
    fn patch_preserves_fields_absent_from_update() {
        let slice = map_slice::<Named>(SliceOptions::new("test")).unwrap();
        let mut tagged = named("one");
        tagged.tags = vec!["a".to_string()];
        let state = Arc::new(EntityMap::from([("1".to_string(), tagged)]));

        let action = slice
            .actions()
            .patch
            .create(&patch_set(json!({"1": {"name": "uno"}})))
            .unwrap();
        let actual = slice.reduce(&state, &action).unwrap();

        assert_eq!(actual["1"].name, "uno");
        assert_eq!(actual["1"].tags, vec!["a".to_string()]);
    }

    #[test]
    fn patch_replaces_nested_values_wholesale() {
        let slice = map_slice::<Named>(SliceOptions::new("test")).unwrap();
        let mut tagged = named("one");
        tagged.tags = vec!["a".to_string(), "b".to_string()];
        let state = Arc::new(EntityMap::from([("1".to_string(), tagged)]));

        let action = slice
            .actions()
            .patch
            .create(&patch_set(json!({"1": {"tags": ["c"]}})))
            .unwrap();
        let actual = slice.reduce(&state, &action).unwrap();

        assert_eq!(actual["1"].tags, vec!["c".to_string()]);
    }

    #[test]
    fn patch_skips_missing_keys() {
        let slice = map_slice::<Named>(SliceOptions::new("test")).unwrap();
        let state = Arc::new(EntityMap::from([("1".to_string(), named("one"))]));

        let action = slice
            .actions()
            .patch
            .create(&patch_set(json!({"7": {"name": "seven"}})))
            .unwrap();
        let actual = slice.reduce(&state, &action).unwrap();

        assert_eq!(*actual, *state);
        assert!(!actual.contains_key("7"));
        assert!(!Arc::ptr_eq(&actual, &state));
    }

    #[test]
    fn patch_skips_non_object_update() {
        let slice = map_slice::<String>(SliceOptions::new("test")).unwrap();
        let state = Arc::new(strings(&[("1", "one"), ("2", "two"), ("3", "three")]));

        let action = slice
            .actions()
            .patch
            .create(&patch_set(json!({"2": "cool"})))
            .unwrap();
        let actual = slice.reduce(&state, &action).unwrap();

        assert_eq!(*actual, strings(&[("1", "one"), ("2", "two"), ("3", "three")]));
    }

    #[test]
    fn patch_skips_non_object_entities() {
        let slice = map_slice::<String>(SliceOptions::new("test")).unwrap();
        let state = Arc::new(strings(&[("1", "one")]));

        let action = slice
            .actions()
            .patch
            .create(&patch_set(json!({"1": {"len": 3}})))
            .unwrap();
        let actual = slice.reduce(&state, &action).unwrap();

        assert_eq!(*actual, strings(&[("1", "one")]));
    }

    #[test]
    fn patch_with_wrong_field_type_is_malformed() {
        let slice = map_slice::<Named>(SliceOptions::new("test")).unwrap();
        let state = Arc::new(EntityMap::from([("1".to_string(), named("one"))]));

        let action = slice
            .actions()
            .patch
            .create(&patch_set(json!({"1": {"name": 5}})))
            .unwrap();
        let err = slice.reduce(&state, &action).unwrap_err();

        assert!(matches!(err, SliceError::MalformedPayload { .. }));
        assert_eq!(err.action_type(), "test/patch");
    }

    #[test]
    fn add_with_non_map_payload_is_malformed() {
        let slice = map_slice::<String>(SliceOptions::new("test")).unwrap();

        let err = slice
            .reduce(&Arc::new(EntityMap::new()), &Action::new("test/add", json!(["1"])))
            .unwrap_err();

        assert_eq!(err.action_type(), "test/add");
    }

    #[test]
    fn action_types_are_namespaced() {
        let slice = map_slice::<String>(SliceOptions::new("test")).unwrap();
        let actions = slice.actions();

        assert_eq!(actions.add.action_type(), "test/add");
        assert_eq!(actions.set.action_type(), "test/set");
        assert_eq!(actions.remove.action_type(), "test/remove");
        assert_eq!(actions.reset.action_type(), "test/reset");
        assert_eq!(actions.patch.action_type(), "test/patch");
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Cached {
        name: String,
        #[serde(skip)]
        hits: u32,
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Point {
        name: String,
        x: f64,
    }

    #[test]
    fn patch_refuses_entity_with_skipped_fields() {
        let slice = map_slice::<Cached>(SliceOptions::new("cache")).unwrap();
        let cached = Cached {
            name: "a".to_string(),
            hits: 7,
        };
        let state = Arc::new(EntityMap::from([("1".to_string(), cached.clone())]));

        let action = slice
            .actions()
            .patch
            .create(&patch_set(json!({"1": {"name": "b"}})))
            .unwrap();
        let err = slice.reduce(&state, &action).unwrap_err();

        assert!(matches!(err, SliceError::LossyEntity { ref key, .. } if key == "1"));
        assert_eq!(state["1"], cached);
    }

    #[test]
    fn patch_refuses_entity_with_non_finite_float() {
        let slice = map_slice::<Point>(SliceOptions::new("points")).unwrap();
        let state = Arc::new(EntityMap::from([(
            "1".to_string(),
            Point {
                name: "a".to_string(),
                x: f64::INFINITY,
            },
        )]));

        let action = slice
            .actions()
            .patch
            .create(&patch_set(json!({"1": {"name": "b"}})))
            .unwrap();
        let err = slice.reduce(&state, &action).unwrap_err();

        assert!(matches!(err, SliceError::LossyEntity { .. }));
        assert_eq!(err.action_type(), "points/patch");
    }

    #[test]
    fn patch_leaves_lossy_entities_alone_when_not_targeted() {
        let slice = map_slice::<Cached>(SliceOptions::new("cache")).unwrap();
        let cached = Cached {
            name: "a".to_string(),
            hits: 7,
        };
        let state = Arc::new(EntityMap::from([("1".to_string(), cached.clone())]));

        let action = slice
            .actions()
            .patch
            .create(&patch_set(json!({"2": {"name": "b"}, "1": "scalar"})))
            .unwrap();
        let actual = slice.reduce(&state, &action).unwrap();

        assert_eq!(actual["1"], cached);
    }

    #[test]
    fn set_keeps_values_json_cannot_hold() {
        let slice = map_slice::<Cached>(SliceOptions::new("cache")).unwrap();
        let payload = EntityMap::from([(
            "1".to_string(),
            Cached {
                name: "a".to_string(),
                hits: 7,
            },
        )]);

        let action = slice.actions().set.create(&payload).unwrap();
        let actual = slice.reduce(&Arc::new(EntityMap::new()), &action).unwrap();

        assert_eq!(*actual, payload);
    }
}
