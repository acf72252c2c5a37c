//! Todo Board
//!
//! This example wires the three generators into the state of a small todo
//! application.
//!
//! Key concepts:
//! - A keyed collection of todos with add, patch and remove
//! - A single value for the active filter, reset by a foreign action
//! - A status record tracking a (simulated) fetch
//!
//! Run with: RUST_LOG=slicekit=debug cargo run --example todo_board

use serde::{Deserialize, Serialize};
use serde_json::json;
use slicekit::{
    assign_slice, loading_slice, map_slice, EntityMap, PatchSet, SliceError, SliceOptions,
};
use tracing_subscriber::EnvFilter;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
struct Todo {
    title: String,
    done: bool,
}

fn todo(title: &str) -> Todo {
    Todo {
        title: title.to_string(),
        done: false,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Todo Board Example ===\n");

    let (mut todos, todo_actions) = map_slice::<Todo>(SliceOptions::new("todos"))?.into_store();
    let (mut status, status_actions) = loading_slice(SliceOptions::new("fetch"))?.into_store();

    // The filter returns to "all" whenever the todo list is reset
    let filter_options = SliceOptions::new("filter")
        .initial_state("all".to_string())
        .extra_case(todo_actions.reset.action_type(), |_: &String, (): ()| {
            Ok("all".to_string())
        });
    let (mut filter, filter_actions) = assign_slice(filter_options)?.into_store();

    status.dispatch(&status_actions.loading.with_message("fetching todos"))?;
    println!("Status: {:?}", status.state());

    let fetched = EntityMap::from([
        ("1".to_string(), todo("write docs")),
        ("2".to_string(), todo("review patch")),
    ]);
    todos.dispatch(&todo_actions.set.create(&fetched)?)?;
    status.dispatch(&status_actions.success.with_message("2 todos"))?;
    println!("Status: {:?}", status.state());

    let patch: PatchSet = [("2".to_string(), json!({ "done": true }))].into_iter().collect();
    todos.dispatch(&todo_actions.patch.create(&patch)?)?;
    todos.dispatch(&todo_actions.add.create(&EntityMap::from([(
        "3".to_string(),
        todo("ship release"),
    )]))?)?;
    filter.dispatch(&filter_actions.set.create(&"open".to_string())?)?;

    let mut keys: Vec<&String> = todos.state().keys().collect();
    keys.sort();
    for key in keys {
        println!("  [{key}] {:?}", todos.state()[key]);
    }
    println!("Filter: {}", filter.state());

    // A malformed payload surfaces as an error and leaves the state untouched
    let bad = slicekit::Action::new(todo_actions.remove.action_type(), json!("1"));
    if let Err(SliceError::MalformedPayload { action_type, .. }) = todos.dispatch(&bad) {
        println!("Rejected malformed '{action_type}' action");
    }

    let reset = todo_actions.reset.call();
    todos.dispatch(&reset)?;
    filter.dispatch(&reset)?;
    println!(
        "After reset: {} todos, filter '{}'",
        todos.state().len(),
        filter.state()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
