//! Basic walkthrough of a resource collection.
//!
//! Run with `cargo run --example basic` to see the trace events emitted for
//! every removal and renumbering.

use rescoll::{codec, prelude::*};
use serde_json::{Value, json};
use tracing::Level;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_target(false)
        .init();

    // Seeded from a list: keys 0, 1, 2.
    let mut resources: ResourceCollection<Value> =
        ResourceCollection::from(vec![json!(10), json!(20), json!(30)]);

    // Deleting an integer key closes the gap.
    resources.delete(1).expect("key 1 is present");
    println!("after delete(1): {resources:?}");

    // Fetching takes whatever is under the cursor.
    let fetched = resources.fetch().expect("collection is not empty");
    println!("fetched {fetched}, left with {resources:?}");

    resources.push(json!(99));
    resources.bulk(Seed::keyed([("owner", json!("ops")), ("retries", json!(3))]));
    println!("after push and bulk: {resources:?}");

    // Walk the cursor without consuming anything.
    resources.rewind();
    while resources.valid() {
        if let (Some(key), Ok(value)) = (resources.key(), resources.current()) {
            println!("  {key} => {value}");
        }
        resources.advance();
    }

    // Round trip through bytes.
    let bytes = codec::encode(&resources).expect("json values always encode");
    println!("encoded: {}", String::from_utf8_lossy(&bytes));
    let decoded: ResourceCollection<Value> = codec::decode(&bytes).expect("just encoded");
    assert_eq!(decoded, resources);

    // The two error kinds on an empty collection.
    let mut empty: ResourceCollection<Value> = ResourceCollection::new();
    match empty.current() {
        Err(IterationExhaustedError) => println!("current(): {IterationExhaustedError}"),
        Ok(value) => println!("unexpected value {value}"),
    }
    match empty.first() {
        Err(error) => println!("first(): {error}"),
        Ok(value) => println!("unexpected value {value}"),
    }

    // Draining the rest as a queue.
    resources.rewind();
    for (key, value) in resources.drain_from_cursor() {
        println!("drained {key} => {value}");
    }
    assert!(resources.is_empty());
}
