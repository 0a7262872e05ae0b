//! fasterdash walkthrough
//!
//! Runs each operation once over small host-shaped inputs:
//! - sorting by keys and by a callback selector
//! - compact / uniq / flattenDeep
//! - groupBy with canonical bucket keys
//! - cloneDeep and multi-source merge

use anyhow::Result;
use serde_json::json;

use fasterdash::api::{self, Selector};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    api::initialize()?;

    let users = json!([
        { "user": "fred",   "age": 48 },
        { "user": "barney", "age": 36 },
        { "user": "fred",   "age": 40 },
        { "user": "barney", "age": 34 }
    ]);

    let sorted = api::order_by(&users, &["user".into(), "age".into()], &["asc", "desc"])?;
    println!("orderBy user asc, age desc:\n  {}", sorted);

    let by_age = Selector::callback("by_age", |v| {
        v.as_map()
            .and_then(|m| m.get("age"))
            .cloned()
            .ok_or_else(|| "item has no age".to_string())
    });
    let youngest_first = api::order_by(&users, &[by_age], &[])?;
    println!("orderBy callback(age):\n  {}", youngest_first);

    println!(
        "compact [0, 1, false, 2, \"\", 3]:\n  {}",
        api::compact(&json!([0, 1, false, 2, "", 3]))?
    );
    println!(
        "uniq [2, 1, 2, 3, 1]:\n  {}",
        api::uniq(&json!([2, 1, 2, 3, 1]))?
    );
    println!(
        "flattenDeep [1, [2, [3, [4]], 5]]:\n  {}",
        api::flatten_deep(&json!([1, [2, [3, [4]], 5]]))?
    );

    let grouped = api::group_by(
        &json!([6.1, 4.2, 6.3]),
        &Selector::callback("floor", |v| {
            v.as_number()
                .map(|n| fasterdash::Value::from(n.floor()))
                .ok_or_else(|| "not a number".to_string())
        }),
    )?;
    println!("groupBy floor:\n  {}", grouped);

    let config = json!({ "retries": 1, "limits": { "cpu": 2 } });
    let cloned = api::clone_deep(&config)?;
    let merged = api::merge(
        &config,
        &[json!({ "limits": { "mem": 512 } }), json!({ "retries": 3 })],
    )?;
    println!("cloneDeep:\n  {}", cloned);
    println!("merge:\n  {}", merged);

    Ok(())
}
