//! Tests of the host-facing surface: conversion round-trips and errors

use fasterdash::api::{self, Selector};
use fasterdash::EngineError;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_initialize_before_use_is_idempotent() {
    api::initialize().unwrap();
    api::initialize().unwrap();
}

#[test]
fn test_identity_sort_round_trips_host_data() {
    // orderBy with no keys is the identity; the input must come back
    // structurally equal with element and key order intact.
    let items = json!([
        { "b": 1, "a": 2 },
        null,
        [3, "x", false],
        "text",
        2.5
    ]);
    let out = api::order_by(&items, &[], &[]).unwrap();
    assert_eq!(out, items);
}

#[test]
fn test_order_by_function_selector() {
    let users = json!([
        { "user": "fred",   "age": 48 },
        { "user": "barney", "age": 36 },
        { "user": "fred",   "age": 40 },
        { "user": "barney", "age": 34 }
    ]);
    let by_age = Selector::callback("by_age", |v| {
        v.as_map()
            .and_then(|m| m.get("age"))
            .cloned()
            .ok_or_else(|| "item has no age".to_string())
    });
    let sorted = api::order_by(&users, &[by_age], &["asc"]).unwrap();
    let ages: Vec<i64> = sorted
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["age"].as_i64().unwrap())
        .collect();
    assert_eq!(ages, vec![34, 36, 40, 48]);
}

#[test]
fn test_selector_failure_surfaces_with_no_partial_result() {
    let bomb = Selector::callback("bomb", |_| Err("callback threw".to_string()));
    let err = api::order_by(&json!([1, 2, 3]), &[bomb], &[]).unwrap_err();
    assert!(matches!(err, EngineError::SelectorFailure(_)));
}

#[test]
fn test_nested_path_selectors_at_the_boundary() {
    let items = json!([
        { "profile": { "scores": [30] } },
        { "profile": { "scores": [10] } },
        { "profile": { "scores": [20] } }
    ]);
    let sorted = api::order_by(&items, &["profile.scores[0]".into()], &[]).unwrap();
    assert_eq!(
        sorted,
        json!([
            { "profile": { "scores": [10] } },
            { "profile": { "scores": [20] } },
            { "profile": { "scores": [30] } }
        ])
    );
}

#[test]
fn test_merge_multiple_sources_left_to_right() {
    let dst = json!({ "keep": true });
    let merged = api::merge(
        &dst,
        &[json!({ "n": 1 }), json!({ "n": 2, "extra": [1] }), json!({ "n": 3 })],
    )
    .unwrap();
    assert_eq!(merged, json!({ "keep": true, "n": 3, "extra": [1] }));
}

#[test]
fn test_group_by_buckets_in_first_seen_order() {
    let grouped = api::group_by(
        &json!([{ "t": "b" }, { "t": "a" }, { "t": "b" }]),
        &"t".into(),
    )
    .unwrap();
    let keys: Vec<&String> = grouped.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["b", "a"]);
}

#[test]
fn test_non_array_inputs_are_invalid_arguments() {
    type ArrayOp = fn(&serde_json::Value) -> fasterdash::Result<serde_json::Value>;
    let array_ops: [ArrayOp; 3] = [api::compact, api::uniq, api::flatten_deep];
    for op in array_ops {
        let err = op(&json!({ "not": "an array" })).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }
}

#[test]
fn test_clone_deep_of_scalars() {
    assert_eq!(api::clone_deep(&json!(null)).unwrap(), json!(null));
    assert_eq!(api::clone_deep(&json!("s")).unwrap(), json!("s"));
    assert_eq!(api::clone_deep(&json!(1.25)).unwrap(), json!(1.25));
}
