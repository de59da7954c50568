//! Locale tree flattening and pruning.
//!
//! A locale tree is a `serde_json::Value` whose objects map keys to either
//! nested objects or opaque leaf values. Only objects are containers:
//! strings, numbers, booleans, null and arrays are all leaves and pass
//! through untouched. With serde_json's `preserve_order` feature the object
//! map keeps insertion order, so a tree survives a read-prune-write cycle
//! with its key order intact.

use std::collections::HashSet;

use serde_json::{Map, Value};

/// Collect the dotted path of every leaf reachable from `tree`.
///
/// Paths to intermediate containers are never emitted. A scalar or an empty
/// object at the top level yields an empty set.
pub fn flatten_keys(tree: &Value) -> HashSet<String> {
    let mut keys = HashSet::new();
    collect_leaf_paths(tree, "", &mut keys);
    keys
}

fn collect_leaf_paths(value: &Value, prefix: &str, keys: &mut HashSet<String>) {
    let Value::Object(map) = value else {
        return;
    };
    for (key, child) in map {
        let path = join_path(prefix, key);
        match child {
            Value::Object(_) => collect_leaf_paths(child, &path, keys),
            _ => {
                keys.insert(path);
            }
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Rebuild `tree` without the entries named by `keys_to_remove`.
///
/// A path naming a container drops the whole subtree, without every
/// descendant leaf being listed separately. A container whose pruned result
/// is empty is dropped as well, collapsing upward. Paths not present in the
/// tree are silent no-ops. Key order is preserved and the input tree is
/// left untouched, so callers can compare before and after.
pub fn prune_keys(tree: &Value, keys_to_remove: &HashSet<String>) -> Value {
    match tree {
        Value::Object(map) => Value::Object(prune_map(map, keys_to_remove, "")),
        other => other.clone(),
    }
}

fn prune_map(
    map: &Map<String, Value>,
    keys_to_remove: &HashSet<String>,
    prefix: &str,
) -> Map<String, Value> {
    let mut pruned = Map::new();
    for (key, value) in map {
        let path = join_path(prefix, key);
        if keys_to_remove.contains(&path) {
            continue;
        }
        match value {
            Value::Object(inner) => {
                let kept = prune_map(inner, keys_to_remove, &path);
                if !kept.is_empty() {
                    pruned.insert(key.clone(), Value::Object(kept));
                }
            }
            leaf => {
                pruned.insert(key.clone(), leaf.clone());
            }
        }
    }
    pruned
}
