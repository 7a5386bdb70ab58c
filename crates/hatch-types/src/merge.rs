//! Merge strategies used by the `extend*` operations.

use serde_json::{Map, Value};

/// Recursively merge `source` into `target`.
///
/// Nested objects are merged key by key; any other value (including arrays)
/// replaces what was there. Objects copied into a slot that held a
/// non-object start from an empty map, so `target` never aliases `source`.
pub fn deep_extend(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        match value {
            Value::Object(src) => {
                let slot = target
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(dst) = slot {
                    deep_extend(dst, src);
                }
            }
            other => {
                target.insert(key.clone(), other.clone());
            }
        }
    }
}

/// Overwrite top-level keys of `target` with those of `source`.
pub fn shallow_assign(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn deep_extend_merges_nested() {
        let mut target = map(json!({ "common": { "name": "x", "role": "switch" } }));
        deep_extend(&mut target, &map(json!({ "common": { "name": "y" }, "native": { "a": 1 } })));
        assert_eq!(
            Value::Object(target),
            json!({ "common": { "name": "y", "role": "switch" }, "native": { "a": 1 } })
        );
    }

    #[test]
    fn deep_extend_replaces_arrays_and_scalars() {
        let mut target = map(json!({ "list": [1, 2, 3], "n": { "deep": true } }));
        deep_extend(&mut target, &map(json!({ "list": [9], "n": 5 })));
        assert_eq!(Value::Object(target), json!({ "list": [9], "n": 5 }));
    }

    #[test]
    fn deep_extend_object_over_scalar() {
        let mut target = map(json!({ "n": 5 }));
        deep_extend(&mut target, &map(json!({ "n": { "a": 1 } })));
        assert_eq!(Value::Object(target), json!({ "n": { "a": 1 } }));
    }

    #[test]
    fn shallow_assign_replaces_nested() {
        let mut target = map(json!({ "common": { "name": "x", "role": "switch" } }));
        shallow_assign(&mut target, &map(json!({ "common": { "name": "y" } })));
        assert_eq!(Value::Object(target), json!({ "common": { "name": "y" } }));
    }
}
