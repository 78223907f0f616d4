//! Canonical ordering for the models listing
//!
//! `canonicalize` rewrites a JSON tree so that:
//! - object keys come out in ascending order (UTF-16 code unit order, the
//!   same order a JavaScript `Array.prototype.sort()` gives key strings)
//! - arrays of name-tagged records are ordered by `name` using the fixed
//!   [`collation`]
//!
//! Whether an array holds name-tagged records is decided from its first
//! element only; see [`NameTag`].

pub mod collation;

use serde_json::{Map, Value};

use self::collation::collation_key;

pub const NAME_FIELD: &str = "name";

/// Shape check for an array, computed once before deciding to name-sort.
///
/// Only the first element is inspected. `[{"x":1},{"name":"a"}]` is not
/// name-tagged even though its second element has a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameTag {
    pub has_name_field: bool,
}

impl NameTag {
    pub fn of(items: &[Value]) -> Self {
        Self {
            has_name_field: items.first().and_then(record_name).is_some(),
        }
    }
}

fn record_name(value: &Value) -> Option<&str> {
    value.as_object()?.get(NAME_FIELD)?.as_str()
}

/// Return a canonically ordered copy of `value`.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(canonicalize_array(items)),
        Value::Object(map) => Value::Object(canonicalize_object(map)),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
    }
}

fn canonicalize_array(items: &[Value]) -> Vec<Value> {
    let tag = NameTag::of(items);
    let mut out: Vec<Value> = items.iter().map(canonicalize).collect();

    if tag.has_name_field {
        // Stable; records without a string name trail the named ones
        out.sort_by_cached_key(|item| match record_name(item) {
            Some(name) => (false, Some(collation_key(name))),
            None => (true, None),
        });
    }
    out
}

fn canonicalize_object(map: &Map<String, Value>) -> Map<String, Value> {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.encode_utf16().cmp(b.encode_utf16()));
    entries
        .into_iter()
        .map(|(key, value)| (key.clone(), canonicalize(value)))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    // -- Strategy helpers --

    fn arb_leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            "[a-zA-Z0-9 ]{0,8}".prop_map(Value::String),
        ]
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        arb_leaf().prop_recursive(4, 64, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::vec(("[a-zA-Z_]{1,6}", inner.clone()), 0..6)
                    .prop_map(|entries| Value::Object(entries.into_iter().collect())),
                // Arrays of name-tagged records
                prop::collection::vec(("[a-zA-Z ]{0,6}", inner), 1..6).prop_map(|records| {
                    Value::Array(
                        records
                            .into_iter()
                            .map(|(name, payload)| {
                                let mut map = Map::new();
                                map.insert("payload".to_string(), payload);
                                map.insert(NAME_FIELD.to_string(), Value::String(name));
                                Value::Object(map)
                            })
                            .collect(),
                    )
                }),
            ]
        })
    }

    /// Every key and scalar in the tree, sorted. Equal for two trees that
    /// hold the same data in any order.
    fn inventory(value: &Value) -> Vec<String> {
        fn walk(value: &Value, out: &mut Vec<String>) {
            match value {
                Value::Array(items) => items.iter().for_each(|v| walk(v, out)),
                Value::Object(map) => {
                    for (k, v) in map {
                        out.push(format!("key:{k}"));
                        walk(v, out);
                    }
                }
                scalar => out.push(scalar.to_string()),
            }
        }
        let mut out = Vec::new();
        walk(value, &mut out);
        out.sort();
        out
    }

    fn keys_strictly_ascending(value: &Value) -> bool {
        match value {
            Value::Array(items) => items.iter().all(keys_strictly_ascending),
            Value::Object(map) => {
                let keys: Vec<Vec<u16>> = map.keys().map(|k| k.encode_utf16().collect()).collect();
                keys.windows(2).all(|w| w[0] < w[1]) && map.values().all(keys_strictly_ascending)
            }
            _ => true,
        }
    }

    proptest! {
        #[test]
        fn canonicalize_is_idempotent(value in arb_json()) {
            let once = canonicalize(&value);
            let twice = canonicalize(&once);
            // Map equality ignores order, compare the serialized text
            prop_assert_eq!(
                serde_json::to_string(&once).unwrap(),
                serde_json::to_string(&twice).unwrap()
            );
        }

        #[test]
        fn canonicalize_orders_keys(value in arb_json()) {
            prop_assert!(keys_strictly_ascending(&canonicalize(&value)));
        }

        #[test]
        fn canonicalize_loses_nothing(value in arb_json()) {
            prop_assert_eq!(inventory(&canonicalize(&value)), inventory(&value));
        }

        #[test]
        fn named_records_in_collation_order(value in arb_json()) {
            fn check(value: &Value) -> bool {
                match value {
                    Value::Array(items) => {
                        let sorted = !NameTag::of(items).has_name_field
                            || items.windows(2).all(|w| {
                                match (record_name(&w[0]), record_name(&w[1])) {
                                    (Some(a), Some(b)) => collation::compare(a, b).is_le(),
                                    (None, Some(_)) => false,
                                    _ => true,
                                }
                            });
                        sorted && items.iter().all(check)
                    }
                    Value::Object(map) => map.values().all(check),
                    _ => true,
                }
            }
            prop_assert!(check(&canonicalize(&value)));
        }
    }
}
