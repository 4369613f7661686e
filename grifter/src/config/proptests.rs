//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use proptest::prelude::*;
use serde_yaml::{Mapping, Value};

// Strategy for generating scalar leaves
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
        Just(Value::Null),
    ]
}

// Strategy for generating nested documents with a small key space so that
// merges actually collide
fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::btree_map("[a-d]", inner, 0..4).prop_map(|m| {
                Value::Mapping(m.into_iter().map(|(k, v)| (Value::from(k), v)).collect::<Mapping>())
            }),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Merging a value over itself is a no-op
    #[test]
    fn merge_is_idempotent(v in value_strategy()) {
        prop_assert_eq!(ConfigMerger::deep_merge(&v, &v), v);
    }

    // Merging over nothing yields the overlay
    #[test]
    fn merge_over_empty_mapping(v in value_strategy()) {
        let empty = Value::Mapping(Mapping::new());
        prop_assert_eq!(ConfigMerger::deep_merge(&empty, &v), v);
    }

    // Every non-mapping leaf in the overlay wins
    #[test]
    fn overlay_leaves_win(base in value_strategy(), overlay in value_strategy()) {
        let merged = ConfigMerger::deep_merge(&base, &overlay);
        match (&base, &overlay) {
            (Value::Mapping(_), Value::Mapping(over)) => {
                for (key, value) in over {
                    if !value.is_mapping() {
                        prop_assert_eq!(&merged[key], value);
                    }
                }
            }
            _ => prop_assert_eq!(&merged, &overlay),
        }
    }

    // Keys only in the base survive
    #[test]
    fn base_only_keys_survive(base in value_strategy(), overlay in value_strategy()) {
        if let (Value::Mapping(b), Value::Mapping(o)) = (&base, &overlay) {
            let merged = ConfigMerger::deep_merge(&base, &overlay);
            for (key, value) in b {
                if !o.contains_key(key) {
                    prop_assert_eq!(&merged[key], value);
                }
            }
        }
    }
}
