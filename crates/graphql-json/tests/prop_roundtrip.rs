/// Property-based tests for literal coercion.
///
/// Uses `proptest` to generate random JSON values and check that:
/// - `parse_literal(value_to_literal(v)) == v` (the tree walk rebuilds `v`)
/// - `coerce_str(print_value(v)) == v` (printed text reads back as `v`)
/// - `serialize` and `parse_value` return their input unchanged
///
/// Object keys are generated as GraphQL names, since only those can be
/// written as literal field names. Floats are finite by construction.
use graphql_json::{
    coerce_str, parse_literal, parse_value, print_value, serialize, value_to_literal,
};
use proptest::prelude::*;
use serde_json::{Map, Number, Value};

// ============================================================================
// Strategies
// ============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[_a-zA-Z][_a-zA-Z0-9]{0,12}").unwrap()
}

fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,30}",
        any::<String>(),
        Just(String::new()),
        Just("say \"hi\"".to_string()),
        Just("path\\to\\file".to_string()),
        Just("line1\nline2\r\n\ttab".to_string()),
        Just("\u{0}\u{1f}\u{7f}".to_string()),
        Just("\u{1F600} caf\u{e9}".to_string()),
    ]
}

fn arb_number() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        any::<u64>().prop_map(|n| Value::Number(n.into())),
        (-1.0e12f64..1.0e12f64).prop_filter_map("finite", |f| Number::from_f64(f).map(Value::Number)),
        prop::num::f64::NORMAL.prop_filter_map("finite", |f| Number::from_f64(f).map(Value::Number)),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        arb_number(),
        arb_string().prop_map(Value::String),
    ]
}

fn arb_json() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec((arb_name(), inner), 0..8).prop_map(|fields| {
                let mut map = Map::new();
                for (k, v) in fields {
                    map.insert(k, v);
                }
                Value::Object(map)
            }),
        ]
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn literal_tree_rebuilds_value(value in arb_json()) {
        let literal = value_to_literal(&value).unwrap();
        prop_assert_eq!(parse_literal(&literal).unwrap(), value);
    }

    #[test]
    fn printed_text_reads_back(value in arb_json()) {
        let text = print_value(&value).unwrap();
        let back = coerce_str(&text).unwrap();
        prop_assert_eq!(back, value, "printed as {}", text);
    }

    #[test]
    fn identity_coercions(value in arb_json()) {
        prop_assert_eq!(serialize(value.clone()), value.clone());
        prop_assert_eq!(parse_value(value.clone()), value);
    }

    #[test]
    fn field_permutation_gives_equal_objects(
        fields in prop::collection::btree_map(arb_name(), arb_leaf(), 0..8)
    ) {
        let forward: Map<String, Value> = fields.clone().into_iter().collect();
        let reversed: Map<String, Value> = fields.into_iter().rev().collect();
        let a = parse_literal(&value_to_literal(&Value::Object(forward)).unwrap()).unwrap();
        let b = parse_literal(&value_to_literal(&Value::Object(reversed)).unwrap()).unwrap();
        prop_assert_eq!(a, b);
    }
}
