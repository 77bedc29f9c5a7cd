//! Property-based tests for the decode(encode(p)) == p guarantee
//!
//! Strings are generated without '_' and '"', the two characters the flat
//! format cannot carry inside a value.

use param_ident::{decode_identifier, encode, is_valid_ip_and_port_v4, ParamMap, ParamValue};
use proptest::prelude::*;

fn roundtrip(params: &ParamMap) -> bool {
    let identifier = format!("x__f__{}", encode(params));
    match decode_identifier(&identifier) {
        Ok(Some(decoded)) => decoded == *params,
        Ok(None) => params.is_empty(),
        Err(e) => {
            eprintln!("Decode failed: {}", e);
            eprintln!("Identifier was: {}", identifier);
            false
        }
    }
}

fn single(value: ParamValue) -> ParamMap {
    let mut params = ParamMap::new();
    params.insert("value".to_string(), value);
    params
}

fn scalar() -> impl Strategy<Value = ParamValue> {
    prop_oneof![
        Just(ParamValue::None),
        any::<bool>().prop_map(ParamValue::from),
        any::<i64>().prop_map(ParamValue::from),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(ParamValue::from),
        "[a-zA-Z0-9 .,:-]{0,12}".prop_map(ParamValue::from),
    ]
}

fn nested() -> impl Strategy<Value = ParamValue> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(ParamValue::List),
            prop::collection::vec(inner, 0..4).prop_map(ParamValue::Tuple),
        ]
    })
}

proptest! {
    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(&single(ParamValue::from(n))));
    }

    #[test]
    fn prop_u64(n in any::<u64>()) {
        prop_assert!(roundtrip(&single(ParamValue::from(n))));
    }

    #[test]
    fn prop_finite_f64(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        prop_assert!(roundtrip(&single(ParamValue::from(f))));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&single(ParamValue::from(b))));
    }

    #[test]
    fn prop_safe_string(s in "[a-zA-Z0-9 .,:()-]{0,20}") {
        prop_assert!(roundtrip(&single(ParamValue::from(s))));
    }

    #[test]
    fn prop_nested_containers(value in nested()) {
        prop_assert!(roundtrip(&single(value)));
    }

    #[test]
    fn prop_many_parameters(
        entries in prop::collection::vec(("[a-z][a-z0-9]{0,6}", scalar()), 1..6)
    ) {
        let params: ParamMap = entries.into_iter().collect();
        prop_assert!(roundtrip(&params));
    }

    #[test]
    fn prop_encoded_names_are_sorted(
        names in prop::collection::btree_set("[a-z]{1,6}", 1..6)
    ) {
        let mut params = ParamMap::new();
        for name in names.iter().rev() {
            params.insert(name.clone(), ParamValue::from(1));
        }
        let encoded = encode(&params);
        let order: Vec<&str> = encoded
            .split("__")
            .filter_map(|segment| segment.rsplit_once('_').map(|(name, _)| name))
            .collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(order, expected);
    }

    #[test]
    fn prop_ip_validator_never_panics(s in "\\PC{0,24}") {
        let _ = is_valid_ip_and_port_v4(&s);
    }

    #[test]
    fn prop_plain_addresses_accepted(
        a in 1u8..=255, b in 1u8..=255, c in 1u8..=255, d in 1u8..=255, port in 1u16..=999
    ) {
        let s = format!("{}.{}.{}.{}:{}", a, b, c, d, port);
        prop_assert!(is_valid_ip_and_port_v4(&s), "{}", s);
    }
}
