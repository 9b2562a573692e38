use arbor_map::{JsonMap, KeyError};
use serde_json::{json, Value};

#[test]
fn json_map_basic_ops_matrix() {
    let mut map = JsonMap::new();
    assert!(map.is_empty());

    assert_eq!(map.try_insert(json!("b"), 2), Ok(None));
    assert_eq!(map.try_insert(json!("a"), 1), Ok(None));
    assert_eq!(map.try_insert(json!("c"), 3), Ok(None));
    assert_eq!(map.try_insert(json!("a"), 11), Ok(Some(1)));
    assert_eq!(map.len(), 3);

    assert_eq!(map.try_get(&json!("a")), Ok(Some(&11)));
    assert_eq!(map.try_get(&json!("zz")), Ok(None));
    assert_eq!(map.try_contains_key(&json!("c")), Ok(true));

    let keys: Vec<Value> = map.iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(keys, vec![json!("a"), json!("b"), json!("c")]);

    assert_eq!(map.try_remove(&json!("b")), Ok(Some(2)));
    assert_eq!(map.try_remove(&json!("b")), Ok(None));
    assert_eq!(map.len(), 2);
    map.assert_valid().unwrap();
}

#[test]
fn json_map_null_key_is_rejected_matrix() {
    let mut map = JsonMap::new();
    assert_eq!(map.try_insert(Value::Null, 1), Err(KeyError::NullKey));
    assert_eq!(map.try_get(&Value::Null), Err(KeyError::NullKey));
    assert_eq!(map.try_remove(&Value::Null), Err(KeyError::NullKey));
    assert!(map.is_empty());
}

#[test]
fn json_map_mixed_kinds_are_rejected_matrix() {
    let mut map = JsonMap::new();
    assert_eq!(map.try_insert(json!("a"), 1), Ok(None));

    assert_eq!(
        map.try_insert(json!(1), 2),
        Err(KeyError::TypeMismatch {
            expected: "string",
            actual: "number",
        })
    );
    assert_eq!(
        map.try_get(&json!(true)),
        Err(KeyError::TypeMismatch {
            expected: "string",
            actual: "bool",
        })
    );
    assert_eq!(map.len(), 1);
}

#[test]
fn json_map_non_scalar_keys_are_rejected_matrix() {
    let mut map = JsonMap::<i32>::new();
    assert_eq!(
        map.try_insert(json!([1, 2]), 1),
        Err(KeyError::TypeMismatch {
            expected: "ordered scalar",
            actual: "array",
        })
    );
    assert_eq!(
        map.try_insert(json!({"k": 1}), 1),
        Err(KeyError::TypeMismatch {
            expected: "ordered scalar",
            actual: "object",
        })
    );
    assert!(map.is_empty());
}

#[test]
fn json_map_numbers_order_numerically_matrix() {
    let mut map = JsonMap::new();
    for n in [5.5, 1.0, -3.0, 2.25] {
        map.try_insert(json!(n), n as i32).unwrap();
    }
    let keys: Vec<f64> = map.iter().map(|(k, _)| k.as_f64().unwrap()).collect();
    assert_eq!(keys, vec![-3.0, 1.0, 2.25, 5.5]);
    map.assert_valid().unwrap();
}

#[test]
fn json_map_kind_resets_when_emptied_matrix() {
    let mut map = JsonMap::new();
    map.try_insert(json!(1), 1).unwrap();
    assert!(map.try_insert(json!("a"), 2).is_err());

    map.try_remove(&json!(1)).unwrap();
    assert!(map.is_empty());
    assert_eq!(map.try_insert(json!("a"), 2), Ok(None));

    map.clear();
    assert_eq!(map.try_insert(json!(true), 3), Ok(None));
}
