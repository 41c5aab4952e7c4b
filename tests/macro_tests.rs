use serde_kata::{raw, Map, Number, Value};

#[test]
fn test_raw_macro_null() {
    let value = raw!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_raw_macro_booleans() {
    let true_val = raw!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = raw!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_raw_macro_numbers() {
    let int_val = raw!(42);
    assert_eq!(int_val, Value::Number(Number::Integer(42)));

    let float_val = raw!(3.5);
    assert_eq!(float_val, Value::Number(Number::Float(3.5)));

    let negative_val = raw!(-123);
    assert_eq!(negative_val, Value::Number(Number::Integer(-123)));

    let whole_float = raw!(2.0);
    assert_eq!(whole_float.as_f64(), Some(2.0));
    assert_eq!(whole_float.as_i64(), None);
}

#[test]
fn test_raw_macro_strings() {
    let string_val = raw!("hello world");
    assert_eq!(string_val, Value::String("hello world".to_string()));

    let empty_string = raw!("");
    assert_eq!(empty_string, Value::String("".to_string()));
}

#[test]
fn test_raw_macro_arrays() {
    let empty_array = raw!([]);
    assert_eq!(empty_array, Value::Array(vec![]));

    let number_array = raw!([1, 2, 3]);
    assert_eq!(
        number_array,
        Value::Array(vec![
            Value::Number(Number::Integer(1)),
            Value::Number(Number::Integer(2)),
            Value::Number(Number::Integer(3)),
        ])
    );

    let mixed_array = raw!([1, "hello", true, null]);
    assert_eq!(
        mixed_array,
        Value::Array(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );

    let nested = raw!([[], [null], [[1]]]);
    assert_eq!(nested.as_array().unwrap().len(), 3);
}

#[test]
fn test_raw_macro_objects() {
    let empty_object = raw!({});
    assert_eq!(empty_object, Value::Object(Map::new()));

    let simple_object = raw!({
        "name": "Alice",
        "age": 30,
        "nick": null
    });

    match simple_object {
        Value::Object(ref obj) => {
            assert_eq!(obj.len(), 3);
            assert_eq!(obj.get("name"), Some(&Value::String("Alice".to_string())));
            assert_eq!(obj.get("age"), Some(&Value::Number(Number::Integer(30))));
            assert_eq!(obj.get("nick"), Some(&Value::Null));
            assert_eq!(obj.get("missing"), None);
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_raw_macro_keeps_key_order() {
    let value = raw!({"z": 1, "a": 2, "m": 3});
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_raw_macro_nested() {
    let nested = raw!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", null, "developer"],
        "count": 42
    });

    match nested {
        Value::Object(ref obj) => {
            assert_eq!(obj.len(), 3);

            // Check user object
            if let Some(Value::Object(user)) = obj.get("user") {
                assert_eq!(user.get("id"), Some(&Value::Number(Number::Integer(123))));
                assert_eq!(user.get("name"), Some(&Value::String("Bob".to_string())));
                assert_eq!(user.get("active"), Some(&Value::Bool(true)));
            } else {
                panic!("Expected user to be an object");
            }

            // Check tags array
            if let Some(Value::Array(tags)) = obj.get("tags") {
                assert_eq!(tags.len(), 3);
                assert_eq!(tags[0], Value::String("admin".to_string()));
                assert!(tags[1].is_null());
                assert_eq!(tags[2], Value::String("developer".to_string()));
            } else {
                panic!("Expected tags to be an array");
            }

            assert_eq!(obj.get("count"), Some(&Value::Number(Number::Integer(42))));
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_raw_macro_accepts_expressions() {
    let name = String::from("Ada");
    let age: i64 = 36;
    let value = raw!({"name": name, "age": age});
    assert_eq!(value.as_object().unwrap().get("name").and_then(Value::as_str), Some("Ada"));
    assert_eq!(value.as_object().unwrap().get("age").and_then(Value::as_i64), Some(36));

    let maybe: Option<i64> = None;
    assert_eq!(raw!(maybe), Value::Null);
}

#[test]
fn test_value_methods() {
    let null_val = raw!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_array());
    assert!(!null_val.is_object());

    let bool_val = raw!(true);
    assert!(bool_val.is_bool());
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = raw!("hello");
    assert!(str_val.is_string());
    assert_eq!(str_val.as_str(), Some("hello"));

    let array_val = raw!([1, 2, 3]);
    assert!(array_val.is_array());
    assert_eq!(array_val.as_array().unwrap().len(), 3);

    let obj_val = raw!({"key": "value"});
    assert!(obj_val.is_object());
    assert_eq!(obj_val.as_object().unwrap().len(), 1);
}

#[test]
fn test_kind_names() {
    assert_eq!(raw!(null).kind_name(), "null");
    assert_eq!(raw!(1).kind_name(), "int");
    assert_eq!(raw!(1.5).kind_name(), "float");
    assert_eq!(raw!("s").kind_name(), "string");
    assert_eq!(raw!([]).kind_name(), "array");
    assert_eq!(raw!({}).kind_name(), "object");
}

#[test]
fn test_display_is_compact() {
    let value = raw!({"a": [1, null, "x"], "b": true});
    assert_eq!(value.to_string(), r#"{"a":[1,null,"x"],"b":true}"#);
}

#[test]
fn test_raw_macro_negative_literals() {
    assert_eq!(
        raw!([-1, 2, -3.5]),
        Value::Array(vec![
            Value::Number(Number::Integer(-1)),
            Value::Number(Number::Integer(2)),
            Value::Number(Number::Float(-3.5)),
        ])
    );

    let value = raw!({"low": -40, "high": 12, "deltas": [-1, -2,]});
    let object = value.as_object().unwrap();
    assert_eq!(object.get("low"), Some(&Value::Number(Number::Integer(-40))));
    assert_eq!(object.get("high"), Some(&Value::Number(Number::Integer(12))));
    assert_eq!(object.get("deltas").unwrap().to_string(), "[-1,-2]");

    let offset: i64 = 4;
    assert_eq!(raw!([(offset - 10), (-offset)]).to_string(), "[-6,-4]");
}
