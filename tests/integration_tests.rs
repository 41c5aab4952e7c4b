use serde_kata::{
    from_slice, from_str, from_str_with_options, from_value, raw, skeleton, to_string,
    to_string_with_options, to_vec, DocumentOptions, Encoding, Error, Format, Node, Schema,
};

fn basic_schema() -> Schema {
    Schema::new()
        .field("str", Format::string())
        .field("int", Format::int())
        .field("double", Format::float())
        .field("boolTrue", Format::bool())
        .field("boolFalse", Format::bool())
}

const BASIC_TEXT: &str =
    r#"{"str": "text", "int": 1, "double": 3.25, "boolTrue": true, "boolFalse": false}"#;

fn object_schema() -> Schema {
    Schema::new()
        .field("objInt", Format::object(Schema::new().field("int", Format::int())))
        .field(
            "objObj",
            Format::object(
                Schema::new().field("obj", Format::object(Schema::new().field("str", Format::string()))),
            ),
        )
        .field(
            "objArr",
            Format::object(Schema::new().field("arr", Format::array(Format::bool()))),
        )
        .field("objEmpty", Format::object(Schema::new()))
}

const OBJECT_TEXT: &str = r#"{
    "objInt": {"int": 1},
    "objObj": {"obj": {"str": "text"}},
    "objArr": {"arr": [true, false]},
    "objEmpty": {}
}"#;

fn array_schema() -> Schema {
    Schema::new()
        .field("arrStr", Format::array(Format::string()))
        .field(
            "arr",
            Format::object(
                Schema::new()
                    .field("arrInt", Format::array(Format::int()))
                    .field("arrDouble", Format::array(Format::float())),
            ),
        )
        .field(
            "arrObj",
            Format::array(Format::object(Schema::new().field("bool", Format::bool()))),
        )
        .field("arrNest", Format::array(Format::array(Format::int())))
        .field("arrEmpty", Format::array(Format::string()))
        .field("arrArr", Format::array(Format::array(Format::string())))
}

const ARRAY_TEXT: &str = r#"{
    "arrStr": ["a", "b", "c"],
    "arr": {"arrInt": [0, 1, 2], "arrDouble": [1.0, 1.1, 1.2]},
    "arrObj": [{"bool": true}, {"bool": false}],
    "arrNest": [[0, 1, 2], [0, 1, 2, 3]],
    "arrEmpty": [],
    "arrArr": [[]]
}"#;

#[test]
fn test_basic_types() {
    let doc = from_str(BASIC_TEXT, &basic_schema()).unwrap();

    assert_eq!(doc.get("str").as_str().unwrap(), "text");
    assert_eq!(doc.get("int").as_int().unwrap(), 1);
    assert_eq!(doc.get("double").as_float().unwrap(), 3.25);
    assert!(doc.get("boolTrue").as_bool().unwrap());
    assert!(!doc.get("boolFalse").as_bool().unwrap());
}

#[test]
fn test_basic_types_from_bytes() {
    let doc = from_slice(BASIC_TEXT.as_bytes(), &basic_schema()).unwrap();
    assert_eq!(doc.get("str").value_or(String::new()), "text");
    assert_eq!(doc.get("int").value_or(0i64), 1);
}

#[test]
fn test_objects() {
    let doc = from_str(OBJECT_TEXT, &object_schema()).unwrap();

    assert_eq!(doc.get("objInt").get("int").as_int().unwrap(), 1);
    assert_eq!(doc.get("objObj").get("obj").get("str").as_str().unwrap(), "text");
    assert!(doc.get("objArr").get("arr").at(0).as_bool().unwrap());
    assert!(!doc.get("objArr").get("arr").at(1).as_bool().unwrap());
    assert!(doc.get("objEmpty").exists());

    assert!(!doc.get("unknown").exists());
    assert!(!doc.get("objInt").get("unknown").exists());
    assert!(!doc.get("objArr").get("arr").at(10000).exists());
}

#[test]
fn test_arrays() {
    let doc = from_str(ARRAY_TEXT, &array_schema()).unwrap();

    assert_eq!(doc.get("arrStr").at(2).as_str().unwrap(), "c");
    assert_eq!(doc.get("arr").get("arrInt").at(1).as_int().unwrap(), 1);
    assert_eq!(doc.get("arr").get("arrDouble").at(1).as_float().unwrap(), 1.1);
    assert!(doc.get("arrObj").at(0).get("bool").as_bool().unwrap());
    assert!(!doc.get("arrObj").at(1).get("bool").as_bool().unwrap());
    assert_eq!(doc.get("arrNest").at(0).at(0).as_int().unwrap(), 0);
    assert_eq!(doc.get("arrNest").at(1).at(2).as_int().unwrap(), 2);
    assert!(doc.get("arrEmpty").exists());
    assert!(doc.get("arrArr").exists());
    assert_eq!(doc.get("arrArr").at(0).len(), 0);
}

#[test]
fn test_typed_reads_fail_with_cause() {
    let doc = from_str(BASIC_TEXT, &basic_schema()).unwrap();

    assert!(matches!(doc.get("int").as_str(), Err(Error::TypeMismatch { .. })));
    assert!(matches!(doc.get("str").as_int(), Err(Error::TypeMismatch { .. })));
    assert!(matches!(doc.get("int").as_float(), Err(Error::TypeMismatch { .. })));
    assert!(matches!(doc.get("int").as_bool(), Err(Error::TypeMismatch { .. })));

    assert_eq!(doc.get("unknown").as_str(), Err(Error::not_found("root", "unknown")));
    assert!(doc.get("unknown").as_int().is_err());
    assert_eq!(doc.get("unknown").value_or(String::from("text")), "text");
    assert_eq!(doc.get("unknown").value_or(1i64), 1);
    assert_eq!(doc.get("unknown").value_or(3.25f64), 3.25);
    assert!(doc.get("unknown").value_or(true));
    assert_eq!(doc.get_or("unknown", 5i64), 5);
}

#[test]
fn test_concrete_person_scenario() {
    let schema = Schema::new()
        .field("name", Format::string())
        .field("age", Format::int().or_null())
        .field("tags", Format::array(Format::string().or_nothing()));

    let doc = from_str(r#"{"name":"Ada","age":null,"tags":["a",null,"b"]}"#, &schema).unwrap();
    assert!(doc.get("age").is_null());
    assert_eq!(doc.get("tags").len(), 2);
    assert_eq!(to_string(&doc).unwrap(), r#"{"name":"Ada","age":null,"tags":["a","b"]}"#);

    let missing_age = from_str(r#"{"name":"Ada","tags":["a",null,"b"]}"#, &schema).unwrap();
    assert_eq!(missing_age, doc);
}

#[test]
fn test_missing_required_field_fails_construction() {
    let schema = Schema::new()
        .field("name", Format::string())
        .field("age", Format::int());

    match from_str(r#"{"name":"Ada"}"#, &schema) {
        Err(Error::TypeMismatch { key, expected, found }) => {
            assert_eq!(key, "age");
            assert_eq!(expected, "int");
            assert_eq!(found, "nothing");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_one_bad_element_fails_the_document() {
    let schema = Schema::new().field("list", Format::array(Format::int()));
    match from_str(r#"{"list": [0, 1, "2"]}"#, &schema) {
        Err(Error::TypeMismatch { key, .. }) => assert_eq!(key, "list[2]"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_malformed_input() {
    assert!(matches!(from_str("{", &Schema::new()), Err(Error::Parse(_))));
    assert!(matches!(from_slice(&[0xff, 0xfe], &Schema::new()), Err(Error::Encoding { .. })));
}

#[test]
fn test_convert_round_trip_with_merged_schema() {
    let mut schema = basic_schema();
    schema += object_schema();

    let raw = raw!({
        "str": "text", "int": 1, "double": 3.25, "boolTrue": true, "boolFalse": false,
        "objInt": {"int": 1},
        "objObj": {"obj": {"str": "text"}},
        "objArr": {"arr": [true, false]},
        "objEmpty": {}
    });
    let doc = from_value(&raw, &schema).unwrap();

    let bytes = to_vec(&doc).unwrap();
    let back = from_slice(&bytes, &schema).unwrap();
    assert_eq!(back.to_value().unwrap(), raw);
    assert_eq!(back.get("objObj").get("obj").get("str").as_str().unwrap(), "text");
    assert!(!back.get("objArr").get("arr").at(10000).exists());

    let text = to_string(&doc).unwrap();
    let back = from_str(&text, &(basic_schema() + object_schema())).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_pretty_output_parses_back() {
    let doc = from_str(ARRAY_TEXT, &array_schema()).unwrap();
    let pretty = to_string_with_options(&doc, DocumentOptions::pretty()).unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(from_str(&pretty, &array_schema()).unwrap(), doc);
}

#[test]
fn test_ascii_encoding_error() {
    let schema = Schema::new().field("str", Format::string());
    let ascii = DocumentOptions::new().with_encoding(Encoding::Ascii);

    let result = from_str_with_options(r#"{"str": "あいうえお"}"#, &schema, ascii.clone());
    assert!(matches!(result, Err(Error::Encoding { .. })));

    let doc = from_str(r#"{"str": "あいうえお"}"#, &schema).unwrap();
    assert!(matches!(
        to_string_with_options(&doc, ascii),
        Err(Error::Encoding { .. })
    ));
}

#[test]
fn test_skeleton_then_fill() {
    let schema = Schema::new()
        .field("id", Format::int())
        .field("note", Format::string().or_nothing())
        .field("score", Format::float().or_null())
        .field(
            "items",
            Format::array(Format::object(
                Schema::new()
                    .field("name", Format::string())
                    .field("count", Format::int().or_null()),
            )),
        );

    let mut doc = skeleton(&schema).unwrap();
    assert!(matches!(to_string(&doc), Err(Error::UnresolvedData { .. })));
    assert_eq!(doc.get("items").len(), 1);
    assert!(doc.get("items").at(0).get("count").is_null());

    doc.update(|root, sink| {
        root.set("id", Node::value(7), sink);
        root.get_mut("items").at_mut(0).set("name", Node::value("bolt"), sink);
    })
    .unwrap();

    assert_eq!(
        to_string(&doc).unwrap(),
        r#"{"id":7,"score":null,"items":[{"name":"bolt","count":null}]}"#
    );
}

#[test]
fn test_skeleton_rejects_wrapper() {
    let schema = Schema::new().field("w", Format::wrapper());
    match skeleton(&schema) {
        Err(Error::TypeMismatch { key, found, .. }) => {
            assert_eq!(key, "w");
            assert_eq!(found, "nothing");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_copy_fields_between_documents() {
    let schema = basic_schema();
    let mut target = from_str(BASIC_TEXT, &schema).unwrap();
    let source = from_value(
        &raw!({"str": "other", "int": 2, "double": 0.5, "boolTrue": false, "boolFalse": true}),
        &schema,
    )
    .unwrap();

    target.copy_fields(&source, &["str", "int"]);
    assert_eq!(target.get("str").as_str().unwrap(), "other");
    assert_eq!(target.get("int").as_int().unwrap(), 2);
    assert_eq!(target.get("double").as_float().unwrap(), 3.25);
}

#[test]
fn test_values_outside_i64_become_floats() {
    let schema = Schema::new().field("big", Format::float());
    let doc = from_str(r#"{"big": 18446744073709551615}"#, &schema).unwrap();
    assert!(doc.get("big").as_float().unwrap() > 1.8e19);

    let schema = Schema::new().field("big", Format::int());
    assert!(from_str(r#"{"big": 18446744073709551615}"#, &schema).is_err());
}

#[test]
fn test_unknown_keys_are_not_kept() {
    let schema = Schema::new().field("a", Format::int());
    let doc = from_str(r#"{"a": 1, "b": [1, 2, 3]}"#, &schema).unwrap();
    assert!(!doc.get("b").exists());
    assert_eq!(doc.to_value().unwrap(), raw!({"a": 1}));
    assert_eq!(doc.root().len(), 1);
}
