use rowmap_core::{FieldMap, Record, Value};

#[test]
fn describe_lists_fields_in_order() {
    let record = Record::new(
        "Product",
        FieldMap::new()
            .with("title", "Hand Grinder".to_string())
            .with("price", Value::Real(79.5))
            .with("amount", 3_i64),
    );

    assert_eq!(
        record.describe(),
        "Product: (title=Hand Grinder, price=79.5, amount=3)"
    );
    assert_eq!(record.describe(), record.to_string());
}

#[test]
fn describe_renders_null_and_blob_markers() {
    let record = Record::new(
        "Attachment",
        FieldMap::new()
            .with("label", Value::Null)
            .with("payload", Value::Blob(vec![1, 2, 3])),
    );

    assert_eq!(
        record.describe(),
        "Attachment: (label=NULL, payload=<blob 3 bytes>)"
    );
}

#[test]
fn record_exposes_fields_and_values() {
    let fields = FieldMap::new().with("title", "Dune".to_string());
    let record = Record::new("Book", fields.clone());

    assert_eq!(record.type_name(), "Book");
    assert_eq!(record.get("title"), Some(&Value::Text("Dune".to_string())));
    assert_eq!(record.get("missing"), None);
    assert_eq!(record.fields(), &fields);
    assert_eq!(record.into_fields(), fields);
}

#[test]
fn json_object_deserializes_into_field_map() {
    let map: FieldMap = serde_json::from_str(
        r#"{"title":"Dune","year":1965,"price":7.99,"draft":false,"note":null}"#,
    )
    .unwrap();

    assert_eq!(map.get("title"), Some(&Value::Text("Dune".to_string())));
    assert_eq!(map.get("year"), Some(&Value::Integer(1965)));
    assert_eq!(map.get("price"), Some(&Value::Real(7.99)));
    assert_eq!(map.get("draft"), Some(&Value::Integer(0)));
    assert_eq!(map.get("note"), Some(&Value::Null));

    let names: Vec<&str> = map.names().collect();
    assert_eq!(names, vec!["title", "year", "price", "draft", "note"]);
}

#[test]
fn record_serializes_to_the_matching_json_object() {
    let record = Record::new(
        "Book",
        FieldMap::new()
            .with("title", "Dune".to_string())
            .with("year", 1965_i64)
            .with("note", Value::Null),
    );

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"title":"Dune","year":1965,"note":null}"#);
}

#[test]
fn nested_json_values_are_rejected() {
    let result: Result<FieldMap, _> = serde_json::from_str(r#"{"nested":{"x":1}}"#);
    assert!(result.is_err());
}
