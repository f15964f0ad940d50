//! End-to-end tests for the dictionary builder and schema documents.
//!
//! Schema and descriptor documents are written to temporary files and
//! loaded through the public API, the same path the CLI takes.

use std::io::Write;

use envdict_core::{catalog, DictionaryError, EnvdictError, TypeClass};
use envdict_schema::{
    load_descriptor_records, load_descriptors, load_schema, Descriptor, Dictionary, RawValues,
    SchemaDocument, SchemaMap, VarDescriptor,
};
use serde_json::json;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_map_schema_from_yaml_file() {
    let file = write_temp(".yaml", "API_KEY: string\nPORT: number\nDEBUG: any\n");
    let schema = load_schema(file.path()).unwrap();

    let raw = RawValues::from_env_vars([
        ("API_KEY", "secret"),
        ("PORT", "3000"),
        ("DEBUG", "1"),
        ("HOME", "/root"),
    ]);
    let dict = schema.build(raw).unwrap();

    assert_eq!(dict.get("API_KEY"), Some(&json!("secret")));
    assert_eq!(dict.get("PORT"), Some(&json!(3000)));
    assert_eq!(dict.get("DEBUG"), Some(&json!("1")));
    assert!(!dict.contains_key("HOME"));

    let types = dict.types().unwrap();
    assert_eq!(types["API_KEY"], TypeClass::String);
    assert_eq!(types["PORT"], TypeClass::Number);
    assert_eq!(types["DEBUG"], TypeClass::Object);
}

#[test]
fn test_var_schema_from_json_file() {
    let file = write_temp(
        ".json",
        r#"[{"var": "PORT", "type": "number"}, {"var": "HOST", "type": "string"}]"#,
    );
    let schema = load_schema(file.path()).unwrap();
    assert!(matches!(schema, SchemaDocument::Vars(ref v) if v.len() == 2));

    let err = schema
        .build(RawValues::from_env_vars([("PORT", "eighty"), ("HOST", "h")]))
        .unwrap_err();
    assert_eq!(err.to_string(), r#"Invalid environment variable "PORT"."#);
}

#[test]
fn test_unknown_kind_in_schema_file() {
    let file = write_temp(".yml", "PORT: integer\n");
    let err = load_schema(file.path()).unwrap_err();
    assert!(matches!(err, EnvdictError::UnknownKind(ref k) if k == "integer"));
}

#[test]
fn test_unparseable_schema_file() {
    let file = write_temp(".json", "{ not json");
    let err = load_schema(file.path()).unwrap_err();
    assert!(matches!(err, EnvdictError::DocumentLoad { .. }));
}

#[test]
fn test_missing_schema_file() {
    let err = load_schema(std::path::Path::new("/nonexistent/schema.yaml")).unwrap_err();
    assert!(matches!(err, EnvdictError::DocumentLoad { .. }));
    assert!(err.to_string().contains("cannot read file"));
}

#[test]
fn test_descriptor_records_from_yaml_file() {
    let file = write_temp(
        ".yaml",
        concat!(
            "- HOST: localhost\n  type: string\n",
            "- PORT: 8080\n  type: number\n",
            "- TAGS: [a, b]\n  type: array\n",
        ),
    );
    let records = load_descriptor_records(file.path()).unwrap();
    let dict = Dictionary::from_descriptor_values(&records).unwrap();

    assert_eq!(dict.get_str("HOST"), Some("localhost"));
    assert_eq!(dict.get_i64("PORT"), Some(8080));
    assert_eq!(dict.get("TAGS"), Some(&json!(["a", "b"])));
    assert!(dict.types().is_none());
}

#[test]
fn test_load_descriptors_parses_records() {
    let file = write_temp(".json", r#"[{"DEBUG": false, "type": "boolean"}]"#);
    let descriptors = load_descriptors(file.path()).unwrap();
    assert_eq!(descriptors, vec![Descriptor::new("DEBUG", json!(false), catalog::boolean())]);
    let dict = Dictionary::from_descriptor_list(descriptors).unwrap();
    assert_eq!(dict.get_bool("DEBUG"), Some(false));
}

#[test]
fn test_load_descriptors_reports_missing_type() {
    let file = write_temp(".yaml", "- HOST: localhost\n");
    let err = load_descriptors(file.path()).unwrap_err();
    assert!(matches!(err, EnvdictError::Dictionary(DictionaryError::MissingType)));
}

#[test]
fn test_descriptor_records_errors() {
    let cases = [
        (r#"[{"type": "string"}]"#, "Descriptor must have a variable name"),
        (r#"[{"API_KEY": "secret"}]"#, "Descriptor must have a type"),
        (
            r#"[{"PORT": "3000", "type": "number"}]"#,
            r#"ENV value "PORT" is not valid for the provided type"#,
        ),
    ];
    for (content, message) in cases {
        let file = write_temp(".json", content);
        let records = load_descriptor_records(file.path()).unwrap();
        let err = Dictionary::from_descriptor_values(&records).unwrap_err();
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn test_descriptor_document_must_be_sequence() {
    let file = write_temp(".json", r#"{"PORT": 1}"#);
    let err = load_descriptor_records(file.path()).unwrap_err();
    assert!(matches!(err, EnvdictError::MalformedDocument(_)));
}

#[test]
fn test_strategies_disagree_on_numeric_strings() {
    let raw = RawValues::new().with("PORT", json!("3000"));

    let coerced =
        Dictionary::from_schema_map(&raw, &SchemaMap::new().with("PORT", catalog::number()))
            .unwrap();
    assert_eq!(coerced.get("PORT"), Some(&json!(3000)));

    let coerced =
        Dictionary::from_var_descriptors(&raw, &[VarDescriptor::new("PORT", catalog::number())])
            .unwrap();
    assert_eq!(coerced.get("PORT"), Some(&json!(3000)));

    let err = Dictionary::from_descriptor_list([Descriptor::new(
        "PORT",
        json!("3000"),
        catalog::number(),
    )])
    .unwrap_err();
    assert_eq!(err, DictionaryError::InvalidValue { key: "PORT".into() });
}

#[test]
fn test_object_and_array_values_kept_intact() {
    let config = json!({"url": "https://api.example.com"});
    let list = json!([1, 2, 3]);
    let raw = RawValues::new()
        .with("CONFIG", config.clone())
        .with("ITEMS", list.clone())
        .with("MIXED", json!("anything"));
    let schema = SchemaMap::new()
        .with("CONFIG", catalog::object())
        .with("ITEMS", catalog::array())
        .with("MIXED", catalog::any());

    let dict = Dictionary::from_schema_map(&raw, &schema).unwrap();
    assert_eq!(dict.get("CONFIG"), Some(&config));
    assert_eq!(dict.get("ITEMS"), Some(&list));
    assert_eq!(dict.get("MIXED"), Some(&json!("anything")));
}

#[test]
fn test_dictionary_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Dictionary>();
    assert_send_sync::<SchemaMap>();
    assert_send_sync::<Descriptor>();
    assert_send_sync::<VarDescriptor>();
}
