use crate::generator::registry::{StructTag, StructTagError};

#[test]
fn test_lookup_multiple_keys() {
  let tag: StructTag = r#"json:"Name,omitempty" rest:"query,name,required""#.parse().expect("valid tag");
  assert_eq!(tag.lookup("json"), Some("Name,omitempty"));
  assert_eq!(tag.lookup("rest"), Some("query,name,required"));
  assert_eq!(tag.lookup("yaml"), None);
  assert_eq!(tag.json_name(), Some("Name"));
}

#[test]
fn test_first_duplicate_wins() {
  let tag: StructTag = r#"json:"first" json:"second""#.parse().expect("valid tag");
  assert_eq!(tag.lookup("json"), Some("first"));
}

#[test]
fn test_empty_and_whitespace() {
  let tag: StructTag = "   ".parse().expect("blank tag is valid");
  assert!(tag.is_empty());

  let tag: StructTag = r#"  json:"-"   "#.parse().expect("padded tag");
  assert_eq!(tag.json_name(), Some("-"));
}

#[test]
fn test_escapes_in_value() {
  let tag: StructTag = r#"doc:"say \"hi\"""#.parse().expect("escaped quotes");
  assert_eq!(tag.lookup("doc"), Some(r#"say "hi""#));
}

#[test]
fn test_malformed_tags() {
  assert_eq!(
    "json".parse::<StructTag>(),
    Err(StructTagError::MissingColon { key: "json".to_string() })
  );
  assert_eq!(
    "json:Name".parse::<StructTag>(),
    Err(StructTagError::UnquotedValue { key: "json".to_string() })
  );
  assert_eq!(
    r#"json:"Name"#.parse::<StructTag>(),
    Err(StructTagError::Unterminated { key: "json".to_string() })
  );
}

#[test]
fn test_display_round_trips() {
  let raw = r#"json:"Name,omitempty" rest:"headers,X-Registry-Auth""#;
  let tag: StructTag = raw.parse().expect("valid tag");
  assert_eq!(tag.to_string(), raw);
}
