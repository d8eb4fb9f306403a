use crate::generator::ast::{COLLECTIONS_NAMESPACE, CsType};

fn date_time() -> CsType {
  CsType::value("DateTime").in_namespace("System")
}

#[test]
fn test_generic_arguments_carry_namespaces() {
  let list = CsType::list_of(&date_time());
  assert_eq!(list.name, "IList<DateTime>");
  assert_eq!(list.namespaces().collect::<Vec<_>>(), vec![COLLECTIONS_NAMESPACE, "System"]);
  assert!(!list.nullable);
}

#[test]
fn test_optional_element_keeps_plain_name() {
  let element = CsType::value("long").with_optional();
  assert_eq!(CsType::list_of(&element).name, "IList<long>");
  assert_eq!(CsType::array_of(&element).name, "long[]");
  assert_eq!(
    CsType::dictionary_of(&CsType::reference("string"), &CsType::value("bool").with_optional()).name,
    "IDictionary<string, bool>"
  );

  let reference = CsType::reference("string").with_optional();
  assert_eq!(CsType::list_of(&reference).name, "IList<string>");
}

#[test]
fn test_dictionary_and_array_names() {
  let key = CsType::reference("string");
  let value = CsType::list_of(&CsType::reference("string"));
  let dictionary = CsType::dictionary_of(&key, &value);
  assert_eq!(dictionary.name, "IDictionary<string, IList<string>>");
  assert_eq!(dictionary.namespaces().collect::<Vec<_>>(), vec![COLLECTIONS_NAMESPACE, COLLECTIONS_NAMESPACE]);

  let array = CsType::array_of(&CsType::value("byte"));
  assert_eq!(array.name, "byte[]");
  assert_eq!(array.namespaces().count(), 0);
}

#[test]
fn test_deserialize_from_catalog_form() {
  let ty: CsType = serde_json::from_str(r#"{"name": "TimeSpan", "namespace": "System", "nullable": true}"#)
    .expect("valid type");
  assert_eq!(ty, CsType::value("TimeSpan").in_namespace("System"));

  let ty: CsType = serde_json::from_str(r#"{"name": "RestartPolicyKind"}"#).expect("valid type");
  assert_eq!(ty, CsType::reference("RestartPolicyKind"));
}
