use crate::generator::ast::{CsArgument, CsAttribute, CsNamedArgument, CsType, SERIALIZATION_NAMESPACE};

#[test]
fn test_data_contract_has_no_parentheses() {
  let attribute = CsAttribute::data_contract();
  assert_eq!(attribute.to_string(), "[DataContract]");
  assert_eq!(attribute.ty.namespace.as_deref(), Some(SERIALIZATION_NAMESPACE));
}

#[test]
fn test_data_member_named_arguments() {
  assert_eq!(
    CsAttribute::data_member("Memory").to_string(),
    r#"[DataMember(Name = "Memory", EmitDefaultValue = false)]"#
  );
}

#[test]
fn test_query_string_parameter_arguments() {
  let plain = CsAttribute::query_string_parameter("t", false, None);
  assert_eq!(plain.to_string(), r#"[QueryStringParameter("t", false)]"#);
  assert!(plain.is_query_string_parameter());

  let converted = CsAttribute::query_string_parameter("all", true, Some("BoolQueryStringConverter"));
  assert_eq!(
    converted.to_string(),
    r#"[QueryStringParameter("all", true, typeof(BoolQueryStringConverter))]"#
  );
}

#[test]
fn test_positional_and_named_arguments_are_comma_joined() {
  let attribute = CsAttribute::builder()
    .ty(CsType::reference("JsonProperty").in_namespace("Newtonsoft.Json"))
    .arguments(vec![CsArgument::string("Name")])
    .named_arguments(vec![CsNamedArgument::new("Required", CsArgument::Literal("Required.Always".into()))])
    .build();
  assert_eq!(attribute.to_string(), r#"[JsonProperty("Name", Required = Required.Always)]"#);
}

#[test]
fn test_string_arguments_are_escaped() {
  assert_eq!(CsArgument::string(r#"a"b\c"#).to_string(), r#""a\"b\\c""#);
  assert_eq!(CsArgument::type_of("TimeSpanSecondsConverter").to_string(), "typeof(TimeSpanSecondsConverter)");
}

#[test]
fn test_deserialize_override_attribute() {
  let attribute: CsAttribute = serde_json::from_str(
    r#"{
      "type": {"name": "JsonConverter", "namespace": "Newtonsoft.Json"},
      "arguments": [{"literal": "typeof(TimeSpanSecondsConverter)"}]
    }"#,
  )
  .expect("valid attribute");
  assert_eq!(attribute.to_string(), "[JsonConverter(typeof(TimeSpanSecondsConverter))]");
  assert_eq!(attribute.ty.namespace.as_deref(), Some("Newtonsoft.Json"));
}
