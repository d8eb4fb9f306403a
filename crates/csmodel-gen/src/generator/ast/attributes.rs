use std::fmt;

use serde::Deserialize;

use super::CsType;

pub const SERIALIZATION_NAMESPACE: &str = "System.Runtime.Serialization";
pub const QUERY_STRING_PARAMETER: &str = "QueryStringParameter";

/// A positional attribute argument. String arguments render quoted,
/// literals (`true`, `typeof(X)`) render as written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsArgument {
  String(String),
  Literal(String),
}

impl CsArgument {
  pub fn string(value: impl Into<String>) -> Self {
    Self::String(value.into())
  }

  pub fn bool(value: bool) -> Self {
    Self::Literal(value.to_string())
  }

  pub fn type_of(type_name: &str) -> Self {
    Self::Literal(format!("typeof({type_name})"))
  }
}

impl fmt::Display for CsArgument {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::String(value) => write!(f, "\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\"")),
      Self::Literal(value) => f.write_str(value),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CsNamedArgument {
  pub name: String,
  pub value: CsArgument,
}

impl CsNamedArgument {
  pub fn new(name: impl Into<String>, value: CsArgument) -> Self {
    Self {
      name: name.into(),
      value,
    }
  }
}

impl fmt::Display for CsNamedArgument {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} = {}", self.name, self.value)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, bon::Builder)]
#[serde(deny_unknown_fields)]
pub struct CsAttribute {
  #[serde(rename = "type")]
  pub ty: CsType,
  #[builder(default)]
  #[serde(default)]
  pub arguments: Vec<CsArgument>,
  #[builder(default)]
  #[serde(default)]
  pub named_arguments: Vec<CsNamedArgument>,
}

impl CsAttribute {
  pub fn data_contract() -> Self {
    Self::builder()
      .ty(CsType::reference("DataContract").in_namespace(SERIALIZATION_NAMESPACE))
      .build()
  }

  pub fn data_member(json_name: &str) -> Self {
    Self::builder()
      .ty(CsType::reference("DataMember").in_namespace(SERIALIZATION_NAMESPACE))
      .named_arguments(vec![
        CsNamedArgument::new("Name", CsArgument::string(json_name)),
        CsNamedArgument::new("EmitDefaultValue", CsArgument::bool(false)),
      ])
      .build()
  }

  pub fn query_string_parameter(name: &str, required: bool, converter: Option<&str>) -> Self {
    let mut arguments = vec![CsArgument::string(name), CsArgument::bool(required)];
    arguments.extend(converter.map(CsArgument::type_of));
    Self::builder()
      .ty(CsType::reference(QUERY_STRING_PARAMETER))
      .arguments(arguments)
      .build()
  }

  pub fn is_query_string_parameter(&self) -> bool {
    self.ty.name == QUERY_STRING_PARAMETER
  }
}

impl fmt::Display for CsAttribute {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}", self.ty.name)?;
    if !self.arguments.is_empty() || !self.named_arguments.is_empty() {
      let rendered = self
        .arguments
        .iter()
        .map(ToString::to_string)
        .chain(self.named_arguments.iter().map(ToString::to_string))
        .collect::<Vec<_>>();
      write!(f, "({})", rendered.join(", "))?;
    }
    f.write_str("]")
  }
}
