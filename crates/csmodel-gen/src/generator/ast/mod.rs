mod attributes;
mod types;

#[cfg(test)]
mod tests;

pub use attributes::{CsArgument, CsAttribute, CsNamedArgument, SERIALIZATION_NAMESPACE};
pub use types::{COLLECTIONS_NAMESPACE, CsType};

use crate::generator::registry::TypeKey;

pub const GENERATED_SUFFIX: &str = ".Generated.cs";

/// C# auto-property
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct CsProperty {
  #[builder(into)]
  pub name: String,
  pub ty: CsType,
  #[builder(default)]
  pub is_optional: bool,
  #[builder(default)]
  pub attributes: Vec<CsAttribute>,
  #[builder(into)]
  pub default_value: Option<String>,
}

impl CsProperty {
  /// Type as written in the declaration; value types marked optional gain `?`.
  pub fn declared_type(&self) -> String {
    if self.ty.nullable && self.is_optional {
      format!("{}?", self.ty.name)
    } else {
      self.ty.name.clone()
    }
  }

  pub fn is_parameter_bound(&self) -> bool {
    self.attributes.iter().any(CsAttribute::is_query_string_parameter)
  }
}

/// Copy-constructor parameter for one embedded member.
///
/// `assignments` holds the property names copied from the parameter, taken
/// from the embedded model when the parameter was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsParameter {
  pub type_name: String,
  pub name: String,
  pub assignments: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsConstructor {
  pub parameters: Vec<CsParameter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelType {
  pub key: TypeKey,
  pub name: String,
  pub source_name: String,
  pub constructors: Vec<CsConstructor>,
  pub properties: Vec<CsProperty>,
  pub attributes: Vec<CsAttribute>,
}

impl ModelType {
  pub fn new(key: TypeKey, name: impl Into<String>, source_name: impl Into<String>) -> Self {
    Self {
      key,
      name: name.into(),
      source_name: source_name.into(),
      constructors: vec![],
      properties: vec![],
      attributes: vec![CsAttribute::data_contract()],
    }
  }

  pub fn file_name(&self) -> String {
    format!("{}{GENERATED_SUFFIX}", self.name)
  }

  /// Adds the parameterless and the copy constructor on first use.
  pub fn ensure_copy_constructor(&mut self) {
    if self.constructors.is_empty() {
      self.constructors = vec![CsConstructor::default(), CsConstructor::default()];
    }
  }

  pub fn add_copy_parameter(&mut self, parameter: CsParameter) {
    self.ensure_copy_constructor();
    self.constructors[1].parameters.push(parameter);
  }

  pub fn copy_constructor(&self) -> Option<&CsConstructor> {
    self.constructors.get(1)
  }

  pub fn property(&self, name: &str) -> Option<&CsProperty> {
    self.properties.iter().find(|property| property.name == name)
  }
}
