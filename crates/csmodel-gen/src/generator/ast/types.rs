use std::collections::BTreeSet;

use serde::Deserialize;

pub const COLLECTIONS_NAMESPACE: &str = "System.Collections.Generic";

/// A C# type reference.
///
/// `nullable` marks value types that accept the `?` suffix. `optional` is set
/// when the type was reached through a pointer. Generic and array element
/// names never carry the suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CsType {
  #[serde(default)]
  pub namespace: Option<String>,
  pub name: String,
  #[serde(default)]
  pub nullable: bool,
  #[serde(skip)]
  pub optional: bool,
  #[serde(skip)]
  pub type_arg_namespaces: BTreeSet<String>,
}

impl CsType {
  pub fn value(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      nullable: true,
      ..Self::default()
    }
  }

  pub fn reference(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Self::default()
    }
  }

  #[must_use]
  pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
    self.namespace = Some(namespace.into());
    self
  }

  #[must_use]
  pub fn with_optional(mut self) -> Self {
    self.optional = true;
    self
  }

  pub fn array_of(elem: &Self) -> Self {
    Self {
      name: format!("{}[]", elem.name),
      type_arg_namespaces: elem.namespaces().map(str::to_string).collect(),
      ..Self::default()
    }
  }

  pub fn list_of(elem: &Self) -> Self {
    Self {
      namespace: Some(COLLECTIONS_NAMESPACE.to_string()),
      name: format!("IList<{}>", elem.name),
      type_arg_namespaces: elem.namespaces().map(str::to_string).collect(),
      ..Self::default()
    }
  }

  pub fn dictionary_of(key: &Self, value: &Self) -> Self {
    Self {
      namespace: Some(COLLECTIONS_NAMESPACE.to_string()),
      name: format!("IDictionary<{}, {}>", key.name, value.name),
      type_arg_namespaces: key.namespaces().chain(value.namespaces()).map(str::to_string).collect(),
      ..Self::default()
    }
  }

  /// Every namespace the type needs in scope, its own first.
  pub fn namespaces(&self) -> impl Iterator<Item = &str> {
    self
      .namespace
      .as_deref()
      .into_iter()
      .chain(self.type_arg_namespaces.iter().map(String::as_str))
      .filter(|namespace| !namespace.is_empty())
  }
}
