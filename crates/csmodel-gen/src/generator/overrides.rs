//! Per-type renames and per-field type or attribute fixes.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::generator::{
  ast::{CsAttribute, CsType},
  registry::TypeKey,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverrideEntry {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub properties: Vec<PropertyOverride>,
}

impl OverrideEntry {
  pub fn renamed(name: impl Into<String>) -> Self {
    Self {
      name: Some(name.into()),
      properties: vec![],
    }
  }

  #[must_use]
  pub fn with_property(mut self, property: PropertyOverride) -> Self {
    self.properties.push(property);
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyOverride {
  pub name: String,
  #[serde(rename = "type", default)]
  pub ty: Option<CsType>,
  #[serde(default)]
  pub attributes: Vec<CsAttribute>,
}

impl PropertyOverride {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ty: None,
      attributes: vec![],
    }
  }

  #[must_use]
  pub fn with_type(mut self, ty: CsType) -> Self {
    self.ty = Some(ty);
    self
  }

  #[must_use]
  pub fn with_attribute(mut self, attribute: CsAttribute) -> Self {
    self.attributes.push(attribute);
    self
  }
}

/// Read-only for the duration of a run.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
  entries: IndexMap<TypeKey, OverrideEntry>,
}

impl OverrideTable {
  pub fn new(entries: impl IntoIterator<Item = (TypeKey, OverrideEntry)>) -> Self {
    Self {
      entries: entries.into_iter().collect(),
    }
  }

  pub fn lookup(&self, key: &str) -> Option<&OverrideEntry> {
    self.entries.get(key)
  }

  /// Replacement class name; an empty name counts as no replacement.
  pub fn type_name(&self, key: &str) -> Option<&str> {
    self
      .lookup(key)
      .and_then(|entry| entry.name.as_deref())
      .filter(|name| !name.is_empty())
  }

  /// First property override whose name matches `field`.
  pub fn property(&self, key: &str, field: &str) -> Option<&PropertyOverride> {
    self
      .lookup(key)
      .and_then(|entry| entry.properties.iter().find(|property| property.name == field))
  }

  pub fn keys(&self) -> impl Iterator<Item = &TypeKey> {
    self.entries.keys()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
