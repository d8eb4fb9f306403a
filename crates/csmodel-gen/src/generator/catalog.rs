//! JSON catalog describing the source types, the roots to generate from, and
//! the overrides to apply.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::generator::{
  ast::CsType,
  converter::WellKnownTypes,
  errors::{GeneratorError, GeneratorResult},
  overrides::{OverrideEntry, OverrideTable},
  registry::{TypeKey, TypeRegistry, TypeSpec, is_identifier},
};

pub const DEFAULT_NAMESPACE: &str = "Docker.DotNet.Models";

fn default_namespace() -> String {
  DEFAULT_NAMESPACE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
  #[serde(default = "default_namespace")]
  pub namespace: String,
  #[serde(default)]
  pub types: IndexMap<String, TypeSpec>,
  #[serde(default)]
  pub roots: Vec<String>,
  #[serde(default)]
  pub overrides: IndexMap<String, OverrideEntry>,
  #[serde(default)]
  pub well_known: IndexMap<String, CsType>,
}

impl Catalog {
  pub fn from_slice(bytes: &[u8], origin: &str) -> GeneratorResult<Self> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut de).map_err(|err| GeneratorError::Catalog {
      path: origin.to_string(),
      message: format!("{} (at {})", err.inner(), err.path()),
    })
  }

  pub fn registry(&self) -> GeneratorResult<TypeRegistry> {
    let mut builder = TypeRegistry::builder();
    for (key, spec) in &self.types {
      builder.define(key.as_str(), spec.clone());
    }
    builder.build()
  }

  /// Rejects renames that are not plain identifiers, since the name becomes
  /// both the class name and the output file stem.
  pub fn override_table(&self) -> GeneratorResult<OverrideTable> {
    for (key, entry) in &self.overrides {
      if let Some(name) = entry.name.as_deref().filter(|name| !name.is_empty() && !is_identifier(name)) {
        return Err(GeneratorError::InvalidTypeName {
          key: key.clone(),
          name: name.to_string(),
        });
      }
    }

    Ok(OverrideTable::new(
      self
        .overrides
        .iter()
        .map(|(key, entry)| (TypeKey::from(key.as_str()), entry.clone())),
    ))
  }

  pub fn well_known_types(&self) -> WellKnownTypes {
    let mut well_known = WellKnownTypes::default();
    well_known.extend(
      self
        .well_known
        .iter()
        .map(|(key, ty)| (TypeKey::from(key.as_str()), ty.clone())),
    );
    well_known
  }
}
