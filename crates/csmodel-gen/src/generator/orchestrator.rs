//! Runs the generation pipeline for one catalog: resolve the roots, reject
//! file-name collisions, then render every model.

use std::collections::HashMap;

use crate::generator::{
  catalog::Catalog,
  codegen,
  converter::{Resolution, TypeMapper, TypeWalker, WellKnownTypes},
  errors::{GeneratorError, GeneratorResult},
  metrics::{GenerationStats, GenerationWarning},
  overrides::OverrideTable,
  registry::{DescriptorId, TypeRegistry},
  type_graph,
};

/// One rendered model, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub file_name: String,
  pub type_name: String,
  pub source_name: String,
  pub contents: String,
  pub property_count: usize,
  pub constructor_count: usize,
}

#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  pub files: Vec<GeneratedFile>,
  pub stats: GenerationStats,
}

pub struct Orchestrator {
  registry: TypeRegistry,
  overrides: OverrideTable,
  well_known: WellKnownTypes,
  roots: Vec<DescriptorId>,
  namespace: String,
}

impl Orchestrator {
  /// Builds the registry and override table described by `catalog` and
  /// checks that every root exists.
  pub fn from_catalog(catalog: &Catalog) -> GeneratorResult<Self> {
    let registry = catalog.registry()?;
    let roots = catalog
      .roots
      .iter()
      .map(|root| registry.lookup(root).ok_or_else(|| GeneratorError::UnknownRoot { key: root.clone() }))
      .collect::<GeneratorResult<Vec<_>>>()?;

    Ok(Self {
      registry,
      overrides: catalog.override_table()?,
      well_known: catalog.well_known_types(),
      roots,
      namespace: catalog.namespace.clone(),
    })
  }

  pub fn namespace(&self) -> &str {
    &self.namespace
  }

  pub fn resolve(&self) -> GeneratorResult<Resolution> {
    let mapper = TypeMapper::new(&self.registry, &self.well_known);
    TypeWalker::new(&self.registry, &self.overrides, mapper).resolve_all(&self.roots)
  }

  /// Resolves the roots and renders every model.
  ///
  /// Fails with [`GeneratorError::NameCollision`] before rendering when two
  /// models would share a file name.
  pub fn generate(&self) -> GeneratorResult<GeneratedOutput> {
    let resolution = self.resolve()?;

    let mut claimed = HashMap::new();
    for model in resolution.models.values() {
      if let Some(first) = claimed.insert(model.file_name(), model.source_name.as_str()) {
        return Err(GeneratorError::NameCollision {
          file_name: model.file_name(),
          first: first.to_string(),
          second: model.source_name.clone(),
        });
      }
    }

    let mut stats = GenerationStats::default();
    stats.record_cycles(type_graph::detect_cycles(&resolution.dependencies));
    stats.record_warnings(resolution.warnings);
    stats.record_warnings(
      self
        .overrides
        .keys()
        .filter(|key| !resolution.models.contains(key.as_str()))
        .map(|key| GenerationWarning::UnusedOverride { key: key.to_string() }),
    );

    let files = resolution
      .models
      .values()
      .map(|model| {
        stats.record_model(model);
        GeneratedFile {
          file_name: model.file_name(),
          type_name: model.name.clone(),
          source_name: model.source_name.clone(),
          contents: codegen::render(model, &self.namespace),
          property_count: model.properties.len(),
          constructor_count: model.constructors.len(),
        }
      })
      .collect();

    Ok(GeneratedOutput { files, stats })
  }
}
