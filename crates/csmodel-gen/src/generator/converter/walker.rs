use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::{
  fields::{FieldContext, convert_field},
  store::ResolvedModels,
  type_mapper::TypeMapper,
};
use crate::generator::{
  ast::{CsParameter, ModelType},
  errors::{GeneratorError, GeneratorResult},
  metrics::{GenerationWarning, SkipReason},
  overrides::OverrideTable,
  registry::{DescriptorId, FieldDescriptor, Kind, TypeDescriptor, TypeKey, TypeKind, TypeRegistry},
};

/// Output of one resolution run.
#[derive(Debug, Default)]
pub struct Resolution {
  pub models: ResolvedModels,
  /// Model-to-model references, used for cycle reporting.
  pub dependencies: BTreeMap<TypeKey, BTreeSet<TypeKey>>,
  pub warnings: Vec<GenerationWarning>,
}

/// Walks the descriptor graph from a set of roots and synthesizes one model
/// per reachable named struct.
///
/// A model is stored before its fields are visited, so recursive references
/// find it and return immediately.
pub(crate) struct TypeWalker<'a> {
  registry: &'a TypeRegistry,
  overrides: &'a OverrideTable,
  mapper: TypeMapper<'a>,
  models: ResolvedModels,
  in_progress: HashSet<TypeKey>,
  dependencies: BTreeMap<TypeKey, BTreeSet<TypeKey>>,
  warnings: Vec<GenerationWarning>,
}

impl<'a> TypeWalker<'a> {
  pub(crate) fn new(registry: &'a TypeRegistry, overrides: &'a OverrideTable, mapper: TypeMapper<'a>) -> Self {
    Self {
      registry,
      overrides,
      mapper,
      models: ResolvedModels::default(),
      in_progress: HashSet::new(),
      dependencies: BTreeMap::new(),
      warnings: vec![],
    }
  }

  pub(crate) fn resolve_all(mut self, roots: &[DescriptorId]) -> GeneratorResult<Resolution> {
    for &root in roots {
      self.resolve(root)?;
    }
    Ok(Resolution {
      models: self.models,
      dependencies: self.dependencies,
      warnings: self.warnings,
    })
  }

  pub(crate) fn resolve(&mut self, id: DescriptorId) -> GeneratorResult<()> {
    let registry = self.registry;
    let descriptor = registry.get(id);
    let key = descriptor.key.as_str();

    if self.models.contains(key) || self.mapper.is_well_known(id) {
      return Ok(());
    }
    if !descriptor.is_named() {
      return Err(GeneratorError::UnnamedType { key: key.to_string() });
    }
    let TypeKind::Struct(fields) = &descriptor.kind else {
      return Err(GeneratorError::UnmappableType {
        key: key.to_string(),
        kind: descriptor.kind.kind(),
      });
    };

    let name = self.overrides.type_name(key).unwrap_or(&descriptor.name);
    self.models.insert(ModelType::new(descriptor.key.clone(), name, key));
    self.in_progress.insert(descriptor.key.clone());

    for field in fields {
      self.visit_field(descriptor, field)?;
    }

    self.in_progress.remove(key);
    Ok(())
  }

  fn skip(&mut self, owner: &TypeDescriptor, field: &FieldDescriptor, reason: SkipReason) {
    self.warnings.push(GenerationWarning::SkippedField {
      type_name: owner.key.to_string(),
      field: field.name.clone(),
      reason,
    });
  }

  fn record_dependency(&mut self, owner: &TypeKey, target: &TypeKey) {
    self.dependencies.entry(owner.clone()).or_default().insert(target.clone());
  }

  fn visit_field(&mut self, owner: &TypeDescriptor, field: &FieldDescriptor) -> GeneratorResult<()> {
    let registry = self.registry;
    let field_type = registry.get(field.ty);

    match field_type.kind.kind() {
      kind @ (Kind::Func | Kind::Uintptr) => {
        self.skip(owner, field, SkipReason::Unsupported { kind });
        return Ok(());
      }
      Kind::Struct if !field_type.is_named() => {
        self.skip(owner, field, SkipReason::InlineStruct);
        return Ok(());
      }
      _ => {}
    }

    if field.embedded {
      return self.embed(owner, field);
    }

    let ultimate = registry.ultimate(field.ty);
    let target = registry.get(ultimate);
    if target.kind.kind() == Kind::Struct && !self.mapper.is_well_known(ultimate) {
      self.resolve(ultimate)?;
      self.record_dependency(&owner.key, &target.key);
    }

    if field.tag.json_name() == Some("-") {
      self.skip(owner, field, SkipReason::JsonIgnored);
      return Ok(());
    }

    let ctx = FieldContext {
      registry,
      mapper: self.mapper,
      overrides: self.overrides,
      models: &self.models,
    };
    let property = convert_field(&ctx, owner, field)?;
    self.models.push_property(owner.key.as_str(), property);
    Ok(())
  }

  fn embed(&mut self, owner: &TypeDescriptor, field: &FieldDescriptor) -> GeneratorResult<()> {
    let registry = self.registry;
    self.models.ensure_copy_constructor(owner.key.as_str());

    let ultimate = registry.ultimate(field.ty);
    self.resolve(ultimate)?;

    let embedded_key = &registry.get(ultimate).key;
    let Some(embedded) = self.models.get(embedded_key.as_str()) else {
      return Err(GeneratorError::UnresolvedEmbedding {
        owner: owner.key.to_string(),
        field: field.name.clone(),
        embedded: embedded_key.to_string(),
      });
    };

    let parameter = CsParameter {
      type_name: embedded.name.clone(),
      name: field.name.clone(),
      assignments: embedded.properties.iter().map(|property| property.name.clone()).collect(),
    };
    let properties = embedded.properties.clone();

    if self.in_progress.contains(embedded_key) {
      self.warnings.push(GenerationWarning::PartialEmbedding {
        type_name: owner.key.to_string(),
        embedded: embedded_key.to_string(),
      });
    }
    self.record_dependency(&owner.key, embedded_key);
    self.models.splice_embedded(owner.key.as_str(), parameter, properties);
    Ok(())
  }
}
