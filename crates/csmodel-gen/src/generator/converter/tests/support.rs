use crate::generator::{
  converter::{Resolution, TypeMapper, TypeWalker, WellKnownTypes},
  errors::GeneratorResult,
  overrides::OverrideTable,
  registry::{FieldSpec, TypeRegistry, TypeSpec},
};

pub(super) fn registry(types: Vec<(&str, TypeSpec)>) -> TypeRegistry {
  let mut builder = TypeRegistry::builder();
  for (key, spec) in types {
    builder.define(key, spec);
  }
  builder.build().expect("registry should build")
}

pub(super) fn holder(fields: Vec<FieldSpec>) -> (&'static str, TypeSpec) {
  ("test.Holder", TypeSpec::structure(fields))
}

pub(super) fn resolve_with(
  registry: &TypeRegistry,
  overrides: &OverrideTable,
  roots: &[&str],
) -> GeneratorResult<Resolution> {
  let well_known = WellKnownTypes::default();
  let mapper = TypeMapper::new(registry, &well_known);
  let ids = roots
    .iter()
    .map(|root| registry.lookup(root).unwrap_or_else(|| panic!("root {root} not registered")))
    .collect::<Vec<_>>();
  TypeWalker::new(registry, overrides, mapper).resolve_all(&ids)
}

pub(super) fn resolve(registry: &TypeRegistry, roots: &[&str]) -> Resolution {
  resolve_with(registry, &OverrideTable::default(), roots).expect("resolution should succeed")
}
