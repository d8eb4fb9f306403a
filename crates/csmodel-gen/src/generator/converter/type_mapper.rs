use super::{
  store::ResolvedModels,
  well_known::{EMPTY_STRUCT_MARKER, WellKnownTypes, primitive},
};
use crate::generator::{
  ast::CsType,
  errors::{GeneratorError, GeneratorResult},
  registry::{DescriptorId, EMPTY_STRUCT_KEY, TypeKind, TypeRegistry},
};

/// Maps source descriptors to C# type references.
#[derive(Clone, Copy)]
pub(crate) struct TypeMapper<'a> {
  registry: &'a TypeRegistry,
  well_known: &'a WellKnownTypes,
}

impl<'a> TypeMapper<'a> {
  pub(crate) fn new(registry: &'a TypeRegistry, well_known: &'a WellKnownTypes) -> Self {
    Self { registry, well_known }
  }

  pub(crate) fn is_well_known(&self, id: DescriptorId) -> bool {
    self.well_known.contains(self.registry.get(id).key.as_str())
  }

  /// `nullable_context` is raised below a pointer; a value type reached that
  /// way renders as `T?` when used as a generic or array element.
  pub(crate) fn map_type(
    &self,
    id: DescriptorId,
    nullable_context: bool,
    models: &ResolvedModels,
  ) -> GeneratorResult<CsType> {
    let descriptor = self.registry.get(id);

    let mapped = if let Some(ty) = self.well_known.get(descriptor.key.as_str()) {
      ty.clone()
    } else if let Some(ty) = primitive(descriptor.kind.kind()) {
      ty
    } else {
      match &descriptor.kind {
        TypeKind::Array { elem, .. } => CsType::array_of(&self.map_type(*elem, false, models)?),
        TypeKind::Slice(elem) => CsType::list_of(&self.map_type(*elem, false, models)?),
        TypeKind::Map { key, value } => {
          let key = self.map_type(*key, false, models)?;
          let value = if self.registry.get(*value).key.as_str() == EMPTY_STRUCT_KEY {
            CsType::reference(EMPTY_STRUCT_MARKER)
          } else {
            self.map_type(*value, false, models)?
          };
          CsType::dictionary_of(&key, &value)
        }
        TypeKind::Pointer(elem) => return self.map_type(*elem, true, models),
        TypeKind::Struct(_) => {
          let name = models
            .get(descriptor.key.as_str())
            .map_or(descriptor.name.as_str(), |model| model.name.as_str());
          CsType::reference(name)
        }
        TypeKind::Interface => CsType::reference("object"),
        other => {
          return Err(GeneratorError::UnmappableType {
            key: descriptor.key.to_string(),
            kind: other.kind(),
          });
        }
      }
    };

    Ok(if nullable_context { mapped.with_optional() } else { mapped })
  }
}
