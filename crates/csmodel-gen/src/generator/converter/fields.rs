use super::{store::ResolvedModels, type_mapper::TypeMapper, well_known::query_converter};
use crate::generator::{
  ast::{CsAttribute, CsProperty},
  binding::{BindingDirective, parse_binding_tag},
  errors::{GeneratorError, GeneratorResult},
  overrides::OverrideTable,
  registry::{FieldDescriptor, Kind, TypeDescriptor, TypeRegistry},
};

pub(crate) struct FieldContext<'a> {
  pub(crate) registry: &'a TypeRegistry,
  pub(crate) mapper: TypeMapper<'a>,
  pub(crate) overrides: &'a OverrideTable,
  pub(crate) models: &'a ResolvedModels,
}

fn binding_directive(owner: &TypeDescriptor, field: &FieldDescriptor) -> GeneratorResult<Option<BindingDirective>> {
  match field.tag.lookup("rest") {
    None | Some("") => Ok(None),
    Some(raw) => parse_binding_tag(raw)
      .map(Some)
      .map_err(|source| GeneratorError::InvalidBindingTag {
        owner: owner.key.to_string(),
        field: field.name.clone(),
        source,
      }),
  }
}

/// Builds the property for a regular (non-embedded) field.
pub(crate) fn convert_field(
  ctx: &FieldContext<'_>,
  owner: &TypeDescriptor,
  field: &FieldDescriptor,
) -> GeneratorResult<CsProperty> {
  let field_kind = ctx.registry.get(field.ty).kind.kind();
  let property_override = ctx.overrides.property(owner.key.as_str(), &field.name);

  let mut ty = ctx.mapper.map_type(field.ty, false, ctx.models)?;
  if let Some(replacement) = property_override.and_then(|o| o.ty.as_ref()) {
    ty = replacement.clone();
  }

  let directive = binding_directive(owner, field)?;
  let (attribute, is_optional, default_value) = match directive {
    Some(directive) if !directive.is_body() => {
      let name = directive.name.unwrap_or_else(|| field.name.to_lowercase());
      let attribute = CsAttribute::query_string_parameter(&name, directive.required, query_converter(field_kind));
      (attribute, !directive.required, directive.default)
    }
    _ => {
      let json_name = field.tag.json_name().filter(|name| !name.is_empty()).unwrap_or(&field.name);
      (CsAttribute::data_member(json_name), field_kind == Kind::Pointer, None)
    }
  };

  let mut attributes = vec![attribute];
  if let Some(property_override) = property_override {
    attributes.extend(property_override.attributes.iter().cloned());
  }

  Ok(
    CsProperty::builder()
      .name(field.name.clone())
      .ty(ty)
      .is_optional(is_optional)
      .attributes(attributes)
      .maybe_default_value(default_value)
      .build(),
  )
}
