use std::cmp::Ordering;

use itertools::Itertools;

use crate::generator::ast::ModelType;

fn is_system(namespace: &str) -> bool {
  namespace == "System" || namespace.starts_with("System.")
}

fn compare(a: &str, b: &str) -> Ordering {
  is_system(b).cmp(&is_system(a)).then_with(|| a.cmp(b))
}

/// Namespaces referenced by the model's attributes, property types and
/// property attributes. `System` and `System.*` come first, each group in
/// lexicographic order. The model's own namespace is omitted.
pub(crate) fn collect_usings(model: &ModelType, own_namespace: &str) -> Vec<String> {
  let class_attributes = model.attributes.iter().flat_map(|attribute| attribute.ty.namespaces());
  let properties = model.properties.iter().flat_map(|property| {
    property
      .ty
      .namespaces()
      .chain(property.attributes.iter().flat_map(|attribute| attribute.ty.namespaces()))
  });

  class_attributes
    .chain(properties)
    .filter(|namespace| *namespace != own_namespace)
    .unique()
    .sorted_by(|a, b| compare(a, b))
    .map(str::to_string)
    .collect()
}
