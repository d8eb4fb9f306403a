use indexmap::IndexMap;

use crate::generator::{
  ast::{CsParameter, CsProperty, ModelType},
  registry::TypeKey,
};

/// Models keyed by source type, in the order resolution first reached them.
#[derive(Debug, Clone, Default)]
pub struct ResolvedModels {
  models: IndexMap<TypeKey, ModelType>,
}

impl ResolvedModels {
  pub fn get(&self, key: &str) -> Option<&ModelType> {
    self.models.get(key)
  }

  pub fn contains(&self, key: &str) -> bool {
    self.models.contains_key(key)
  }

  pub fn len(&self) -> usize {
    self.models.len()
  }

  pub fn is_empty(&self) -> bool {
    self.models.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&TypeKey, &ModelType)> {
    self.models.iter()
  }

  pub fn values(&self) -> impl Iterator<Item = &ModelType> {
    self.models.values()
  }

  pub(crate) fn insert(&mut self, model: ModelType) {
    self.models.insert(model.key.clone(), model);
  }

  pub(crate) fn ensure_copy_constructor(&mut self, key: &str) {
    if let Some(model) = self.models.get_mut(key) {
      model.ensure_copy_constructor();
    }
  }

  pub(crate) fn push_property(&mut self, key: &str, property: CsProperty) {
    if let Some(model) = self.models.get_mut(key) {
      model.properties.push(property);
    }
  }

  pub(crate) fn splice_embedded(&mut self, key: &str, parameter: CsParameter, properties: Vec<CsProperty>) {
    if let Some(model) = self.models.get_mut(key) {
      model.add_copy_parameter(parameter);
      model.properties.extend(properties);
    }
  }
}

impl IntoIterator for ResolvedModels {
  type Item = (TypeKey, ModelType);
  type IntoIter = indexmap::map::IntoIter<TypeKey, ModelType>;

  fn into_iter(self) -> Self::IntoIter {
    self.models.into_iter()
  }
}
