use strum::Display;

use crate::generator::{ast::ModelType, registry::Kind};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub models_generated: usize,
  pub properties_generated: usize,
  pub copy_constructors_generated: usize,
  pub parameter_bindings: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_model(&mut self, model: &ModelType) {
    self.models_generated += 1;
    self.properties_generated += model.properties.len();
    self.parameter_bindings += model.properties.iter().filter(|p| p.is_parameter_bound()).count();
    if model.copy_constructor().is_some() {
      self.copy_constructors_generated += 1;
    }
  }

  pub fn record_cycle(&mut self, cycle: Vec<String>) {
    self.cycles_detected += 1;
    self.cycle_details.push(cycle);
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    for cycle in cycles {
      self.record_cycle(cycle);
    }
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }

  pub fn skipped_fields(&self) -> usize {
    self.warnings.iter().filter(|w| w.is_skipped_item()).count()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SkipReason {
  #[strum(to_string = "{kind} fields have no C# representation")]
  Unsupported { kind: Kind },
  #[strum(to_string = "inline struct definitions are not generated")]
  InlineStruct,
  #[strum(to_string = "excluded by its json tag")]
  JsonIgnored,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Skipped field {type_name}.{field}: {reason}")]
  SkippedField {
    type_name: String,
    field: String,
    reason: SkipReason,
  },
  #[strum(to_string = "'{type_name}' embeds '{embedded}' while it is still being resolved; copied members may be incomplete")]
  PartialEmbedding { type_name: String, embedded: String },
  #[strum(to_string = "Override for '{key}' does not match any generated model")]
  UnusedOverride { key: String },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::SkippedField { .. })
  }
}
