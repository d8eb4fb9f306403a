//! Text rendering of resolved models as C# source files.

mod usings;


pub(crate) use usings::collect_usings;

use crate::generator::ast::{CsConstructor, CsProperty, ModelType};

const INDENT: &str = "    ";

#[derive(Default)]
struct SourceWriter {
  out: String,
}

impl SourceWriter {
  fn line(&mut self, depth: usize, text: impl AsRef<str>) {
    for _ in 0..depth {
      self.out.push_str(INDENT);
    }
    self.out.push_str(text.as_ref());
    self.out.push('\n');
  }

  fn blank(&mut self) {
    self.out.push('\n');
  }
}

/// Renders one model as a complete source file.
///
/// The layout is fixed: usings, a blank line, the namespace block, the class
/// attributes and declaration, constructors (parameterless first), then the
/// properties in stored order, separated by blank lines.
pub fn render(model: &ModelType, namespace: &str) -> String {
  let mut writer = SourceWriter::default();

  for using in collect_usings(model, namespace) {
    writer.line(0, format!("using {using};"));
  }
  writer.blank();

  writer.line(0, format!("namespace {namespace}"));
  writer.line(0, "{");
  write_class(&mut writer, model);
  writer.line(0, "}");

  writer.out
}

fn write_class(writer: &mut SourceWriter, model: &ModelType) {
  for attribute in &model.attributes {
    writer.line(1, attribute.to_string());
  }
  writer.line(1, format!("public class {} // ({})", model.name, model.source_name));
  writer.line(1, "{");

  if !model.constructors.is_empty() {
    write_constructors(writer, &model.name, &model.constructors);
    if !model.properties.is_empty() {
      writer.blank();
    }
  }
  write_properties(writer, &model.properties);

  writer.line(1, "}");
}

fn write_constructors(writer: &mut SourceWriter, type_name: &str, constructors: &[CsConstructor]) {
  for (i, constructor) in constructors.iter().enumerate() {
    if i > 0 {
      writer.blank();
    }

    let parameters = constructor
      .parameters
      .iter()
      .map(|parameter| format!("{} {}", parameter.type_name, parameter.name))
      .collect::<Vec<_>>()
      .join(", ");
    writer.line(2, format!("public {type_name}({parameters})"));
    writer.line(2, "{");

    for (pi, parameter) in constructor.parameters.iter().enumerate() {
      if pi > 0 {
        writer.blank();
      }
      writer.line(3, format!("if ({} != null)", parameter.name));
      writer.line(3, "{");
      for property in &parameter.assignments {
        writer.line(4, format!("this.{property} = {}.{property};", parameter.name));
      }
      writer.line(3, "}");
    }

    writer.line(2, "}");
  }
}

fn write_properties(writer: &mut SourceWriter, properties: &[CsProperty]) {
  for (i, property) in properties.iter().enumerate() {
    if i > 0 {
      writer.blank();
    }
    for attribute in &property.attributes {
      writer.line(2, attribute.to_string());
    }

    let default = property
      .default_value
      .as_ref()
      .map(|value| format!(" = {value};"))
      .unwrap_or_default();
    writer.line(
      2,
      format!("public {} {} {{ get; set; }}{default}", property.declared_type(), property.name),
    );
  }
}
