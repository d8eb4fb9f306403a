use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::orchestrator::GeneratedFile,
  ui::{Colors, term_width},
};

pub fn preview_table(files: &[GeneratedFile], colors: &Colors, width: u16) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(width);

  let mut header = Row::new();
  for title in ["MODEL", "SOURCE TYPE", "PROPERTIES", "CONSTRUCTORS"] {
    header.add_cell(Cell::new(title).fg(Colors::cell(colors.label())));
  }
  table.set_header(header);

  for file in files {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(&file.type_name)
        .fg(Colors::cell(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(&file.source_name).fg(Colors::cell(colors.primary())));
    row.add_cell(
      Cell::new(file.property_count)
        .fg(Colors::cell(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(
      Cell::new(file.constructor_count)
        .fg(Colors::cell(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    table.add_row(row);
  }

  table
}

pub fn print_preview(files: &[GeneratedFile], colors: &Colors) {
  println!("{}", preview_table(files, colors, term_width()));
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ui::colors::Theme;

  #[test]
  fn test_preview_lists_every_file() {
    let files = ["Alpha", "Beta"]
      .into_iter()
      .enumerate()
      .map(|(i, name)| GeneratedFile {
        file_name: format!("{name}.Generated.cs"),
        type_name: name.to_string(),
        source_name: format!("pkg.{name}"),
        contents: String::new(),
        property_count: i + 3,
        constructor_count: 0,
      })
      .collect::<Vec<_>>();

    let table = preview_table(&files, &Colors::new(false, Theme::Dark), 120);
    assert_eq!(table.row_count(), 2);

    let rendered = table.to_string();
    assert!(rendered.contains("Alpha"));
    assert!(rendered.contains("pkg.Beta"));
    assert!(rendered.contains("SOURCE TYPE"));
  }
}
