use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    errors::GeneratorError,
    metrics::GenerationStats,
    orchestrator::{GeneratedOutput, Orchestrator},
    output::OutputWriter,
  },
  ui::{Cli, Colors, commands::preview},
  utils::catalog::CatalogSource,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

/// Attaches the error category so the top-level report says which tier failed.
fn categorized(err: GeneratorError) -> anyhow::Error {
  let category = err.category();
  anyhow::Error::new(err).context(format!("{category} error"))
}

#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateConfig {
  pub catalog: CatalogSource,
  pub output: PathBuf,
  pub dry_run: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_cli(cli: &Cli) -> Self {
    Self {
      catalog: CatalogSource::from_option(cli.catalog.clone()),
      output: cli.output.clone(),
      dry_run: cli.dry_run,
      verbose: cli.verbose,
      quiet: cli.quiet,
    }
  }

  async fn create_orchestrator(&self) -> anyhow::Result<Orchestrator> {
    let catalog = self.catalog.load().await?;
    Orchestrator::from_catalog(&catalog).map_err(categorized)
  }

  async fn write_output(&self, output: &GeneratedOutput, logger: &GenerateLogger<'_>) -> anyhow::Result<()> {
    let writer = OutputWriter::open(&self.output).await.map_err(categorized)?;

    let removed = writer.remove_stale().await.map_err(categorized)?;
    if removed > 0 {
      logger.stat("Stale files removed:", removed.to_string());
    }

    logger.log_writing(writer.dir().display().to_string());
    writer.write_all(&output.files).await.map_err(categorized)
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading catalog from: {}", self.config.catalog.describe())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, namespace: &str) {
    self.info(
      &format!("Generating C# models for {namespace}...")
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Models generated:", stats.models_generated.to_string());
    self.stat("", format!("{} properties", stats.properties_generated));
    self.stat("", format!("{} copy constructors", stats.copy_constructors_generated));
    self.stat("Parameter bindings:", stats.parameter_bindings.to_string());
    if stats.skipped_fields() > 0 {
      self.stat("Fields skipped:", stats.skipped_fields().to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_cycles(stats);
    self.print_warnings(stats);
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Cycles:", stats.cycles_detected.to_string());

    if self.config.verbose {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        println!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.accent()),
          cycle.join(" <-> ").with(self.colors.muted())
        );
      }
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let shown = stats
      .warnings
      .iter()
      .filter(|warning| warning.is_skipped_item() || self.config.verbose)
      .collect::<Vec<_>>();
    if shown.is_empty() {
      return;
    }

    println!();
    for warning in shown {
      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self, dir: String) {
    self.info(&format!("Writing to: {dir}").with(self.colors.primary()).to_string());
  }

  fn log_success(&self, files: usize) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        format!("Successfully generated {files} C# models").with(self.colors.success())
      );
    }
  }
}

pub async fn generate_models(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let orchestrator = config.create_orchestrator().await?;

  logger.log_generating(orchestrator.namespace());
  let output = orchestrator.generate().map_err(categorized)?;
  logger.print_statistics(&output.stats);

  if config.dry_run {
    preview::print_preview(&output.files, colors);
    return Ok(());
  }

  config.write_output(&output, &logger).await?;
  logger.log_success(output.files.len());
  Ok(())
}
