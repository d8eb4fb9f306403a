use std::path::PathBuf;

use clap::Parser;

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "csmodel-gen")]
#[command(author, version, about = "Generates C# data-contract models from a Go-shaped type catalog")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  /// Directory that receives the generated *.Generated.cs files
  #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
  pub output: PathBuf,

  /// JSON catalog to generate from (defaults to the bundled Docker API catalog)
  #[arg(short, long, value_name = "FILE")]
  pub catalog: Option<PathBuf>,

  /// Show the models that would be written without touching the output directory
  #[arg(long, default_value_t = false)]
  pub dry_run: bool,

  /// Print detected cycles and every warning
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto")]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto")]
  pub theme: ThemeMode,
}
