use std::path::PathBuf;

use strum::Display;

use crate::generator::{
  binding::BindingTagError,
  registry::{Kind, StructTagError, TypeExprError},
};

pub type GeneratorResult<T> = Result<T, GeneratorError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorCategory {
  #[strum(to_string = "configuration")]
  Configuration,
  #[strum(to_string = "mapping")]
  Mapping,
  #[strum(to_string = "io")]
  Io,
}

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
  #[error("invalid rest tag on {owner}.{field}: {source}")]
  InvalidBindingTag {
    owner: String,
    field: String,
    #[source]
    source: BindingTagError,
  },
  #[error("type '{key}' has no name and cannot become a model")]
  UnnamedType { key: String },
  #[error("type '{key}' declares invalid name '{name}'")]
  InvalidTypeName { key: String, name: String },
  #[error("unknown type '{name}' referenced by {context}")]
  UnknownType { name: String, context: String },
  #[error("invalid type expression in {context}: {source}")]
  InvalidTypeExpr {
    context: String,
    #[source]
    source: TypeExprError,
  },
  #[error("invalid struct tag on {owner}.{field}: {source}")]
  InvalidStructTag {
    owner: String,
    field: String,
    #[source]
    source: StructTagError,
  },
  #[error("type '{key}' is defined more than once")]
  DuplicateType { key: String },
  #[error("alias chain starting at '{key}' never reaches a concrete type")]
  CyclicAlias { key: String },
  #[error("root type '{key}' is not defined")]
  UnknownRoot { key: String },
  #[error("'{first}' and '{second}' would both be written to {file_name}")]
  NameCollision {
    file_name: String,
    first: String,
    second: String,
  },
  #[error("failed to parse catalog {path}: {message}")]
  Catalog { path: String, message: String },
  #[error("type '{key}' of kind {kind} has no C# representation")]
  UnmappableType { key: String, kind: Kind },
  #[error("embedded field {owner}.{field} of type '{embedded}' did not produce a model")]
  UnresolvedEmbedding {
    owner: String,
    field: String,
    embedded: String,
  },
  #[error("output directory {} does not exist", path.display())]
  MissingOutputDir { path: PathBuf },
  #[error("refusing to overwrite existing file {}", path.display())]
  OutputExists { path: PathBuf },
  #[error("{context}: {source}")]
  Io {
    context: String,
    #[source]
    source: std::io::Error,
  },
}

impl GeneratorError {
  pub fn category(&self) -> ErrorCategory {
    match self {
      Self::InvalidBindingTag { .. }
      | Self::UnnamedType { .. }
      | Self::InvalidTypeName { .. }
      | Self::UnknownType { .. }
      | Self::InvalidTypeExpr { .. }
      | Self::InvalidStructTag { .. }
      | Self::DuplicateType { .. }
      | Self::CyclicAlias { .. }
      | Self::UnknownRoot { .. }
      | Self::NameCollision { .. }
      | Self::Catalog { .. } => ErrorCategory::Configuration,
      Self::UnmappableType { .. } | Self::UnresolvedEmbedding { .. } => ErrorCategory::Mapping,
      Self::MissingOutputDir { .. } | Self::OutputExists { .. } | Self::Io { .. } => ErrorCategory::Io,
    }
  }

  pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
    Self::Io {
      context: context.into(),
      source,
    }
  }
}
