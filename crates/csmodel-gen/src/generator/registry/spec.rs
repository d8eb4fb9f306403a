use indexmap::IndexMap;
use serde::Deserialize;

/// Declaration of a named type, as written in a catalog or through the builder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
  Struct(StructSpec),
  Alias(AliasSpec),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructSpec {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub fields: Vec<FieldSpec>,
}

/// A named type whose underlying type is another expression, e.g.
/// `type Args map[string]map[string]bool`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasSpec {
  #[serde(default)]
  pub name: Option<String>,
  pub underlying: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(rename = "type")]
  pub ty: String,
  #[serde(default)]
  pub embedded: bool,
  #[serde(default)]
  pub tag: Option<TagSpec>,
}

/// Either a raw tag string (`json:"Name,omitempty" rest:"query"`) or the
/// already split key/value form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TagSpec {
  Raw(String),
  Map(IndexMap<String, String>),
}

impl TypeSpec {
  pub fn structure(fields: impl IntoIterator<Item = FieldSpec>) -> Self {
    Self::Struct(StructSpec {
      name: None,
      fields: fields.into_iter().collect(),
    })
  }

  pub fn alias(underlying: impl Into<String>) -> Self {
    Self::Alias(AliasSpec {
      name: None,
      underlying: underlying.into(),
    })
  }

  #[must_use]
  pub fn named(mut self, name: impl Into<String>) -> Self {
    let slot = match &mut self {
      Self::Struct(spec) => &mut spec.name,
      Self::Alias(spec) => &mut spec.name,
    };
    *slot = Some(name.into());
    self
  }

  pub fn explicit_name(&self) -> Option<&str> {
    match self {
      Self::Struct(spec) => spec.name.as_deref(),
      Self::Alias(spec) => spec.name.as_deref(),
    }
  }
}

impl FieldSpec {
  pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
    Self {
      name: Some(name.into()),
      ty: ty.into(),
      embedded: false,
      tag: None,
    }
  }

  pub fn embedded(ty: impl Into<String>) -> Self {
    Self {
      name: None,
      ty: ty.into(),
      embedded: true,
      tag: None,
    }
  }

  #[must_use]
  pub fn tagged(mut self, raw: impl Into<String>) -> Self {
    self.tag = Some(TagSpec::Raw(raw.into()));
    self
  }
}
