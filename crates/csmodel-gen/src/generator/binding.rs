//! Parsing of `rest:"location[,name[,required[,default]]]"` field directives.

use std::str::FromStr;

use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum BindingLocation {
  #[strum(serialize = "query")]
  Query,
  #[strum(serialize = "body")]
  Body,
  #[strum(serialize = "headers", to_string = "header")]
  Header,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingDirective {
  pub location: BindingLocation,
  pub name: Option<String>,
  pub required: bool,
  pub default: Option<String>,
}

impl BindingDirective {
  pub fn is_body(&self) -> bool {
    self.location == BindingLocation::Body
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BindingTagError {
  #[strum(to_string = "rest tag is empty")]
  Empty,
  #[strum(to_string = "invalid binding location '{location}'")]
  InvalidLocation { location: String },
}

impl std::error::Error for BindingTagError {}

impl FromStr for BindingDirective {
  type Err = BindingTagError;

  fn from_str(raw: &str) -> Result<Self, Self::Err> {
    parse_binding_tag(raw)
  }
}

/// Parses the value of a `rest` tag.
///
/// Only the literal `required` in the third position marks the binding as
/// required; anything else there is ignored. A non-empty fourth position is
/// kept verbatim as the default value.
pub fn parse_binding_tag(raw: &str) -> Result<BindingDirective, BindingTagError> {
  if raw.is_empty() {
    return Err(BindingTagError::Empty);
  }

  let parts = raw.split(',').collect::<Vec<_>>();
  let location = parts[0]
    .parse::<BindingLocation>()
    .map_err(|_| BindingTagError::InvalidLocation {
      location: parts[0].to_string(),
    })?;

  let name = parts.get(1).filter(|name| !name.is_empty()).map(|name| (*name).to_string());
  let required = parts.get(2).is_some_and(|flag| *flag == "required");
  let default = parts.get(3).filter(|value| !value.is_empty()).map(|value| (*value).to_string());

  Ok(BindingDirective {
    location,
    name,
    required,
    default,
  })
}
