use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StructTagError {
  #[strum(to_string = "missing ':' after tag key '{key}'")]
  MissingColon { key: String },
  #[strum(to_string = "tag key '{key}' must be followed by a quoted value")]
  UnquotedValue { key: String },
  #[strum(to_string = "unterminated value for tag key '{key}'")]
  Unterminated { key: String },
  #[strum(to_string = "invalid escape '\\{escape}' in value for tag key '{key}'")]
  InvalidEscape { key: String, escape: char },
}

impl std::error::Error for StructTagError {}

/// Field annotations in the `key:"value" key2:"value2"` convention.
///
/// Duplicate keys keep the first value, which is what a conventional lookup
/// would return.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructTag {
  entries: IndexMap<String, String>,
}

impl StructTag {
  pub fn lookup(&self, key: &str) -> Option<&str> {
    self.entries.get(key).map(String::as_str)
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
    self.entries.entry(key.into()).or_insert_with(|| value.into());
  }

  /// The `json` name of the field, without options such as `omitempty`.
  pub fn json_name(&self) -> Option<&str> {
    self
      .lookup("json")
      .map(|value| value.split_once(',').map_or(value, |(name, _)| name))
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StructTag {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut tag = Self::default();
    for (key, value) in iter {
      tag.insert(key, value);
    }
    tag
  }
}

impl FromStr for StructTag {
  type Err = StructTagError;

  fn from_str(raw: &str) -> Result<Self, Self::Err> {
    let mut tag = Self::default();
    let mut rest = raw.trim_start();

    while !rest.is_empty() {
      let key_len = rest
        .find(|c: char| c == ':' || c == '"' || c.is_whitespace() || c.is_control())
        .unwrap_or(rest.len());
      let key = &rest[..key_len];
      rest = &rest[key_len..];

      let Some(after_colon) = rest.strip_prefix(':') else {
        return Err(StructTagError::MissingColon { key: key.to_string() });
      };
      let Some(quoted) = after_colon.strip_prefix('"') else {
        return Err(StructTagError::UnquotedValue { key: key.to_string() });
      };

      let (value, remaining) = unquote(key, quoted)?;
      tag.insert(key, value);
      rest = remaining.trim_start();
    }

    Ok(tag)
  }
}

impl fmt::Display for StructTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, (key, value)) in self.entries.iter().enumerate() {
      if i > 0 {
        f.write_str(" ")?;
      }
      write!(f, "{key}:{value:?}")?;
    }
    Ok(())
  }
}

fn unquote<'a>(key: &str, input: &'a str) -> Result<(String, &'a str), StructTagError> {
  let mut value = String::new();
  let mut chars = input.char_indices();

  while let Some((i, c)) = chars.next() {
    match c {
      '"' => return Ok((value, &input[i + 1..])),
      '\\' => {
        let Some((_, escaped)) = chars.next() else {
          break;
        };
        value.push(match escaped {
          '"' => '"',
          '\\' => '\\',
          'n' => '\n',
          't' => '\t',
          other => {
            return Err(StructTagError::InvalidEscape {
              key: key.to_string(),
              escape: other,
            });
          }
        });
      }
      other => value.push(other),
    }
  }

  Err(StructTagError::Unterminated { key: key.to_string() })
}
