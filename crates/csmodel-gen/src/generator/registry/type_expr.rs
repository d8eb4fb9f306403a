use std::{fmt, str::FromStr};

use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TypeExprError {
  #[strum(to_string = "unexpected end of type expression '{input}'")]
  UnexpectedEnd { input: String },
  #[strum(to_string = "unexpected '{found}' at position {position} in '{input}'")]
  UnexpectedChar {
    input: String,
    position: usize,
    found: char,
  },
  #[strum(to_string = "invalid array length '{length}' in '{input}'")]
  InvalidArrayLength { input: String, length: String },
  #[strum(to_string = "trailing input at position {position} in '{input}'")]
  TrailingInput { input: String, position: usize },
}

impl std::error::Error for TypeExprError {}

/// A Go-shaped type expression as written in a catalog.
///
/// Identifiers are left unresolved; the registry decides whether a name is a
/// builtin (`int64`, `string`, `byte`, `any`) or a registered named type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
  Named(String),
  Pointer(Box<TypeExpr>),
  Slice(Box<TypeExpr>),
  Array(usize, Box<TypeExpr>),
  Map(Box<TypeExpr>, Box<TypeExpr>),
  Chan(Box<TypeExpr>),
  Func,
  Interface,
  Struct(Vec<(String, TypeExpr)>),
}

impl FromStr for TypeExpr {
  type Err = TypeExprError;

  fn from_str(input: &str) -> Result<Self, Self::Err> {
    let mut parser = Parser::new(input);
    let expr = parser.expr()?;
    parser.skip_whitespace();
    if parser.position < input.len() {
      return Err(TypeExprError::TrailingInput {
        input: input.to_string(),
        position: parser.position,
      });
    }
    Ok(expr)
  }
}

impl fmt::Display for TypeExpr {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Named(name) => f.write_str(name),
      Self::Pointer(inner) => write!(f, "*{inner}"),
      Self::Slice(inner) => write!(f, "[]{inner}"),
      Self::Array(len, inner) => write!(f, "[{len}]{inner}"),
      Self::Map(key, value) => write!(f, "map[{key}]{value}"),
      Self::Chan(inner) => write!(f, "chan {inner}"),
      Self::Func => f.write_str("func()"),
      Self::Interface => f.write_str("interface {}"),
      Self::Struct(fields) if fields.is_empty() => f.write_str("struct {}"),
      Self::Struct(fields) => {
        f.write_str("struct { ")?;
        for (i, (name, ty)) in fields.iter().enumerate() {
          if i > 0 {
            f.write_str("; ")?;
          }
          write!(f, "{name} {ty}")?;
        }
        f.write_str(" }")
      }
    }
  }
}

struct Parser<'a> {
  input: &'a str,
  position: usize,
}

impl<'a> Parser<'a> {
  fn new(input: &'a str) -> Self {
    Self { input, position: 0 }
  }

  fn rest(&self) -> &'a str {
    &self.input[self.position..]
  }

  fn peek(&self) -> Option<char> {
    self.rest().chars().next()
  }

  fn skip_whitespace(&mut self) {
    let trimmed = self.rest().trim_start();
    self.position = self.input.len() - trimmed.len();
  }

  fn end_error(&self) -> TypeExprError {
    TypeExprError::UnexpectedEnd {
      input: self.input.to_string(),
    }
  }

  fn char_error(&self, found: char) -> TypeExprError {
    TypeExprError::UnexpectedChar {
      input: self.input.to_string(),
      position: self.position,
      found,
    }
  }

  fn expect(&mut self, expected: char) -> Result<(), TypeExprError> {
    self.skip_whitespace();
    match self.peek() {
      Some(c) if c == expected => {
        self.position += c.len_utf8();
        Ok(())
      }
      Some(c) => Err(self.char_error(c)),
      None => Err(self.end_error()),
    }
  }

  fn eat(&mut self, expected: char) -> bool {
    self.skip_whitespace();
    if self.peek() == Some(expected) {
      self.position += expected.len_utf8();
      true
    } else {
      false
    }
  }

  fn ident(&mut self) -> Result<&'a str, TypeExprError> {
    self.skip_whitespace();
    let rest = self.rest();
    let len = rest
      .char_indices()
      .find(|&(_, c)| !(c.is_alphanumeric() || c == '_'))
      .map_or(rest.len(), |(i, _)| i);
    if len == 0 {
      return Err(self.peek().map_or_else(|| self.end_error(), |c| self.char_error(c)));
    }
    self.position += len;
    Ok(&rest[..len])
  }

  fn expr(&mut self) -> Result<TypeExpr, TypeExprError> {
    self.skip_whitespace();
    match self.peek() {
      None => Err(self.end_error()),
      Some('*') => {
        self.position += 1;
        Ok(TypeExpr::Pointer(Box::new(self.expr()?)))
      }
      Some('[') => self.sequence(),
      Some(_) => self.named_or_keyword(),
    }
  }

  fn sequence(&mut self) -> Result<TypeExpr, TypeExprError> {
    self.expect('[')?;
    if self.eat(']') {
      return Ok(TypeExpr::Slice(Box::new(self.expr()?)));
    }

    self.skip_whitespace();
    let start = self.position;
    let Some(close) = self.rest().find(']') else {
      return Err(self.end_error());
    };
    let length = self.input[start..start + close].trim();
    let len = length.parse::<usize>().map_err(|_| TypeExprError::InvalidArrayLength {
      input: self.input.to_string(),
      length: length.to_string(),
    })?;
    self.position = start + close + 1;
    Ok(TypeExpr::Array(len, Box::new(self.expr()?)))
  }

  fn named_or_keyword(&mut self) -> Result<TypeExpr, TypeExprError> {
    let ident = self.ident()?;
    match ident {
      "map" => {
        self.expect('[')?;
        let key = self.expr()?;
        self.expect(']')?;
        let value = self.expr()?;
        Ok(TypeExpr::Map(Box::new(key), Box::new(value)))
      }
      "chan" => Ok(TypeExpr::Chan(Box::new(self.expr()?))),
      "func" => {
        self.skip_balanced_parens()?;
        self.skip_whitespace();
        match self.peek() {
          Some('(') => self.skip_balanced_parens()?,
          Some(c) if c == '*' || c == '[' || c.is_alphanumeric() => {
            self.expr()?;
          }
          _ => {}
        }
        Ok(TypeExpr::Func)
      }
      "interface" => {
        self.expect('{')?;
        self.expect('}')?;
        Ok(TypeExpr::Interface)
      }
      "struct" => self.struct_body(),
      _ if self.eat('.') => {
        let name = self.ident()?;
        Ok(TypeExpr::Named(format!("{ident}.{name}")))
      }
      _ => Ok(TypeExpr::Named(ident.to_string())),
    }
  }

  fn struct_body(&mut self) -> Result<TypeExpr, TypeExprError> {
    self.expect('{')?;
    let mut fields = vec![];
    loop {
      if self.eat('}') {
        return Ok(TypeExpr::Struct(fields));
      }
      let name = self.ident()?.to_string();
      let ty = self.expr()?;
      fields.push((name, ty));
      if !self.eat(';') {
        self.expect('}')?;
        return Ok(TypeExpr::Struct(fields));
      }
    }
  }

  fn skip_balanced_parens(&mut self) -> Result<(), TypeExprError> {
    if !self.eat('(') {
      return Ok(());
    }
    let mut depth = 1usize;
    for (i, c) in self.rest().char_indices() {
      match c {
        '(' => depth += 1,
        ')' => {
          depth -= 1;
          if depth == 0 {
            self.position += i + 1;
            return Ok(());
          }
        }
        _ => {}
      }
    }
    Err(self.end_error())
  }
}
