//! Explicit descriptor graph for the host type system.
//!
//! Every type the generator can see is registered up front: builtins, the
//! named types a catalog declares, and the unnamed composites (`[]string`,
//! `map[string]*T`, ...) interned from field expressions. Descriptors live in
//! an arena and reference each other through [`DescriptorId`], so recursive
//! types need no shared ownership.

mod spec;
mod struct_tag;
mod type_expr;

#[cfg(test)]
mod tests;

use std::{
  borrow::Borrow,
  collections::HashMap,
  fmt,
  sync::LazyLock,
};

use indexmap::IndexMap;
use regex::Regex;
pub use spec::{FieldSpec, StructSpec, TagSpec, TypeSpec};
use strum::{Display, EnumDiscriminants};
pub use struct_tag::{StructTag, StructTagError};
pub use type_expr::{TypeExpr, TypeExprError};

use crate::generator::errors::{GeneratorError, GeneratorResult};

pub const EMPTY_STRUCT_KEY: &str = "struct {}";
const INTERFACE_KEY: &str = "interface {}";

static IDENTIFIER: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid"));

/// Whether `name` can be used as a C# class name and file stem.
pub fn is_identifier(name: &str) -> bool {
  IDENTIFIER.is_match(name)
}

/// Stable identity of a source type: its qualified name for named types, its
/// canonical expression for unnamed ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey(String);

impl TypeKey {
  pub fn new(key: impl Into<String>) -> Self {
    Self(key.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl Borrow<str> for TypeKey {
  fn borrow(&self) -> &str {
    &self.0
  }
}

impl From<&str> for TypeKey {
  fn from(key: &str) -> Self {
    Self(key.to_string())
  }
}

impl From<String> for TypeKey {
  fn from(key: String) -> Self {
    Self(key)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DescriptorId(usize);

#[derive(Debug, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(name(Kind), derive(Display, Hash))]
#[strum_discriminants(strum(serialize_all = "lowercase"))]
pub enum TypeKind {
  Bool,
  Int,
  Int8,
  Int16,
  Int32,
  Int64,
  Uint,
  Uint8,
  Uint16,
  Uint32,
  Uint64,
  Uintptr,
  Float32,
  Float64,
  Complex64,
  Complex128,
  String,
  Array { len: usize, elem: DescriptorId },
  Chan(DescriptorId),
  Func,
  Interface,
  Map { key: DescriptorId, value: DescriptorId },
  Pointer(DescriptorId),
  Slice(DescriptorId),
  Struct(Vec<FieldDescriptor>),
}

impl TypeKind {
  pub fn kind(&self) -> Kind {
    Kind::from(self)
  }

  pub fn fields(&self) -> &[FieldDescriptor] {
    match self {
      Self::Struct(fields) => fields,
      _ => &[],
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
  pub name: String,
  pub ty: DescriptorId,
  pub embedded: bool,
  pub tag: StructTag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
  pub key: TypeKey,
  /// Declared short name; empty for unnamed composites and inline structs.
  pub name: String,
  pub kind: TypeKind,
}

impl TypeDescriptor {
  pub fn is_named(&self) -> bool {
    !self.name.is_empty()
  }
}

#[derive(Debug, Clone)]
pub struct TypeRegistry {
  descriptors: Vec<TypeDescriptor>,
  index: HashMap<TypeKey, DescriptorId>,
}

impl TypeRegistry {
  pub fn builder() -> RegistryBuilder {
    RegistryBuilder::new()
  }

  pub fn get(&self, id: DescriptorId) -> &TypeDescriptor {
    &self.descriptors[id.0]
  }

  pub fn lookup(&self, key: &str) -> Option<DescriptorId> {
    self.index.get(key).copied()
  }

  pub fn len(&self) -> usize {
    self.descriptors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.descriptors.is_empty()
  }

  /// Strips arrays, channels, maps (to their value), pointers and slices
  /// until a non-container type is reached.
  pub fn ultimate(&self, mut id: DescriptorId) -> DescriptorId {
    loop {
      id = match self.get(id).kind {
        TypeKind::Array { elem, .. } => elem,
        TypeKind::Chan(elem) | TypeKind::Pointer(elem) | TypeKind::Slice(elem) => elem,
        TypeKind::Map { value, .. } => value,
        _ => return id,
      };
    }
  }
}

const BUILTINS: [TypeKind; 17] = [
  TypeKind::Bool,
  TypeKind::Int,
  TypeKind::Int8,
  TypeKind::Int16,
  TypeKind::Int32,
  TypeKind::Int64,
  TypeKind::Uint,
  TypeKind::Uint8,
  TypeKind::Uint16,
  TypeKind::Uint32,
  TypeKind::Uint64,
  TypeKind::Uintptr,
  TypeKind::Float32,
  TypeKind::Float64,
  TypeKind::Complex64,
  TypeKind::Complex128,
  TypeKind::String,
];

fn canonical_name(name: &str) -> &str {
  match name {
    "byte" => "uint8",
    "rune" => "int32",
    "any" => INTERFACE_KEY,
    other => other,
  }
}

fn short_name(key: &str) -> &str {
  key.rsplit_once('.').map_or(key, |(_, name)| name)
}

/// Collects named type declarations and resolves them into a [`TypeRegistry`].
///
/// Declarations may reference each other in any order; resolution happens in
/// [`RegistryBuilder::build`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
  specs: IndexMap<TypeKey, TypeSpec>,
  duplicates: Vec<TypeKey>,
}

impl RegistryBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn with_type(mut self, key: impl Into<TypeKey>, spec: TypeSpec) -> Self {
    self.define(key, spec);
    self
  }

  pub fn define(&mut self, key: impl Into<TypeKey>, spec: TypeSpec) {
    let key = key.into();
    if self.specs.contains_key(&key) {
      self.duplicates.push(key);
    } else {
      self.specs.insert(key, spec);
    }
  }

  pub fn build(self) -> GeneratorResult<TypeRegistry> {
    if let Some(key) = self.duplicates.into_iter().next() {
      return Err(GeneratorError::DuplicateType { key: key.to_string() });
    }

    let mut state = BuildState::default();
    for kind in BUILTINS {
      let name = kind.kind().to_string();
      state.push(TypeKey::new(name.clone()), name, kind);
    }
    state.push(TypeKey::new(INTERFACE_KEY), String::new(), TypeKind::Interface);

    let mut declared = Vec::with_capacity(self.specs.len());
    for (key, spec) in &self.specs {
      if state.index.contains_key(key) {
        return Err(GeneratorError::DuplicateType { key: key.to_string() });
      }
      let name = spec
        .explicit_name()
        .map_or_else(|| short_name(key.as_str()).to_string(), str::to_string);
      if !name.is_empty() && !is_identifier(&name) {
        return Err(GeneratorError::InvalidTypeName {
          key: key.to_string(),
          name,
        });
      }
      let id = state.push(key.clone(), name, TypeKind::Interface);
      declared.push((id, key, spec));
    }

    let mut aliases = IndexMap::new();
    for (id, key, spec) in declared {
      match spec {
        TypeSpec::Struct(spec) => {
          let fields = state.struct_fields(key.as_str(), &spec.fields)?;
          state.descriptors[id.0].kind = TypeKind::Struct(fields);
        }
        TypeSpec::Alias(spec) => {
          let context = format!("underlying type of {key}");
          let expr = parse_expr(&spec.underlying, &context)?;
          if let TypeExpr::Named(target) = &expr {
            let target = state.named(target, &context)?;
            aliases.insert(id, target);
          } else {
            state.descriptors[id.0].kind = state.kind_of(&expr, &context)?;
          }
        }
      }
    }

    state.settle_aliases(&aliases)?;

    Ok(TypeRegistry {
      descriptors: state.descriptors,
      index: state.index,
    })
  }
}

fn parse_expr(raw: &str, context: &str) -> GeneratorResult<TypeExpr> {
  raw.parse().map_err(|source| GeneratorError::InvalidTypeExpr {
    context: context.to_string(),
    source,
  })
}

#[derive(Default)]
struct BuildState {
  descriptors: Vec<TypeDescriptor>,
  index: HashMap<TypeKey, DescriptorId>,
}

impl BuildState {
  fn push(&mut self, key: TypeKey, name: String, kind: TypeKind) -> DescriptorId {
    let id = DescriptorId(self.descriptors.len());
    self.index.insert(key.clone(), id);
    self.descriptors.push(TypeDescriptor { key, name, kind });
    id
  }

  fn key_of(&self, id: DescriptorId) -> &str {
    self.descriptors[id.0].key.as_str()
  }

  fn named(&self, name: &str, context: &str) -> GeneratorResult<DescriptorId> {
    self
      .index
      .get(canonical_name(name))
      .copied()
      .ok_or_else(|| GeneratorError::UnknownType {
        name: name.to_string(),
        context: context.to_string(),
      })
  }

  fn intern(&mut self, key: String, kind: TypeKind) -> DescriptorId {
    if let Some(&id) = self.index.get(key.as_str()) {
      return id;
    }
    self.push(TypeKey::new(key), String::new(), kind)
  }

  fn resolve(&mut self, expr: &TypeExpr, context: &str) -> GeneratorResult<DescriptorId> {
    if let TypeExpr::Named(name) = expr {
      return self.named(name, context);
    }
    let kind = self.kind_of(expr, context)?;
    let key = self.canonical_key(&kind);
    Ok(self.intern(key, kind))
  }

  fn kind_of(&mut self, expr: &TypeExpr, context: &str) -> GeneratorResult<TypeKind> {
    Ok(match expr {
      TypeExpr::Named(name) => {
        let id = self.named(name, context)?;
        self.descriptors[id.0].kind.clone()
      }
      TypeExpr::Pointer(inner) => TypeKind::Pointer(self.resolve(inner, context)?),
      TypeExpr::Slice(inner) => TypeKind::Slice(self.resolve(inner, context)?),
      TypeExpr::Array(len, inner) => TypeKind::Array {
        len: *len,
        elem: self.resolve(inner, context)?,
      },
      TypeExpr::Map(key, value) => TypeKind::Map {
        key: self.resolve(key, context)?,
        value: self.resolve(value, context)?,
      },
      TypeExpr::Chan(inner) => TypeKind::Chan(self.resolve(inner, context)?),
      TypeExpr::Func => TypeKind::Func,
      TypeExpr::Interface => TypeKind::Interface,
      TypeExpr::Struct(fields) => {
        let mut resolved = Vec::with_capacity(fields.len());
        for (name, ty) in fields {
          resolved.push(FieldDescriptor {
            name: name.clone(),
            ty: self.resolve(ty, context)?,
            embedded: false,
            tag: StructTag::default(),
          });
        }
        TypeKind::Struct(resolved)
      }
    })
  }

  fn canonical_key(&self, kind: &TypeKind) -> String {
    match kind {
      TypeKind::Pointer(id) => format!("*{}", self.key_of(*id)),
      TypeKind::Slice(id) => format!("[]{}", self.key_of(*id)),
      TypeKind::Array { len, elem } => format!("[{len}]{}", self.key_of(*elem)),
      TypeKind::Map { key, value } => format!("map[{}]{}", self.key_of(*key), self.key_of(*value)),
      TypeKind::Chan(id) => format!("chan {}", self.key_of(*id)),
      TypeKind::Func => "func()".to_string(),
      TypeKind::Interface => INTERFACE_KEY.to_string(),
      TypeKind::Struct(fields) if fields.is_empty() => EMPTY_STRUCT_KEY.to_string(),
      TypeKind::Struct(fields) => {
        let body = fields
          .iter()
          .map(|field| format!("{} {}", field.name, self.key_of(field.ty)))
          .collect::<Vec<_>>()
          .join("; ");
        format!("struct {{ {body} }}")
      }
      other => other.kind().to_string(),
    }
  }

  fn struct_fields(&mut self, owner: &str, specs: &[FieldSpec]) -> GeneratorResult<Vec<FieldDescriptor>> {
    let mut fields = Vec::with_capacity(specs.len());
    for spec in specs {
      let label = spec.name.as_deref().unwrap_or(spec.ty.as_str());
      let context = format!("field {owner}.{label}");
      let ty = self.resolve(&parse_expr(&spec.ty, &context)?, &context)?;

      let name = match &spec.name {
        Some(name) => name.clone(),
        None => {
          let target = &self.descriptors[self.ultimate(ty).0];
          short_name(target.key.as_str()).to_string()
        }
      };

      let tag = match &spec.tag {
        None => StructTag::default(),
        Some(TagSpec::Raw(raw)) => raw.parse().map_err(|source| GeneratorError::InvalidStructTag {
          owner: owner.to_string(),
          field: name.clone(),
          source,
        })?,
        Some(TagSpec::Map(entries)) => entries.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect(),
      };

      fields.push(FieldDescriptor {
        name,
        ty,
        embedded: spec.embedded,
        tag,
      });
    }
    Ok(fields)
  }

  fn ultimate(&self, mut id: DescriptorId) -> DescriptorId {
    loop {
      id = match self.descriptors[id.0].kind {
        TypeKind::Array { elem, .. } => elem,
        TypeKind::Chan(elem) | TypeKind::Pointer(elem) | TypeKind::Slice(elem) => elem,
        TypeKind::Map { value, .. } => value,
        _ => return id,
      };
    }
  }

  /// Named types declared as another named type take over its structure.
  fn settle_aliases(&mut self, aliases: &IndexMap<DescriptorId, DescriptorId>) -> GeneratorResult<()> {
    for (&start, &first_target) in aliases {
      let mut chain = vec![start];
      let mut current = first_target;
      while let Some(&next) = aliases.get(&current) {
        if chain.contains(&current) {
          return Err(GeneratorError::CyclicAlias {
            key: self.key_of(start).to_string(),
          });
        }
        chain.push(current);
        current = next;
      }

      let kind = self.descriptors[current.0].kind.clone();
      for id in chain {
        self.descriptors[id.0].kind = kind.clone();
      }
    }
    Ok(())
  }
}
