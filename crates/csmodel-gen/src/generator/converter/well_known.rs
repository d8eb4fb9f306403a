use indexmap::IndexMap;

use crate::generator::{
  ast::CsType,
  registry::{EMPTY_STRUCT_KEY, Kind, TypeKey},
};

pub(crate) const EMPTY_STRUCT_MARKER: &str = "EmptyStruct";
pub(crate) const CONVERSION_SENTINEL: &str = "BUG_IN_CONVERSION";

/// Source types with a fixed C# representation. They are never turned into
/// models and are checked before the primitive table.
#[derive(Debug, Clone)]
pub struct WellKnownTypes {
  entries: IndexMap<TypeKey, CsType>,
}

impl Default for WellKnownTypes {
  fn default() -> Self {
    Self {
      entries: IndexMap::from([
        (TypeKey::from("time.Time"), CsType::value("DateTime").in_namespace("System")),
        (TypeKey::from("registry.NetIPNet"), CsType::reference("string")),
        (TypeKey::from(EMPTY_STRUCT_KEY), CsType::reference(CONVERSION_SENTINEL)),
      ]),
    }
  }
}

impl WellKnownTypes {
  pub fn get(&self, key: &str) -> Option<&CsType> {
    self.entries.get(key)
  }

  pub fn contains(&self, key: &str) -> bool {
    self.entries.contains_key(key)
  }
}

impl Extend<(TypeKey, CsType)> for WellKnownTypes {
  fn extend<I: IntoIterator<Item = (TypeKey, CsType)>>(&mut self, iter: I) {
    self.entries.extend(iter);
  }
}

pub(crate) fn primitive(kind: Kind) -> Option<CsType> {
  let name = match kind {
    Kind::Int | Kind::Int64 => "long",
    Kind::Int8 => "sbyte",
    Kind::Int16 => "short",
    Kind::Int32 => "int",
    Kind::Uint | Kind::Uint64 => "ulong",
    Kind::Uint8 => "byte",
    Kind::Uint16 => "ushort",
    Kind::Uint32 => "uint",
    Kind::Bool => "bool",
    Kind::Float32 => "float",
    Kind::Float64 => "double",
    Kind::String => return Some(CsType::reference("string")),
    _ => return None,
  };
  Some(CsType::value(name))
}

pub(crate) fn query_converter(kind: Kind) -> Option<&'static str> {
  match kind {
    Kind::Bool => Some("BoolQueryStringConverter"),
    Kind::Slice | Kind::Array => Some("EnumerableQueryStringConverter"),
    Kind::Map => Some("MapQueryStringConverter"),
    _ => None,
  }
}
