use crate::generator::{
  errors::{ErrorCategory, GeneratorError},
  registry::{FieldSpec, Kind, StructSpec, TypeKind, TypeRegistry, TypeSpec},
};

fn registry_with(types: Vec<(&str, TypeSpec)>) -> TypeRegistry {
  let mut builder = TypeRegistry::builder();
  for (key, spec) in types {
    builder.define(key, spec);
  }
  builder.build().expect("registry should build")
}

#[test]
fn test_builtins_are_registered() {
  let registry = TypeRegistry::builder().build().expect("empty registry");
  for name in ["bool", "int", "int64", "uint8", "float64", "string", "uintptr", "interface {}"] {
    assert!(registry.lookup(name).is_some(), "missing builtin {name}");
  }
  let int32 = registry.lookup("int32").expect("int32");
  assert_eq!(registry.get(int32).kind, TypeKind::Int32);
  assert_eq!(registry.get(int32).name, "int32");
}

#[test]
fn test_kind_displays_lowercase() {
  assert_eq!(Kind::Uint16.to_string(), "uint16");
  assert_eq!(Kind::Complex128.to_string(), "complex128");
  assert_eq!(TypeKind::Float32.kind().to_string(), "float32");
}

#[test]
fn test_named_struct_and_short_name() {
  let registry = registry_with(vec![(
    "container.RestartPolicy",
    TypeSpec::structure([
      FieldSpec::new("Name", "string").tagged(r#"json:"Name""#),
      FieldSpec::new("MaximumRetryCount", "int"),
    ]),
  )]);

  let id = registry.lookup("container.RestartPolicy").expect("registered");
  let descriptor = registry.get(id);
  assert_eq!(descriptor.name, "RestartPolicy");
  assert_eq!(descriptor.kind.kind(), Kind::Struct);

  let fields = descriptor.kind.fields();
  assert_eq!(fields.len(), 2);
  assert_eq!(fields[0].tag.json_name(), Some("Name"));
  assert!(fields[1].tag.is_empty());
  assert_eq!(registry.get(fields[1].ty).kind, TypeKind::Int);
}

#[test]
fn test_composites_are_interned_by_canonical_key() {
  let registry = registry_with(vec![
    ("a.A", TypeSpec::structure([FieldSpec::new("Tags", "[]string")])),
    ("a.B", TypeSpec::structure([FieldSpec::new("Labels", "[] string")])),
  ]);

  let a_field = registry.get(registry.lookup("a.A").expect("a.A")).kind.fields()[0].ty;
  let b_field = registry.get(registry.lookup("a.B").expect("a.B")).kind.fields()[0].ty;
  assert_eq!(a_field, b_field, "identical expressions share one descriptor");
  assert_eq!(registry.get(a_field).key.as_str(), "[]string");
  assert!(!registry.get(a_field).is_named());
}

#[test]
fn test_byte_and_any_are_canonicalized() {
  let registry = registry_with(vec![(
    "a.Blob",
    TypeSpec::structure([FieldSpec::new("Data", "[]byte"), FieldSpec::new("Extra", "map[string]any")]),
  )]);

  assert!(registry.lookup("[]uint8").is_some());
  assert!(registry.lookup("map[string]interface {}").is_some());
}

#[test]
fn test_forward_and_self_references() {
  let registry = registry_with(vec![
    ("a.Node", TypeSpec::structure([FieldSpec::new("Next", "*a.Node"), FieldSpec::new("Leaf", "a.Leaf")])),
    ("a.Leaf", TypeSpec::structure([FieldSpec::new("Value", "string")])),
  ]);

  let node = registry.lookup("a.Node").expect("a.Node");
  let next = registry.get(node).kind.fields()[0].ty;
  assert_eq!(registry.get(next).kind, TypeKind::Pointer(node));
  assert_eq!(registry.ultimate(next), node);
}

#[test]
fn test_ultimate_unwraps_map_values() {
  let registry = registry_with(vec![
    ("a.Port", TypeSpec::Struct(StructSpec::default())),
    ("a.Holder", TypeSpec::structure([FieldSpec::new("Bindings", "map[string][]*a.Port")])),
  ]);

  let holder = registry.lookup("a.Holder").expect("a.Holder");
  let bindings = registry.get(holder).kind.fields()[0].ty;
  assert_eq!(registry.ultimate(bindings), registry.lookup("a.Port").expect("a.Port"));
}

#[test]
fn test_embedded_field_takes_type_name() {
  let registry = registry_with(vec![
    ("container.Config", TypeSpec::Struct(StructSpec::default())),
    (
      "types.CreateParameters",
      TypeSpec::structure([FieldSpec::embedded("*container.Config").tagged(r#"rest:"body""#)]),
    ),
  ]);

  let id = registry.lookup("types.CreateParameters").expect("registered");
  let field = &registry.get(id).kind.fields()[0];
  assert!(field.embedded);
  assert_eq!(field.name, "Config");
  assert_eq!(field.tag.lookup("rest"), Some("body"));
}

#[test]
fn test_named_non_struct_types_take_underlying_kind() {
  let registry = registry_with(vec![
    ("filters.Args", TypeSpec::alias("map[string]map[string]bool")),
    ("types.IDResponse", TypeSpec::structure([FieldSpec::new("ID", "string")])),
    ("types.CommitResponse", TypeSpec::alias("types.IDResponse")),
    ("types.Mode", TypeSpec::alias("types.Kind")),
    ("types.Kind", TypeSpec::alias("string")),
  ]);

  let args = registry.get(registry.lookup("filters.Args").expect("Args"));
  assert_eq!(args.name, "Args");
  assert_eq!(args.kind.kind(), Kind::Map);

  let commit = registry.get(registry.lookup("types.CommitResponse").expect("CommitResponse"));
  assert_eq!(commit.kind.fields().len(), 1);
  assert_eq!(commit.kind.fields()[0].name, "ID");

  let mode = registry.get(registry.lookup("types.Mode").expect("Mode"));
  assert_eq!(mode.kind, TypeKind::String, "alias chains resolve regardless of order");
}

#[test]
fn test_explicit_name_overrides_key_segment() {
  let registry = registry_with(vec![("a.b", TypeSpec::Struct(StructSpec::default()).named("Renamed"))]);
  assert_eq!(registry.get(registry.lookup("a.b").expect("a.b")).name, "Renamed");

  let registry = registry_with(vec![("a.anon", TypeSpec::Struct(StructSpec::default()).named(""))]);
  assert!(!registry.get(registry.lookup("a.anon").expect("a.anon")).is_named());
}

#[test]
fn test_build_errors() {
  let err = TypeRegistry::builder()
    .with_type("a.A", TypeSpec::structure([FieldSpec::new("B", "a.Missing")]))
    .build()
    .unwrap_err();
  assert!(
    matches!(&err, GeneratorError::UnknownType { name, .. } if name == "a.Missing"),
    "got {err}"
  );
  assert_eq!(err.category(), ErrorCategory::Configuration);

  let err = TypeRegistry::builder()
    .with_type("a.A", TypeSpec::Struct(StructSpec::default()))
    .with_type("a.A", TypeSpec::Struct(StructSpec::default()))
    .build()
    .unwrap_err();
  assert!(matches!(err, GeneratorError::DuplicateType { .. }));

  let err = TypeRegistry::builder()
    .with_type("string", TypeSpec::Struct(StructSpec::default()))
    .build()
    .unwrap_err();
  assert!(matches!(err, GeneratorError::DuplicateType { .. }));

  let err = TypeRegistry::builder()
    .with_type("a.A", TypeSpec::structure([FieldSpec::new("B", "map[string")]))
    .build()
    .unwrap_err();
  assert!(matches!(err, GeneratorError::InvalidTypeExpr { .. }));

  let err = TypeRegistry::builder()
    .with_type("a.A", TypeSpec::structure([FieldSpec::new("B", "int").tagged("json")]))
    .build()
    .unwrap_err();
  assert!(matches!(err, GeneratorError::InvalidStructTag { .. }));

  let err = TypeRegistry::builder()
    .with_type("a.A", TypeSpec::Struct(StructSpec::default()).named("Not Valid"))
    .build()
    .unwrap_err();
  assert!(matches!(err, GeneratorError::InvalidTypeName { .. }));

  let err = TypeRegistry::builder()
    .with_type("a.A", TypeSpec::alias("a.B"))
    .with_type("a.B", TypeSpec::alias("a.A"))
    .build()
    .unwrap_err();
  assert!(matches!(err, GeneratorError::CyclicAlias { .. }));
}
