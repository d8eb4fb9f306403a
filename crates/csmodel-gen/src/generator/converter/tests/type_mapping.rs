use super::support::{holder, registry};
use crate::generator::{
  ast::CsType,
  converter::{ResolvedModels, TypeMapper, WellKnownTypes},
  errors::{ErrorCategory, GeneratorError},
  registry::{FieldSpec, StructSpec, TypeKey, TypeRegistry, TypeSpec},
};

fn map_field(registry: &TypeRegistry, field: &str) -> Result<CsType, GeneratorError> {
  let well_known = WellKnownTypes::default();
  let mapper = TypeMapper::new(registry, &well_known);
  let holder = registry.get(registry.lookup("test.Holder").expect("holder"));
  let field = holder
    .kind
    .fields()
    .iter()
    .find(|f| f.name == field)
    .unwrap_or_else(|| panic!("no field {field}"));
  mapper.map_type(field.ty, false, &ResolvedModels::default())
}

#[test]
fn test_primitive_table() {
  let cases = [
    ("int", "long"),
    ("int8", "sbyte"),
    ("int16", "short"),
    ("int32", "int"),
    ("int64", "long"),
    ("uint", "ulong"),
    ("uint8", "byte"),
    ("byte", "byte"),
    ("uint16", "ushort"),
    ("uint32", "uint"),
    ("uint64", "ulong"),
    ("bool", "bool"),
    ("float32", "float"),
    ("float64", "double"),
  ];
  let fields = cases
    .iter()
    .enumerate()
    .map(|(i, (go, _))| FieldSpec::new(format!("F{i}"), *go))
    .chain([FieldSpec::new("S", "string")])
    .collect();
  let registry = registry(vec![holder(fields)]);

  for (i, (go, cs)) in cases.iter().enumerate() {
    let ty = map_field(&registry, &format!("F{i}")).expect("primitive maps");
    assert_eq!(ty.name, *cs, "mapping {go}");
    assert!(ty.nullable, "{go} should be a nullable-capable value type");
  }

  let string = map_field(&registry, "S").expect("string maps");
  assert_eq!(string, CsType::reference("string"));
}

#[test]
fn test_named_scalar_uses_underlying_kind() {
  let registry = registry(vec![
    ("container.Isolation", TypeSpec::alias("string")),
    holder(vec![FieldSpec::new("Isolation", "container.Isolation")]),
  ]);
  assert_eq!(map_field(&registry, "Isolation").expect("maps").name, "string");
}

#[test]
fn test_well_known_types() {
  let registry = registry(vec![
    ("time.Time", TypeSpec::Struct(StructSpec::default())),
    ("registry.NetIPNet", TypeSpec::Struct(StructSpec::default())),
    holder(vec![
      FieldSpec::new("Created", "time.Time"),
      FieldSpec::new("Finished", "*time.Time"),
      FieldSpec::new("Net", "registry.NetIPNet"),
      FieldSpec::new("Marker", "[]struct {}"),
    ]),
  ]);

  let created = map_field(&registry, "Created").expect("maps");
  assert_eq!(created, CsType::value("DateTime").in_namespace("System"));

  let finished = map_field(&registry, "Finished").expect("maps");
  assert_eq!(finished.name, "DateTime");
  assert!(finished.optional);

  assert_eq!(map_field(&registry, "Net").expect("maps").name, "string");
  assert_eq!(map_field(&registry, "Marker").expect("maps").name, "IList<BUG_IN_CONVERSION>");
}

#[test]
fn test_composites() {
  let registry = registry(vec![
    ("time.Time", TypeSpec::Struct(StructSpec::default())),
    (
      "nat.PortBinding",
      TypeSpec::structure([FieldSpec::new("HostIP", "string")]),
    ),
    holder(vec![
      FieldSpec::new("Digest", "[32]byte"),
      FieldSpec::new("Env", "[]string"),
      FieldSpec::new("Labels", "map[string]string"),
      FieldSpec::new("Volumes", "map[string]struct {}"),
      FieldSpec::new("Ports", "map[string][]nat.PortBinding"),
      FieldSpec::new("Times", "[]time.Time"),
      FieldSpec::new("Counts", "[]*int64"),
      FieldSpec::new("Flags", "map[string]*bool"),
      FieldSpec::new("Data", "interface {}"),
      FieldSpec::new("Extra", "map[string]any"),
    ]),
  ]);

  assert_eq!(map_field(&registry, "Digest").expect("maps").name, "byte[]");
  assert_eq!(map_field(&registry, "Env").expect("maps").name, "IList<string>");
  assert_eq!(
    map_field(&registry, "Labels").expect("maps").name,
    "IDictionary<string, string>"
  );
  assert_eq!(
    map_field(&registry, "Volumes").expect("maps").name,
    "IDictionary<string, EmptyStruct>"
  );
  assert_eq!(
    map_field(&registry, "Ports").expect("maps").name,
    "IDictionary<string, IList<PortBinding>>"
  );
  assert_eq!(map_field(&registry, "Counts").expect("maps").name, "IList<long>");
  assert_eq!(
    map_field(&registry, "Flags").expect("maps").name,
    "IDictionary<string, bool>"
  );
  assert_eq!(map_field(&registry, "Data").expect("maps").name, "object");
  assert_eq!(
    map_field(&registry, "Extra").expect("maps").name,
    "IDictionary<string, object>"
  );

  let times = map_field(&registry, "Times").expect("maps");
  assert_eq!(times.name, "IList<DateTime>");
  assert!(times.namespaces().any(|ns| ns == "System"), "element namespace is carried");
}

#[test]
fn test_struct_uses_resolved_model_name() {
  use crate::generator::ast::ModelType;

  let registry = registry(vec![
    ("container.ContainerCreateCreatedBody", TypeSpec::Struct(StructSpec::default())),
    holder(vec![FieldSpec::new("Created", "*container.ContainerCreateCreatedBody")]),
  ]);
  let well_known = WellKnownTypes::default();
  let mapper = TypeMapper::new(&registry, &well_known);
  let field = registry.get(registry.lookup("test.Holder").expect("holder")).kind.fields()[0].ty;

  let unresolved = mapper.map_type(field, false, &ResolvedModels::default()).expect("maps");
  assert_eq!(unresolved.name, "ContainerCreateCreatedBody");

  let mut models = ResolvedModels::default();
  models.insert(ModelType::new(
    TypeKey::from("container.ContainerCreateCreatedBody"),
    "CreateContainerResponse",
    "container.ContainerCreateCreatedBody",
  ));
  let resolved = mapper.map_type(field, false, &models).expect("maps");
  assert_eq!(resolved.name, "CreateContainerResponse");
}

#[test]
fn test_unmappable_kinds() {
  let registry = registry(vec![holder(vec![
    FieldSpec::new("Events", "chan string"),
    FieldSpec::new("Value", "complex128"),
  ])]);

  for field in ["Events", "Value"] {
    let err = map_field(&registry, field).unwrap_err();
    assert!(matches!(err, GeneratorError::UnmappableType { .. }), "got {err}");
    assert_eq!(err.category(), ErrorCategory::Mapping);
  }
}
