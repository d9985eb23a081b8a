use crudgen_core::{
    Accessors, ClassName, EntityDescriptor, Error, FieldDescriptor, Primitive, TypeName,
};

fn order() -> ClassName {
    ClassName::new("model", "Order")
}

fn long() -> ClassName {
    ClassName::new("java.lang", "Long")
}

fn field(name: &str, ty: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, ClassName::new("java.lang", ty)).unwrap()
}

#[test]
fn build_preserves_field_order() {
    let entity = EntityDescriptor::builder(order(), "orders")
        .pk(FieldDescriptor::new("id", long()).unwrap())
        .field(field("total", "Double"))
        .field(field("status", "String"))
        .field(field("createdAt", "String"))
        .build()
        .unwrap();

    let names: Vec<_> = entity.fields().map(|f| f.name()).collect();
    assert_eq!(names, ["total", "status", "createdAt"]);
    assert_eq!(entity.pk_field().name(), "id");
    assert_eq!(entity.table_name(), "orders");
    assert_eq!(entity.field("id").unwrap().ty().raw(), Some(&long()));
    assert_eq!(entity.field("status").unwrap().name(), "status");
    assert!(entity.field("missing").is_none());
}

#[test]
fn conventional_accessors() {
    let field = field("createdAt", "String");

    assert_eq!(field.accessor_suffix(), "CreatedAt");
    assert_eq!(field.accessors().getter(), "getCreatedAt");
    assert_eq!(field.accessors().setter(), "setCreatedAt");
}

#[test]
fn explicit_accessors_replace_convention() {
    let field = field("active", "Boolean")
        .with_accessors(Accessors::new("isActive", "setActive").unwrap());

    assert_eq!(field.accessors().getter(), "isActive");
    assert_eq!(field.accessors().setter(), "setActive");
}

#[test]
fn missing_primary_key() {
    let err = EntityDescriptor::builder(order(), "orders")
        .field(field("total", "Double"))
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        Error::MissingPrimaryKey {
            entity: "model.Order".into()
        }
    );
}

#[test]
fn duplicate_field() {
    let err = EntityDescriptor::builder(order(), "orders")
        .pk(FieldDescriptor::new("id", long()).unwrap())
        .field(field("total", "Double"))
        .field(field("total", "String"))
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        Error::DuplicateField {
            entity: "model.Order".into(),
            field: "total".into(),
        }
    );
}

#[test]
fn primary_key_repeated_as_field() {
    let err = EntityDescriptor::builder(order(), "orders")
        .pk(FieldDescriptor::new("id", long()).unwrap())
        .field(FieldDescriptor::new("id", long()).unwrap())
        .build()
        .unwrap_err();

    assert!(matches!(err, Error::PrimaryKeyInFields { field, .. } if field == "id"));
}

#[test]
fn empty_table_name() {
    let err = EntityDescriptor::builder(order(), "  ")
        .pk(FieldDescriptor::new("id", long()).unwrap())
        .build()
        .unwrap_err();

    assert!(matches!(err, Error::EmptyTableName { .. }));
}

#[test]
fn declared_methods_are_checked() {
    let built = EntityDescriptor::builder(order(), "orders")
        .pk(FieldDescriptor::new("id", long()).unwrap())
        .field(field("total", "Double"))
        .methods(["getId", "setId", "getTotal", "setTotal", "toString"])
        .build();
    assert!(built.is_ok());

    let err = EntityDescriptor::builder(order(), "orders")
        .pk(FieldDescriptor::new("id", long()).unwrap())
        .field(field("total", "Double"))
        .methods(["getId", "setId", "getTotal"])
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        Error::MissingAccessor {
            entity: "model.Order".into(),
            field: "total".into(),
            accessor: "setTotal".into(),
        }
    );
}

#[test]
fn invalid_field_names_are_rejected() {
    assert_eq!(
        FieldDescriptor::new("class", long()).unwrap_err(),
        Error::InvalidIdentifier("class".into())
    );
    assert!(FieldDescriptor::new("", long()).is_err());
    assert!(Accessors::new("get-id", "setId").is_err());
}

#[test]
fn primitive_and_array_fields() {
    let entity = EntityDescriptor::builder(order(), "orders")
        .pk(FieldDescriptor::new("id", long()).unwrap())
        .field(FieldDescriptor::new("quantity", Primitive::Int).unwrap())
        .field(FieldDescriptor::new("payload", TypeName::parse("byte[]").unwrap()).unwrap())
        .field(FieldDescriptor::new("paid", TypeName::parse("boolean").unwrap()).unwrap())
        .build()
        .unwrap();

    let quantity = entity.field("quantity").unwrap();
    assert_eq!(quantity.ty(), &TypeName::Primitive(Primitive::Int));
    assert_eq!(quantity.accessors().getter(), "getQuantity");

    let payload = entity.field("payload").unwrap();
    assert_eq!(payload.ty(), &TypeName::array_of(Primitive::Byte));
    assert_eq!(payload.ty().raw(), None);
}

#[test]
fn primitive_primary_key_is_rejected() {
    let err = EntityDescriptor::builder(order(), "orders")
        .pk(FieldDescriptor::new("id", Primitive::Long).unwrap())
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        Error::InvalidPrimaryKeyType {
            entity: "model.Order".into(),
            ty: "long".into(),
        }
    );

    // Arrays are reference types and can be type arguments
    let entity = EntityDescriptor::builder(order(), "orders")
        .pk(FieldDescriptor::new("hash", TypeName::array_of(Primitive::Byte)).unwrap())
        .build()
        .unwrap();
    assert_eq!(entity.pk_field().ty().to_string(), "byte[]");
}

#[test]
fn wildcard_field_type_is_rejected() {
    let err = FieldDescriptor::new("any", TypeName::Wildcard(None)).unwrap_err();
    assert!(matches!(err, Error::InvalidTypeName { .. }));
}
